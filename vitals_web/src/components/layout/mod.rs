//! Site layout components.

mod top_bar;
mod left_navbar;
mod main_workspace;

pub use top_bar::TopBar;
pub use left_navbar::LeftNavbar;
pub use main_workspace::MainWorkspace;

use leptos::prelude::*;

/// Layout context - shared state across layout components.
#[derive(Clone, Copy)]
pub struct LayoutContext {
    /// Whether the curriculum navbar is collapsed.
    pub nav_collapsed: RwSignal<bool>,
}

impl LayoutContext {
    pub fn new() -> Self {
        Self {
            nav_collapsed: RwSignal::new(false),
        }
    }
}

/// Root layout: header, curriculum navbar and routed workspace.
#[component]
pub fn SiteLayout() -> impl IntoView {
    let layout_ctx = LayoutContext::new();
    provide_context(layout_ctx);

    view! {
        <div class="h-screen w-screen flex flex-col bg-[#0a0a0a] overflow-hidden">
            <TopBar/>

            <div class="flex-1 flex overflow-hidden">
                <Show when=move || !layout_ctx.nav_collapsed.get()>
                    <LeftNavbar/>
                </Show>

                <MainWorkspace/>
            </div>
        </div>
    }
}
