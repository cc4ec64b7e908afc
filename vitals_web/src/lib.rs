use leptos::prelude::*;
use leptos::mount::mount_to_body;
use leptos_router::components::Router;
use wasm_bindgen::prelude::*;

mod components;
mod i18n;

use components::SiteLayout;

#[wasm_bindgen(start)]
pub fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    i18n::provide_i18n();

    view! {
        <Router>
            <SiteLayout/>
        </Router>
    }
}
