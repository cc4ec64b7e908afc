//! Curriculum pages and the section templates lessons are built from.

mod home;
mod lesson_page;
mod sections;

pub use home::HomePage;
pub use lesson_page::LessonPage;
pub use sections::SectionTemplate;
