pub mod contact;
pub mod loader;
pub mod state;
pub mod view;

pub use contact::{ContactController, ContactState};
pub use loader::{build_timeline, load_about_page, refresh};
pub use state::{reduce, LoadState, PageController, PageEvent};
pub use view::{AboutPage, EducationView, ExperienceView, ProjectView, SkillView};
