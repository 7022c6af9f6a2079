//! UI Components
//!
//! Leptos views over the project store.

mod project_input;
mod project_item;
mod project_list;

pub use project_input::ProjectInput;
pub use project_item::ProjectItem;
pub use project_list::ProjectList;
