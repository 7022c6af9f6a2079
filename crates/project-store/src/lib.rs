//! Project Store
//!
//! Platform-independent core of the project board: the project model,
//! the observable store and the form validator. Nothing here touches the DOM.

mod error;
mod input;
mod project;
mod store;
mod validation;

pub use error::{InputError, ParseProjectIdError};
pub use input::{gather_input, parse_people, FormRules, ProjectDraft};
pub use project::{Project, ProjectId, ProjectStatus};
pub use store::{filter_by_status, Listener, MoveOutcome, ProjectStore, Subscription};
pub use validation::{validate, FieldValue, Validatable};
