//! Error types for project-store

use thiserror::Error;

/// A form field that failed validation.
///
/// Only the first failing field is reported, in form order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("title is required and must be at least {min_length} characters")]
    Title { min_length: usize },

    #[error("description is required and must be at least {min_length} characters")]
    Description { min_length: usize },

    #[error("number of people must be greater than {min}")]
    People { min: u32 },

    #[error("number of people must be less than {max}")]
    TooManyPeople { max: u32 },
}

/// Drag payload that does not name a project
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a project id: {0:?}")]
pub struct ParseProjectIdError(pub String);
