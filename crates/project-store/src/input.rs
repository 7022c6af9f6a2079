//! Form Input
//!
//! Turns raw form field values into a validated project draft.

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::project::ProjectId;
use crate::store::ProjectStore;
use crate::validation::{validate, Validatable};

/// Constraints applied to the new-project form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRules {
    pub title_min_length: usize,
    pub description_min_length: usize,
    /// People count must be strictly greater than this
    pub min_people: u32,
    /// People count must be strictly less than this, if set
    pub max_people: Option<u32>,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            title_min_length: 5,
            description_min_length: 5,
            min_people: 0,
            max_people: None,
        }
    }
}

/// Validated input, ready to be added to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

impl ProjectDraft {
    pub fn submit_to(self, store: &ProjectStore) -> ProjectId {
        store.add_project(self.title, self.description, self.people)
    }
}

/// Numeric coercion of the people field: blank is 0, garbage is NaN.
/// Non-finite spellings such as "inf" or "nan" count as garbage.
pub fn parse_people(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => f64::NAN,
    }
}

/// Validate the three form fields in order and build a draft
pub fn gather_input(
    title: &str,
    description: &str,
    people_raw: &str,
    rules: &FormRules,
) -> Result<ProjectDraft, InputError> {
    if !validate(&Validatable::text(title).required().min_length(rules.title_min_length)) {
        return Err(InputError::Title { min_length: rules.title_min_length });
    }

    if !validate(
        &Validatable::text(description)
            .required()
            .min_length(rules.description_min_length),
    ) {
        return Err(InputError::Description { min_length: rules.description_min_length });
    }

    let people = parse_people(people_raw);
    if !validate(&Validatable::number(people).required().min(f64::from(rules.min_people))) {
        return Err(InputError::People { min: rules.min_people });
    }
    if let Some(max) = rules.max_people {
        if !validate(&Validatable::number(people).max(f64::from(max))) {
            return Err(InputError::TooManyPeople { max });
        }
    }

    Ok(ProjectDraft {
        title: title.to_string(),
        description: description.to_string(),
        // Bounded by the checks above; fractions truncate toward zero
        people: people.min(f64::from(u32::MAX)) as u32,
    })
}
