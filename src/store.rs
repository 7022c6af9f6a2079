//! Project Store Context
//!
//! The store is built once in `App` and handed to views through Leptos
//! context, together with the form rules.

use leptos::prelude::*;
use project_store::{FormRules, ProjectStore};

/// Provide the store and form rules to all children
pub fn provide_project_store(store: ProjectStore, rules: FormRules) {
    provide_context(store);
    provide_context(rules);
}

/// Get the project store from context
pub fn use_project_store() -> ProjectStore {
    expect_context::<ProjectStore>()
}

/// Get the form rules from context
pub fn use_form_rules() -> FormRules {
    use_context::<FormRules>().unwrap_or_default()
}
