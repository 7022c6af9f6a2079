//! Project Board App
//!
//! Input form above the active and finished project lists.

use leptos::prelude::*;
use project_store::{FormRules, ProjectStatus, ProjectStore};

use crate::components::{ProjectInput, ProjectList};
use crate::store::provide_project_store;

#[component]
pub fn App(rules: FormRules) -> impl IntoView {
    provide_project_store(ProjectStore::new(), rules);

    view! {
        <div id="app">
            <ProjectInput />
            <ProjectList status=ProjectStatus::Active />
            <ProjectList status=ProjectStatus::Finished />
        </div>
    }
}
