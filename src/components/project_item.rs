//! Project Item Component
//!
//! A single draggable project in a list.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragend, make_on_dragstart};
use project_store::Project;

#[component]
pub fn ProjectItem(project: Project) -> impl IntoView {
    let payload = project.id.to_string();
    let assigned = project.assigned_label();

    view! {
        <li
            id=payload.clone()
            draggable="true"
            on:dragstart=make_on_dragstart(payload.clone())
            on:dragend=make_on_dragend(payload)
        >
            <h2>{project.title}</h2>
            <h3>{assigned}</h3>
            <p>{project.description}</p>
        </li>
    }
}
