//! Project List Component
//!
//! One list per status. Re-renders from every store broadcast and accepts
//! dropped projects, moving them to its own status.

use leptos::prelude::*;
use leptos_dragdrop::*;
use project_store::{filter_by_status, Project, ProjectId, ProjectStatus};

use crate::components::ProjectItem;
use crate::store::use_project_store;

#[component]
pub fn ProjectList(status: ProjectStatus) -> impl IntoView {
    let store = use_project_store();

    let (projects, set_projects) = signal(store.projects_with_status(status));

    let subscription = store.subscribe(move |snapshot: Vec<Project>| {
        // A broadcast racing the view's disposal is harmless
        let _ = set_projects.try_set(filter_by_status(&snapshot, status));
    });
    let cleanup_store = store.clone();
    on_cleanup(move || {
        cleanup_store.unsubscribe(subscription);
    });

    let drop_signals = create_drop_signals();
    let on_drop = make_on_drop(drop_signals, move |payload: String| {
        match payload.parse::<ProjectId>() {
            Ok(id) => {
                log::debug!("[LIST] Drop {} on {} list", id, status.as_str());
                store.move_project(id, status);
            }
            // Not one of our ids: no move, so no broadcast either
            Err(e) => log::warn!("[LIST] Ignoring drop: {}", e),
        }
    });

    let list_class = move || if drop_signals.hovering_read.get() { "droppable" } else { "" };

    view! {
        <section
            class=format!("projects {}", status.as_str())
            id=format!("{}-projects", status.as_str())
            on:dragover=make_on_dragover(drop_signals)
            on:dragleave=make_on_dragleave(drop_signals)
            on:drop=on_drop
        >
            <header>
                <h2>{status.heading()}</h2>
            </header>
            <ul id=format!("{}-projects-list", status.as_str()) class=list_class>
                <For
                    each=move || projects.get()
                    key=|project| project.id
                    children=move |project| view! { <ProjectItem project=project /> }
                />
            </ul>
        </section>
    }
}
