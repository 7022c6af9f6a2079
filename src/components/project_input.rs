//! Project Input Component
//!
//! Form for creating new projects.

use leptos::prelude::*;
use project_store::gather_input;

use crate::store::{use_form_rules, use_project_store};

/// Form with title, description and people fields
#[component]
pub fn ProjectInput() -> impl IntoView {
    let store = use_project_store();
    let rules = use_form_rules();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (people, set_people) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = gather_input(
            &title.get_untracked(),
            &description.get_untracked(),
            &people.get_untracked(),
            &rules,
        );
        match draft {
            Ok(draft) => {
                log::info!("[FORM] Adding project {:?}", draft.title);
                draft.submit_to(&store);
                set_title.set(String::new());
                set_description.set(String::new());
                set_people.set(String::new());
            }
            Err(e) => {
                // Fields keep their values so the user can fix them
                log::warn!("[FORM] Rejected input: {}", e);
                if let Err(err) = window().alert_with_message(&format!("Invalid input: {}", e)) {
                    log::error!("[FORM] alert failed: {:?}", err);
                }
            }
        }
    };

    view! {
        <form id="user-input" on:submit=on_submit>
            <div class="form-control">
                <label for="title">"Title"</label>
                <input
                    type="text"
                    id="title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </div>
            <div class="form-control">
                <label for="description">"Description"</label>
                <textarea
                    id="description"
                    rows="3"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
            </div>
            <div class="form-control">
                <label for="people">"People"</label>
                <input
                    type="number"
                    id="people"
                    step="1"
                    prop:value=move || people.get()
                    on:input=move |ev| set_people.set(event_target_value(&ev))
                />
            </div>
            <button type="submit">"ADD PROJECT"</button>
        </form>
    }
}
