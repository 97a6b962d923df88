//! Todo Form Dialog
//!
//! Modal form for creating a todo, or editing one when `editing` is set.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::clock::{date_input_value, offset_at, LocalZone};
use crate::context::use_app_context;
use crate::models::Todo;
use crate::store::{session_token, use_app_store};
use crate::validation::{error_for, validate_todo, FieldError};

#[component]
pub fn TodoFormDialog(
    /// Todo being edited; `None` creates a new one
    #[prop(optional)]
    editing: Option<Todo>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<Todo>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let is_edit = editing.is_some();

    let (title, set_title) = signal(editing.as_ref().map(|t| t.title.clone()).unwrap_or_default());
    let (description, set_description) =
        signal(editing.as_ref().map(|t| t.description.clone()).unwrap_or_default());
    let (due, set_due) = signal(
        editing
            .as_ref()
            .map(|t| date_input_value(t.due_date, offset_at(t.due_date)))
            .unwrap_or_default(),
    );
    let (errors, set_errors) = signal(Vec::<FieldError>::new());
    let (submitting, set_submitting) = signal(false);
    let editing = StoredValue::new(editing);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let draft = match validate_todo(
            &title.get_untracked(),
            &description.get_untracked(),
            &due.get_untracked(),
            &LocalZone,
        ) {
            Ok(draft) => draft,
            Err(errs) => {
                set_errors.set(errs);
                return;
            }
        };
        set_errors.set(Vec::new());
        let Some(token) = session_token(&store) else {
            return;
        };
        let editing = editing.get_value();

        set_submitting.set(true);
        spawn_local(async move {
            let api = ctx.api();
            let saved = match editing {
                Some(todo) => {
                    let updated = Todo {
                        title: draft.title,
                        description: draft.description,
                        due_date: draft.due_date,
                        ..todo
                    };
                    api.update_todo(&token, &updated.id, &updated).await
                }
                None => api.create_todo(&token, &draft).await,
            };
            set_submitting.set(false);
            if let Ok(todo) = saved {
                on_saved.run(todo);
            }
        });
    };

    let field_error = move |field: &'static str| {
        move || errors.with(|errs| error_for(errs, field)).map(|msg| view! { <p class="field-error">{msg}</p> })
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" role="dialog" on:click=|ev| ev.stop_propagation()>
                <h2>{if is_edit { "Edit Todo" } else { "New Todo" }}</h2>
                <form class="todo-form" on:submit=on_submit>
                    <label>
                        "Title"
                        <input
                            type="text"
                            placeholder="What needs doing?"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                    </label>
                    {field_error("title")}
                    <label>
                        "Description"
                        <textarea
                            rows="5"
                            placeholder="Markdown supported"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label>
                        "Due date"
                        <input
                            type="date"
                            prop:value=move || due.get()
                            on:input=move |ev| set_due.set(event_target_value(&ev))
                        />
                    </label>
                    {field_error("due_date")}
                    <div class="dialog-actions">
                        <button type="button" class="secondary" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Saving..." } else if is_edit { "Save" } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
