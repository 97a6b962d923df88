//! Todo Detail Page
//!
//! Single todo with Markdown description, edit, complete and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::clock::format_local;
use crate::components::{AppLink, ConfirmButton, Spinner, TodoFormDialog};
use crate::context::use_app_context;
use crate::markdown::render_markdown;
use crate::models::Todo;
use crate::route::{use_navigator, Route};
use crate::store::{session_token, store_put_todo, store_remove_todo, use_app_store};

#[component]
pub fn TodoDetailPage(id: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let nav = use_navigator();

    let (todo, set_todo) = signal(None::<Todo>);
    let (loading, set_loading) = signal(true);
    let (editing, set_editing) = signal(false);
    let id = StoredValue::new(id);

    Effect::new(move |_| {
        let Some(token) = session_token(&store) else {
            return;
        };
        let id = id.get_value();
        spawn_local(async move {
            if let Ok(found) = ctx.api().get_todo(&token, &id).await {
                set_todo.set(Some(found));
            }
            set_loading.set(false);
        });
    });

    let on_complete = move |done: Callback<()>| {
        let (Some(token), Some(current)) = (session_token(&store), todo.get_untracked()) else {
            done.run(());
            return;
        };
        spawn_local(async move {
            if let Ok(updated) = ctx.api().complete_todo(&token, &current.id, &current).await {
                store_put_todo(&store, updated.clone());
                set_todo.set(Some(updated));
            }
            done.run(());
        });
    };

    let on_delete = move |done: Callback<()>| {
        let Some(token) = session_token(&store) else {
            done.run(());
            return;
        };
        let id = id.get_value();
        spawn_local(async move {
            let deleted = ctx.api().delete_todo(&token, &id).await;
            done.run(());
            if deleted.is_ok() {
                store_remove_todo(&store, &id);
                nav.go(Route::Home);
            }
        });
    };

    let on_saved = move |updated: Todo| {
        store_put_todo(&store, updated.clone());
        set_todo.set(Some(updated));
        set_editing.set(false);
    };

    let details = move |current: Todo| {
        let is_done = current.status;
        let badge_class = if is_done { "badge badge-completed" } else { "badge badge-active" };
        let updated = current
            .updated_at
            .map(|at| format!("Updated {}", format_local(at)));
        view! {
            <article class="todo-detail">
                <header>
                    <h1>{current.title.clone()}</h1>
                    <span class=badge_class>{current.status_label()}</span>
                </header>
                <div class="markdown-body" inner_html=render_markdown(&current.description)></div>
                <p class="todo-due">{format!("Due {}", format_local(current.due_date))}</p>
                {updated.map(|text| view! { <p class="todo-updated">{text}</p> })}
                <div class="detail-actions">
                    <button class="secondary" on:click=move |_| set_editing.set(true)>"Edit"</button>
                    <Show when=move || !is_done>
                        <ConfirmButton
                            label="Mark as completed"
                            prompt="Mark this todo as completed?"
                            button_class="primary"
                            on_confirm=on_complete
                        />
                    </Show>
                    <ConfirmButton
                        label="Delete"
                        prompt="Delete this todo?"
                        button_class="danger"
                        on_confirm=on_delete
                    />
                </div>
            </article>
        }
    };

    view! {
        <section class="detail-page">
            <AppLink route=Route::Home class="back-link">"← Back"</AppLink>
            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                {move || match todo.get() {
                    Some(current) => details(current).into_any(),
                    None => view! { <p class="empty">"Todo not available."</p> }.into_any(),
                }}
            </Show>
            <Show when=move || editing.get()>
                {move || todo.get_untracked().map(|current| view! {
                    <TodoFormDialog
                        editing=current
                        on_close=move |_| set_editing.set(false)
                        on_saved=on_saved
                    />
                })}
            </Show>
        </section>
    }
}
