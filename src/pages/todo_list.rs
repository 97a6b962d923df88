//! Todo List Page
//!
//! Fetches the user's todos and shows them through the toolbar query.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Banner, Spinner, TodoCard, TodoFormDialog, TodoToolbar};
use crate::context::use_app_context;
use crate::models::Todo;
use crate::query::{self, TodoQuery};
use crate::store::{session_token, store_replace_todos, use_app_store, AppStateStoreFields};

#[component]
pub fn TodoListPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (query, set_query) = signal(TodoQuery::default());
    let (loading, set_loading) = signal(true);
    let (creating, set_creating) = signal(false);

    let visible = Memo::new(move |_| query::apply(&store.todos().read(), &query.read()));

    // Load on mount and whenever a reload is triggered
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let Some(token) = session_token(&store) else {
            return;
        };
        log::debug!("[TODOS] loading, trigger={}", trigger);
        spawn_local(async move {
            if let Ok(todos) = ctx.api().list_todos(&token).await {
                log::debug!("[TODOS] loaded {}", todos.len());
                store_replace_todos(&store, todos);
            }
            set_loading.set(false);
        });
    });

    let on_saved = move |_: Todo| {
        set_creating.set(false);
        ctx.reload();
    };

    view! {
        <section class="todo-page">
            <Banner />
            <TodoToolbar query=query set_query=set_query on_new=move |_| set_creating.set(true) />
            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                <Show
                    when=move || !visible.with(Vec::is_empty)
                    fallback=|| view! { <p class="empty">"No todos match."</p> }
                >
                    <div class="todo-grid">
                        <For
                            each=move || visible.get()
                            key=|todo| (todo.id.clone(), todo.updated_at, todo.status, todo.title.clone())
                            children=|todo| view! { <TodoCard todo=todo /> }
                        />
                    </div>
                </Show>
            </Show>
            <p class="todo-count">
                {move || format!("{} of {} todos", visible.with(Vec::len), store.todos().with(Vec::len))}
            </p>
            <Show when=move || creating.get()>
                <TodoFormDialog on_close=move |_| set_creating.set(false) on_saved=on_saved />
            </Show>
        </section>
    }
}
