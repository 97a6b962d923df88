//! Todo Card Component

use leptos::prelude::*;

use crate::clock::format_local;
use crate::components::AppLink;
use crate::markdown::plain_preview;
use crate::models::Todo;
use crate::route::Route;

const PREVIEW_CHARS: usize = 120;

#[component]
pub fn TodoCard(todo: Todo) -> impl IntoView {
    let title_class = if todo.status { "todo-title done" } else { "todo-title" };
    let badge_class = if todo.status { "badge badge-completed" } else { "badge badge-active" };
    let updated = todo
        .updated_at
        .map(|at| format!("Updated {}", format_local(at)));

    view! {
        <article class="todo-card">
            <header>
                <h3 class=title_class>{todo.title.clone()}</h3>
                <span class=badge_class>{todo.status_label()}</span>
            </header>
            <p class="todo-description">{plain_preview(&todo.description, PREVIEW_CHARS)}</p>
            <footer>
                <span class="todo-due">{format!("Due {}", format_local(todo.due_date))}</span>
                {updated.map(|text| view! { <span class="todo-updated">{text}</span> })}
                <AppLink route=Route::TodoDetail(todo.id.clone()) class="todo-link">"View Detail"</AppLink>
            </footer>
        </article>
    }
}
