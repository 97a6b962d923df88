use leptos::prelude::*;

use crate::components::AppLink;
use crate::route::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <AppLink route=Route::Home>"Back to your todos"</AppLink>
        </section>
    }
}
