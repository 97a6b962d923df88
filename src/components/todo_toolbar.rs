//! Todo Toolbar Component
//!
//! Status filter, due-date range, sort order and title search.

use leptos::prelude::*;

use crate::clock::{parse_date_input, LocalZone};
use crate::query::{DateRange, SortOrder, StatusFilter, TodoQuery, SORT_OPTIONS};

#[component]
pub fn TodoToolbar(
    query: ReadSignal<TodoQuery>,
    set_query: WriteSignal<TodoQuery>,
    #[prop(into)] on_new: Callback<()>,
) -> impl IntoView {
    let (from, set_from) = signal(String::new());
    let (to, set_to) = signal(String::new());

    let update_range = move || {
        let range = DateRange::from_days(
            parse_date_input(&from.get_untracked()),
            parse_date_input(&to.get_untracked()),
            &LocalZone,
        );
        set_query.update(|q| q.range = range);
    };

    let reset = move |_| {
        set_from.set(String::new());
        set_to.set(String::new());
        set_query.set(TodoQuery::default());
    };

    view! {
        <div class="todo-toolbar">
            <input
                type="search"
                class="toolbar-search"
                placeholder="Search by title..."
                prop:value=move || query.with(|q| q.search.clone())
                on:input=move |ev| {
                    let search = event_target_value(&ev);
                    set_query.update(|q| q.search = search);
                }
            />
            <select
                aria-label="Status"
                prop:value=move || query.with(|q| q.status.as_str())
                on:change=move |ev| {
                    let status = StatusFilter::from_str(&event_target_value(&ev));
                    set_query.update(|q| q.status = status);
                }
            >
                {StatusFilter::ALL.iter().map(|status| view! {
                    <option value=status.as_str()>{status.label()}</option>
                }).collect_view()}
            </select>
            <label class="toolbar-date">
                "From"
                <input
                    type="date"
                    prop:value=move || from.get()
                    on:change=move |ev| {
                        set_from.set(event_target_value(&ev));
                        update_range();
                    }
                />
            </label>
            <label class="toolbar-date">
                "To"
                <input
                    type="date"
                    prop:value=move || to.get()
                    on:change=move |ev| {
                        set_to.set(event_target_value(&ev));
                        update_range();
                    }
                />
            </label>
            <select
                aria-label="Sort"
                on:change=move |ev| {
                    let sort = SortOrder::parse(&event_target_value(&ev));
                    set_query.update(|q| q.sort = sort);
                }
            >
                <option value="" selected=move || query.with(|q| q.sort.is_none())>"Sort by..."</option>
                {SORT_OPTIONS.iter().map(|(value, label)| {
                    let value = *value;
                    view! {
                        <option
                            value=value
                            selected=move || query.with(|q| q.sort == SortOrder::parse(value))
                        >
                            {*label}
                        </option>
                    }
                }).collect_view()}
            </select>
            <button type="button" class="secondary" on:click=reset>"Reset"</button>
            <button type="button" class="primary" on:click=move |_| on_new.run(())>"New Todo"</button>
        </div>
    }
}
