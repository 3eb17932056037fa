//! Groups Page
//!
//! Landing page: every group as a card, plus the create form and the
//! remove-all action.

use leptos::prelude::*;

use crate::components::{CreateEntryForm, GroupCard};
use crate::context::AppContext;
use crate::events::AppEvent;

#[component]
pub fn GroupsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let groups = Memo::new(move |_| {
        let _ = ctx.reload_trigger.get();
        ctx.with_store(|store| store.groups().clone())
    });

    let on_create = Callback::new(move |(title, description): (String, String)| {
        ctx.with_store(|store| store.add_group(title, description));
        ctx.reload();
    });

    view! {
        <div class="groups">
            <div class="header">
                <h1 class="title header__title">"Groups of equipments"</h1>
                <div class="header__toolbar toolbar">
                    <button
                        class="button button_danger"
                        on:click=move |_| ctx.dispatch(AppEvent::RemoveAllGroups)
                    >
                        "Remove all"
                    </button>
                </div>
                <CreateEntryForm
                    label="Add new group"
                    placeholder="Add group title"
                    start_open=groups.get_untracked().is_empty()
                    on_create=on_create
                />
            </div>
            <div class="groups__list list">
                <Show
                    when=move || !groups.get().is_empty()
                    fallback=|| {
                        view! {
                            <h5 class="no-entries">
                                "No entries yet. Add new one using the form above."
                            </h5>
                        }
                    }
                >
                    <For
                        each=move || groups.get()
                        key=|group| group.id
                        children=move |group| view! { <GroupCard group=group/> }
                    />
                </Show>
            </div>
        </div>
    }
}
