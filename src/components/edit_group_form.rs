//! Edit Group Form

use leptos::prelude::*;

use crate::context::{history_back, AppContext};
use crate::models::Group;

/// Pre-filled form editing a group's title and description
#[component]
pub fn EditGroupForm(group: Group) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let group_id = group.id;
    let (title, set_title) = signal(group.title.clone());
    let (description, set_description) = signal(group.description.clone());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get();
        let description_value = description.get();
        if title_value.is_empty() || description_value.is_empty() {
            return;
        }
        ctx.with_store(|store| store.update_group(group_id, title_value, description_value));
        ctx.reload();
        ctx.navigate(&format!("#/equipments/{group_id}"));
    };

    view! {
        <h1 class="title container__title">"Edit group"</h1>
        <form class="edit-form group-edit-form" on:submit=on_submit>
            <label class="edit-form__form-label form-label">
                <span class="edit-form__form-label-text">"Edit group title"</span>
                <input
                    class="input"
                    type="text"
                    placeholder="Edit group title"
                    required=true
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </label>
            <label class="edit-form__form-label form-label">
                <span class="edit-form__form-label-text">"Edit description"</span>
                <input
                    class="input"
                    type="text"
                    placeholder="Edit description"
                    required=true
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
            </label>
            <button class="button button_primary" type="button" on:click=|_| history_back()>
                "Back"
            </button>
            <button class="button button_primary edit-form__edit-button" type="submit">
                "Edit"
            </button>
        </form>
    }
}
