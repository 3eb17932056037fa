//! Edit Equipment Form

use leptos::prelude::*;

use crate::context::{history_back, AppContext};
use crate::models::Equipment;

/// Pre-filled form editing an equipment's title, description and status
#[component]
pub fn EditEquipmentForm(equipment: Equipment) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let group_id = equipment.group_id;
    let equipment_id = equipment.id;
    let initial_done = equipment.done;
    let (title, set_title) = signal(equipment.title.clone());
    let (description, set_description) = signal(equipment.description.clone());
    let (done, set_done) = signal(equipment.done);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get();
        let description_value = description.get();
        if title_value.is_empty() || description_value.is_empty() {
            return;
        }
        ctx.with_store(|store| {
            store.update_equipment(
                group_id,
                equipment_id,
                title_value,
                description_value,
                done.get(),
            )
        });
        ctx.reload();
        ctx.navigate(&format!("#/equipments/{group_id}"));
    };

    view! {
        <h1 class="title container__title">"Edit equipment"</h1>
        <form class="edit-form equipment-edit-form" on:submit=on_submit>
            <label class="edit-form__form-label form-label">
                <span class="edit-form__form-label-text">"Edit equipment title"</span>
                <input
                    class="input"
                    type="text"
                    placeholder="Edit equipment title"
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
            <label class="edit-form__form-label form-label">
                <span class="edit-form__form-label-text">"Edit status"</span>
                <select
                    class="input"
                    on:change=move |ev| set_done.set(event_target_value(&ev) == "true")
                >
                    <option value="true" selected=initial_done>"Done"</option>
                    <option value="false" selected=(!initial_done)>"In progress"</option>
                </select>
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
