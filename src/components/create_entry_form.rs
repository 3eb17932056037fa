//! Create Entry Form Component
//!
//! Shared title + description form used by the groups and equipments pages,
//! with a Show/Hide toggle. The form starts open when the list it feeds is
//! still empty.

use leptos::prelude::*;

/// Collapsible creation form
///
/// # Arguments
/// * `label` - text above the title input (e.g. "Add new group")
/// * `placeholder` - placeholder for the title input
/// * `start_open` - whether the form is expanded on first render
/// * `on_create` - callback receiving `(title, description)` on submit
#[component]
pub fn CreateEntryForm(
    label: &'static str,
    placeholder: &'static str,
    start_open: bool,
    #[prop(into)] on_create: Callback<(String, String)>,
) -> impl IntoView {
    let (open, set_open) = signal(start_open);
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get();
        let description_value = description.get();
        if title_value.is_empty() || description_value.is_empty() {
            return;
        }
        on_create.run((title_value, description_value));
        set_title.set(String::new());
        set_description.set(String::new());
    };

    view! {
        <button
            class="button button_secondary toolbar__hide-button"
            on:click=move |_| set_open.update(|open| *open = !*open)
        >
            {move || if open.get() { "Hide" } else { "Show" }}
        </button>
        <Show when=move || open.get()>
            <form class="create-form" on:submit=on_submit>
                <label class="create-form__form-label form-label">
                    <span class="create-form__form-label-text">{label}</span>
                    <input
                        class="input"
                        type="text"
                        placeholder=placeholder
                        required=true
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </label>
                <label class="create-form__form-label form-label">
                    <span class="create-form__form-label-text">"Add description"</span>
                    <input
                        class="input"
                        type="text"
                        placeholder="Add description"
                        required=true
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    />
                </label>
                <button class="button button_primary create-form__add-button" type="submit">
                    "Add"
                </button>
            </form>
        </Show>
    }
}
