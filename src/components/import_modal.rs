//! Import Modal
//!
//! User picker for the fake-equipments import. It opens once the bus
//! handler has fetched the user list and closes after a short leave
//! animation.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{AppContext, ImportPrompt};

/// Leave-animation duration before the modal unmounts
const CLOSE_DELAY_MS: u32 = 200;

#[component]
pub fn ImportModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let import_prompt = ctx.import_prompt;

    move || {
        import_prompt
            .get()
            .map(|prompt| view! { <ImportForm prompt=prompt/> })
    }
}

#[component]
fn ImportForm(prompt: ImportPrompt) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let group_id = prompt.group_id;
    let (leaving, set_leaving) = signal(false);

    // user 1 is preselected when present, first user otherwise
    let initial_user = prompt
        .users
        .iter()
        .find(|user| user.id == 1)
        .or_else(|| prompt.users.first())
        .map(|user| user.id)
        .unwrap_or(1);
    let (user_id, set_user_id) = signal(initial_user);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let selected = user_id.get();
        spawn_local(async move {
            let imported = api::fetch_equipments_for_user(selected).await;
            ctx.with_store(|store| store.import_equipments(group_id, imported));
            ctx.reload();
            set_leaving.set(true);
            TimeoutFuture::new(CLOSE_DELAY_MS).await;
            ctx.import_prompt.set(None);
        });
    };

    view! {
        <div
            class=move || if leaving.get() { "modal modal_leave" } else { "modal modal_enter" }
            on:click=move |_| ctx.import_prompt.set(None)
        >
            <div class="modal__content" on:click=|ev| ev.stop_propagation()>
                <h2 class="title container__title">"Select user for import"</h2>
                <form class="edit-form" on:submit=on_submit>
                    <label class="edit-form__form-label form-label">
                        <span class="edit-form__form-label-text">"Select user for import"</span>
                        <select
                            class="input"
                            on:change=move |ev| {
                                if let Ok(id) = event_target_value(&ev).parse() {
                                    set_user_id.set(id);
                                }
                            }
                        >
                            {prompt
                                .users
                                .iter()
                                .map(|user| {
                                    view! {
                                        <option
                                            value=user.id.to_string()
                                            selected=(user.id == initial_user)
                                        >
                                            {user.name.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <button class="button button_secondary edit-form__edit-button" type="submit">
                        "Import"
                    </button>
                </form>
            </div>
        </div>
    }
}
