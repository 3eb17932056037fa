//! Group Card Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::events::AppEvent;
use crate::models::Group;

/// One group in the groups list, linking to its equipment page
#[component]
pub fn GroupCard(group: Group) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let group_id = group.id;

    view! {
        <div class="list__item card group">
            <div class="card__card-header card-header">
                <a class="card__link link" href=format!("#/equipments/{group_id}")>
                    <h3 class="card-title card__card-title group__title">{group.title}</h3>
                    <div class="card__description description">{group.description}</div>
                </a>
            </div>
            <div class="card__toolbar toolbar">
                <button
                    class="button button_primary"
                    on:click=move |_| ctx.dispatch(AppEvent::ShowEditGroupForm { group_id })
                >
                    "Edit"
                </button>
                <button
                    class="button button_danger"
                    on:click=move |_| ctx.dispatch(AppEvent::RemoveGroup { group_id })
                >
                    "Remove"
                </button>
            </div>
        </div>
    }
}
