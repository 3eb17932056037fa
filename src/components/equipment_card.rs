//! Equipment Card Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::events::AppEvent;
use crate::models::Equipment;

/// One equipment item; clicking the header toggles its done status
#[component]
pub fn EquipmentCard(equipment: Equipment) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let group_id = equipment.group_id;
    let equipment_id = equipment.id;
    let done = equipment.done;

    let header_class = if done {
        "card__card-header card-header equipment-header equipment-header_done"
    } else {
        "card__card-header card-header equipment-header"
    };
    let title_class = if done {
        "card-title card__card-title equipment__title equipment-title_done"
    } else {
        "card-title card__card-title equipment__title"
    };

    view! {
        <div class="list__item card equipment">
            <div
                class=header_class
                on:click=move |_| {
                    ctx.dispatch(AppEvent::ToggleEquipment { group_id, equipment_id })
                }
            >
                <h3 class=title_class>{equipment.title}</h3>
                <h5 class="equipment__status status">
                    "Status: "
                    <span class="status__text">
                        {if done { "Done" } else { "In progress" }}
                    </span>
                </h5>
                <div class="card__description description">{equipment.description}</div>
            </div>
            <div class="card__toolbar toolbar">
                <button
                    class="button button_primary"
                    on:click=move |_| {
                        ctx.dispatch(AppEvent::ShowEditEquipmentForm { group_id, equipment_id })
                    }
                >
                    "Edit"
                </button>
                <button
                    class="button button_danger"
                    on:click=move |_| {
                        ctx.dispatch(AppEvent::RemoveEquipment { group_id, equipment_id })
                    }
                >
                    "Remove"
                </button>
            </div>
        </div>
    }
}
