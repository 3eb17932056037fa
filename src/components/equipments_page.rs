//! Equipments Page
//!
//! A single group's equipment: actions dropdown, create form, status filter
//! and the filtered card list.

use leptos::prelude::*;

use crate::components::{CreateEntryForm, EquipmentCard};
use crate::context::AppContext;
use crate::events::{AppEvent, DoneFilter};
use crate::models::Group;

#[component]
pub fn EquipmentsPage(group: Group) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let group_id = group.id;
    let filter = ctx.filter;
    let (dropdown_open, set_dropdown_open) = signal(false);

    let filtered = {
        let equipments = group.equipments.clone();
        Memo::new(move |_| {
            equipments
                .iter()
                .filter(|equipment| filter.get().admits(equipment.done))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let on_create = Callback::new(move |(title, description): (String, String)| {
        ctx.with_store(|store| store.add_equipment(group_id, title, description));
        ctx.reload();
    });

    // the selection rendered into the options; later changes live in the DOM
    let initial_filter = filter.get_untracked();

    view! {
        <div class="equipments">
            <div class="header">
                <h1 class="title header__title">{group.title.clone()}</h1>
                <div class="header__toolbar toolbar">
                    <button class="button button_primary" on:click=move |_| ctx.navigate("")>
                        "Home"
                    </button>
                    <div class=move || {
                        if dropdown_open.get() { "dropdown dropdown_open" } else { "dropdown" }
                    }>
                        <div class="dropdown__action">
                            <button
                                class="button button_primary"
                                id="dropdown__action-button"
                                on:click=move |_| set_dropdown_open.update(|open| *open = !*open)
                            >
                                "Actions"
                            </button>
                        </div>
                        <div class="dropdown__content-wrapper">
                            <div class="dropdown__content">
                                <button
                                    class="button button_primary"
                                    on:click=move |_| {
                                        set_dropdown_open.set(false);
                                        ctx.dispatch(AppEvent::ShowEditGroupForm { group_id });
                                    }
                                >
                                    "Edit"
                                </button>
                                <button
                                    class="button button_secondary"
                                    on:click=move |_| {
                                        set_dropdown_open.set(false);
                                        ctx.dispatch(AppEvent::ShowGetFakeEquipments { group_id });
                                    }
                                >
                                    "Fake equipments"
                                </button>
                                <button
                                    class="button button_danger"
                                    on:click=move |_| {
                                        set_dropdown_open.set(false);
                                        ctx.dispatch(AppEvent::RemoveAllEquipments { group_id });
                                    }
                                >
                                    "Remove all"
                                </button>
                                <button
                                    class="button button_danger"
                                    on:click=move |_| {
                                        set_dropdown_open.set(false);
                                        ctx.dispatch(AppEvent::RemoveGroup { group_id });
                                    }
                                >
                                    "Remove group"
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
                <CreateEntryForm
                    label="Add new equipment"
                    placeholder="Add equipment title"
                    start_open=group.equipments.is_empty()
                    on_create=on_create
                />
            </div>
            <div class="equipment-filter">
                <label class="equipment-filter__label">
                    <span class="equipment-filter__label-text">"Filter by status"</span>
                    <select
                        class="input"
                        id="equipment-filter"
                        on:change=move |ev| {
                            ctx.dispatch(AppEvent::FilterEquipments {
                                group_id,
                                done: DoneFilter::from_str(&event_target_value(&ev)),
                            });
                        }
                    >
                        <option value="all" selected=(initial_filter == DoneFilter::All)>
                            "All"
                        </option>
                        <option value="true" selected=(initial_filter == DoneFilter::Done)>
                            "Done"
                        </option>
                        <option value="false" selected=(initial_filter == DoneFilter::InProgress)>
                            "In progress"
                        </option>
                    </select>
                </label>
            </div>
            <div class="equipments__list list">
                <Show
                    when=move || !filtered.get().is_empty()
                    fallback=|| {
                        view! {
                            <h5 class="no-entries">
                                "No entries yet. Add new one using the form above."
                            </h5>
                        }
                    }
                >
                    <For
                        each=move || filtered.get()
                        key=|equipment| equipment.id
                        children=move |equipment| view! { <EquipmentCard equipment=equipment/> }
                    />
                </Show>
            </div>
        </div>
    }
}
