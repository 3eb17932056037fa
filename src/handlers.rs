//! Bus Event Handlers
//!
//! The consumer side of the event bus. Every named event is wired here,
//! once, at application start — registration must precede the first
//! dispatch. Mutating handlers change the store (which persists itself) and
//! nudge the reactive layer through the context's reload signal; navigation
//! handlers assign the location fragment.

use leptos::prelude::Set;
use leptos::task::spawn_local;

use crate::api;
use crate::chain::Chain;
use crate::context::{current_hash, AppContext, ImportPrompt};
use crate::events::{names, AppEvent, DoneFilter};
use crate::router::Route;

/// Wire all application events to their handlers.
pub fn register_handlers(ctx: AppContext) {
    let bus = ctx.bus();

    bus.on(names::TOGGLE_EQUIPMENT, move |event| {
        if let AppEvent::ToggleEquipment {
            group_id,
            equipment_id,
        } = *event
        {
            handle_toggle_equipment(ctx, group_id, equipment_id);
        }
    });

    bus.on(names::REMOVE_EQUIPMENT, move |event| {
        if let AppEvent::RemoveEquipment {
            group_id,
            equipment_id,
        } = *event
        {
            handle_remove_equipment(ctx, group_id, equipment_id);
        }
    });

    bus.on(names::REMOVE_GROUP, move |event| {
        if let AppEvent::RemoveGroup { group_id } = *event {
            handle_remove_group(ctx, group_id);
        }
    });

    bus.on(names::REMOVE_ALL_GROUPS, move |event| {
        if let AppEvent::RemoveAllGroups = *event {
            handle_remove_all_groups(ctx);
        }
    });

    bus.on(names::REMOVE_ALL_EQUIPMENTS, move |event| {
        if let AppEvent::RemoveAllEquipments { group_id } = *event {
            handle_remove_all_equipments(ctx, group_id);
        }
    });

    bus.on(names::SHOW_GET_FAKE_EQUIPMENTS, move |event| {
        if let AppEvent::ShowGetFakeEquipments { group_id } = *event {
            handle_show_get_fake_equipments(ctx, group_id);
        }
    });

    bus.on(names::SHOW_EDIT_GROUP_FORM, move |event| {
        if let AppEvent::ShowEditGroupForm { group_id } = *event {
            ctx.navigate(&format!("#/equipments/{group_id}/edit"));
        }
    });

    bus.on(names::SHOW_EDIT_EQUIPMENT_FORM, move |event| {
        if let AppEvent::ShowEditEquipmentForm {
            group_id,
            equipment_id,
        } = *event
        {
            ctx.navigate(&format!("#/equipments/{group_id}/{equipment_id}/edit"));
        }
    });

    bus.on(names::FILTER_EQUIPMENTS, move |event| {
        if let AppEvent::FilterEquipments { group_id, done } = *event {
            handle_filter_equipments(ctx, group_id, done);
        }
    });
}

fn handle_toggle_equipment(ctx: AppContext, group_id: u32, equipment_id: u32) {
    Chain::from_option(ctx.with_store(|store| store.toggle_equipment(group_id, equipment_id)))
        .tap(|_| ctx.reload());
}

fn handle_remove_equipment(ctx: AppContext, group_id: u32, equipment_id: u32) {
    if !confirm_removal() {
        return;
    }
    if ctx.with_store(|store| store.remove_equipment(group_id, equipment_id)) {
        ctx.reload();
    }
}

fn handle_remove_group(ctx: AppContext, group_id: u32) {
    if !confirm_removal() {
        return;
    }
    if !ctx.with_store(|store| store.remove_group(group_id)) {
        return;
    }
    ctx.reload();
    // when the removed group's own page is showing, fall back home
    let on_own_page = match Route::parse(&current_hash()) {
        Route::Equipments(id) | Route::EditGroup(id) => id == group_id,
        Route::EditEquipment { group_id: id, .. } => id == group_id,
        _ => false,
    };
    if on_own_page {
        ctx.navigate("");
    }
}

fn handle_remove_all_groups(ctx: AppContext) {
    if !confirm_removal() {
        return;
    }
    ctx.with_store(|store| store.clear());
    ctx.reload();
}

fn handle_remove_all_equipments(ctx: AppContext, group_id: u32) {
    if !confirm_removal() {
        return;
    }
    if ctx.with_store(|store| store.clear_equipments(group_id)) {
        ctx.reload();
    }
}

fn handle_show_get_fake_equipments(ctx: AppContext, group_id: u32) {
    spawn_local(async move {
        Chain::from_option(api::fetch_users().await)
            .tap(|users| {
                ctx.import_prompt.set(Some(ImportPrompt {
                    group_id,
                    users: users.clone(),
                }));
            })
            .catch(|| alert("Something went wrong. Try again later."));
    });
}

fn handle_filter_equipments(ctx: AppContext, group_id: u32, done: DoneFilter) {
    if ctx.with_store(|store| store.group(group_id).is_some()) {
        ctx.filter.set(done);
    }
}

fn confirm_removal() -> bool {
    web_sys::window()
        .map(|window| window.confirm_with_message("Are you sure?").unwrap_or(false))
        .unwrap_or(false)
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
