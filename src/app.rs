//! Application Root
//!
//! Builds the context, registers the bus handlers, subscribes to hash
//! changes and renders whatever page the current fragment resolves to.

use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use crate::components::{
    EditEquipmentForm, EditGroupForm, EquipmentsPage, GroupsPage, ImportModal, NotFound,
};
use crate::context::{current_hash, AppContext};
use crate::events::DoneFilter;
use crate::handlers::register_handlers;
use crate::router::{resolve, Page};
use crate::storage::BrowserStorage;
use crate::store::GroupStore;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(GroupStore::new(Box::new(BrowserStorage)));
    provide_context(ctx);

    // handlers must be in place before anything can dispatch
    register_handlers(ctx);

    let (hash, set_hash) = signal(current_hash());

    // hashchange drives the router; the listener lives as long as the page
    let on_hashchange = Closure::<dyn FnMut()>::new(move || set_hash.set(current_hash()));
    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("hashchange", on_hashchange.as_ref().unchecked_ref());
    }
    on_hashchange.forget();

    // every navigation starts with the filter reset
    Effect::new(move |_| {
        let _ = hash.get();
        ctx.filter.set(DoneFilter::default());
    });

    let page = Memo::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let hash = hash.get();
        ctx.with_store(|store| resolve(&hash, store))
    });

    view! {
        <div class="container">
            <div class="content">
                {move || match page.get() {
                    Page::Groups => view! { <GroupsPage/> }.into_any(),
                    Page::Equipments(group) => view! { <EquipmentsPage group=group/> }.into_any(),
                    Page::EditGroup(group) => view! { <EditGroupForm group=group/> }.into_any(),
                    Page::EditEquipment(equipment) => {
                        view! { <EditEquipmentForm equipment=equipment/> }.into_any()
                    }
                    Page::NotFound => view! { <NotFound/> }.into_any(),
                }}
            </div>
            <ImportModal/>
        </div>
    }
}
