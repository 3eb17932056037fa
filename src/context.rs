//! Application Context
//!
//! Shared state provided via the Leptos Context API. The store and the bus
//! are constructed once at startup and travel inside the context instead of
//! living as ambient globals. The context handle is Copy, so components and
//! handlers capture it freely.

use leptos::prelude::*;

use crate::events::{AppEvent, DoneFilter, EventBus};
use crate::models::RemoteUser;
use crate::store::GroupStore;

/// Import modal state: the receiving group plus the fetched users
#[derive(Debug, Clone, PartialEq)]
pub struct ImportPrompt {
    pub group_id: u32,
    pub users: Vec<RemoteUser>,
}

/// App-wide state provided via context
///
/// The store and bus are not Send, so they live in local storage; the
/// handles here are plain arena keys.
#[derive(Clone, Copy)]
pub struct AppContext {
    store: StoredValue<GroupStore, LocalStorage>,
    bus: StoredValue<EventBus, LocalStorage>,
    /// Bumped after every store mutation; pages re-resolve on it - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped after every store mutation - write
    set_reload_trigger: WriteSignal<u32>,
    /// Active status filter on the equipment page
    pub filter: RwSignal<DoneFilter>,
    /// Open import modal, if any
    pub import_prompt: RwSignal<Option<ImportPrompt>>,
}

impl AppContext {
    pub fn new(store: GroupStore) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            store: StoredValue::new_local(store),
            bus: StoredValue::new_local(EventBus::new()),
            reload_trigger,
            set_reload_trigger,
            filter: RwSignal::new(DoneFilter::default()),
            import_prompt: RwSignal::new(None),
        }
    }

    /// Run a closure against the store.
    ///
    /// Borrows are scoped to the closure, so nothing holds the store across
    /// a reactive update.
    pub fn with_store<R>(&self, f: impl FnOnce(&mut GroupStore) -> R) -> R {
        self.store
            .try_update_value(f)
            .expect("store should live as long as the app")
    }

    /// The bus handle, for registering handlers at startup
    pub fn bus(&self) -> EventBus {
        self.bus
            .try_with_value(|bus| bus.clone())
            .expect("bus should live as long as the app")
    }

    /// Publish an event on the bus.
    ///
    /// The bus handle is cloned out first, so handlers never run under the
    /// storage guard and may reach the store or dispatch again.
    pub fn dispatch(&self, event: AppEvent) {
        self.bus().dispatch(&event);
    }

    /// Trigger a re-resolve of the current page
    pub fn reload(&self) {
        self.set_reload_trigger.update(|version| *version += 1);
    }

    /// Assign the location fragment (drives the router)
    pub fn navigate(&self, hash: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(hash);
        }
    }
}

/// Navigate one entry back in the session history
pub fn history_back() {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.back();
        }
    }
}

/// Current `window.location.hash`, empty outside a browser
pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}
