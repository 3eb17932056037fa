//! Event Bus
//!
//! Named application events connecting rendered UI triggers to the
//! state-mutating handlers. Dispatch is a synchronous fan-out to every
//! handler registered for the event's name, in registration order.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Event names as dispatched on the bus
pub mod names {
    pub const TOGGLE_EQUIPMENT: &str = "toggle-equipment";
    pub const REMOVE_EQUIPMENT: &str = "remove-equipment";
    pub const REMOVE_GROUP: &str = "remove-group";
    pub const REMOVE_ALL_GROUPS: &str = "remove-all-groups";
    pub const REMOVE_ALL_EQUIPMENTS: &str = "remove-all-equipments";
    pub const SHOW_GET_FAKE_EQUIPMENTS: &str = "show-get-fake-equipments";
    pub const SHOW_EDIT_EQUIPMENT_FORM: &str = "show-edit-equipment-form";
    pub const SHOW_EDIT_GROUP_FORM: &str = "show-edit-group-form";
    pub const FILTER_EQUIPMENTS: &str = "filter-equipments";
}

/// Application events (closed set) with their payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    ToggleEquipment { group_id: u32, equipment_id: u32 },
    RemoveEquipment { group_id: u32, equipment_id: u32 },
    RemoveGroup { group_id: u32 },
    RemoveAllGroups,
    RemoveAllEquipments { group_id: u32 },
    ShowGetFakeEquipments { group_id: u32 },
    ShowEditEquipmentForm { group_id: u32, equipment_id: u32 },
    ShowEditGroupForm { group_id: u32 },
    FilterEquipments { group_id: u32, done: DoneFilter },
}

impl AppEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::ToggleEquipment { .. } => names::TOGGLE_EQUIPMENT,
            AppEvent::RemoveEquipment { .. } => names::REMOVE_EQUIPMENT,
            AppEvent::RemoveGroup { .. } => names::REMOVE_GROUP,
            AppEvent::RemoveAllGroups => names::REMOVE_ALL_GROUPS,
            AppEvent::RemoveAllEquipments { .. } => names::REMOVE_ALL_EQUIPMENTS,
            AppEvent::ShowGetFakeEquipments { .. } => names::SHOW_GET_FAKE_EQUIPMENTS,
            AppEvent::ShowEditEquipmentForm { .. } => names::SHOW_EDIT_EQUIPMENT_FORM,
            AppEvent::ShowEditGroupForm { .. } => names::SHOW_EDIT_GROUP_FORM,
            AppEvent::FilterEquipments { .. } => names::FILTER_EQUIPMENTS,
        }
    }
}

/// Status filter applied to an equipment list
///
/// String forms match the filter select's option values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoneFilter {
    #[default]
    All,
    Done,
    InProgress,
}

impl DoneFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            DoneFilter::All => "all",
            DoneFilter::Done => "true",
            DoneFilter::InProgress => "false",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "true" => DoneFilter::Done,
            "false" => DoneFilter::InProgress,
            _ => DoneFilter::All,
        }
    }

    /// Whether an item with the given done status passes this filter
    pub fn admits(&self, done: bool) -> bool {
        match self {
            DoneFilter::All => true,
            DoneFilter::Done => done,
            DoneFilter::InProgress => !done,
        }
    }
}

type Handler = Box<dyn Fn(&AppEvent)>;

/// Single-threaded publish/subscribe dispatch; clones share the handler
/// table.
///
/// Handlers are registered once at startup and live for the process
/// lifetime. Registering from inside a running handler panics; dispatching
/// from inside a handler is allowed.
#[derive(Clone, Default)]
pub struct EventBus {
    handlers: Rc<RefCell<HashMap<&'static str, Vec<Handler>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a named event; handlers for the same name run
    /// in registration order.
    pub fn on(&self, name: &'static str, handler: impl Fn(&AppEvent) + 'static) {
        self.handlers
            .borrow_mut()
            .entry(name)
            .or_default()
            .push(Box::new(handler));
    }

    /// Synchronously invoke every handler registered for the event's name.
    ///
    /// A dispatch with no registered handlers is a silent no-op.
    pub fn dispatch(&self, event: &AppEvent) {
        let handlers = self.handlers.borrow();
        if let Some(list) = handlers.get(event.name()) {
            for handler in list {
                handler(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_without_handlers_is_noop() {
        let bus = EventBus::new();
        bus.dispatch(&AppEvent::RemoveAllGroups);
    }

    #[test]
    fn test_handlers_run_in_registration_order_with_same_payload() {
        let bus = EventBus::new();
        let seen: Rc<RefCell<Vec<(u32, AppEvent)>>> = Rc::new(RefCell::new(Vec::new()));

        for tag in 1..=3u32 {
            let seen = seen.clone();
            bus.on(names::REMOVE_GROUP, move |event| {
                seen.borrow_mut().push((tag, *event));
            });
        }

        let event = AppEvent::RemoveGroup { group_id: 7 };
        bus.dispatch(&event);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(
            seen.iter().map(|(tag, _)| *tag).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert!(seen.iter().all(|(_, received)| *received == event));
    }

    #[test]
    fn test_handlers_are_keyed_by_event_name() {
        let bus = EventBus::new();
        let count = Rc::new(RefCell::new(0u32));

        let handler_count = count.clone();
        bus.on(names::TOGGLE_EQUIPMENT, move |_| {
            *handler_count.borrow_mut() += 1;
        });

        bus.dispatch(&AppEvent::RemoveAllGroups);
        assert_eq!(*count.borrow(), 0);

        bus.dispatch(&AppEvent::ToggleEquipment {
            group_id: 1,
            equipment_id: 2,
        });
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_dispatch_from_within_handler() {
        let bus = EventBus::new();
        let count = Rc::new(RefCell::new(0u32));

        let inner_count = count.clone();
        bus.on(names::REMOVE_ALL_EQUIPMENTS, move |_| {
            *inner_count.borrow_mut() += 1;
        });

        let chained = bus.clone();
        bus.on(names::REMOVE_GROUP, move |event| {
            if let AppEvent::RemoveGroup { group_id } = *event {
                chained.dispatch(&AppEvent::RemoveAllEquipments { group_id });
            }
        });

        bus.dispatch(&AppEvent::RemoveGroup { group_id: 1 });
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_done_filter_strings_round_trip() {
        for filter in [DoneFilter::All, DoneFilter::Done, DoneFilter::InProgress] {
            assert_eq!(DoneFilter::from_str(filter.as_str()), filter);
        }
        assert_eq!(DoneFilter::from_str("garbage"), DoneFilter::All);
    }

    #[test]
    fn test_done_filter_admits() {
        assert!(DoneFilter::All.admits(true) && DoneFilter::All.admits(false));
        assert!(DoneFilter::Done.admits(true) && !DoneFilter::Done.admits(false));
        assert!(!DoneFilter::InProgress.admits(true) && DoneFilter::InProgress.admits(false));
    }
}
