//! Hash Router
//!
//! Maps the location fragment to a page. Parsing is a pure function of the
//! fragment string; `resolve` adds the store lookups. Checks run in a fixed
//! priority order, first match wins — the catch-all equipment-list arm must
//! come after the edit arms or it would shadow them.

use crate::chain::Chain;
use crate::models::{Equipment, Group};
use crate::store::GroupStore;

/// A parsed location fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Groups,
    EditGroup(u32),
    EditEquipment { group_id: u32, equipment_id: u32 },
    Equipments(u32),
    NotFound,
}

impl Route {
    /// Parse a raw `window.location.hash` value.
    pub fn parse(hash: &str) -> Route {
        if hash.is_empty() || hash == "#" {
            return Route::Groups;
        }
        let Some(path) = hash.strip_prefix("#/equipments/") else {
            return Route::NotFound;
        };
        let segments: Vec<&str> = path.split('/').collect();

        // #/equipments/{groupId}/edit — trailing text after "edit" tolerated
        if segments.len() >= 2 && segments[1].starts_with("edit") {
            if let Some(group_id) = parse_id(segments[0]) {
                return Route::EditGroup(group_id);
            }
        }

        // #/equipments/{groupId}/{equipmentId}/edit
        if segments.len() >= 3 && segments[2].starts_with("edit") {
            if let (Some(group_id), Some(equipment_id)) =
                (parse_id(segments[0]), parse_id(segments[1]))
            {
                return Route::EditEquipment {
                    group_id,
                    equipment_id,
                };
            }
        }

        // any other #/equipments/… path: the group's equipment list
        match parse_id(segments[0]) {
            Some(group_id) => Route::Equipments(group_id),
            None => Route::NotFound,
        }
    }
}

/// A route resolved against the store
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Groups,
    Equipments(Group),
    EditGroup(Group),
    EditEquipment(Equipment),
    NotFound,
}

/// Resolve a fragment to the page it renders; lookup misses become NotFound.
pub fn resolve(hash: &str, store: &mut GroupStore) -> Page {
    match Route::parse(hash) {
        Route::Groups => Page::Groups,
        Route::EditGroup(group_id) => Chain::from_option(store.group(group_id).cloned())
            .map(Page::EditGroup)
            .unwrap_or_else(|| Page::NotFound),
        Route::EditEquipment {
            group_id,
            equipment_id,
        } => Chain::from_option(store.equipment(group_id, equipment_id).cloned())
            .map(Page::EditEquipment)
            .unwrap_or_else(|| Page::NotFound),
        Route::Equipments(group_id) => Chain::from_option(store.group(group_id).cloned())
            .map(Page::Equipments)
            .unwrap_or_else(|| Page::NotFound),
        Route::NotFound => Page::NotFound,
    }
}

fn parse_id(segment: &str) -> Option<u32> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
