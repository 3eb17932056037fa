//! Data Models
//!
//! Group/equipment structures persisted to localStorage, plus the rows
//! fetched from the placeholder remote API.

use serde::{Deserialize, Serialize};

/// A named collection of equipment items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub equipments: Vec<Equipment>,
}

/// A single trackable item, owned by exactly one group
///
/// `group_id` is a weak back-reference used for lookups; the owning group's
/// `equipments` list is the source of truth. Serialized member names are
/// camelCase so payloads written by earlier versions of the app round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: u32,
    pub group_id: u32,
    pub title: String,
    pub description: String,
    pub done: bool,
}

impl Group {
    pub fn new(id: u32, title: String, description: String) -> Self {
        Self {
            id,
            title,
            description,
            equipments: Vec::new(),
        }
    }
}

impl Equipment {
    /// Create a new equipment item, initially in progress
    pub fn new(id: u32, group_id: u32, title: String, description: String) -> Self {
        Self {
            id,
            group_id,
            title,
            description,
            done: false,
        }
    }
}

/// User row from the remote API (extra server-side fields are discarded)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteUser {
    pub id: u32,
    pub name: String,
}

/// Equipment fetched from the remote API, before it is adopted into a group
///
/// Ids are assigned by the store at append time, so imported rows carry no id.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedEquipment {
    pub title: String,
    pub description: String,
    pub done: bool,
}
