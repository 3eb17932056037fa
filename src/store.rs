//! Group Data Store
//!
//! In-memory cache of equipment groups, lazily hydrated from the storage
//! backend on first access and written back wholesale after every mutation.
//! There is no partial persistence: each mutator rewrites the full
//! collection, matching the single-key storage layout.

use wasm_bindgen::JsValue;

use crate::chain::Chain;
use crate::models::{Equipment, Group, ImportedEquipment};
use crate::storage::StorageBackend;

/// Seed collection used when storage is empty or corrupt
pub fn default_groups() -> Vec<Group> {
    vec![Group {
        id: 1,
        title: "Equipmentlist 1".to_string(),
        description: "Lorem ipsum dolor sit amet, consectetur adipisicing elit. Accusantium, alias."
            .to_string(),
        equipments: vec![
            Equipment {
                id: 1,
                group_id: 1,
                title: "Equipment 1 content 1".to_string(),
                description:
                    "Lorem ipsum dolor sit amet, consectetur adipisicing elit. Accusantium, alias."
                        .to_string(),
                done: false,
            },
            Equipment {
                id: 2,
                group_id: 1,
                title: "Equipment 1 content 2".to_string(),
                description: String::new(),
                done: true,
            },
        ],
    }]
}

// Fresh ids sit above every live id, so removals can never lead to a
// collision with an id that is still in use.
fn next_group_id(groups: &[Group]) -> u32 {
    groups.iter().map(|group| group.id).max().unwrap_or(0) + 1
}

fn next_equipment_id(group: &Group) -> u32 {
    group
        .equipments
        .iter()
        .map(|equipment| equipment.id)
        .max()
        .unwrap_or(0)
        + 1
}

/// The application's single source of truth for groups and equipment
pub struct GroupStore {
    backend: Box<dyn StorageBackend>,
    groups: Option<Vec<Group>>,
}

impl GroupStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self {
            backend,
            groups: None,
        }
    }

    /// Lazily hydrate and expose the cached collection.
    pub fn groups(&mut self) -> &Vec<Group> {
        self.cache()
    }

    fn cache(&mut self) -> &mut Vec<Group> {
        if self.groups.is_none() {
            let loaded = self.load();
            self.groups = Some(loaded);
        }
        self.groups.as_mut().expect("hydrated above")
    }

    fn load(&self) -> Vec<Group> {
        let stored = Chain::from_option(self.backend.read())
            .try_bind(|payload| serde_json::from_str::<Vec<Group>>(&payload));
        if stored.is_failed() {
            // corrupt payload: drop it so the next session starts clean
            self.backend.remove();
        }
        stored.unwrap_or_else(default_groups)
    }

    fn persist(&mut self) {
        let payload = match serde_json::to_string(self.cache()) {
            Ok(payload) => payload,
            Err(err) => {
                report_save_error(&err.to_string());
                return;
            }
        };
        if let Err(err) = self.backend.write(&payload) {
            report_save_error(&err);
        }
    }

    pub fn group(&mut self, id: u32) -> Option<&Group> {
        self.cache().iter().find(|group| group.id == id)
    }

    fn group_mut(&mut self, id: u32) -> Option<&mut Group> {
        self.cache().iter_mut().find(|group| group.id == id)
    }

    pub fn equipment(&mut self, group_id: u32, equipment_id: u32) -> Option<&Equipment> {
        self.group(group_id)?
            .equipments
            .iter()
            .find(|equipment| equipment.id == equipment_id)
    }

    pub fn add_group(&mut self, title: String, description: String) -> Group {
        let groups = self.cache();
        let group = Group::new(next_group_id(groups), title, description);
        groups.push(group.clone());
        self.persist();
        group
    }

    pub fn update_group(&mut self, id: u32, title: String, description: String) -> bool {
        let Some(group) = self.group_mut(id) else {
            return false;
        };
        group.title = title;
        group.description = description;
        self.persist();
        true
    }

    pub fn remove_group(&mut self, id: u32) -> bool {
        let groups = self.cache();
        let before = groups.len();
        groups.retain(|group| group.id != id);
        let removed = groups.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Remove every group.
    pub fn clear(&mut self) {
        self.cache().clear();
        self.persist();
    }

    pub fn add_equipment(
        &mut self,
        group_id: u32,
        title: String,
        description: String,
    ) -> Option<Equipment> {
        let group = self.group_mut(group_id)?;
        let equipment = Equipment::new(next_equipment_id(group), group_id, title, description);
        group.equipments.push(equipment.clone());
        self.persist();
        Some(equipment)
    }

    pub fn update_equipment(
        &mut self,
        group_id: u32,
        equipment_id: u32,
        title: String,
        description: String,
        done: bool,
    ) -> bool {
        let Some(equipment) = self.equipment_mut(group_id, equipment_id) else {
            return false;
        };
        equipment.title = title;
        equipment.description = description;
        equipment.done = done;
        self.persist();
        true
    }

    /// Flip an equipment's done status, returning the new value.
    pub fn toggle_equipment(&mut self, group_id: u32, equipment_id: u32) -> Option<bool> {
        let equipment = self.equipment_mut(group_id, equipment_id)?;
        equipment.done = !equipment.done;
        let done = equipment.done;
        self.persist();
        Some(done)
    }

    pub fn remove_equipment(&mut self, group_id: u32, equipment_id: u32) -> bool {
        let Some(group) = self.group_mut(group_id) else {
            return false;
        };
        let before = group.equipments.len();
        group
            .equipments
            .retain(|equipment| equipment.id != equipment_id);
        let removed = group.equipments.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Remove every equipment item in a group, keeping the group.
    pub fn clear_equipments(&mut self, group_id: u32) -> bool {
        let Some(group) = self.group_mut(group_id) else {
            return false;
        };
        group.equipments.clear();
        self.persist();
        true
    }

    /// Append fetched equipment to a group, assigning fresh local ids.
    pub fn import_equipments(
        &mut self,
        group_id: u32,
        imported: Vec<ImportedEquipment>,
    ) -> Option<Vec<Equipment>> {
        let group = self.group_mut(group_id)?;
        let mut next_id = next_equipment_id(group);
        let mut appended = Vec::with_capacity(imported.len());
        for item in imported {
            let equipment = Equipment {
                id: next_id,
                group_id,
                title: item.title,
                description: item.description,
                done: item.done,
            };
            next_id += 1;
            group.equipments.push(equipment.clone());
            appended.push(equipment);
        }
        self.persist();
        Some(appended)
    }

    fn equipment_mut(&mut self, group_id: u32, equipment_id: u32) -> Option<&mut Equipment> {
        self.group_mut(group_id)?
            .equipments
            .iter_mut()
            .find(|equipment| equipment.id == equipment_id)
    }
}

fn report_save_error(err: &str) {
    web_sys::console::error_1(&JsValue::from_str(&format!(
        "failed to persist equipments: {err}"
    )));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::cell::Cell;
    use std::rc::Rc;

    fn store_with(backend: MemoryStorage) -> GroupStore {
        GroupStore::new(Box::new(backend))
    }

    #[test]
    fn test_empty_storage_yields_default_seed() {
        let mut store = store_with(MemoryStorage::new());
        let groups = store.groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id, 1);
        assert_eq!(groups[0].equipments.len(), 2);
        assert!(!groups[0].equipments[0].done);
        assert!(groups[0].equipments[1].done);
    }

    #[test]
    fn test_round_trip_survives_cache_loss() {
        let backend = MemoryStorage::new();
        let saved = {
            let mut store = store_with(backend.clone());
            store.add_group("Warehouse".to_string(), "Aisle 3".to_string());
            store.add_equipment(2, "Forklift".to_string(), "Electric".to_string());
            store.groups().clone()
        };

        // a fresh store over the same backend simulates a process restart
        let mut reloaded = store_with(backend);
        assert_eq!(*reloaded.groups(), saved);
    }

    #[test]
    fn test_corrupt_payload_is_discarded_and_reseeded() {
        let backend = MemoryStorage::new();
        backend.write("{not json").unwrap();

        let mut store = store_with(backend.clone());
        assert_eq!(*store.groups(), default_groups());
        // the corrupt value is gone from storage, not just from the cache
        assert_eq!(backend.read(), None);
    }

    #[test]
    fn test_lazy_hydration_reads_storage_once() {
        struct CountingBackend {
            inner: MemoryStorage,
            reads: Rc<Cell<u32>>,
        }
        impl StorageBackend for CountingBackend {
            fn read(&self) -> Option<String> {
                self.reads.set(self.reads.get() + 1);
                self.inner.read()
            }
            fn write(&self, payload: &str) -> Result<(), String> {
                self.inner.write(payload)
            }
            fn remove(&self) {
                self.inner.remove()
            }
        }

        let reads = Rc::new(Cell::new(0));
        let mut store = GroupStore::new(Box::new(CountingBackend {
            inner: MemoryStorage::new(),
            reads: reads.clone(),
        }));

        store.groups();
        store.groups();
        store.toggle_equipment(1, 1);
        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn test_double_toggle_restores_status() {
        let mut store = store_with(MemoryStorage::new());
        let original = store.equipment(1, 1).unwrap().done;

        assert_eq!(store.toggle_equipment(1, 1), Some(!original));
        assert_eq!(store.toggle_equipment(1, 1), Some(original));
        assert_eq!(store.equipment(1, 1).unwrap().done, original);
    }

    #[test]
    fn test_toggle_missing_equipment_is_none() {
        let mut store = store_with(MemoryStorage::new());
        assert_eq!(store.toggle_equipment(1, 99), None);
        assert_eq!(store.toggle_equipment(99, 1), None);
    }

    #[test]
    fn test_ids_stay_unique_after_removal() {
        let mut store = store_with(MemoryStorage::new());
        let second = store.add_group("Second".to_string(), String::new());
        let third = store.add_group("Third".to_string(), String::new());
        assert_eq!((second.id, third.id), (2, 3));

        store.remove_group(2);
        let fourth = store.add_group("Fourth".to_string(), String::new());
        let ids: Vec<u32> = store.groups().iter().map(|group| group.id).collect();
        assert_eq!(fourth.id, 4);
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_equipment_ids_stay_unique_after_removal() {
        let mut store = store_with(MemoryStorage::new());
        store.remove_equipment(1, 2);
        let added = store.add_equipment(1, "Crane".to_string(), String::new()).unwrap();
        // seed equipment 2 was the maximum; 1 is still live, so 1 is not reused
        assert_eq!(added.id, 2);
        store.remove_equipment(1, 1);
        let next = store.add_equipment(1, "Drill".to_string(), String::new()).unwrap();
        assert_eq!(next.id, 3);
    }

    #[test]
    fn test_add_equipment_sets_back_reference() {
        let mut store = store_with(MemoryStorage::new());
        let added = store
            .add_equipment(1, "Scaffold".to_string(), "Steel".to_string())
            .unwrap();
        assert_eq!(added.group_id, 1);
        assert!(!added.done);
        assert_eq!(store.equipment(1, added.id), Some(&added));
    }

    #[test]
    fn test_add_equipment_to_missing_group() {
        let mut store = store_with(MemoryStorage::new());
        assert_eq!(
            store.add_equipment(42, "Ghost".to_string(), String::new()),
            None
        );
    }

    #[test]
    fn test_update_group_and_equipment() {
        let mut store = store_with(MemoryStorage::new());
        assert!(store.update_group(1, "Renamed".to_string(), "New".to_string()));
        assert_eq!(store.group(1).unwrap().title, "Renamed");

        assert!(store.update_equipment(1, 1, "Edited".to_string(), "Desc".to_string(), true));
        let equipment = store.equipment(1, 1).unwrap();
        assert_eq!(equipment.title, "Edited");
        assert!(equipment.done);

        assert!(!store.update_group(9, "X".to_string(), String::new()));
        assert!(!store.update_equipment(1, 9, "X".to_string(), String::new(), false));
    }

    #[test]
    fn test_remove_group_discards_its_equipment() {
        let backend = MemoryStorage::new();
        let mut store = store_with(backend.clone());
        assert!(store.remove_group(1));
        assert!(store.groups().is_empty());

        let mut reloaded = store_with(backend);
        assert!(reloaded.groups().is_empty());
    }

    #[test]
    fn test_clear_all_groups_persists_empty_collection() {
        let backend = MemoryStorage::new();
        let mut store = store_with(backend.clone());
        store.clear();
        assert_eq!(backend.read().as_deref(), Some("[]"));
    }

    #[test]
    fn test_clear_equipments_keeps_group() {
        let mut store = store_with(MemoryStorage::new());
        assert!(store.clear_equipments(1));
        assert!(store.group(1).unwrap().equipments.is_empty());
        assert!(!store.clear_equipments(8));
    }

    #[test]
    fn test_import_appends_with_fresh_ids() {
        let mut store = store_with(MemoryStorage::new());
        let appended = store
            .import_equipments(
                1,
                vec![
                    ImportedEquipment {
                        title: "Pump".to_string(),
                        description: "Done".to_string(),
                        done: true,
                    },
                    ImportedEquipment {
                        title: "Hose".to_string(),
                        description: "In progress".to_string(),
                        done: false,
                    },
                ],
            )
            .unwrap();

        assert_eq!(
            appended.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![3, 4]
        );
        assert!(appended.iter().all(|e| e.group_id == 1));
        assert_eq!(store.group(1).unwrap().equipments.len(), 4);

        assert_eq!(store.import_equipments(77, Vec::new()), None);
    }
}
