//! UI Components
//!
//! Leptos view components, one per file.

mod create_entry_form;
mod edit_equipment_form;
mod edit_group_form;
mod equipment_card;
mod equipments_page;
mod group_card;
mod groups_page;
mod import_modal;
mod not_found;

pub use create_entry_form::CreateEntryForm;
pub use edit_equipment_form::EditEquipmentForm;
pub use edit_group_form::EditGroupForm;
pub use equipment_card::EquipmentCard;
pub use equipments_page::EquipmentsPage;
pub use group_card::GroupCard;
pub use groups_page::GroupsPage;
pub use import_modal::ImportModal;
pub use not_found::NotFound;
