//! Remote API Client
//!
//! Read-only, best-effort fetches against the placeholder API. Failures
//! never reach the caller: the user list degrades to `None`, the equipment
//! list to empty, and the cause goes to the console.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::models::{ImportedEquipment, RemoteUser};

const API_BASE: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Deserialize)]
struct ServerUser {
    id: u32,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ServerEquipment {
    title: String,
    completed: bool,
}

/// Fetch the selectable users; `None` when the request or parse fails.
pub async fn fetch_users() -> Option<Vec<RemoteUser>> {
    match try_fetch_users().await {
        Ok(users) => Some(users),
        Err(err) => {
            report_fetch_error(&err);
            None
        }
    }
}

/// Fetch a user's equipment list; empty when the request or parse fails.
pub async fn fetch_equipments_for_user(user_id: u32) -> Vec<ImportedEquipment> {
    match try_fetch_equipments(user_id).await {
        Ok(equipments) => equipments,
        Err(err) => {
            report_fetch_error(&err);
            Vec::new()
        }
    }
}

async fn try_fetch_users() -> Result<Vec<RemoteUser>, String> {
    let response = reqwest::get(format!("{API_BASE}/users"))
        .await
        .map_err(|err| err.to_string())?;
    if !response.status().is_success() {
        return Err(format!("error fetching users: {}", response.status()));
    }
    let users: Vec<ServerUser> = response.json().await.map_err(|err| err.to_string())?;
    Ok(users
        .into_iter()
        .map(|user| RemoteUser {
            id: user.id,
            name: user.name,
        })
        .collect())
}

async fn try_fetch_equipments(user_id: u32) -> Result<Vec<ImportedEquipment>, String> {
    let response = reqwest::get(format!("{API_BASE}/users/{user_id}/equipments"))
        .await
        .map_err(|err| err.to_string())?;
    let equipments: Vec<ServerEquipment> =
        response.json().await.map_err(|err| err.to_string())?;
    Ok(to_imported(equipments))
}

/// The server only carries a completed flag; the description is derived.
fn to_imported(rows: Vec<ServerEquipment>) -> Vec<ImportedEquipment> {
    rows.into_iter()
        .map(|row| ImportedEquipment {
            title: row.title,
            description: if row.completed { "Done" } else { "In progress" }.to_string(),
            done: row.completed,
        })
        .collect()
}

fn report_fetch_error(err: &str) {
    web_sys::console::error_1(&JsValue::from_str(err));
}
