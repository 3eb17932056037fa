#![allow(warnings)]
//! Equiplist Frontend Entry Point

mod models;
mod chain;
mod events;
mod router;
mod storage;
mod store;
mod api;
mod context;
mod handlers;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
