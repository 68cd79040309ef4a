//! Solezza Storefront Entry Point

mod models;
mod catalog;
mod pricing;
mod config;
mod newsletter;
mod context;
mod store;
mod components;
mod app;

use app::App;
use console_logger::LoggerConfig;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init(LoggerConfig::default()) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("[APP] logging disabled: {err}")));
    }
    mount_to_body(App);
}
