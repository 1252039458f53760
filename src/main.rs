#![allow(warnings)]
//! Waste-Watch Frontend Entry Point

mod api;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod markdown;
mod route;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
