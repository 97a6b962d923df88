#![allow(warnings)]
//! Todo Web Frontend Entry Point

mod models;
mod api;
mod notice;
mod query;
mod validation;
mod clock;
mod config;
mod storage;
mod theme;
mod route;
mod context;
mod store;
mod components;
mod pages;
mod app;
mod markdown;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        let recent = console_logger::dump();
        if !recent.is_empty() {
            web_sys::console::error_1(&format!("[APP] recent log records:\n{}", recent).into());
        }
    }));
    let config = AppConfig::from_env();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] logger not installed: {}", e).into());
    }
    log::info!("[APP] starting, api at {}", config.api_url);
    mount_to_body(move || view! { <App config=config /> });
}
