// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use seo_glance::{config::AppConfig, lifecycle, views::App};

fn main() {
    let config = AppConfig::load();
    lifecycle::init_logging(&config);
    tracing::info!("Starting SEO analyzer (debug={})", config.debug);
    dioxus::launch(App);
}
