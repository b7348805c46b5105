//! Shopping List Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod list;
mod logging;
mod models;
mod profile;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_location();
    logging::init(config.log_level);
    log::info!("Starting with {:?}", config);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
