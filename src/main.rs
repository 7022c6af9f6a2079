//! Project Board Frontend Entry Point

mod app;
mod components;
mod config;
mod logger;
mod store;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, warning) = BoardConfig::load();
    logger::init(logger::parse_level(&config.log_level));
    if let Some(warning) = warning {
        log::warn!("{}", warning);
    }
    log::info!("Starting project board");

    let rules = config.rules;
    mount_to_body(move || view! { <App rules=rules /> });
}
