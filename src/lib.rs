// Core services for the wordfeed vocabulary app.
// The presentation layer lives outside this crate and drives these services directly.

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod app;
pub mod config;
pub mod favorites;
pub mod haptics;
pub mod paths;
pub mod preferences;
pub mod theme;
pub mod words;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

use app::WordFeed;
use config::AppConfig;

/// Application entry point for the headless binary.
///
/// Builds every service from the on-disk configuration, acquires one session
/// and prints the resulting feed.
/// Note: This function cannot be unit tested as it talks to the network.
#[cfg_attr(coverage_nightly, coverage(off))]
pub fn run() {
    env_logger::Builder::new()
        .filter_level(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    info!("Setting up wordfeed...");

    let config = match AppConfig::load_default() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to start tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    let feed = match WordFeed::open_default(&config) {
        Ok(feed) => feed,
        Err(e) => {
            error!("Failed to open preference store: {}", e);
            std::process::exit(1);
        }
    };

    let session = runtime.block_on(feed.start_session());
    match feed.render_session(&session) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            error!("Failed to read favorites: {}", e);
            std::process::exit(1);
        }
    }
}
