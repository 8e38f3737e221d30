//! usuarios-api library
//!
//! In-memory usuarios API: domain model, store, HTTP layer and the
//! configuration, logging and CLI plumbing around them.

use shadow_rs::shadow;
shadow!(build);

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod state;
pub mod utils;

pub use state::AppState;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
