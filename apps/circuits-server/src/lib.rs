//! Circuits server
//!
//! Hosts the levels and retail modules behind one axum router sharing a
//! single database.

pub mod app;
pub mod config;
pub mod logging;

pub use app::App;
pub use config::AppConfig;
