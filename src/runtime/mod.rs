//! Application lifecycle (startup, shutdown) and the HTTP server

pub mod lifetime;
pub mod modes;

pub use modes::run_server;
