//! Configuration
//!
//! Startup configuration is loaded once in `main` and handed to each component
//! explicitly; nothing reads configuration from global state.

mod structs;

pub use structs::*;
