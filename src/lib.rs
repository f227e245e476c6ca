//! Callboard - backend of a small promo site
//!
//! Serves a catalog of casino offers with click counters, a shared ordered
//! call board (slot / user entries) and a single password-gated admin
//! capability, plus an append-only action log of call submissions.
//!
//! # Architecture
//! - `services`: capability gate, call queue, offer catalog, click tracker, analytics, action log
//! - `storage`: sea-orm store and domain models
//! - `api`: HTTP handlers under `/api`
//! - `config`: static configuration (TOML + env)
//! - `runtime`: startup wiring and the HTTP server
//! - `system`: logging

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
