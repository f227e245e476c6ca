pub mod services;

pub use services::{ApiState, api_routes};
