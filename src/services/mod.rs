mod action_log;
mod analytics;
mod call_queue;
mod capability;
mod click_tracker;
mod offer_catalog;
pub mod seed;

pub use action_log::*;
pub use analytics::*;
pub use call_queue::*;
pub use capability::*;
pub use click_tracker::*;
pub use offer_catalog::*;
