pub mod action_log;
pub mod call_entry;
pub mod click_record;
pub mod offer;

pub use action_log::Entity as ActionLogEntity;
pub use call_entry::Entity as CallEntryEntity;
pub use click_record::Entity as ClickRecordEntity;
pub use offer::Entity as OfferEntity;
