//! Common types and traits for all record collections

pub mod record;
pub mod record_id;

// Re-exports
pub use record::{CategoryChip, Record, CATEGORY_ALL};
pub use record_id::RecordId;
