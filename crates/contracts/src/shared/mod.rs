pub mod calendar;
pub mod charts;
pub mod filter;
pub mod indicators;
pub mod metric_value;
pub mod navigation;
pub mod projector;
pub mod view_state;
