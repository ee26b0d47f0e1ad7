pub mod animation;
pub mod charts;
pub mod components;
pub mod config;
pub mod icons;
pub mod page_frame;
pub mod page_standard;
pub mod view_state;
