//! Target-independent model of the HR dashboard: records, filtering,
//! metric values, animation projection, view state and routing.

pub mod dashboards;
pub mod domain;
pub mod shared;
