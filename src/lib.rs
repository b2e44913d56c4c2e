//! Static interactive HTML maps: a conceptual Korean power-grid diagram,
//! regional election polls, and the market snapshots behind the dashboard.

pub mod app;
pub mod config;
pub mod election;
pub mod error;
pub mod geo;
pub mod grid;
pub mod logging;
pub mod map;
pub mod market;

pub use error::{MapError, MapResult};
