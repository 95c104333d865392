//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Stats reporter: logs per-namespace hit rates at a configured interval

mod reporter;

pub use reporter::{report, spawn_stats_reporter};
