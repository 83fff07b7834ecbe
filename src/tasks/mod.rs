//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the application.
//!
//! # Tasks
//! - `reaper` - periodically removes cache entries older than the TTL

mod reaper;

pub use reaper::{spawn_reaper_task, ReaperHandle};
