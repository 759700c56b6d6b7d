//! Core primitives with no knowledge of scenes or entity categories.

pub mod geometry;
pub mod logging;
pub mod perf_timer;
