#![forbid(unsafe_code)]

//! Workout statistics for running, walking and swimming sessions.
//!
//! This crate provides:
//! - Boundary types (workout codes, raw sensor readings)
//! - Workout variants with distance, speed and calorie formulas
//! - Summary records and their text template
//! - Dispatch from codes to variants, and a batch driver
//! - Feed readers (JSON Lines, CSV) and configuration

pub mod types;
pub mod error;
pub mod workout;
pub mod summary;
pub mod dispatch;
pub mod batch;
pub mod feed;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use workout::{RunningWorkout, SwimmingWorkout, Training, WalkingWorkout, Workout};
pub use summary::SummaryMessage;
pub use dispatch::{create_workout, summarize};
pub use batch::{default_readings, process_batch, BatchReport, ErrorPolicy};
pub use feed::read_feed;
pub use config::Config;
