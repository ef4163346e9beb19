//! # Engine
//!
//! The orchestration layer that runs lessons.
//!
//! This is where:
//! - Configuration is applied
//! - Lessons are selected and executed in isolation
//! - Outcomes are collected into a report

pub mod config;
pub mod lessons;
mod runner;

pub use config::RunnerConfig;
pub use runner::{
    assert_equal, Lesson, LessonError, LessonOutcome, LessonResult, LessonRunner, LessonStatus,
    RunReport,
};
