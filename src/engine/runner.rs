//! # Lesson Runner
//!
//! Runs named lesson cases and reports each one on its own.
//!
//! A case that returns an error or panics is recorded and the run moves on;
//! nothing a single case does can stop the rest of the suite.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::FoldError;
use crate::engine::config::RunnerConfig;
use crate::ports::SourceError;

/// Why a lesson did not pass
#[derive(Debug, Error)]
pub enum LessonError {
    /// An expectation did not hold
    #[error("expected {expected}, got {actual}")]
    AssertionFailure { expected: String, actual: String },

    /// A fold's combining function failed
    #[error(transparent)]
    InvalidOperation(#[from] FoldError),

    /// A sequence source could not be read
    #[error(transparent)]
    Source(#[from] SourceError),
}

pub type LessonResult = Result<(), LessonError>;

/// Compare with exact equality
///
/// Both sides are rendered with `Debug` on mismatch.
pub fn assert_equal<E, A>(expected: E, actual: A) -> LessonResult
where
    E: fmt::Debug,
    A: fmt::Debug + PartialEq<E>,
{
    if actual == expected {
        Ok(())
    } else {
        Err(LessonError::AssertionFailure {
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        })
    }
}

/// A named, runnable case
#[derive(Clone, Copy)]
pub struct Lesson {
    pub name: &'static str,
    pub run: fn(&RunnerConfig) -> LessonResult,
}

impl Lesson {
    pub const fn new(name: &'static str, run: fn(&RunnerConfig) -> LessonResult) -> Self {
        Self { name, run }
    }
}

impl fmt::Debug for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lesson").field("name", &self.name).finish()
    }
}

/// How a single case ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonStatus {
    Passed,
    /// Assertion mismatch
    Failed(String),
    /// Any other error, including a panic
    Errored(String),
}

impl LessonStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LessonStatus::Passed => "PASS",
            LessonStatus::Failed(_) => "FAIL",
            LessonStatus::Errored(_) => "ERROR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonOutcome {
    pub name: &'static str,
    pub status: LessonStatus,
}

/// Outcomes of a run, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub outcomes: Vec<LessonOutcome>,
}

impl RunReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.count(|s| matches!(s, LessonStatus::Passed))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, LessonStatus::Failed(_)))
    }

    pub fn errored(&self) -> usize {
        self.count(|s| matches!(s, LessonStatus::Errored(_)))
    }

    /// True when every case that ran passed
    pub fn is_success(&self) -> bool {
        self.passed() == self.total()
    }

    fn count(&self, pred: impl Fn(&LessonStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passed, {} failed, {} errored ({} total)",
            self.passed(),
            self.failed(),
            self.errored(),
            self.total()
        )
    }
}

/// Runs registered lessons
pub struct LessonRunner {
    config: RunnerConfig,
    lessons: Vec<Lesson>,
}

impl LessonRunner {
    /// Create a runner with no lessons
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            config,
            lessons: Vec::new(),
        }
    }

    /// Create a runner preloaded with `lessons`
    pub fn with_lessons(config: RunnerConfig, lessons: impl IntoIterator<Item = Lesson>) -> Self {
        let mut runner = Self::new(config);
        runner.lessons.extend(lessons);
        runner
    }

    /// Add a lesson after the existing ones
    pub fn register(&mut self, lesson: Lesson) {
        self.lessons.push(lesson);
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Registered names, in run order
    pub fn lesson_names(&self) -> Vec<&'static str> {
        self.lessons.iter().map(|l| l.name).collect()
    }

    /// Run every lesson, or only the one named by the config filter
    pub fn run(&self) -> RunReport {
        let selected: Vec<&Lesson> = match self.config.filter.as_deref() {
            Some(name) => self.lessons.iter().filter(|l| l.name == name).collect(),
            None => self.lessons.iter().collect(),
        };

        if selected.is_empty() {
            if let Some(name) = self.config.filter.as_deref() {
                warn!(lesson = name, "no lesson with this name");
            }
        }

        info!(lessons = selected.len(), "starting run");

        let outcomes = selected
            .into_iter()
            .map(|lesson| LessonOutcome {
                name: lesson.name,
                status: self.run_one(lesson),
            })
            .collect();

        let report = RunReport { outcomes };
        info!(
            passed = report.passed(),
            failed = report.failed(),
            errored = report.errored(),
            "run finished"
        );
        report
    }

    /// Like [`run`](LessonRunner::run), without the default panic hook output
    ///
    /// Panic messages still end up in the report. The previous hook is
    /// restored before returning.
    pub fn run_quiet(&self) -> RunReport {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));
        let report = self.run();
        panic::set_hook(previous);
        report
    }

    fn run_one(&self, lesson: &Lesson) -> LessonStatus {
        debug!(lesson = lesson.name, "running lesson");

        let result = panic::catch_unwind(AssertUnwindSafe(|| (lesson.run)(&self.config)));

        let status = match result {
            Ok(Ok(())) => LessonStatus::Passed,
            Ok(Err(e @ LessonError::AssertionFailure { .. })) => {
                LessonStatus::Failed(e.to_string())
            }
            Ok(Err(e)) => LessonStatus::Errored(e.to_string()),
            Err(payload) => LessonStatus::Errored(panic_message(payload.as_ref())),
        };

        if status != LessonStatus::Passed {
            warn!(lesson = lesson.name, status = status.label(), "lesson did not pass");
        }
        status
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {}", s)
    } else {
        "panicked".to_string()
    }
}
