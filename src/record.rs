use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::level::LogLevel;

/// Identifier of the log call site: a numeric id plus an optional symbolic
/// name. Defaults to `(0, None)` when the caller does not supply one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventId {
    pub id: i64,
    pub name: Option<String>,
}

impl EventId {
    pub fn new(id: i64) -> Self {
        EventId { id, name: None }
    }

    pub fn named(id: i64, name: impl Into<String>) -> Self {
        EventId {
            id,
            name: Some(name.into()),
        }
    }
}

/// A captured error with its causal chain.
///
/// Each frame keeps a type name and a message; `source` points at the next
/// inner cause, innermost last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapturedError {
    pub type_name: String,
    pub message: String,
    pub source: Option<Box<CapturedError>>,
}

impl CapturedError {
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        CapturedError {
            type_name: type_name.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Attach an inner cause to this frame, replacing any existing one.
    pub fn with_source(mut self, source: CapturedError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Capture a live error value together with everything its
    /// [`std::error::Error::source`] chain exposes.
    ///
    /// Only the outermost frame has a concrete type name; sources are trait
    /// objects, so their frames are labeled `caused by`.
    pub fn from_error<E: std::error::Error>(err: &E) -> Self {
        let mut frames: Vec<CapturedError> = Vec::new();
        let mut cause = err.source();
        while let Some(inner) = cause {
            frames.push(CapturedError::new("caused by", inner.to_string()));
            cause = inner.source();
        }

        let mut source: Option<Box<CapturedError>> = None;
        for mut frame in frames.into_iter().rev() {
            frame.source = source;
            source = Some(Box::new(frame));
        }

        CapturedError {
            type_name: std::any::type_name::<E>().to_string(),
            message: err.to_string(),
            source,
        }
    }

    /// Iterate the causal chain starting from this frame, innermost last.
    pub fn chain(&self) -> impl Iterator<Item = &CapturedError> {
        std::iter::successors(Some(self), |frame| frame.source.as_deref())
    }
}

/// One captured log event.
///
/// Records are immutable values: the capture pipeline builds them fully and
/// appends them to the buffer in a single step. `category` is never empty and
/// `scopes` is always present (possibly empty), outermost scope first.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub event_id: EventId,
    pub category: String,
    /// Fully rendered message text; may be empty, never absent.
    pub message: String,
    pub error: Option<CapturedError>,
    /// Structured key/value payload supplied by the caller, if any.
    pub state: Option<BTreeMap<String, serde_json::Value>>,
    pub scopes: Vec<serde_json::Value>,
}
