//! In-memory capture of log records for asserting on emitted logs in tests.
//!
//! A [`CaptureProvider`] owns a bounded FIFO buffer of [`LogRecord`]s plus
//! the filtering settings. Test code either logs through category-bound
//! [`CaptureLogger`] handles or attaches a [`layer::CaptureLayer`] to a
//! `tracing` subscriber so ordinary `tracing` events land in the buffer,
//! then asserts on [`CaptureProvider::logs`].

pub mod buffer;
pub mod capture;
pub mod error;
pub mod init;
pub mod layer;
pub mod level;
pub mod record;
pub mod render;
pub mod scope;
pub mod settings;
pub mod template;

pub use capture::{CaptureLogger, CaptureProvider, LogEvent};
pub use error::CaptureError;
pub use level::LogLevel;
pub use record::{CapturedError, EventId, LogRecord};
pub use scope::ScopeGuard;
pub use settings::CaptureSettings;
