use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use crate::buffer::CaptureBuffer;
use crate::error::CaptureError;
use crate::level::LogLevel;
use crate::record::{CapturedError, EventId, LogRecord};
use crate::scope::{self, ScopeGuard};
use crate::settings::CaptureSettings;
use crate::template::render_template;

/// Owner of the shared record buffer and capture settings.
///
/// Cloning is cheap and every clone is a view over the same buffer, so a
/// test can hand one clone to the logging pipeline and keep another for
/// assertions. Dropping any or all clones releases nothing external and is
/// always safe.
#[derive(Debug, Clone)]
pub struct CaptureProvider {
    settings: CaptureSettings,
    buffer: Arc<CaptureBuffer>,
}

impl Default for CaptureProvider {
    fn default() -> Self {
        CaptureProvider::new(CaptureSettings::default())
    }
}

impl CaptureProvider {
    pub fn new(settings: CaptureSettings) -> Self {
        let buffer = Arc::new(CaptureBuffer::new(settings.capacity));
        CaptureProvider { settings, buffer }
    }

    pub fn settings(&self) -> &CaptureSettings {
        &self.settings
    }

    /// Create a logger handle bound to `category`.
    ///
    /// Handles are stateless views: two handles for the same category share
    /// the buffer and settings, and creating one has no other side effect.
    ///
    /// **Errors**
    /// - [`CaptureError::EmptyCategory`] if `category` is empty. Validation
    ///   happens before anything else, so a failed call mutates no state.
    pub fn logger(&self, category: &str) -> Result<CaptureLogger, CaptureError> {
        if category.is_empty() {
            return Err(CaptureError::EmptyCategory);
        }
        Ok(CaptureLogger {
            category: category.to_string(),
            settings: self.settings.clone(),
            buffer: Arc::clone(&self.buffer),
        })
    }

    /// Snapshot of all captured records in chronological order.
    pub fn logs(&self) -> Vec<LogRecord> {
        self.buffer.snapshot(None, None)
    }

    /// Snapshot of records matching a category (ASCII case-insensitive exact
    /// match) and/or a level floor. Both filters AND together; `None` means
    /// "don't filter on this axis".
    pub fn logs_matching(
        &self,
        category: Option<&str>,
        floor: Option<LogLevel>,
    ) -> Vec<LogRecord> {
        self.buffer.snapshot(category, floor)
    }

    /// Discard every captured record. Settings and capacity are unchanged;
    /// calling this on an already-empty buffer is a no-op.
    pub fn clear(&self) {
        self.buffer.clear();
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub(crate) fn append(&self, record: LogRecord) {
        self.buffer.push(record);
    }
}

/// A single log call under construction: level, message template and
/// optional attachments.
#[derive(Debug, Clone)]
pub struct LogEvent {
    level: LogLevel,
    event_id: EventId,
    template: String,
    args: Vec<Value>,
    error: Option<CapturedError>,
    state: Option<BTreeMap<String, Value>>,
}

impl LogEvent {
    pub fn new(level: LogLevel, template: impl Into<String>) -> Self {
        LogEvent {
            level,
            event_id: EventId::default(),
            template: template.into(),
            args: Vec::new(),
            error: None,
            state: None,
        }
    }

    /// Append one positional template argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Append several positional template arguments.
    pub fn args<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.args.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn event_id(mut self, event_id: EventId) -> Self {
        self.event_id = event_id;
        self
    }

    pub fn error(mut self, error: CapturedError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn state(mut self, state: BTreeMap<String, Value>) -> Self {
        self.state = Some(state);
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }
}

/// Category-bound facade over the capture provider.
#[derive(Debug, Clone)]
pub struct CaptureLogger {
    category: String,
    settings: CaptureSettings,
    buffer: Arc<CaptureBuffer>,
}

impl CaptureLogger {
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Whether a record at `level` would be captured right now. Runs
    /// unlocked against the immutable settings.
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.settings.accepts(&self.category, level)
    }

    /// Record one log event.
    ///
    /// Disabled levels are a full no-op: the message template is never
    /// rendered and the buffer is untouched. Otherwise the record is built
    /// completely (message, scopes, timestamp) before the single append, so
    /// the buffer either gains the whole record or nothing.
    pub fn log(&self, event: LogEvent) {
        if !self.enabled(event.level) {
            return;
        }

        let message = render_template(&event.template, &event.args);
        let record = LogRecord {
            timestamp: Utc::now(),
            level: event.level,
            event_id: event.event_id,
            category: self.category.clone(),
            message,
            error: event.error,
            state: event.state,
            scopes: scope::active(),
        };
        self.buffer.push(record);
    }

    /// Push a contextual value onto this thread's scope stack.
    ///
    /// Every record logged while the returned guard is alive captures the
    /// value, across all loggers on the thread. Dropping the guard pops the
    /// entry exactly once.
    pub fn begin_scope(&self, value: impl Into<Value>) -> ScopeGuard {
        scope::push(value.into())
    }

    pub fn trace(&self, template: &str) {
        self.log(LogEvent::new(LogLevel::Trace, template));
    }

    pub fn debug(&self, template: &str) {
        self.log(LogEvent::new(LogLevel::Debug, template));
    }

    pub fn info(&self, template: &str) {
        self.log(LogEvent::new(LogLevel::Information, template));
    }

    pub fn warn(&self, template: &str) {
        self.log(LogEvent::new(LogLevel::Warning, template));
    }

    pub fn error(&self, template: &str) {
        self.log(LogEvent::new(LogLevel::Error, template));
    }

    pub fn critical(&self, template: &str) {
        self.log(LogEvent::new(LogLevel::Critical, template));
    }
}
