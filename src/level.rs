use serde::{Deserialize, Serialize};

/// Severity of a captured log record.
///
/// Ordering follows declaration order, so `Trace < Debug < Information <
/// Warning < Error < Critical < None`. `None` is a sentinel meaning "no
/// logging": it can be used as a filter floor that disables everything but is
/// never itself a loggable level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Information,
    Warning,
    Error,
    Critical,
    None,
}

impl LogLevel {
    /// Four-character tag used by the text renderer.
    pub fn tag(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trce",
            LogLevel::Debug => "dbug",
            LogLevel::Information => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "fail",
            LogLevel::Critical => "crit",
            LogLevel::None => "none",
        }
    }

    /// Whether records can exist at this level at all.
    pub fn is_loggable(&self) -> bool {
        !matches!(self, LogLevel::None)
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<tracing::Level> for LogLevel {
    fn from(level: tracing::Level) -> Self {
        if level == tracing::Level::TRACE {
            LogLevel::Trace
        } else if level == tracing::Level::DEBUG {
            LogLevel::Debug
        } else if level == tracing::Level::INFO {
            LogLevel::Information
        } else if level == tracing::Level::WARN {
            LogLevel::Warning
        } else {
            LogLevel::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_by_severity() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Information);
        assert!(LogLevel::Information < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Critical);
        assert!(LogLevel::Critical < LogLevel::None);
    }

    #[test]
    fn none_is_never_loggable() {
        assert!(!LogLevel::None.is_loggable());
        assert!(LogLevel::Critical.is_loggable());
    }

    #[test]
    fn tags_match_console_conventions() {
        assert_eq!(LogLevel::Trace.tag(), "trce");
        assert_eq!(LogLevel::Debug.tag(), "dbug");
        assert_eq!(LogLevel::Information.tag(), "info");
        assert_eq!(LogLevel::Warning.tag(), "warn");
        assert_eq!(LogLevel::Error.tag(), "fail");
        assert_eq!(LogLevel::Critical.tag(), "crit");
        assert_eq!(LogLevel::None.tag(), "none");
    }

    #[test]
    fn tracing_levels_map_onto_capture_levels() {
        assert_eq!(LogLevel::from(tracing::Level::TRACE), LogLevel::Trace);
        assert_eq!(LogLevel::from(tracing::Level::INFO), LogLevel::Information);
        assert_eq!(LogLevel::from(tracing::Level::ERROR), LogLevel::Error);
    }
}
