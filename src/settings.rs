use std::fmt;
use std::sync::Arc;

use crate::level::LogLevel;

/// Predicate deciding whether a `(category, level)` pair should be captured.
pub type CategoryFilter = Arc<dyn Fn(&str, LogLevel) -> bool + Send + Sync>;

/// Configuration of the capture provider, immutable after construction.
///
/// **Fields**
/// - `minimum_level`: inclusive severity floor; records below it are never
///   constructed, let alone stored.
/// - `capacity`: maximum number of retained records; the oldest record is
///   evicted first once the buffer is full.
/// - `category_filter`: optional predicate consulted after the level floor;
///   absent means accept everything.
#[derive(Clone)]
pub struct CaptureSettings {
    pub minimum_level: LogLevel,
    pub capacity: usize,
    pub category_filter: Option<CategoryFilter>,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        CaptureSettings {
            minimum_level: LogLevel::Debug,
            capacity: 1024,
            category_filter: None,
        }
    }
}

impl CaptureSettings {
    pub fn new() -> Self {
        CaptureSettings::default()
    }

    pub fn with_minimum_level(mut self, level: LogLevel) -> Self {
        self.minimum_level = level;
        self
    }

    /// Set the buffer capacity. Zero is a degenerate config and is clamped
    /// to one record.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    pub fn with_category_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&str, LogLevel) -> bool + Send + Sync + 'static,
    {
        self.category_filter = Some(Arc::new(filter));
        self
    }

    /// The single acceptance decision shared by logger handles and the
    /// pipeline layer. Runs unlocked; settings never change after
    /// construction.
    pub fn accepts(&self, category: &str, level: LogLevel) -> bool {
        if !level.is_loggable() {
            return false;
        }
        if level < self.minimum_level {
            return false;
        }
        match &self.category_filter {
            Some(filter) => filter(category, level),
            None => true,
        }
    }
}

impl fmt::Debug for CaptureSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureSettings")
            .field("minimum_level", &self.minimum_level)
            .field("capacity", &self.capacity)
            .field(
                "category_filter",
                &self.category_filter.as_ref().map(|_| "<filter>"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_debug_floor_and_1024_capacity() {
        let settings = CaptureSettings::default();
        assert_eq!(settings.minimum_level, LogLevel::Debug);
        assert_eq!(settings.capacity, 1024);
        assert!(settings.category_filter.is_none());
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let settings = CaptureSettings::new().with_capacity(0);
        assert_eq!(settings.capacity, 1);
    }

    #[test]
    fn accepts_applies_floor_then_filter() {
        let settings = CaptureSettings::new()
            .with_minimum_level(LogLevel::Information)
            .with_category_filter(|category, _| category != "noisy");

        assert!(!settings.accepts("app", LogLevel::Debug));
        assert!(settings.accepts("app", LogLevel::Warning));
        assert!(!settings.accepts("noisy", LogLevel::Error));
    }

    #[test]
    fn none_level_is_always_rejected() {
        let settings = CaptureSettings::new().with_minimum_level(LogLevel::Trace);
        assert!(!settings.accepts("app", LogLevel::None));
    }
}
