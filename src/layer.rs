use chrono::Utc;
use std::collections::BTreeMap;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::capture::CaptureProvider;
use crate::level::LogLevel;
use crate::record::{EventId, LogRecord};
use crate::scope;

/// `tracing_subscriber` layer that mirrors events into a [`CaptureProvider`].
///
/// The event target becomes the record category and the remaining event
/// fields become the record's `state` payload. The layer applies the same
/// acceptance decision as a logger handle, so a level or category the
/// provider filters out never reaches the buffer. Appends are synchronous:
/// the whole pipeline is in-memory list manipulation, nothing to decouple
/// from the caller.
pub struct CaptureLayer {
    provider: CaptureProvider,
}

impl CaptureLayer {
    pub fn new(provider: CaptureProvider) -> Self {
        CaptureLayer { provider }
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_event(&self, event: &Event, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let level = LogLevel::from(*meta.level());
        let category = meta.target();
        if !self.provider.settings().accepts(category, level) {
            return;
        }

        let mut fields = BTreeMap::new();
        let mut message: Option<String> = None;
        let mut visitor = FieldVisitor {
            fields: &mut fields,
            message: &mut message,
        };
        event.record(&mut visitor);

        let record = LogRecord {
            timestamp: Utc::now(),
            level,
            event_id: EventId::default(),
            category: category.to_string(),
            message: message.unwrap_or_default(),
            error: None,
            state: if fields.is_empty() {
                None
            } else {
                Some(fields)
            },
            scopes: scope::active(),
        };

        self.provider.append(record);
    }
}

use tracing::field::{Field, Visit};

/// Pulls the `message` field out of a tracing event and collects every other
/// field into a JSON map.
struct FieldVisitor<'a> {
    fields: &'a mut BTreeMap<String, serde_json::Value>,
    message: &'a mut Option<String>,
}

impl<'a> Visit for FieldVisitor<'a> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            *self.message = Some(value.to_string());
        } else {
            self.fields.insert(
                field.name().to_string(),
                serde_json::Value::String(value.to_string()),
            );
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.message = Some(format!("{:?}", value));
        } else {
            self.fields.insert(
                field.name().to_string(),
                serde_json::Value::String(format!("{:?}", value)),
            );
        }
    }
}
