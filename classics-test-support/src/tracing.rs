//! A recording layer for asserting spans and events in tests.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Layer that keeps every closed span and emitted event for later inspection.
///
/// Clones share the same store, so a test keeps one handle and installs the
/// other in a subscriber.
///
/// # Examples
/// ```
/// use classics_test_support::tracing::RecordingLayer;
/// use tracing_subscriber::layer::SubscriberExt;
///
/// let layer = RecordingLayer::default();
/// let subscriber = tracing_subscriber::registry().with(layer.clone());
/// tracing::subscriber::with_default(subscriber, || {
///     let _span = tracing::info_span!("demo.span", size = 3).entered();
///     tracing::info!(answer = 42, "finished");
/// });
///
/// assert!(layer.has_event("finished"));
/// let span = layer.span_named("demo.span").expect("span recorded");
/// assert_eq!(span.fields.get("size"), Some(&"3".to_owned()));
/// ```
#[derive(Clone, Default)]
pub struct RecordingLayer {
    store: Arc<Mutex<Store>>,
}

#[derive(Default)]
struct Store {
    spans: Vec<SpanRecord>,
    events: Vec<EventRecord>,
}

/// A closed span with the fields recorded while it was open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanRecord {
    /// Span name from its metadata.
    pub name: String,
    /// Field values rendered as strings.
    pub fields: HashMap<String, String>,
}

/// An emitted event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Event level.
    pub level: Level,
    /// Event target, usually the emitting module path.
    pub target: String,
    /// Field values rendered as strings; the message lives under `message`.
    pub fields: HashMap<String, String>,
}

impl EventRecord {
    /// Returns the event's message, if it carried one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.fields.get("message").map(String::as_str)
    }
}

impl RecordingLayer {
    fn store(&self) -> MutexGuard<'_, Store> {
        // A panicking test may poison the lock; the records are still usable.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Closed spans in completion order.
    #[must_use]
    pub fn spans(&self) -> Vec<SpanRecord> {
        self.store().spans.clone()
    }

    /// Events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<EventRecord> {
        self.store().events.clone()
    }

    /// Returns the first closed span called `name`.
    #[must_use]
    pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
        self.store().spans.iter().find(|span| span.name == name).cloned()
    }

    /// Returns the first event whose message equals `message`.
    #[must_use]
    pub fn event_with_message(&self, message: &str) -> Option<EventRecord> {
        self.store()
            .events
            .iter()
            .find(|event| event.message() == Some(message))
            .cloned()
    }

    /// Reports whether any event carried `message`.
    #[must_use]
    pub fn has_event(&self, message: &str) -> bool {
        self.event_with_message(message).is_some()
    }
}

/// Per-span scratch data kept in the registry until the span closes.
struct OpenSpan(SpanRecord);

impl<S> Layer<S> for RecordingLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut record = SpanRecord {
            name: attrs.metadata().name().to_owned(),
            fields: HashMap::new(),
        };
        attrs.record(&mut FieldCollector(&mut record.fields));
        span.extensions_mut().insert(OpenSpan(record));
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        if let Some(OpenSpan(record)) = span.extensions_mut().get_mut::<OpenSpan>() {
            values.record(&mut FieldCollector(&mut record.fields));
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        let closed = span.extensions_mut().remove::<OpenSpan>();
        if let Some(OpenSpan(record)) = closed {
            self.store().spans.push(record);
        }
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut FieldCollector(&mut fields));
        let metadata = event.metadata();
        self.store().events.push(EventRecord {
            level: *metadata.level(),
            target: metadata.target().to_owned(),
            fields,
        });
    }
}

/// Renders field values: strings verbatim, everything else via `Debug`.
struct FieldCollector<'a>(&'a mut HashMap<String, String>);

impl Visit for FieldCollector<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{value:?}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn records_span_fields_including_late_values() {
        let layer = RecordingLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        tracing::subscriber::with_default(subscriber, || {
            let span = tracing::debug_span!("outer", items = 2_u64, total = tracing::field::Empty);
            span.record("total", 7.5_f64);
        });

        let span = layer.span_named("outer").expect("span must close");
        assert_eq!(span.fields.get("items"), Some(&"2".to_owned()));
        assert_eq!(span.fields.get("total"), Some(&"7.5".to_owned()));
    }

    #[test]
    fn records_event_level_and_message() {
        let layer = RecordingLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(label = "x", "something odd");
        });

        let event = layer
            .event_with_message("something odd")
            .expect("event must be recorded");
        assert_eq!(event.level, Level::WARN);
        assert_eq!(event.fields.get("label"), Some(&"x".to_owned()));
        assert!(!layer.has_event("never emitted"));
        assert_eq!(layer.events().len(), 1);
    }
}
