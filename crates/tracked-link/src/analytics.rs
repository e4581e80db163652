//! Click analytics: the event record and the sink it is handed to.
//!
//! Delivery (batching, retries, transport) belongs to the sink. Links only
//! call [`Analytics::capture_event`] and never look at the outcome.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub action: String,
    pub label: String,
    pub attributes: BTreeMap<String, String>,
}

impl AnalyticsEvent {
    /// A `click` on a link pointing at `to`.
    pub fn click(label: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            action: "click".to_string(),
            label: label.into(),
            attributes: BTreeMap::from([("to".to_string(), to.into())]),
        }
    }
}

/// Receives captured events. Must not block the caller.
pub trait AnalyticsSink: Send + Sync {
    fn capture_event(&self, event: AnalyticsEvent);
}

/// Cloneable handle to a sink, cheap to move into event handlers or
/// `provide_context`.
#[derive(Clone)]
pub struct Analytics(Arc<dyn AnalyticsSink>);

impl Analytics {
    pub fn new(sink: impl AnalyticsSink + 'static) -> Self {
        Self(Arc::new(sink))
    }

    pub fn capture_event(&self, event: AnalyticsEvent) {
        self.0.capture_event(event);
    }
}

impl fmt::Debug for Analytics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Analytics")
    }
}

/// Writes each event as a structured `tracing` record.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn capture_event(&self, event: AnalyticsEvent) {
        let attributes = serde_json::to_string(&event.attributes).unwrap_or_default();
        tracing::info!(
            target: "tracked_link::analytics",
            action = %event.action,
            label = %event.label,
            attributes = %attributes,
            "captured analytics event"
        );
    }
}

/// Logs each event to the browser console as JSON.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

#[cfg(feature = "hydrate")]
impl AnalyticsSink for ConsoleSink {
    fn capture_event(&self, event: AnalyticsEvent) {
        if let Ok(json) = serde_json::to_string(&event) {
            web_sys::console::log_1(&json.into());
        }
    }
}
