//! Selection Change Port
//!
//! Notification fired after every completed recompute chain, carrying the
//! full ordered selection.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::selection::SelectionDelta;

/// Trait for receiving selection changes
///
/// Implementations can be:
/// - NoopChangeSink: Silent operation
/// - JsonChangeSink: NDJSON stream for scripting
/// - Any `Fn(&SelectionDelta)` closure
pub trait SelectionChangeSink {
    /// Handle one completed change
    fn on_change(&self, delta: &SelectionDelta);
}

impl<F> SelectionChangeSink for F
where
    F: Fn(&SelectionDelta),
{
    fn on_change(&self, delta: &SelectionDelta) {
        self(delta)
    }
}

/// No-op sink for silent operation
pub struct NoopChangeSink;

impl SelectionChangeSink for NoopChangeSink {
    fn on_change(&self, _delta: &SelectionDelta) {
        // Do nothing
    }
}

/// Sink that writes each change as one NDJSON line
pub struct JsonChangeSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonChangeSink {
    /// Create a sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl SelectionChangeSink for JsonChangeSink {
    fn on_change(&self, delta: &SelectionDelta) {
        let event = serde_json::json!({
            "event": "change",
            "ordered": delta.ordered_values(),
            "added": delta.added.iter().map(|r| r.value.as_str()).collect::<Vec<_>>(),
            "removed": delta.removed,
        });
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}
