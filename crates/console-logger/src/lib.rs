//! Console Logger
//!
//! A `tracing_subscriber` layer for WASM frontends. Every event is written to
//! the browser console (stderr on native targets) and the most recent lines
//! are kept in a circular buffer.

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Errors raised while installing the logger
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled(#[from] TryInitError),
}

/// Logger settings
#[derive(Debug, Clone, Copy)]
pub struct LoggerConfig {
    /// Most verbose level that gets through
    pub level: LevelFilter,
    /// Number of lines kept in the history buffer
    pub capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: if cfg!(debug_assertions) { LevelFilter::DEBUG } else { LevelFilter::INFO },
            capacity: 256,
        }
    }
}

/// Shared circular buffer of formatted log lines
#[derive(Debug, Clone)]
pub struct LogHistory {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        let mut lines = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Snapshot of the buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Layer writing events to the console and into a [`LogHistory`]
#[derive(Debug, Clone)]
pub struct ConsoleLayer {
    history: LogHistory,
}

impl ConsoleLayer {
    pub fn new(capacity: usize) -> Self {
        Self { history: LogHistory::new(capacity) }
    }

    pub fn history(&self) -> LogHistory {
        self.history.clone()
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let line = format_event(event);
        emit(event.metadata().level(), &line);
        self.history.push(line);
    }
}

/// Install a global subscriber with a [`ConsoleLayer`]
///
/// Returns the history handle of the installed layer.
pub fn init(config: LoggerConfig) -> Result<LogHistory, LoggerError> {
    let layer = ConsoleLayer::new(config.capacity);
    let history = layer.history();
    tracing_subscriber::registry()
        .with(config.level)
        .with(layer)
        .try_init()?;
    Ok(history)
}

fn format_event(event: &Event<'_>) -> String {
    let meta = event.metadata();
    let mut visitor = MessageVisitor::default();
    event.record(&mut visitor);
    format!(
        "{} {:>5} {}: {}",
        Utc::now().format("%H:%M:%S%.3f"),
        meta.level().as_str(),
        meta.target(),
        visitor.finish()
    )
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        self.message + &self.fields
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: &Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    if *level == Level::ERROR {
        web_sys::console::error_1(&value);
    } else if *level == Level::WARN {
        web_sys::console::warn_1(&value);
    } else if *level == Level::INFO {
        web_sys::console::info_1(&value);
    } else {
        web_sys::console::debug_1(&value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: &Level, line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, info, warn};

    #[test]
    fn test_history_keeps_latest_lines() {
        let layer = ConsoleLayer::new(2);
        let history = layer.history();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            info!("first");
            info!("second");
            warn!(count = 3, "third");
        });

        let lines = history.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("second"));
        assert!(lines[1].contains("WARN"));
        assert!(lines[1].ends_with("third count=3"));
    }

    #[test]
    fn test_level_filter_drops_verbose_events() {
        let layer = ConsoleLayer::new(8);
        let history = layer.history();
        let subscriber = tracing_subscriber::registry()
            .with(LevelFilter::INFO)
            .with(layer);

        tracing::subscriber::with_default(subscriber, || {
            debug!("hidden");
            info!("shown");
        });

        assert_eq!(history.len(), 1);
        assert!(history.lines()[0].ends_with("shown"));
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let layer = ConsoleLayer::new(0);
        let history = layer.history();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || info!("dropped"));

        assert!(history.is_empty());
        assert_eq!(history.capacity(), 0);
    }

    #[test]
    fn test_line_includes_target() {
        let layer = ConsoleLayer::new(1);
        let history = layer.history();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            info!(target: "storefront::cart", "added");
        });

        assert!(history.lines()[0].contains("storefront::cart: added"));
    }
}
