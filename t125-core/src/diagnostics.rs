//! Injectable diagnostic sink
//!
//! Decoders report anomalous but tolerated values (for example a constrained
//! integer with an unexpected width) through a [`DiagnosticSink`] instead of
//! a process-wide logger. The default sink discards everything, so codec
//! users need no global initialization.
//!
//! # Usage Example
//!
//! ```rust
//! use std::sync::Arc;
//! use t125_core::{DiagnosticSink, LogSink};
//!
//! let sink: Arc<dyn DiagnosticSink> = Arc::new(LogSink::default());
//! sink.trace(format_args!("decode_integer: unexpected length {}", 3));
//! ```

pub use log::Level;

use std::fmt;

/// Target used by [`LogSink`] when no other target is given
pub const DEFAULT_TARGET: &str = "t125_per";

/// Leveled message sink used for diagnostic tracing
///
/// Emission is fire-and-forget: implementations must not block for long and
/// cannot fail the decode that reported the message.
pub trait DiagnosticSink: Send + Sync {
    /// Whether messages at `level` would be recorded
    fn enabled(&self, level: Level) -> bool;

    /// Record a message at `level`
    fn emit(&self, level: Level, message: &str);
}

impl dyn DiagnosticSink {
    /// Format and emit `args` if `level` is enabled
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            self.emit(level, &args.to_string());
        }
    }

    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Trace, args);
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }
}

/// Sink that discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn enabled(&self, _level: Level) -> bool {
        false
    }

    fn emit(&self, _level: Level, _message: &str) {}
}

/// Sink that forwards to the `log` facade
///
/// Whatever logger the application installed decides filtering and output;
/// the level filter here only adds an upper bound on top of it.
#[derive(Debug, Clone)]
pub struct LogSink {
    target: &'static str,
    max_level: Level,
}

impl LogSink {
    /// Create a sink logging under `target` up to `max_level` (inclusive)
    pub fn new(target: &'static str, max_level: Level) -> Self {
        Self { target, max_level }
    }

    /// Get the log target
    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET, Level::Trace)
    }
}

impl DiagnosticSink for LogSink {
    fn enabled(&self, level: Level) -> bool {
        level <= self.max_level && log::log_enabled!(target: self.target, level)
    }

    fn emit(&self, level: Level, message: &str) {
        log::log!(target: self.target, level, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{LevelFilter, Log, Metadata, Record};
    use std::sync::{Arc, Mutex};

    struct CaptureLogger {
        records: Mutex<Vec<(String, Level, String)>>,
    }

    impl Log for CaptureLogger {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            self.records.lock().unwrap().push((
                record.target().to_string(),
                record.level(),
                record.args().to_string(),
            ));
        }

        fn flush(&self) {}
    }

    static CAPTURE: CaptureLogger = CaptureLogger {
        records: Mutex::new(Vec::new()),
    };

    #[derive(Default)]
    struct RecordingSink {
        max_level: Option<Level>,
        messages: Mutex<Vec<(Level, String)>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn enabled(&self, level: Level) -> bool {
            self.max_level.is_some_and(|max| level <= max)
        }

        fn emit(&self, level: Level, message: &str) {
            self.messages.lock().unwrap().push((level, message.to_string()));
        }
    }

    #[test]
    fn test_noop_sink_is_disabled() {
        let sink = NoopSink;
        assert!(!sink.enabled(Level::Error));
        assert!(!sink.enabled(Level::Trace));
    }

    #[test]
    fn test_helpers_respect_level() {
        let recording = Arc::new(RecordingSink {
            max_level: Some(Level::Info),
            ..Default::default()
        });
        let sink: Arc<dyn DiagnosticSink> = recording.clone();

        sink.trace(format_args!("dropped"));
        sink.warn(format_args!("kept {}", 1));

        let messages = recording.messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0], (Level::Warn, "kept 1".to_string()));
    }

    #[test]
    fn test_log_sink_defaults() {
        let sink = LogSink::default();
        assert_eq!(sink.target(), DEFAULT_TARGET);
    }

    #[test]
    fn test_log_sink_forwards_to_logger() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LevelFilter::Trace);

        let sink: Arc<dyn DiagnosticSink> = Arc::new(LogSink::new(DEFAULT_TARGET, Level::Debug));
        sink.debug(format_args!("forwarded length {}", 0x80));
        sink.trace(format_args!("above the sink limit"));

        let records = CAPTURE.records.lock().unwrap();
        assert!(records.contains(&(
            DEFAULT_TARGET.to_string(),
            Level::Debug,
            "forwarded length 128".to_string()
        )));
        assert!(!records.iter().any(|(_, _, message)| message == "above the sink limit"));
    }
}
