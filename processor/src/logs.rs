//! Leveled console logging for the pipeline.
//!
//! Entries go to stderr so stdout stays free for `inspect` output.
//! A single process-wide [`Logger`] can be silenced with [`set_quiet`];
//! errors are printed regardless.

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, Ordering};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting level for sub-steps
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Render the entry as a console line.
    pub fn render(&self) -> String {
        let prefix = match self.level {
            LogLevel::Info => "   ",
            LogLevel::Success => "   ✓",
            LogLevel::Warning => "   ⚠️",
            LogLevel::Error => "   ❌",
        };
        let indent = "   ".repeat(self.indent as usize);
        format!("{}{} {}", indent, prefix, self.message)
    }
}

/// Global logger
pub static LOGGER: Lazy<Logger> = Lazy::new(Logger::new);

/// Writes log entries to stderr unless silenced.
pub struct Logger {
    quiet: AtomicBool,
}

impl Logger {
    pub fn new() -> Self {
        Self { quiet: AtomicBool::new(false) }
    }

    pub fn log(&self, entry: LogEntry) {
        if self.should_emit(entry.level) {
            eprintln!("{}", entry.render());
        }
    }

    /// Quiet mode drops everything but errors.
    pub fn should_emit(&self, level: LogLevel) -> bool {
        level == LogLevel::Error || !self.is_quiet()
    }

    pub fn set_quiet(&self, quiet: bool) {
        self.quiet.store(quiet, Ordering::Relaxed);
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet.load(Ordering::Relaxed)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Silence (or restore) all pipeline logging.
pub fn set_quiet(quiet: bool) {
    LOGGER.set_quiet(quiet);
}

pub fn log_info(msg: impl Into<String>) {
    LOGGER.log(LogEntry::info(msg));
}

pub fn log_success(msg: impl Into<String>) {
    LOGGER.log(LogEntry::success(msg));
}

pub fn log_warning(msg: impl Into<String>) {
    LOGGER.log(LogEntry::warning(msg));
}

pub fn log_error(msg: impl Into<String>) {
    LOGGER.log(LogEntry::error(msg));
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    LOGGER.log(LogEntry::info(msg).with_indent(indent));
}

pub fn log_warning_indent(msg: impl Into<String>, indent: u8) {
    LOGGER.log(LogEntry::warning(msg).with_indent(indent));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_indent_and_prefix() {
        let line = LogEntry::success("Read 3 rows").with_indent(1).render();
        assert!(line.starts_with("   "));
        assert!(line.contains("✓"));
        assert!(line.ends_with("Read 3 rows"));
    }

    #[test]
    fn test_quiet_toggle() {
        let logger = Logger::new();
        assert!(!logger.is_quiet());
        logger.set_quiet(true);
        assert!(logger.is_quiet());
        assert!(!logger.should_emit(LogLevel::Info));
        assert!(!logger.should_emit(LogLevel::Warning));
    }

    #[test]
    fn test_quiet_keeps_errors() {
        let logger = Logger::new();
        logger.set_quiet(true);
        assert!(logger.should_emit(LogLevel::Error));

        let line = LogEntry::error("Input file not found").render();
        assert!(line.contains("❌"));
        assert!(line.ends_with("Input file not found"));
    }
}
