use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Metadata, Record};
use std::io::Write;

pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    fn from_record(record: &Record) -> Self {
        Self {
            timestamp: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: format!("{}", record.args()),
        }
    }

    pub fn format(&self) -> String {
        format!(
            "{} {:<5} [{}] {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Logger writing timestamped lines to stderr
pub struct CliLogger {
    level: LevelFilter,
}

impl CliLogger {
    pub fn new(verbose: bool) -> Self {
        Self {
            level: if verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl log::Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let entry = LogEntry::from_record(record);
            // Nothing sensible to do if stderr is gone
            let _ = writeln!(std::io::stderr().lock(), "{}", entry.format());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn test_verbose_enables_debug() {
        let quiet = CliLogger::new(false);
        let verbose = CliLogger::new(true);
        let debug = Metadata::builder().level(Level::Debug).build();
        let warn = Metadata::builder().level(Level::Warn).build();

        assert!(!quiet.enabled(&debug));
        assert!(quiet.enabled(&warn));
        assert!(verbose.enabled(&debug));
    }

    #[test]
    fn test_entry_format() {
        let entry = LogEntry {
            timestamp: Local::now(),
            level: Level::Warn,
            target: "pdf_numbering::layout".to_string(),
            message: "overflow".to_string(),
        };
        let line = entry.format();
        assert!(line.ends_with("WARN  [pdf_numbering::layout] overflow"));
    }
}
