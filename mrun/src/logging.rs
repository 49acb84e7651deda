use std::sync::OnceLock;

use log::{LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<CliLogger> = OnceLock::new();

/// Installs the stderr sink. Safe to call once, before any log macro fires.
pub fn init(level: LevelFilter) {
    let logger = LOGGER.get_or_init(|| CliLogger { level });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

struct CliLogger {
    level: LevelFilter,
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{}] {}: {}",
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}
