use crate::config::Config;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use simple_logger::SimpleLogger;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Installs the process-wide log sink. CloudWatch stamps ingestion time, so
/// lines carry no timestamp of their own.
pub fn init(config: &Config) -> Result<(), SetLoggerError> {
    SimpleLogger::new().with_level(config.level_filter()).init()
}

/// Installs a [`MemoryLog`] as the process-wide logger, for local runs that
/// print records instead of shipping them.
pub fn init_memory(filter: LevelFilter) -> Result<&'static MemoryLog, SetLoggerError> {
    let memory: &'static MemoryLog = Box::leak(Box::new(MemoryLog::new(filter)));
    log::set_logger(memory)?;
    log::set_max_level(filter);
    Ok(memory)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for CapturedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<5} [{}] {}", self.level, self.target, self.message)
    }
}

/// Keeps records in memory instead of writing them out.
#[derive(Debug)]
pub struct MemoryLog {
    filter: LevelFilter,
    records: Mutex<Vec<CapturedRecord>>,
}

impl MemoryLog {
    pub fn new(filter: LevelFilter) -> Self {
        MemoryLog {
            filter,
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn records(&self) -> Vec<CapturedRecord> {
        self.lock().clone()
    }

    /// Drains everything captured so far.
    pub fn take(&self) -> Vec<CapturedRecord> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CapturedRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryLog {
    fn default() -> Self {
        MemoryLog::new(LevelFilter::Trace)
    }
}

impl Log for MemoryLog {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.lock().push(CapturedRecord {
            level: record.level(),
            target: record.target().to_owned(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}
