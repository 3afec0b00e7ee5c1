use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};

/// Append-mode file logger, used instead of env_logger when the user
/// passes --log-file so the rendered table stays free of log lines.
pub struct Logger {
    file: Mutex<std::fs::File>,
    max_level: Level,
}

impl Logger {
    pub fn new(log_file: &str, max_level: Level) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)?;

        Ok(Self {
            file: Mutex::new(file),
            max_level,
        })
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = self.file.lock() {
                let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(
                    file,
                    "{} [{}] {}",
                    timestamp,
                    record.level(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

pub fn init(log_file: &str, debug: bool) -> anyhow::Result<()> {
    let max_level = if debug { Level::Debug } else { Level::Info };
    let logger = Logger::new(log_file, max_level)?;
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    Ok(())
}
