use log::{LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

const MAX_BUFFERED: usize = 100;

/// Log lines captured while the alternate screen owns the terminal.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    pub fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() >= MAX_BUFFERED {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }

    pub fn take(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(mut lines) => lines.drain(..).collect(),
            Err(_) => Vec::new(),
        }
    }
}

pub struct UiLogger {
    level: LevelFilter,
    buffer: LogBuffer,
}

impl UiLogger {
    pub fn new(level: LevelFilter) -> (Self, LogBuffer) {
        let buffer = LogBuffer::default();
        (
            Self {
                level,
                buffer: buffer.clone(),
            },
            buffer,
        )
    }
}

impl Log for UiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffer
                .push(format!("{:<5} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

pub fn install(level: LevelFilter) -> anyhow::Result<LogBuffer> {
    let (logger, buffer) = UiLogger::new(level);
    log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(level))
        .map_err(|err| anyhow::anyhow!("install logger: {err}"))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn captures_enabled_records_only() {
        let (logger, buffer) = UiLogger::new(LevelFilter::Info);
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .args(format_args!("round 1 started"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .args(format_args!("drew Ace"))
                .build(),
        );
        assert_eq!(buffer.take(), vec!["INFO  round 1 started".to_string()]);
        assert!(buffer.take().is_empty());
    }

    #[test]
    fn buffer_keeps_the_latest_lines() {
        let buffer = LogBuffer::default();
        for idx in 0..(MAX_BUFFERED + 5) {
            buffer.push(format!("line {idx}"));
        }
        let lines = buffer.take();
        assert_eq!(lines.len(), MAX_BUFFERED);
        assert_eq!(lines.first().map(String::as_str), Some("line 5"));
    }
}
