//! Глобальный logger симуляции
//!
//! Симуляция не знает, кто печатает логи: headless бинарь ставит
//! `ConsoleLogger`, клиент подменяет его своим printer'ом (Bevy tracing).

use once_cell::sync::Lazy;
use std::sync::Mutex;

// Потокобезопасный глобальный printer (None до init_logger / set_logger)
static LOGGER: Lazy<Mutex<Option<Box<dyn LogPrinter>>>> = Lazy::new(|| Mutex::new(None));

static LOGGER_LEVEL: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Debug));

/// Уровень логирования (порядок важен: Debug < Info < Warning < Error)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Куда уходят сообщения (console, Bevy tracing, тестовый буфер)
pub trait LogPrinter: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

pub fn set_logger(logger: Box<dyn LogPrinter>) {
    if let Ok(mut slot) = LOGGER.lock() {
        *slot = Some(logger);
    }
}

pub fn set_logger_if_needed(logger: Box<dyn LogPrinter>) {
    if let Ok(mut slot) = LOGGER.lock() {
        if slot.is_none() {
            *slot = Some(logger);
        }
    }
}

pub fn set_log_level(level: LogLevel) {
    if let Ok(mut current) = LOGGER_LEVEL.lock() {
        *current = level;
    }
}

pub fn log_level() -> LogLevel {
    LOGGER_LEVEL
        .lock()
        .map(|level| *level)
        .unwrap_or(LogLevel::Debug)
}

pub fn log(message: &str) {
    log_with_level(LogLevel::Debug, message);
}

pub fn log_info(message: &str) {
    log_with_level(LogLevel::Info, message);
}

pub fn log_warning(message: &str) {
    log_with_level(LogLevel::Warning, message);
}

pub fn log_error(message: &str) {
    log_with_level(LogLevel::Error, message);
}

pub fn log_with_level(level: LogLevel, message: &str) {
    if level < log_level() {
        return;
    }

    // Timestamp добавляем здесь, printer'ы получают готовую строку
    let Ok(slot) = LOGGER.lock() else {
        return;
    };
    if let Some(logger) = slot.as_ref() {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        logger.log(level, &format!("[{}] {}", timestamp, message));
    }
}

pub struct ConsoleLogger;

impl LogPrinter for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        println!("[{}] {}", level.as_str(), message);
    }
}

pub fn init_logger() {
    set_logger_if_needed(Box::new(ConsoleLogger));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Printer, складывающий сообщения в буфер
    struct CapturingLogger {
        lines: Arc<Mutex<Vec<(LogLevel, String)>>>,
    }

    impl LogPrinter for CapturingLogger {
        fn log(&self, level: LogLevel, message: &str) {
            self.lines.lock().unwrap().push((level, message.to_string()));
        }
    }

    #[test]
    fn test_level_filter_drops_lower_levels() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        set_logger(Box::new(CapturingLogger {
            lines: Arc::clone(&lines),
        }));
        set_log_level(LogLevel::Warning);

        log("debug dropped");
        log_info("info dropped");
        log_warning("warning kept");
        log_error("error kept");

        // Возвращаем глобальное состояние для остальных тестов
        set_log_level(LogLevel::Debug);
        set_logger(Box::new(ConsoleLogger));

        let lines = lines.lock().unwrap();
        let levels: Vec<LogLevel> = lines.iter().map(|(level, _)| *level).collect();
        assert_eq!(levels, vec![LogLevel::Warning, LogLevel::Error]);
        assert!(lines[0].1.ends_with("warning kept"));
        assert!(lines[1].1.ends_with("error kept"));
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_level_names() {
        assert_eq!(LogLevel::Warning.as_str(), "WARNING");
        assert_eq!(LogLevel::Error.as_str(), "ERROR");
    }
}
