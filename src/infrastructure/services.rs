use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};
use crate::time_utils::format_log_time;

/// Console logger: browser devtools on wasm, stderr elsewhere.
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }
        let formatted = entry.format_line();

        #[cfg(target_arch = "wasm32")]
        match entry.level {
            LogLevel::Trace | LogLevel::Debug => gloo::console::debug!(formatted),
            LogLevel::Info => gloo::console::info!(formatted),
            LogLevel::Warn => gloo::console::warn!(formatted),
            LogLevel::Error => gloo::console::error!(formatted),
        }

        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("{}", formatted);
    }
}

/// Browser clock backed by `Date`, labels in local time.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub struct BrowserTimeProvider;

#[cfg(target_arch = "wasm32")]
impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_arch = "wasm32")]
impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = js_sys::Date::new(&(timestamp as f64).into());
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds()
        )
    }

    fn clock_label(&self, timestamp: u64) -> String {
        let date = js_sys::Date::new(&(timestamp as f64).into());
        format!("{:02}:{:02}:{:02}", date.get_hours(), date.get_minutes(), date.get_seconds())
    }
}

/// Native clock backed by `SystemTime`, labels in UTC.
#[derive(Debug, Default)]
pub struct SystemTimeProvider;

impl SystemTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TimeProvider for SystemTimeProvider {
    fn current_timestamp(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default()
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format_log_time(timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_past_2020() {
        assert!(SystemTimeProvider::new().current_timestamp() > 1_577_836_800_000);
    }

    #[test]
    fn system_clock_labels_are_hms() {
        let label = SystemTimeProvider.clock_label(45_000);
        assert_eq!(label, "00:00:45");
    }
}
