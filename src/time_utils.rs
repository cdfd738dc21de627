const MS_PER_SECOND: u64 = 1_000;
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// `HH:MM:SS` of a Unix timestamp in milliseconds, UTC.
///
/// Browser builds prefer local time through `BrowserTimeProvider`; this is
/// the portable fallback.
pub fn format_clock_label(timestamp_ms: u64) -> String {
    let seconds_of_day = (timestamp_ms / MS_PER_SECOND) % SECONDS_PER_DAY;
    format!(
        "{:02}:{:02}:{:02}",
        seconds_of_day / 3600,
        (seconds_of_day / 60) % 60,
        seconds_of_day % 60
    )
}

/// `HH:MM:SS.mmm`, used for log lines.
pub fn format_log_time(timestamp_ms: u64) -> String {
    format!("{}.{:03}", format_clock_label(timestamp_ms), timestamp_ms % MS_PER_SECOND)
}
