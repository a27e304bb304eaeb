//! Logging backend for applications and tests using the queue crate
//!
//! The library itself only emits records through the `log` facade. Binaries
//! and test harnesses that want to see them call [`init_logging`], which
//! installs a `flexi_logger` backend with one of three line formats.

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

// Global static logger handle for flexi_logger
static LOGGER_HANDLE: std::sync::OnceLock<std::sync::Mutex<flexi_logger::LoggerHandle>> =
    std::sync::OnceLock::new();

/// Line format written by the logger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Timestamp, level and message
    #[default]
    Text,
    /// Text plus the source location of the record
    Ext,
    /// One compact JSON object per line
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "ext" => Ok(LogFormat::Ext),
            "json" => Ok(LogFormat::Json),
            other => Err(format!(
                "Unknown log format '{}' (expected text, ext or json)",
                other
            )),
        }
    }
}

/// Install the global logger
///
/// Fails if a logger has already been installed for this process.
pub fn init_logging(
    log_level: Option<&str>,
    log_format: LogFormat,
    log_file: Option<&Path>,
    color_enabled: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    use flexi_logger::{FileSpec, Logger};

    let level_str = log_level.unwrap_or("info");
    let mut logger = Logger::try_with_str(level_str)?;

    logger = match (log_format, color_enabled) {
        (LogFormat::Json, _) => logger.format(json_format),
        (LogFormat::Ext, true) => logger.format(extended_color_format),
        (LogFormat::Ext, false) => logger.format(extended_format),
        (LogFormat::Text, true) => logger.format(simple_color_format),
        (LogFormat::Text, false) => logger.format(simple_format),
    };

    if let Some(file_path) = log_file {
        let file_spec = FileSpec::try_from(file_path)?;
        logger = logger.log_to_file(file_spec);
    }

    let handle = logger.start()?;
    let _ = LOGGER_HANDLE.set(std::sync::Mutex::new(handle));

    Ok(())
}

/// Change the active log level at runtime
///
/// Only the level can change; format and output are fixed by [`init_logging`].
pub fn reconfigure_logging(log_level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let handle_mutex = LOGGER_HANDLE
        .get()
        .ok_or("Logger handle not initialised. Call init_logging first.")?;
    let mut handle = handle_mutex
        .lock()
        .map_err(|_| "Could not acquire logger handle lock")?;
    handle.parse_and_push_temp_spec(log_level)?;
    Ok(())
}

fn level_abbr(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    }
}

fn level_colored(level: log::Level) -> colored::ColoredString {
    use colored::*;

    match level {
        log::Level::Error => "ERR".red().bold(),
        log::Level::Warn => "WRN".yellow(),
        log::Level::Info => "INF".green(),
        log::Level::Debug => "DBG".blue(),
        log::Level::Trace => "TRC".magenta(),
    }
}

// Format: "YYYY-MM-DD HH:mm:ss.fff INF message"
fn simple_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} {} {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level_abbr(record.level()),
        record.args()
    )
}

fn simple_color_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use colored::*;

    write!(
        w,
        "{} {} {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f").to_string().dimmed(),
        level_colored(record.level()),
        record.args()
    )
}

// Format: "YYYY-MM-DD HH:mm:ss.fff INF message (queue/bounded.rs:42)"
fn extended_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level_abbr(record.level()),
        record.args(),
        format_target_as_path(record.target(), record.line())
    )
}

fn extended_color_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use colored::*;

    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f").to_string().dimmed(),
        level_colored(record.level()),
        record.args(),
        format_target_as_path(record.target(), record.line()).dimmed()
    )
}

// Ordered: timestamp, level, message, target
fn json_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use serde_json::{json, to_string};

    let json_obj = json!({
        "timestamp": now.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        "level": level_abbr(record.level()),
        "message": record.args().to_string(),
        "target": format_target_as_path(record.target(), record.line())
    });

    match to_string(&json_obj) {
        Ok(json_string) => w.write_all(json_string.as_bytes()),
        Err(_) => w.write_all(b"{\"error\":\"Failed to serialize log message\"}"),
    }
}

// fifoqueue::queue::bounded + line 42 -> queue/bounded.rs:42
fn format_target_as_path(target: &str, line: Option<u32>) -> String {
    let path_like = if let Some(without_prefix) = target.strip_prefix("fifoqueue::") {
        without_prefix.replace("::", "/") + ".rs"
    } else {
        target.replace("::", "/")
    };

    if let Some(line_num) = line {
        format!("{}:{}", path_like, line_num)
    } else {
        path_like
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexi_logger::DeferredNow;

    fn render(
        formatter: fn(
            &mut dyn std::io::Write,
            &mut DeferredNow,
            &log::Record,
        ) -> Result<(), std::io::Error>,
        level: log::Level,
        target: &str,
        line: Option<u32>,
    ) -> String {
        let mut buffer = Vec::new();
        let mut now = DeferredNow::new();
        let record = log::Record::builder()
            .level(level)
            .target(target)
            .line(line)
            .args(format_args!("Queue is full (capacity: 2)"))
            .build();
        formatter(&mut buffer, &mut now, &record).expect("format should succeed");
        String::from_utf8(buffer).expect("Output should be valid UTF-8")
    }

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>(), Ok(LogFormat::Text));
        assert_eq!("EXT".parse::<LogFormat>(), Ok(LogFormat::Ext));
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert!("yaml".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::default(), LogFormat::Text);
    }

    #[test]
    fn test_simple_format_has_level_and_message() {
        let output = render(simple_format, log::Level::Debug, "fifoqueue::queue", None);
        assert!(
            output.contains("DBG Queue is full (capacity: 2)"),
            "Should have 'DBG message' structure, got: {}",
            output
        );
        assert!(!output.contains("queue.rs"), "Text format has no target");
    }

    #[test]
    fn test_extended_format_includes_source_path() {
        let output = render(
            extended_format,
            log::Level::Warn,
            "fifoqueue::queue::bounded",
            Some(42),
        );
        assert!(output.contains("WRN"), "Should contain level abbreviation");
        assert!(
            output.ends_with("(queue/bounded.rs:42)"),
            "Should end with path-like target, got: {}",
            output
        );
    }

    #[test]
    fn test_json_format_is_single_object() {
        let output = render(json_format, log::Level::Info, "fifoqueue::queue", Some(7));
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
        assert_eq!(value["level"], "INF");
        assert_eq!(value["message"], "Queue is full (capacity: 2)");
        assert_eq!(value["target"], "queue.rs:7");
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_format_target_for_external_crate() {
        assert_eq!(format_target_as_path("serde::de", None), "serde/de");
        assert_eq!(
            format_target_as_path("fifoqueue::core::sync", Some(3)),
            "core/sync.rs:3"
        );
    }

    #[test]
    fn test_reconfigure_without_init_fails() {
        // Only meaningful when no other test in this binary installed a logger
        if LOGGER_HANDLE.get().is_none() {
            assert!(reconfigure_logging("debug").is_err());
        }
    }
}
