//! Logging backend tests
//!
//! The logger is process global, so every test here runs serially and
//! shares one log directory.

use fifoqueue::core::logging::{init_logging, reconfigure_logging, LogFormat};
use fifoqueue::queue::api::{BoundedQueue, Queue, QueueConfig, UnboundedQueue};
use serial_test::serial;
use std::path::Path;
use std::sync::OnceLock;
use tempfile::TempDir;

static LOG_DIR: OnceLock<TempDir> = OnceLock::new();

fn log_dir() -> &'static Path {
    LOG_DIR
        .get_or_init(|| {
            let dir = TempDir::new().unwrap();
            init_logging(
                Some("debug"),
                LogFormat::Json,
                Some(dir.path().join("queue.log").as_path()),
                false,
            )
            .unwrap();
            dir
        })
        .path()
}

fn logged_text(dir: &Path) -> String {
    let mut text = String::new();
    for entry in std::fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_file() {
            text.push_str(&std::fs::read_to_string(&path).unwrap_or_default());
        }
    }
    text
}

#[test]
#[serial]
fn test_rejected_add_is_logged() {
    let dir = log_dir();

    let queue = BoundedQueue::new(1);
    queue.add(1).unwrap();
    assert!(queue.add(2).is_err());

    let text = logged_text(dir);
    assert!(
        text.contains("Bounded queue full"),
        "expected rejection record in log, got: {}",
        text
    );
    assert!(text.contains("\"level\":\"DBG\""));
}

#[test]
#[serial]
fn test_reconfigure_enables_trace_records() {
    let dir = log_dir();

    let mut queue = UnboundedQueue::new();
    queue.add("x");
    queue.clear();
    assert!(!logged_text(dir).contains("Unbounded queue cleared"));

    reconfigure_logging("trace").unwrap();
    queue.add("y");
    queue.clear();
    reconfigure_logging("debug").unwrap();

    assert!(logged_text(dir).contains("Unbounded queue cleared, discarded 1 values"));
}

#[test]
#[serial]
fn test_second_init_is_rejected() {
    log_dir();
    assert!(init_logging(Some("info"), LogFormat::Text, None, false).is_err());
}

#[test]
#[serial]
fn test_ignored_capacity_warned_once() {
    let dir = log_dir();
    let before = logged_text(dir).matches("Ignoring capacity 3").count();

    let config =
        QueueConfig::from_toml_str("[queue]\nkind = \"unbounded\"\ncapacity = 3\n").unwrap();
    let mut queue = config.build::<u32>().unwrap();
    queue.add(1).unwrap();

    let after = logged_text(dir).matches("Ignoring capacity 3").count();
    assert_eq!(after - before, 1);
}
