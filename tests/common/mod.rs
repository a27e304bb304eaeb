//! Common test utilities and helpers

use fifoqueue::core::logging::{init_logging, LogFormat};
use std::sync::Once;

static INIT: Once = Once::new();

/// Install a debug-level logger once per test binary
pub fn init_test_logging() {
    INIT.call_once(|| {
        // Only call this once to avoid "logger already initialized" error
        let _ = init_logging(Some("debug"), LogFormat::Ext, None, false);
    });
}
