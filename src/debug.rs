// File-based diagnostic logging, enabled with --debug.
// The TUI owns the terminal, so diagnostics go to a log file instead of
// stderr.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

const LOG_FILE_PATH: &str = "/tmp/catchpong-debug.log";

/// Set up the log file. With `enabled` false this is a no-op and every
/// later `log` call returns immediately.
pub fn init(enabled: bool) -> io::Result<()> {
    DEBUG_ENABLED.store(enabled, Ordering::Relaxed);

    if !enabled {
        return Ok(());
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(LOG_FILE_PATH)?;

    writeln!(file, "=== catchpong debug log ===")?;
    writeln!(file, "Session started: {:?}", SystemTime::now())?;
    writeln!(file, "To monitor: tail -f {}\n", LOG_FILE_PATH)?;

    Ok(())
}

/// Append `[timestamp] [CATEGORY] message` to the log file.
pub fn log(category: &str, message: &str) {
    if !DEBUG_ENABLED.load(Ordering::Relaxed) {
        return;
    }

    let timestamp = SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE_PATH)
    {
        let _ = writeln!(file, "[{:013}] [{}] {}", timestamp, category, message);
    }
}
