//! Opt-in debug log file.
//!
//! Opened immediately when the debug-file flag is decoded, before the rest
//! of startup runs, so every later subsystem can append to it. The writer
//! is process-global; the startup core is single-threaded but consumers
//! may log from worker threads later on.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use once_cell::sync::Lazy;

static DEBUG_LOG: Lazy<Mutex<Option<std::fs::File>>> = Lazy::new(|| Mutex::new(None));

/// Open (or create) the debug log for appending.
pub fn open(path: &Path) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("unable to open debug file '{}'", path.display()))?;
    if let Ok(mut slot) = DEBUG_LOG.lock() {
        *slot = Some(file);
    }
    Ok(())
}

/// True once `open` has succeeded.
pub fn is_open() -> bool {
    DEBUG_LOG.lock().map(|slot| slot.is_some()).unwrap_or(false)
}

/// Append one line to the debug log. A no-op when no file is open;
/// write errors are swallowed, debug logging must never take the
/// process down.
pub fn write_line(message: &str) {
    if let Ok(mut slot) = DEBUG_LOG.lock() {
        if let Some(file) = slot.as_mut() {
            let _ = writeln!(file, "{message}");
        }
    }
}
