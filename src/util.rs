use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::thread::sleep;
use std::time::Duration;

static INIT_ONCE: std::sync::Once = std::sync::Once::new();

/// Install a stderr fmt subscriber once. `RUST_LOG` wins; otherwise `default_level` is used.
pub fn init_tracing_once(default_level: &str) {
    INIT_ONCE.call_once(|| {
        let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(io::stderr)
            .try_init();
    });
}

/// Map `-v` count to a default filter level.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

const TRIES: usize = 16;
const DELAY_MS: u64 = 50;

/// Transient Windows errors worth retrying: access denied, device not ready,
/// sharing/lock violations, and AV scanners holding a handle.
#[cfg(windows)]
fn is_retriable_io_error(e: &io::Error) -> bool {
    matches!(e.raw_os_error(), Some(5) | Some(21) | Some(32) | Some(33) | Some(225) | Some(1224))
}

// Raw codes above are Windows-only; elsewhere they mean permanent errors (EISDIR, EIO, ...).
#[cfg(not(windows))]
fn is_retriable_io_error(_e: &io::Error) -> bool {
    false
}

fn with_backoff<T>(what: &str, path: &Path, mut op: impl FnMut() -> io::Result<T>) -> io::Result<T> {
    let mut last_err: Option<io::Error> = None;
    for i in 0..TRIES {
        match op() {
            Ok(v) => return Ok(v),
            Err(e) if is_retriable_io_error(&e) => {
                tracing::debug!("{} {} failed (attempt {}): {}", what, path.display(), i + 1, e);
                last_err = Some(e);
                sleep(Duration::from_millis(DELAY_MS.saturating_mul((i + 1) as u64)));
            }
            Err(e) => return Err(e),
        }
    }
    Err(last_err.unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, format!("{what} failed"))))
}

/// Open a file for reading, retrying transient errors.
pub fn open_with_backoff(path: &Path) -> io::Result<File> {
    with_backoff("open", path, || File::open(path))
}

/// Create (truncate) a file, retrying transient errors.
pub fn create_with_backoff(path: &Path) -> io::Result<File> {
    with_backoff("create", path, || File::create(path))
}

/// Remove a file; succeeds if it is already gone.
pub fn remove_with_backoff(path: &Path) -> Result<()> {
    match with_backoff("remove", path, || fs::remove_file(path)) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("remove {}", path.display())),
    }
}

/// Move `tmp` over `dest`. Rename replaces atomically on the same volume;
/// if it fails we fall back to copy + remove.
pub fn replace_file_atomic_backoff(tmp: &Path, dest: &Path) -> Result<()> {
    if with_backoff("rename", tmp, || fs::rename(tmp, dest)).is_ok() {
        return Ok(());
    }
    with_backoff("copy", tmp, || fs::copy(tmp, dest))
        .with_context(|| format!("copy {} -> {}", tmp.display(), dest.display()))?;
    remove_with_backoff(tmp)
}
