use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV_VAR: &str = "WONDERFLUFF_LOG";

/// Send wonderfluff's tracing output to the file named by `WONDERFLUFF_LOG`.
///
/// Does nothing when the variable is unset, since the TUI owns the terminal.
/// `RUST_LOG` filters as usual (default `info`). Returns the file actually
/// written, which carries a `.{timestamp}.{pid}` suffix.
pub fn init_tracing() -> Option<PathBuf> {
    let base = std::env::var_os(LOG_ENV_VAR)?;
    let path = session_log_path(Path::new(&base), std::process::id());

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: cannot create log file {}: {}", path.display(), err);
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
    Some(path)
}

fn session_log_path(base: &Path, pid: u32) -> PathBuf {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}
