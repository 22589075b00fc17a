//! Debug logging to a file
//!
//! Terminal output belongs to the TUI, so log records go to a file under the
//! user's cache directory. Release builds do not install a logger at all.

use std::path::PathBuf;

const LOG_DIR: &str = "textarea-mentions";
const LOG_FILE: &str = "debug.log";

/// Where debug builds write their log
pub fn log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_DIR)
        .join(LOG_FILE)
}

/// Install the file logger. Returns the log path when logging is active.
///
/// `RUST_LOG` overrides the default `debug` filter.
#[cfg(debug_assertions)]
pub fn init() -> Option<PathBuf> {
    use std::fs::{self, OpenOptions};
    use std::io::Write;

    let path = log_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .ok()?;

    Some(path)
}

#[cfg(not(debug_assertions))]
pub fn init() -> Option<PathBuf> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_is_namespaced() {
        let path = log_path();
        assert!(path.ends_with("textarea-mentions/debug.log"));
    }
}
