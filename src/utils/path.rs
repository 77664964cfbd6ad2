//! Path utilities for user-supplied file arguments.

use std::path::PathBuf;

/// Expand a leading `~/` to the home directory, so `--config ~/x.conf`
/// works even when the shell did not expand it.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}
