//! Paths inside the Zellij plugin sandbox.
//!
//! Zellij mounts the host's working directory (usually the home directory)
//! under `/host`.

use std::path::PathBuf;

/// Plugin data directory, home of the trace file.
///
/// Resolves to `~/.local/share/zellij/emerald-shaker` on the host when Zellij
/// was started from the home directory.
///
/// # Examples
///
/// ```
/// use emerald_shaker::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/emerald-shaker");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("emerald-shaker")
}

/// Maps a tilde path from the plugin configuration into the sandbox.
///
/// # Examples
///
/// ```
/// use emerald_shaker::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/bar.toml"), "/host/themes/bar.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/bar.toml"), "/etc/bar.toml");
/// assert_eq!(expand_tilde("~other/bar.toml"), "~other/bar.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}
