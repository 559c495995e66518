use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

pub const PROGRAM_NAME: &str = "lsrs";
pub const PROGRAM_LOG_LEVEL: &str = "LSRS_LOG_LEVEL";

/// Standard opt-out for colored output, see <https://no-color.org>.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Display format for modification times, shared by every renderer.
/// Renders as e.g. `Mon Jan 2 2006`.
pub const MODIFIED_FORMAT: &str = "%a %b %-d %Y";

/// Widest possible rendering of `MODIFIED_FORMAT`.
pub const MODIFIED_WIDTH: usize = 15;

/// Upper bound for any table column before its content wraps.
pub const TABLE_MAX_COLUMN_WIDTH: u16 = 25;

/// Minimum width of the owner and group columns in long listings.
pub const OWNER_MIN_WIDTH: usize = 8;

/// Render a modification time with [`MODIFIED_FORMAT`], or `-` if the
/// platform did not report one.
pub fn format_modified(modified: Option<DateTime<Local>>) -> String {
    match modified {
        Some(ts) => ts.format(MODIFIED_FORMAT).to_string(),
        None => "-".to_owned(),
    }
}

/// Expand a leading `~` to the current user's home directory.
///
/// Only `~` and `~/...` are expanded; `~user` forms and paths without a
/// leading tilde are returned unchanged, as is everything when no home
/// directory is known.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Some(raw) = path.to_str() else {
        return path.to_path_buf();
    };

    let rest = match raw.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') => &rest[1..],
        _ => return path.to_path_buf(),
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

/// Whether the environment asks for colorless output.
pub fn color_disabled_by_env() -> bool {
    std::env::var_os(NO_COLOR_ENV).is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
