//! Path resolution for trivia data files.
//!
//! Provides XDG-compliant path resolution.

use std::env;
use std::path::PathBuf;

/// Get XDG-compliant data directory for trivia.
///
/// # Returns
/// Path to data directory: `$XDG_DATA_HOME/trivia/`, falling back to
/// `~/.local/share/trivia/`, and to `./trivia/` when neither variable is set.
pub fn get_data_dir() -> PathBuf {
    let data_home = env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            env::var("HOME")
                .map(|home| PathBuf::from(home).join(".local/share"))
                .unwrap_or_else(|_| PathBuf::from("."))
        });

    data_home.join("trivia")
}

/// Get database file path (data_dir/trivia.db).
///
/// # Returns
/// Path to database file: `~/.local/share/trivia/trivia.db`
pub fn get_db_path() -> PathBuf {
    get_data_dir().join("trivia.db")
}
