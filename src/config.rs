//! Database path resolution.
//!
//! The core is an in-process library; the embedding app usually opens the
//! single shared database at the platform default location, but may pass
//! an explicit path (tests, previews, migrations of exported data).

use std::path::{Path, PathBuf};

/// Default database location: `~/.ticklist/data/ticklist.db`.
///
/// Returns `None` when no home directory can be determined.
#[must_use]
pub fn default_db_path() -> Option<PathBuf> {
    directories::BaseDirs::new()
        .map(|b| b.home_dir().join(".ticklist").join("data").join("ticklist.db"))
}

/// Resolve the database path, preferring an explicit override.
#[must_use]
pub fn resolve_db_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => default_db_path(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_explicit() {
        let explicit = Path::new("/tmp/custom.db");
        assert_eq!(
            resolve_db_path(Some(explicit)),
            Some(explicit.to_path_buf())
        );
    }

    #[test]
    fn test_default_is_under_home() {
        if let Some(path) = default_db_path() {
            assert!(path.ends_with(".ticklist/data/ticklist.db"));
        }
    }
}
