//! Error types for the Ticklist persistence core.
//!
//! Repository operations return [`Result`] with a small, typed taxonomy:
//! constraint violations are split out of the generic database error so the
//! UI layer can distinguish "you inserted a duplicate id" from "the disk is
//! broken", and template seeding surfaces a single aggregate error that
//! always implies a full rollback.

use thiserror::Error;

/// Result type alias for Ticklist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the persistence core.
#[derive(Error, Debug)]
pub enum Error {
    /// A primary-key collision or foreign-key violation.
    ///
    /// Surfaced to the caller and never retried by this layer.
    #[error("Constraint violation: {message}")]
    Constraint { message: String },

    /// No static template exists for the requested checklist type.
    ///
    /// `EMPTY` checklists are created through `create_empty`, and `MEETING`
    /// has no template definition.
    #[error("No template defined for checklist type '{kind}'")]
    TemplateNotFound { kind: String },

    /// Template seeding failed part-way; the transaction was rolled back
    /// and no partial checklist was left behind.
    #[error("Seeding template '{template}' failed: {source}")]
    Seed {
        template: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for primary-key / foreign-key violations.
    #[must_use]
    pub const fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint { .. })
    }

    /// Reclassify a rusqlite error, pulling constraint violations out into
    /// [`Error::Constraint`] so callers can match on them.
    #[must_use]
    pub fn from_sqlite(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, msg)
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Self::Constraint {
                    message: msg.clone().unwrap_or_else(|| e.to_string()),
                }
            }
            _ => Self::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_classification() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (id TEXT PRIMARY KEY)")
            .unwrap();
        conn.execute("INSERT INTO t (id) VALUES ('a')", []).unwrap();

        let dup = conn
            .execute("INSERT INTO t (id) VALUES ('a')", [])
            .unwrap_err();
        assert!(Error::from_sqlite(dup).is_constraint());
    }

    #[test]
    fn test_non_constraint_stays_database() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let err = conn.execute("SELECT * FROM missing", []).unwrap_err();
        assert!(!Error::from_sqlite(err).is_constraint());
    }
}
