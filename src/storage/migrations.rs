//! Additive column migrations for databases created by older app versions.
//!
//! There is no version tracking table: each migration is a single
//! `ALTER TABLE ... ADD COLUMN` re-attempted on every open, and the
//! "duplicate column name" failure is the expected steady state once a
//! database is current. That failure is swallowed at debug level; anything
//! else is logged as a warning and swallowed too, since a missing nullable
//! column degrades features, not startup.

use rusqlite::Connection;
use tracing::{debug, warn};

/// A single additive migration.
struct Migration {
    name: &'static str,
    sql: &'static str,
}

/// All additive migrations, in the order they shipped.
const MIGRATIONS: &[Migration] = &[
    Migration {
        name: "add_checklists_description",
        sql: "ALTER TABLE checklists ADD COLUMN description TEXT",
    },
    Migration {
        name: "add_checklists_icon",
        sql: "ALTER TABLE checklists ADD COLUMN icon TEXT",
    },
    Migration {
        name: "add_items_notifiedAt",
        sql: "ALTER TABLE checklist_items ADD COLUMN notifiedAt INTEGER",
    },
];

/// Attempt every additive migration against an open connection.
///
/// Never fails: duplicate-column errors are the expected outcome on a
/// current database, and other failures are logged and swallowed so a
/// migration problem can never abort startup (table creation already
/// succeeded by the time this runs).
pub fn run_migrations(conn: &Connection) {
    for migration in MIGRATIONS {
        match conn.execute(migration.sql, []) {
            Ok(_) => debug!(name = migration.name, "migration applied"),
            Err(e) if e.to_string().contains("duplicate column name") => {
                debug!(name = migration.name, "column already exists, skipping");
            }
            Err(e) => {
                warn!(name = migration.name, error = %e, "migration failed, continuing");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::schema::{column_exists, TABLES_SQL};

    /// A pre-description-era checklists table, as v1 of the app created it.
    const LEGACY_TABLES_SQL: &str = "
        CREATE TABLE checklists (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            type TEXT NOT NULL,
            status TEXT NOT NULL,
            createdAt INTEGER NOT NULL
        );
        CREATE TABLE checklist_items (
            id TEXT PRIMARY KEY NOT NULL,
            checklistId TEXT NOT NULL,
            topicId TEXT,
            title TEXT NOT NULL,
            isDone INTEGER NOT NULL,
            dueAt INTEGER,
            createdAt INTEGER NOT NULL
        );
    ";

    #[test]
    fn test_migrations_add_columns_to_legacy_db() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(LEGACY_TABLES_SQL).unwrap();

        run_migrations(&conn);

        assert!(column_exists(&conn, "checklists", "description").unwrap());
        assert!(column_exists(&conn, "checklists", "icon").unwrap());
        assert!(column_exists(&conn, "checklist_items", "notifiedAt").unwrap());
    }

    #[test]
    fn test_migrations_are_idempotent_on_current_schema() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(TABLES_SQL).unwrap();

        // Columns already exist in the base DDL; both runs must be no-ops.
        run_migrations(&conn);
        run_migrations(&conn);

        assert!(column_exists(&conn, "checklists", "description").unwrap());
    }
}
