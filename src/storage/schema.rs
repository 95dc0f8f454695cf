//! Database schema definitions.
//!
//! Three tables: `checklists`, `checklist_topics`, `checklist_items`.
//! Deleting a checklist cascades to its topics and items; deleting a topic
//! sets `topicId` NULL on its items (orphans survive under the checklist).
//!
//! Timestamps are stored as INTEGER Unix milliseconds. `isDone` is stored
//! as 0/1. Column names keep the original camelCase layout for on-disk
//! compatibility with existing app databases.

use rusqlite::{Connection, Result};
use tracing::warn;

/// Table DDL. Failure here is fatal: the app cannot start without tables.
pub const TABLES_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS checklists (
    id TEXT PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    description TEXT,
    type TEXT NOT NULL,
    status TEXT NOT NULL,
    icon TEXT,
    createdAt INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS checklist_topics (
    id TEXT PRIMARY KEY NOT NULL,
    checklistId TEXT NOT NULL,
    title TEXT NOT NULL,
    "order" INTEGER NOT NULL,
    createdAt INTEGER NOT NULL,
    FOREIGN KEY (checklistId) REFERENCES checklists(id)
        ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS checklist_items (
    id TEXT PRIMARY KEY NOT NULL,
    checklistId TEXT NOT NULL,
    topicId TEXT,
    title TEXT NOT NULL,
    isDone INTEGER NOT NULL,
    dueAt INTEGER,
    notifiedAt INTEGER,
    createdAt INTEGER NOT NULL,
    FOREIGN KEY (checklistId) REFERENCES checklists(id)
        ON DELETE CASCADE,
    FOREIGN KEY (topicId) REFERENCES checklist_topics(id)
        ON DELETE SET NULL
);
"#;

/// Supporting indexes for the list, detail, and reminder queries.
///
/// Applied one statement at a time so a failure in one does not stop the
/// others; index failures degrade performance, not correctness.
pub const INDEXES_SQL: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_topics_checklist ON checklist_topics (checklistId)",
    "CREATE INDEX IF NOT EXISTS idx_items_topic ON checklist_items (topicId)",
    "CREATE INDEX IF NOT EXISTS idx_items_dueAt ON checklist_items (dueAt)",
];

/// Apply pragmas, tables, migrations, and indexes to a fresh connection.
///
/// Idempotent: all DDL uses `IF NOT EXISTS` and migrations swallow the
/// duplicate-column case, so this is safe to call on every open.
///
/// # Errors
///
/// Returns an error only if pragmas or table creation fail; migration and
/// index failures are logged and swallowed.
pub fn apply_schema(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;

    conn.execute_batch(TABLES_SQL)?;

    super::migrations::run_migrations(conn);

    for sql in INDEXES_SQL {
        if let Err(e) = conn.execute(sql, []) {
            warn!(sql, error = %e, "index creation failed, continuing");
        }
    }

    Ok(())
}

/// Check if a column exists in a table.
pub(crate) fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let sql = format!(
        "SELECT 1 FROM pragma_table_info('{table}') WHERE name = ?1"
    );
    conn.prepare(&sql)?.exists([column])
}
