//! SQLite storage implementation.
//!
//! `SqliteStorage` owns the single per-process connection and exposes the
//! repository operations for checklists, topics, and items. Mutations run
//! through the [`SqliteStorage::mutate`] protocol: an IMMEDIATE transaction
//! plus a [`MutationScope`] that collects cache-invalidation keys, which
//! are published to subscribers only after the commit lands.

use std::path::Path;
use std::time::Duration;

use rusqlite::{Connection, OptionalExtension, ToSql, Transaction};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::invalidate::{CacheKey, Notifier};
use crate::model::{
    Checklist, ChecklistPatch, ChecklistStatus, ChecklistType, ChecklistWithProgress, Item,
    ItemPatch, Reminder, Topic,
};
use crate::storage::schema::apply_schema;
use crate::templates;

/// SQLite-based storage backend.
#[derive(Debug)]
pub struct SqliteStorage {
    conn: Connection,
    notifier: Notifier,
}

/// Context for a mutation, tracking which cached reads it staled.
///
/// Passed to mutation closures; collected keys are published through the
/// [`Notifier`] after the transaction commits. A rolled-back mutation
/// publishes nothing.
pub struct MutationScope {
    /// Name of the operation being performed.
    pub op_name: String,
    invalidations: Vec<CacheKey>,
}

impl MutationScope {
    fn new(op_name: &str) -> Self {
        Self {
            op_name: op_name.to_string(),
            invalidations: Vec::new(),
        }
    }

    /// Mark a cached read as stale. Duplicate keys are collapsed.
    pub fn invalidate(&mut self, key: CacheKey) {
        if !self.invalidations.contains(&key) {
            self.invalidations.push(key);
        }
    }

    /// Shorthand for the keys staled whenever item rows change: the
    /// progress list, the owning checklist's detail, and the reminders
    /// feed. Item mutations use this, and so do cascading deletes.
    pub fn invalidate_item_reads(&mut self, checklist_id: &str) {
        self.invalidate(CacheKey::ActiveChecklists);
        self.invalidate(CacheKey::ChecklistDetail(checklist_id.to_string()));
        self.invalidate(CacheKey::Reminders);
    }
}

impl SqliteStorage {
    /// Open a database at the given path, creating it (and parent
    /// directories) if absent, and apply the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or table
    /// creation fails. This is the fatal-at-startup path.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_timeout(path, None)
    }

    /// Open a database with an optional busy timeout (default 5 s).
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or table
    /// creation fails.
    pub fn open_with_timeout(path: &Path, timeout_ms: Option<u64>) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        conn.busy_timeout(Duration::from_millis(timeout_ms.unwrap_or(5000)))?;

        apply_schema(&conn)?;
        Ok(Self {
            conn,
            notifier: Notifier::new(),
        })
    }

    /// Open an in-memory database (for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        apply_schema(&conn)?;
        Ok(Self {
            conn,
            notifier: Notifier::new(),
        })
    }

    /// The invalidation hub read layers subscribe to.
    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Get a reference to the underlying connection (for read operations).
    #[must_use]
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Execute a mutation with the transaction protocol.
    ///
    /// This method:
    /// 1. Begins an IMMEDIATE transaction (write lock up front)
    /// 2. Executes the mutation closure
    /// 3. Commits (or rolls back on error)
    /// 4. Publishes the collected invalidation keys
    ///
    /// # Errors
    ///
    /// Returns the closure's error after rolling back; nothing is
    /// published in that case.
    pub fn mutate<F, R>(&mut self, op: &str, f: F) -> Result<R>
    where
        F: FnOnce(&Transaction, &mut MutationScope) -> Result<R>,
    {
        let keys;
        let result;
        {
            let tx = self
                .conn
                .transaction_with_behavior(rusqlite::TransactionBehavior::Immediate)?;

            let mut scope = MutationScope::new(op);
            result = f(&tx, &mut scope)?;
            tx.commit()?;
            keys = scope.invalidations;
        }

        debug!(op, "mutation committed");
        self.notifier.publish(&keys);
        Ok(result)
    }

    // ====================
    // Checklist Operations
    // ====================

    /// Insert a checklist row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Constraint`] if the id already exists.
    pub fn insert_checklist(&mut self, checklist: &Checklist) -> Result<()> {
        self.mutate("insert_checklist", |tx, scope| {
            insert_checklist_row(tx, checklist)?;
            scope.invalidate(CacheKey::ActiveChecklists);
            scope.invalidate(CacheKey::ChecklistDetail(checklist.id.clone()));
            Ok(())
        })
    }

    /// Create an empty-authored checklist and return its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_empty(&mut self, title: &str) -> Result<String> {
        let checklist = Checklist::new(title);
        let id = checklist.id.clone();
        self.insert_checklist(&checklist)?;
        Ok(id)
    }

    /// All ACTIVE checklists with their item counts, newest first.
    ///
    /// A checklist with zero items yields `total_items == 0`,
    /// `completed_items == 0`. Progress is computed by the caller from the
    /// counts, never stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_active_with_progress(&self) -> Result<Vec<ChecklistWithProgress>> {
        let mut stmt = self.conn.prepare(
            "SELECT
               c.id, c.title, c.description, c.type, c.status, c.icon, c.createdAt,
               COUNT(i.id) AS totalItems,
               COALESCE(SUM(CASE WHEN i.isDone = 1 THEN 1 ELSE 0 END), 0) AS completedItems
             FROM checklists c
             LEFT JOIN checklist_items i ON i.checklistId = c.id
             WHERE c.status = 'ACTIVE'
             GROUP BY c.id
             ORDER BY c.createdAt DESC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(ChecklistWithProgress {
                checklist: checklist_from_row(row)?,
                total_items: row.get(7)?,
                completed_items: row.get(8)?,
            })
        })?;

        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    /// All ACTIVE checklists, full rows, newest first, no aggregation.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_active(&self) -> Result<Vec<Checklist>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, description, type, status, icon, createdAt
             FROM checklists
             WHERE status = 'ACTIVE'
             ORDER BY createdAt DESC",
        )?;
        let rows = stmt.query_map([], checklist_from_row)?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    /// Get a checklist by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_checklist(&self, id: &str) -> Result<Option<Checklist>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, description, type, status, icon, createdAt
             FROM checklists WHERE id = ?1",
        )?;
        Ok(stmt
            .query_row([id], checklist_from_row)
            .optional()?)
    }

    /// Apply a partial update to a checklist.
    ///
    /// Only the patch's set fields are written; `id` and `createdAt` are
    /// not reachable through the patch. An empty patch returns without
    /// touching the database. A missing id is a silent no-op and
    /// publishes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_checklist(&mut self, id: &str, patch: &ChecklistPatch) -> Result<()> {
        if patch.is_empty() {
            return Ok(());
        }
        let status = patch.status.map(|s| s.as_str());

        self.mutate("update_checklist", |tx, scope| {
            let mut sets: Vec<String> = Vec::new();
            let mut params: Vec<&dyn ToSql> = Vec::new();

            if let Some(title) = &patch.title {
                params.push(title);
                sets.push(format!("title = ?{}", params.len()));
            }
            if let Some(description) = &patch.description {
                params.push(description);
                sets.push(format!("description = ?{}", params.len()));
            }
            if let Some(status) = &status {
                params.push(status);
                sets.push(format!("status = ?{}", params.len()));
            }
            if let Some(icon) = &patch.icon {
                params.push(icon);
                sets.push(format!("icon = ?{}", params.len()));
            }

            params.push(&id);
            let sql = format!(
                "UPDATE checklists SET {} WHERE id = ?{}",
                sets.join(", "),
                params.len()
            );
            let changed = tx
                .execute(&sql, params.as_slice())
                .map_err(Error::from_sqlite)?;
            if changed == 0 {
                return Ok(());
            }

            scope.invalidate(CacheKey::ActiveChecklists);
            scope.invalidate(CacheKey::ChecklistDetail(id.to_string()));
            Ok(())
        })
    }

    /// Set a checklist's status to ARCHIVED.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn archive_checklist(&mut self, id: &str) -> Result<()> {
        self.update_checklist(
            id,
            &ChecklistPatch {
                status: Some(ChecklistStatus::Archived),
                ..ChecklistPatch::default()
            },
        )
    }

    /// Delete a checklist; topics and items go with it via cascade.
    /// Because the cascade can delete items with pending due dates, the
    /// reminders feed is staled along with the checklist reads. A
    /// missing id is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn remove_checklist(&mut self, id: &str) -> Result<()> {
        self.mutate("remove_checklist", |tx, scope| {
            tx.execute("DELETE FROM checklists WHERE id = ?1", [id])?;
            scope.invalidate_item_reads(id);
            Ok(())
        })
    }

    // ====================
    // Topic Operations
    // ====================

    /// Topics of a checklist, in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_topics(&self, checklist_id: &str) -> Result<Vec<Topic>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, checklistId, title, \"order\", createdAt
             FROM checklist_topics
             WHERE checklistId = ?1
             ORDER BY \"order\" ASC",
        )?;
        let rows = stmt.query_map([checklist_id], topic_from_row)?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    /// Insert a topic row. The caller assigns `order` (append semantics:
    /// the current topic count of the checklist).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Constraint`] on duplicate id or missing checklist.
    pub fn insert_topic(&mut self, topic: &Topic) -> Result<()> {
        self.mutate("insert_topic", |tx, scope| {
            insert_topic_row(tx, topic)?;
            scope.invalidate(CacheKey::ActiveChecklists);
            scope.invalidate(CacheKey::ChecklistDetail(topic.checklist_id.clone()));
            Ok(())
        })
    }

    /// Rename a topic. A missing id is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn rename_topic(&mut self, id: &str, title: &str) -> Result<()> {
        self.mutate("rename_topic", |tx, scope| {
            let Some(checklist_id) = topic_checklist_id(tx, id)? else {
                return Ok(());
            };
            tx.execute(
                "UPDATE checklist_topics SET title = ?1 WHERE id = ?2",
                rusqlite::params![title, id],
            )?;
            scope.invalidate(CacheKey::ActiveChecklists);
            scope.invalidate(CacheKey::ChecklistDetail(checklist_id));
            Ok(())
        })
    }

    /// Delete a topic. Its items survive with `topicId` nulled by the
    /// ON DELETE SET NULL rule, orphaned under the checklist. A missing
    /// id is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn remove_topic(&mut self, id: &str) -> Result<()> {
        self.mutate("remove_topic", |tx, scope| {
            let Some(checklist_id) = topic_checklist_id(tx, id)? else {
                return Ok(());
            };
            tx.execute("DELETE FROM checklist_topics WHERE id = ?1", [id])?;
            scope.invalidate(CacheKey::ActiveChecklists);
            scope.invalidate(CacheKey::ChecklistDetail(checklist_id));
            Ok(())
        })
    }

    // ====================
    // Item Operations
    // ====================

    /// Items of a checklist, in stable creation order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_items(&self, checklist_id: &str) -> Result<Vec<Item>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, checklistId, topicId, title, isDone, dueAt, notifiedAt, createdAt
             FROM checklist_items
             WHERE checklistId = ?1
             ORDER BY createdAt ASC",
        )?;
        let rows = stmt.query_map([checklist_id], item_from_row)?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    /// The reminders feed: undone items with a due date, soonest first,
    /// joined with their checklist's title.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_upcoming_reminders(&self) -> Result<Vec<Reminder>> {
        let mut stmt = self.conn.prepare(
            "SELECT ci.id, ci.checklistId, ci.topicId, ci.title, ci.isDone,
                    ci.dueAt, ci.notifiedAt, ci.createdAt,
                    c.title AS checklistTitle
             FROM checklist_items ci
             JOIN checklists c ON ci.checklistId = c.id
             WHERE ci.dueAt IS NOT NULL
               AND ci.isDone = 0
             ORDER BY ci.dueAt ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Reminder {
                item: item_from_row(row)?,
                checklist_title: row.get(8)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    /// Insert an item row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Constraint`] on duplicate id, missing checklist,
    /// or dangling topic reference.
    pub fn insert_item(&mut self, item: &Item) -> Result<()> {
        self.mutate("insert_item", |tx, scope| {
            insert_item_row(tx, item)?;
            scope.invalidate_item_reads(&item.checklist_id);
            Ok(())
        })
    }

    /// Flip an item's done flag, stored as 0/1. A missing id is a silent
    /// no-op and creates nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn toggle_done(&mut self, id: &str, is_done: bool) -> Result<()> {
        self.mutate("toggle_done", |tx, scope| {
            let Some(checklist_id) = item_checklist_id(tx, id)? else {
                return Ok(());
            };
            tx.execute(
                "UPDATE checklist_items SET isDone = ?1 WHERE id = ?2",
                rusqlite::params![i64::from(is_done), id],
            )?;
            scope.invalidate_item_reads(&checklist_id);
            Ok(())
        })
    }

    /// Set or clear an item's due date. A missing id is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_due_date(&mut self, id: &str, due_at: Option<i64>) -> Result<()> {
        self.mutate("update_due_date", |tx, scope| {
            let Some(checklist_id) = item_checklist_id(tx, id)? else {
                return Ok(());
            };
            tx.execute(
                "UPDATE checklist_items SET dueAt = ?1 WHERE id = ?2",
                rusqlite::params![due_at, id],
            )?;
            scope.invalidate_item_reads(&checklist_id);
            Ok(())
        })
    }

    /// Record notification delivery, written by the notifier collaborator.
    /// A missing id is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn mark_notified(&mut self, id: &str, notified_at: i64) -> Result<()> {
        self.mutate("mark_notified", |tx, scope| {
            let Some(checklist_id) = item_checklist_id(tx, id)? else {
                return Ok(());
            };
            tx.execute(
                "UPDATE checklist_items SET notifiedAt = ?1 WHERE id = ?2",
                rusqlite::params![notified_at, id],
            )?;
            scope.invalidate_item_reads(&checklist_id);
            Ok(())
        })
    }

    /// Apply a partial update to an item. Same contract as
    /// [`SqliteStorage::update_checklist`]: empty patch returns early,
    /// missing id is a silent no-op, `id`/`checklistId`/`createdAt` are
    /// unreachable through the patch.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_item(&mut self, id: &str, patch: &ItemPatch) -> Result<()> {
        if patch.is_empty() {
            return Ok(());
        }
        let is_done = patch.is_done.map(i64::from);

        self.mutate("update_item", |tx, scope| {
            let Some(checklist_id) = item_checklist_id(tx, id)? else {
                return Ok(());
            };

            let mut sets: Vec<String> = Vec::new();
            let mut params: Vec<&dyn ToSql> = Vec::new();

            if let Some(title) = &patch.title {
                params.push(title);
                sets.push(format!("title = ?{}", params.len()));
            }
            if let Some(topic_id) = &patch.topic_id {
                params.push(topic_id);
                sets.push(format!("topicId = ?{}", params.len()));
            }
            if let Some(is_done) = &is_done {
                params.push(is_done);
                sets.push(format!("isDone = ?{}", params.len()));
            }
            if let Some(due_at) = &patch.due_at {
                params.push(due_at);
                sets.push(format!("dueAt = ?{}", params.len()));
            }
            if let Some(notified_at) = &patch.notified_at {
                params.push(notified_at);
                sets.push(format!("notifiedAt = ?{}", params.len()));
            }

            params.push(&id);
            let sql = format!(
                "UPDATE checklist_items SET {} WHERE id = ?{}",
                sets.join(", "),
                params.len()
            );
            tx.execute(&sql, params.as_slice())
                .map_err(Error::from_sqlite)?;

            scope.invalidate_item_reads(&checklist_id);
            Ok(())
        })
    }

    /// Hard-delete an item. A missing id is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn remove_item(&mut self, id: &str) -> Result<()> {
        self.mutate("remove_item", |tx, scope| {
            let Some(checklist_id) = item_checklist_id(tx, id)? else {
                return Ok(());
            };
            tx.execute("DELETE FROM checklist_items WHERE id = ?1", [id])?;
            scope.invalidate_item_reads(&checklist_id);
            Ok(())
        })
    }

    // ====================
    // Template Seeding
    // ====================

    /// Expand a static template into one checklist, its topics, and their
    /// items as a single transaction, returning the new checklist id.
    ///
    /// Topics get `order` 0..n-1 in template order; items are seeded
    /// undone and without a due date regardless of the template's
    /// `with_reminder` hints. Display strings are materialized through
    /// `resolve` at seed time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateNotFound`] for types without a blueprint,
    /// or [`Error::Seed`] wrapping the cause if any insert fails — in
    /// which case the transaction was rolled back and no partial
    /// checklist exists.
    pub fn seed_from_template(
        &mut self,
        kind: ChecklistType,
        resolve: &dyn Fn(&str) -> String,
    ) -> Result<String> {
        let template = templates::template_for(kind).ok_or_else(|| Error::TemplateNotFound {
            kind: kind.as_str().to_string(),
        })?;

        let checklist = Checklist::new(&resolve(template.title_key))
            .with_kind(kind)
            .with_description(&resolve(template.description_key))
            .with_icon(template.icon);
        let checklist_id = checklist.id.clone();

        let seeded = self.mutate("seed_from_template", |tx, scope| {
            insert_checklist_row(tx, &checklist)?;

            for (idx, topic_def) in template.topics.iter().enumerate() {
                let topic = Topic::new(&checklist_id, &resolve(topic_def.title_key), idx as i64);
                insert_topic_row(tx, &topic)?;

                for item_def in topic_def.items {
                    let item = Item::new(&checklist_id, &resolve(item_def.title_key))
                        .with_topic(&topic.id);
                    insert_item_row(tx, &item)?;
                }
            }

            scope.invalidate(CacheKey::ActiveChecklists);
            scope.invalidate(CacheKey::ChecklistDetail(checklist_id.clone()));
            Ok(())
        });

        match seeded {
            Ok(()) => {
                info!(
                    template = kind.as_str(),
                    checklist_id = %checklist_id,
                    topics = template.topics.len(),
                    items = template.item_count(),
                    "seeded checklist from template"
                );
                Ok(checklist_id)
            }
            Err(e) => Err(Error::Seed {
                template: kind.as_str().to_string(),
                source: Box::new(e),
            }),
        }
    }
}

// ====================
// Row mapping & shared inserts
// ====================

fn checklist_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Checklist> {
    Ok(Checklist {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        kind: ChecklistType::from_str(&row.get::<_, String>(3)?),
        status: ChecklistStatus::from_str(&row.get::<_, String>(4)?),
        icon: row.get(5)?,
        created_at: row.get(6)?,
    })
}

fn topic_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Topic> {
    Ok(Topic {
        id: row.get(0)?,
        checklist_id: row.get(1)?,
        title: row.get(2)?,
        order: row.get(3)?,
        created_at: row.get(4)?,
    })
}

fn item_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        checklist_id: row.get(1)?,
        topic_id: row.get(2)?,
        title: row.get(3)?,
        is_done: row.get::<_, i64>(4)? != 0,
        due_at: row.get(5)?,
        notified_at: row.get(6)?,
        created_at: row.get(7)?,
    })
}

fn insert_checklist_row(conn: &Connection, checklist: &Checklist) -> Result<()> {
    conn.execute(
        "INSERT INTO checklists (id, title, description, type, status, icon, createdAt)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        rusqlite::params![
            checklist.id,
            checklist.title,
            checklist.description,
            checklist.kind.as_str(),
            checklist.status.as_str(),
            checklist.icon,
            checklist.created_at,
        ],
    )
    .map_err(Error::from_sqlite)?;
    Ok(())
}

fn insert_topic_row(conn: &Connection, topic: &Topic) -> Result<()> {
    conn.execute(
        "INSERT INTO checklist_topics (id, checklistId, title, \"order\", createdAt)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![
            topic.id,
            topic.checklist_id,
            topic.title,
            topic.order,
            topic.created_at,
        ],
    )
    .map_err(Error::from_sqlite)?;
    Ok(())
}

fn insert_item_row(conn: &Connection, item: &Item) -> Result<()> {
    conn.execute(
        "INSERT INTO checklist_items
           (id, checklistId, topicId, title, isDone, dueAt, notifiedAt, createdAt)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        rusqlite::params![
            item.id,
            item.checklist_id,
            item.topic_id,
            item.title,
            i64::from(item.is_done),
            item.due_at,
            item.notified_at,
            item.created_at,
        ],
    )
    .map_err(Error::from_sqlite)?;
    Ok(())
}

/// Owning checklist of a topic, or `None` for a missing id.
fn topic_checklist_id(conn: &Connection, topic_id: &str) -> Result<Option<String>> {
    Ok(conn
        .query_row(
            "SELECT checklistId FROM checklist_topics WHERE id = ?1",
            [topic_id],
            |row| row.get(0),
        )
        .optional()?)
}

/// Owning checklist of an item, or `None` for a missing id.
fn item_checklist_id(conn: &Connection, item_id: &str) -> Result<Option<String>> {
    Ok(conn
        .query_row(
            "SELECT checklistId FROM checklist_items WHERE id = ?1",
            [item_id],
            |row| row.get(0),
        )
        .optional()?)
}
