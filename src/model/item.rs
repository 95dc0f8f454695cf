//! Item model.
//!
//! Items are the leaf entity: a checkable task under a checklist,
//! optionally grouped into a topic and optionally carrying a due date.
//! An item whose topic was deleted keeps its row with `topic_id == None`
//! (orphan), it is never cascaded away with the topic.

use serde::{Deserialize, Serialize};

/// An item row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier (UUID format).
    pub id: String,

    /// Owning checklist. Cascade-deleted with it.
    pub checklist_id: String,

    /// Owning topic, or `None` for an ungrouped/orphan item.
    pub topic_id: Option<String>,

    /// Display title.
    pub title: String,

    /// Completion flag. Stored as 0/1 in SQLite.
    pub is_done: bool,

    /// Due date (Unix milliseconds). Presence makes this item a reminder.
    pub due_at: Option<i64>,

    /// When a notification was delivered for this item. Written by the
    /// notification collaborator, read-only for everyone else.
    pub notified_at: Option<i64>,

    /// Creation timestamp (Unix milliseconds). Immutable.
    pub created_at: i64,
}

impl Item {
    /// Create a new undone item with a fresh id and no due date.
    pub fn new(checklist_id: &str, title: &str) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        let id = format!("itm_{}", &uuid::Uuid::new_v4().simple().to_string()[..12]);

        Self {
            id,
            checklist_id: checklist_id.to_string(),
            topic_id: None,
            title: title.to_string(),
            is_done: false,
            due_at: None,
            notified_at: None,
            created_at: now,
        }
    }

    /// Attach the item to a topic.
    #[must_use]
    pub fn with_topic(mut self, topic_id: &str) -> Self {
        self.topic_id = Some(topic_id.to_string());
        self
    }

    /// Set a due date.
    #[must_use]
    pub fn with_due_at(mut self, due_at: i64) -> Self {
        self.due_at = Some(due_at);
        self
    }
}

/// An upcoming-reminder row: an undone item with a due date, joined with
/// its parent checklist's title for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    #[serde(flatten)]
    pub item: Item,
    pub checklist_title: String,
}

/// Typed partial update for an item.
///
/// Same contract as [`crate::model::ChecklistPatch`]: `None` leaves a column
/// untouched, `Some(None)` on a nullable column writes NULL, and column
/// names are hard-coded per field.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub topic_id: Option<Option<String>>,
    pub is_done: Option<bool>,
    pub due_at: Option<Option<i64>>,
    pub notified_at: Option<Option<i64>>,
}

impl ItemPatch {
    /// True when no field is set; the update is then a no-op.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.topic_id.is_none()
            && self.is_done.is_none()
            && self.due_at.is_none()
            && self.notified_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let i = Item::new("chk_1", "Passport");
        assert!(i.id.starts_with("itm_"));
        assert!(!i.is_done);
        assert!(i.topic_id.is_none());
        assert!(i.due_at.is_none());
        assert!(i.notified_at.is_none());
    }

    #[test]
    fn test_builders() {
        let i = Item::new("chk_1", "Ticket")
            .with_topic("top_9")
            .with_due_at(1_700_000_000_000);
        assert_eq!(i.topic_id.as_deref(), Some("top_9"));
        assert_eq!(i.due_at, Some(1_700_000_000_000));
    }

    #[test]
    fn test_patch_clear_due_date() {
        let patch = ItemPatch {
            due_at: Some(None),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
