//! Topic model.
//!
//! Topics group items inside a checklist and carry a display order.
//! Order values are assigned densely at insertion time (append semantics)
//! and never renumbered on delete, so gaps are permitted.

use serde::{Deserialize, Serialize};

/// A topic row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Unique identifier (UUID format).
    pub id: String,

    /// Owning checklist. Cascade-deleted with it.
    pub checklist_id: String,

    /// Display title.
    pub title: String,

    /// Zero-based display position within the checklist.
    pub order: i64,

    /// Creation timestamp (Unix milliseconds). Immutable.
    pub created_at: i64,
}

impl Topic {
    /// Create a new topic with a fresh id.
    ///
    /// `order` should be the current topic count of the checklist
    /// (append semantics).
    pub fn new(checklist_id: &str, title: &str, order: i64) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        let id = format!("top_{}", &uuid::Uuid::new_v4().simple().to_string()[..12]);

        Self {
            id,
            checklist_id: checklist_id.to_string(),
            title: title.to_string(),
            order,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_topic() {
        let t = Topic::new("chk_1", "Documents", 0);
        assert!(t.id.starts_with("top_"));
        assert_eq!(t.checklist_id, "chk_1");
        assert_eq!(t.order, 0);
    }
}
