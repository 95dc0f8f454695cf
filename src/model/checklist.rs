//! Checklist model.
//!
//! A checklist is the top-level entity: either authored from scratch
//! (`EMPTY`) or seeded from one of the static templates. Deleting a
//! checklist cascades to its topics and items at the database level.

use serde::{Deserialize, Serialize};

/// Which template (if any) seeded a checklist.
///
/// `EMPTY` means the user authored it from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChecklistType {
    Empty,
    Travel,
    Moving,
    Meeting,
    Wedding,
}

impl ChecklistType {
    /// Get the string representation for storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "EMPTY",
            Self::Travel => "TRAVEL",
            Self::Moving => "MOVING",
            Self::Meeting => "MEETING",
            Self::Wedding => "WEDDING",
        }
    }

    /// Parse from a storage string. Unknown values become `Empty`.
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        match s {
            "TRAVEL" => Self::Travel,
            "MOVING" => Self::Moving,
            "MEETING" => Self::Meeting,
            "WEDDING" => Self::Wedding,
            _ => Self::Empty,
        }
    }
}

/// Checklist lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChecklistStatus {
    Active,
    Archived,
    Completed,
}

impl ChecklistStatus {
    /// Get the string representation for storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Archived => "ARCHIVED",
            Self::Completed => "COMPLETED",
        }
    }

    /// Parse from a storage string. Unknown values become `Active`.
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        match s {
            "ARCHIVED" => Self::Archived,
            "COMPLETED" => Self::Completed,
            _ => Self::Active,
        }
    }
}

impl Default for ChecklistStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// A checklist row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    /// Unique identifier (UUID format).
    pub id: String,

    /// Display title.
    pub title: String,

    /// Optional description.
    pub description: Option<String>,

    /// Which template seeded this checklist, or `Empty`.
    #[serde(rename = "type")]
    pub kind: ChecklistType,

    /// Lifecycle status.
    pub status: ChecklistStatus,

    /// Icon identifier for card rendering (template-provided).
    pub icon: Option<String>,

    /// Creation timestamp (Unix milliseconds). Immutable.
    pub created_at: i64,
}

impl Checklist {
    /// Create a new empty-authored checklist with a fresh id.
    pub fn new(title: &str) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        let id = format!("chk_{}", &uuid::Uuid::new_v4().simple().to_string()[..12]);

        Self {
            id,
            title: title.to_string(),
            description: None,
            kind: ChecklistType::Empty,
            status: ChecklistStatus::Active,
            icon: None,
            created_at: now,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Set the checklist type.
    #[must_use]
    pub fn with_kind(mut self, kind: ChecklistType) -> Self {
        self.kind = kind;
        self
    }

    /// Set the icon identifier.
    #[must_use]
    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }
}

/// A checklist row joined with its item counts, as returned by the
/// active-with-progress list query.
///
/// A checklist with zero items carries `total_items == 0` and
/// `completed_items == 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistWithProgress {
    #[serde(flatten)]
    pub checklist: Checklist,
    pub total_items: i64,
    pub completed_items: i64,
}

impl ChecklistWithProgress {
    /// Percentage of completed items, 0 when the checklist is empty.
    ///
    /// Delegates to [`crate::aggregate::progress`] so the list view and the
    /// detail view round identically.
    #[must_use]
    pub fn progress(&self) -> u8 {
        crate::aggregate::progress(self.completed_items, self.total_items)
    }
}

/// Typed partial update for a checklist.
///
/// `None` leaves a column untouched. For nullable columns the inner option
/// distinguishes "set to value" from "clear": `Some(None)` writes NULL.
/// Column names are hard-coded per field, so no caller-supplied string ever
/// reaches the SQL text.
#[derive(Debug, Clone, Default)]
pub struct ChecklistPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<ChecklistStatus>,
    pub icon: Option<Option<String>>,
}

impl ChecklistPatch {
    /// True when no field is set; the update is then a no-op.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.icon.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_round_trip() {
        for kind in [
            ChecklistType::Empty,
            ChecklistType::Travel,
            ChecklistType::Moving,
            ChecklistType::Meeting,
            ChecklistType::Wedding,
        ] {
            assert_eq!(ChecklistType::from_str(kind.as_str()), kind);
        }
    }

    #[test]
    fn test_unknown_type_falls_back_to_empty() {
        assert_eq!(ChecklistType::from_str("GROCERIES"), ChecklistType::Empty);
    }

    #[test]
    fn test_new_checklist_defaults() {
        let c = Checklist::new("Packing");
        assert!(c.id.starts_with("chk_"));
        assert_eq!(c.kind, ChecklistType::Empty);
        assert_eq!(c.status, ChecklistStatus::Active);
        assert!(c.description.is_none());
    }

    #[test]
    fn test_empty_patch() {
        assert!(ChecklistPatch::default().is_empty());
        let patch = ChecklistPatch {
            title: Some("x".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
