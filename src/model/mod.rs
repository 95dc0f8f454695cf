//! Data models for Ticklist.
//!
//! This module contains the three persisted entities:
//! - Checklist (top-level list, empty-authored or template-seeded)
//! - Topic (ordered grouping of items within a checklist)
//! - Item (a single checkable task, optionally with a due date)
//!
//! plus the typed patch structs used for partial updates.

pub mod checklist;
pub mod item;
pub mod topic;

pub use checklist::{Checklist, ChecklistPatch, ChecklistStatus, ChecklistType, ChecklistWithProgress};
pub use item::{Item, ItemPatch, Reminder};
pub use topic::Topic;
