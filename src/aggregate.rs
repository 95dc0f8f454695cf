//! Derived aggregates over already-fetched rows.
//!
//! Nothing here touches the database: these are pure functions the read
//! layer applies after a fetch. Progress is never persisted; both the list
//! view (SQL `COUNT`/`SUM` feeding [`progress`]) and the detail view
//! ([`checklist_details`]) round in exactly one place, this module, so the
//! two paths always agree for identical rows.

use chrono::{DateTime, Local, Utc};

use crate::model::{Checklist, Item, Reminder, Topic};

/// Percentage of completed items, rounded to the nearest integer.
///
/// Returns 0 when `total` is zero or negative, and clamps to 100 if a
/// caller passes `completed > total`.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn progress(completed: i64, total: i64) -> u8 {
    if total <= 0 {
        return 0;
    }
    let pct = (completed as f64 / total as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// A topic together with the items attached to it, in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicWithItems {
    pub topic: Topic,
    pub items: Vec<Item>,
}

/// The assembled detail view of one checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistDetails {
    pub checklist: Checklist,
    /// Topics in display order, each with its items.
    pub topics: Vec<TopicWithItems>,
    /// Items with no topic (never grouped, or their topic was deleted),
    /// plus items whose `topic_id` dangles.
    pub orphan_items: Vec<Item>,
    pub total_items: usize,
    pub completed_items: usize,
    /// Computed over the full item set, topic'd and orphaned combined.
    pub progress: u8,
}

/// Assemble the hierarchical detail view from the three raw row sets.
///
/// `topics` is expected in display order and `items` in creation order,
/// as the repository queries return them; both orders are preserved.
#[must_use]
pub fn checklist_details(
    checklist: Checklist,
    topics: Vec<Topic>,
    items: Vec<Item>,
) -> ChecklistDetails {
    let total_items = items.len();
    let completed_items = items.iter().filter(|i| i.is_done).count();
    let pct = progress(completed_items as i64, total_items as i64);

    let mut grouped: Vec<TopicWithItems> = topics
        .into_iter()
        .map(|topic| TopicWithItems {
            topic,
            items: Vec::new(),
        })
        .collect();

    let mut orphan_items = Vec::new();
    for item in items {
        let slot = item.topic_id.as_deref().and_then(|tid| {
            grouped.iter_mut().find(|g| g.topic.id == tid)
        });
        match slot {
            Some(g) => g.items.push(item),
            // topic_id is None or dangling
            None => orphan_items.push(item),
        }
    }

    ChecklistDetails {
        checklist,
        topics: grouped,
        orphan_items,
        total_items,
        completed_items,
        progress: pct,
    }
}

/// Reminders partitioned by urgency.
///
/// Every fed reminder lands in exactly one bucket; within a bucket the
/// soonest-first order of the feed is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedReminders {
    /// Due before `now` and not calendar-today.
    pub expired: Vec<Reminder>,
    /// Due on the caller's local calendar day, past or future time-of-day.
    pub today: Vec<Reminder>,
    /// Due on the next calendar day.
    pub tomorrow: Vec<Reminder>,
    /// Everything else (two or more days out).
    pub later: Vec<Reminder>,
}

impl GroupedReminders {
    /// Total reminders across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expired.len() + self.today.len() + self.tomorrow.len() + self.later.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition the upcoming-reminders feed into urgency buckets.
///
/// Bucket membership compares local calendar days, not elapsed time: an
/// item due at 00:05 today is "today" even when `now` is 23:00. Ancient
/// timestamps (year 1970, clock skew) satisfy `due < now` on a past day
/// and group as expired. The feed never produces items without a due
/// date; any that slip through are skipped.
#[must_use]
pub fn group_reminders(reminders: Vec<Reminder>, now: DateTime<Local>) -> GroupedReminders {
    let now_ms = now.timestamp_millis();
    let today = now.date_naive();
    let tomorrow = today.succ_opt();

    let mut groups = GroupedReminders::default();

    for reminder in reminders {
        let Some(due_ms) = reminder.item.due_at else {
            continue;
        };
        let due_day = DateTime::<Utc>::from_timestamp_millis(due_ms)
            .map(|d| d.with_timezone(&Local).date_naive());

        match due_day {
            Some(day) if due_ms < now_ms && day != today => groups.expired.push(reminder),
            Some(day) if day == today => groups.today.push(reminder),
            Some(day) if Some(day) == tomorrow => groups.tomorrow.push(reminder),
            _ => groups.later.push(reminder),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChecklistStatus, ChecklistType};
    use chrono::TimeZone;

    fn checklist(id: &str) -> Checklist {
        Checklist {
            id: id.to_string(),
            title: "Trip".to_string(),
            description: None,
            kind: ChecklistType::Travel,
            status: ChecklistStatus::Active,
            icon: None,
            created_at: 0,
        }
    }

    fn item(id: &str, topic_id: Option<&str>, is_done: bool) -> Item {
        Item {
            id: id.to_string(),
            checklist_id: "chk_1".to_string(),
            topic_id: topic_id.map(String::from),
            title: id.to_string(),
            is_done,
            due_at: None,
            notified_at: None,
            created_at: 0,
        }
    }

    fn reminder(id: &str, due_at: i64) -> Reminder {
        Reminder {
            item: Item {
                due_at: Some(due_at),
                ..item(id, None, false)
            },
            checklist_title: "Trip".to_string(),
        }
    }

    #[test]
    fn test_progress_zero_items() {
        assert_eq!(progress(0, 0), 0);
    }

    #[test]
    fn test_progress_rounding() {
        assert_eq!(progress(1, 3), 33);
        assert_eq!(progress(2, 3), 67);
        assert_eq!(progress(1, 2), 50);
        assert_eq!(progress(1, 8), 13); // 12.5 rounds half up
        assert_eq!(progress(5, 5), 100);
    }

    #[test]
    fn test_progress_clamps_overflow() {
        assert_eq!(progress(7, 5), 100);
        assert_eq!(progress(-1, 5), 0);
    }

    #[test]
    fn test_details_groups_and_orphans() {
        let topics = vec![
            Topic::new("chk_1", "Docs", 0),
            Topic::new("chk_1", "Packing", 1),
        ];
        let t0 = topics[0].id.clone();
        let items = vec![
            item("a", Some(&t0), true),
            item("b", Some(&t0), false),
            item("c", None, false),
            item("d", Some("top_gone"), true), // dangling reference
        ];

        let details = checklist_details(checklist("chk_1"), topics, items);
        assert_eq!(details.topics[0].items.len(), 2);
        assert_eq!(details.topics[1].items.len(), 0);
        assert_eq!(details.orphan_items.len(), 2);
        assert_eq!(details.total_items, 4);
        assert_eq!(details.completed_items, 2);
        assert_eq!(details.progress, 50);
    }

    #[test]
    fn test_details_empty_checklist() {
        let details = checklist_details(checklist("chk_1"), Vec::new(), Vec::new());
        assert_eq!(details.total_items, 0);
        assert_eq!(details.progress, 0);
    }

    #[test]
    fn test_grouping_buckets() {
        // Fixed local "now": 2024-06-15 23:00
        let now = Local.with_ymd_and_hms(2024, 6, 15, 23, 0, 0).unwrap();
        let at = |y, mo, d, h| {
            Local
                .with_ymd_and_hms(y, mo, d, h, 30, 0)
                .unwrap()
                .timestamp_millis()
        };

        let reminders = vec![
            reminder("yesterday", at(2024, 6, 14, 9)),
            reminder("today_past", at(2024, 6, 15, 0)), // 00:30, already past
            reminder("today_future", at(2024, 6, 15, 23)),
            reminder("tomorrow", at(2024, 6, 16, 8)),
            reminder("in_three_days", at(2024, 6, 18, 8)),
            reminder("epoch", 0), // ancient timestamp
        ];

        let groups = group_reminders(reminders, now);
        let ids = |v: &[Reminder]| -> Vec<String> {
            v.iter().map(|r| r.item.id.clone()).collect()
        };

        assert_eq!(ids(&groups.expired), ["yesterday", "epoch"]);
        assert_eq!(ids(&groups.today), ["today_past", "today_future"]);
        assert_eq!(ids(&groups.tomorrow), ["tomorrow"]);
        assert_eq!(ids(&groups.later), ["in_three_days"]);
        assert_eq!(groups.len(), 6);
    }

    #[test]
    fn test_grouping_is_exhaustive() {
        let now = Local.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let reminders: Vec<Reminder> = (0..50i64)
            .map(|i| reminder(&format!("r{i}"), now.timestamp_millis() + i * 86_400_000))
            .collect();

        let groups = group_reminders(reminders.clone(), now);
        assert_eq!(groups.len(), reminders.len());
    }
}
