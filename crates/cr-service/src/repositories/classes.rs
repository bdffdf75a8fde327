//! Scheduling store.
//!
//! Holds the scheduled classes and owns the id counter. Id assignment and
//! append happen under one lock acquisition, so ids are unique and
//! strictly increasing in assignment order.

use crate::models::{ClassRecord, NewClass};
use std::sync::{Mutex, PoisonError};

/// Storage abstraction for scheduled classes.
///
/// There are no update or delete operations; records are immutable after
/// creation.
pub trait ScheduleStore: Send + Sync {
    /// All classes, ascending by `when`.
    ///
    /// The sort is produced fresh on every call; ties on equal `when` keep
    /// insertion order.
    fn list(&self) -> Vec<ClassRecord>;

    /// Assign the next id and append the class.
    fn create(&self, new_class: NewClass) -> ClassRecord;
}

struct ScheduleInner {
    classes: Vec<ClassRecord>,
    next_id: i64,
}

/// In-memory `ScheduleStore`. State lives for the process lifetime.
pub struct InMemoryScheduleStore {
    inner: Mutex<ScheduleInner>,
}

impl InMemoryScheduleStore {
    pub fn new() -> Self {
        InMemoryScheduleStore {
            inner: Mutex::new(ScheduleInner {
                classes: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryScheduleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleStore for InMemoryScheduleStore {
    fn list(&self) -> Vec<ClassRecord> {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

        let mut classes = inner.classes.clone();
        // Stable sort: equal `when` values keep insertion order
        classes.sort_by_key(|c| c.when);
        classes
    }

    fn create(&self, new_class: NewClass) -> ClassRecord {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

        let record = ClassRecord {
            id: inner.next_id,
            title: new_class.title,
            room_name: new_class.room_name,
            when: new_class.when,
            created_by: new_class.created_by,
        };
        inner.next_id += 1;
        inner.classes.push(record.clone());
        record
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn new_class(title: &str, when: &str) -> NewClass {
        NewClass {
            title: title.to_string(),
            room_name: format!("{}-room", title),
            when: when.parse::<DateTime<Utc>>().unwrap(),
            created_by: "unknown".to_string(),
        }
    }

    #[test]
    fn test_ids_are_strictly_increasing() {
        let store = InMemoryScheduleStore::new();

        let a = store.create(new_class("a", "2026-09-01T10:00:00Z"));
        let b = store.create(new_class("b", "2026-09-01T09:00:00Z"));
        let c = store.create(new_class("c", "2026-09-01T11:00:00Z"));

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_list_sorts_by_when_not_insertion() {
        let store = InMemoryScheduleStore::new();

        store.create(new_class("late", "2026-09-03T10:00:00Z"));
        store.create(new_class("early", "2026-09-01T10:00:00Z"));
        store.create(new_class("middle", "2026-09-02T10:00:00Z"));

        let titles: Vec<String> = store.list().into_iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["early", "middle", "late"]);
    }

    #[test]
    fn test_list_tie_break_keeps_insertion_order() {
        let store = InMemoryScheduleStore::new();

        store.create(new_class("first", "2026-09-01T10:00:00Z"));
        store.create(new_class("second", "2026-09-01T10:00:00Z"));
        store.create(new_class("third", "2026-09-01T10:00:00Z"));

        let titles: Vec<String> = store.list().into_iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_list_is_a_snapshot() {
        let store = InMemoryScheduleStore::new();
        store.create(new_class("a", "2026-09-01T10:00:00Z"));

        let snapshot = store.list();
        store.create(new_class("b", "2026-09-01T11:00:00Z"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.list().len(), 2);
    }
}
