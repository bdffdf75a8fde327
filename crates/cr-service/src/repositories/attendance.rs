//! Attendance log.
//!
//! Append-only. Every entry is retained for the process lifetime; reads
//! expose only the most recent `ATTENDANCE_READ_WINDOW` entries. This is a
//! read-window limit, not an eviction policy.

use crate::models::{AttendanceEvent, NewAttendance};
use chrono::Utc;
use std::sync::{Mutex, PoisonError};

/// How many entries `recent()` exposes.
pub const ATTENDANCE_READ_WINDOW: usize = 500;

/// Storage abstraction for attendance events.
pub trait AttendanceLog: Send + Sync {
    /// Append an event, stamping it with the current server time.
    fn record(&self, new_event: NewAttendance);

    /// The last `ATTENDANCE_READ_WINDOW` events, in insertion order.
    fn recent(&self) -> Vec<AttendanceEvent>;
}

/// In-memory `AttendanceLog`. Grows unbounded for the process lifetime.
pub struct InMemoryAttendanceLog {
    events: Mutex<Vec<AttendanceEvent>>,
}

impl InMemoryAttendanceLog {
    pub fn new() -> Self {
        InMemoryAttendanceLog {
            events: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryAttendanceLog {
    fn default() -> Self {
        Self::new()
    }
}

impl AttendanceLog for InMemoryAttendanceLog {
    fn record(&self, new_event: NewAttendance) {
        let event = AttendanceEvent {
            // Server-assigned at write time; client timestamps are never trusted
            ts: Utc::now(),
            class_id: new_event.class_id,
            room_name: new_event.room_name,
            std_id: new_event.std_id,
            event: new_event.event,
        };

        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }

    fn recent(&self) -> Vec<AttendanceEvent> {
        let events = self.events.lock().unwrap_or_else(PoisonError::into_inner);

        let start = events.len().saturating_sub(ATTENDANCE_READ_WINDOW);
        events.iter().skip(start).cloned().collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn join_event(std_id: i64) -> NewAttendance {
        NewAttendance {
            class_id: None,
            room_name: None,
            std_id,
            event: "join".to_string(),
        }
    }

    #[test]
    fn test_record_stamps_server_time() {
        let log = InMemoryAttendanceLog::new();

        let before = Utc::now();
        log.record(join_event(1));
        let after = Utc::now();

        let events = log.recent();
        assert_eq!(events.len(), 1);
        let ts = events.first().unwrap().ts;
        assert!(ts >= before && ts <= after);
    }

    #[test]
    fn test_recent_preserves_insertion_order() {
        let log = InMemoryAttendanceLog::new();
        for std_id in 1..=10 {
            log.record(join_event(std_id));
        }

        let ids: Vec<i64> = log.recent().into_iter().map(|e| e.std_id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<i64>>());
    }

    #[test]
    fn test_recent_caps_at_read_window() {
        let log = InMemoryAttendanceLog::new();
        for std_id in 1..=600 {
            log.record(join_event(std_id));
        }

        let events = log.recent();
        assert_eq!(events.len(), ATTENDANCE_READ_WINDOW);

        // The window is the LAST 500, still in insertion order
        assert_eq!(events.first().unwrap().std_id, 101);
        assert_eq!(events.last().unwrap().std_id, 600);
    }

    #[test]
    fn test_recent_below_window_returns_everything() {
        let log = InMemoryAttendanceLog::new();
        for std_id in 1..=3 {
            log.record(join_event(std_id));
        }

        assert_eq!(log.recent().len(), 3);
    }
}
