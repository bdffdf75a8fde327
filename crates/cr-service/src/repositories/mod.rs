//! Storage layer.
//!
//! Stores are defined as traits so the router never depends on a concrete
//! backend; the shipped implementations are in-memory and volatile. A
//! persistent backend can be swapped in without touching the handlers.

pub mod attendance;
pub mod classes;

pub use attendance::{AttendanceLog, InMemoryAttendanceLog, ATTENDANCE_READ_WINDOW};
pub use classes::{InMemoryScheduleStore, ScheduleStore};
