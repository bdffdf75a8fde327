//! HTTP request handlers.

mod attendance_handler;
mod classes_handler;
mod health;
mod token_handler;

pub use attendance_handler::{list_attendance, record_attendance};
pub use classes_handler::{create_class, list_classes};
pub use health::health_check;
pub use token_handler::issue_token;
