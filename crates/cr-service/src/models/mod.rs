//! Classroom service models.
//!
//! Data types and request validation. Wire field names are camelCase
//! (`roomName`, `createdBy`, `stdId`); timestamps are ISO-8601.

use crate::errors::ApiError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default creator label when a scheduling request omits `createdBy`.
pub const DEFAULT_CREATED_BY: &str = "unknown";

/// Default attendance event kind.
pub const DEFAULT_ATTENDANCE_EVENT: &str = "join";

/// A scheduled class.
///
/// Immutable after creation; never deleted; volatile (process lifetime).
/// Ids are unique and strictly increasing in assignment order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    /// Unique, monotonically assigned identifier.
    pub id: i64,

    /// Class title.
    pub title: String,

    /// Video room the class takes place in.
    pub room_name: String,

    /// Scheduled start time.
    pub when: DateTime<Utc>,

    /// Who scheduled the class.
    pub created_by: String,
}

/// Validated input for creating a class, before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewClass {
    pub title: String,
    pub room_name: String,
    pub when: DateTime<Utc>,
    pub created_by: String,
}

/// A recorded attendance event.
///
/// Append-only; the timestamp is server-assigned at write time so clients
/// cannot forge ordering or backdate events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEvent {
    /// Server-assigned capture timestamp.
    pub ts: DateTime<Utc>,

    /// Class the event belongs to, when the client supplied one.
    pub class_id: Option<i64>,

    /// Room name, when the client supplied one.
    pub room_name: Option<String>,

    /// Student identifier. Always a positive integer.
    pub std_id: i64,

    /// Event kind (default: "join").
    pub event: String,
}

/// Validated input for recording attendance, before the timestamp is
/// assigned by the log.
#[derive(Debug, Clone)]
pub struct NewAttendance {
    pub class_id: Option<i64>,
    pub room_name: Option<String>,
    pub std_id: i64,
    pub event: String,
}

/// Request body for `POST /classes`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassRequest {
    pub title: Option<String>,
    pub room_name: Option<String>,
    pub when: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
}

impl CreateClassRequest {
    /// Validate the request and apply defaults.
    ///
    /// `title`, `roomName` and `when` are required; a missing or
    /// empty-string value rejects the whole request. Values are stored
    /// as supplied, whitespace included. `createdBy` defaults to
    /// `"unknown"`.
    pub fn validate(&self) -> Result<NewClass, ApiError> {
        let present = |s: &Option<String>| s.clone().filter(|v| !v.is_empty());

        let (title, room_name, when) =
            match (present(&self.title), present(&self.room_name), self.when) {
                (Some(title), Some(room_name), Some(when)) => (title, room_name, when),
                _ => {
                    return Err(ApiError::Validation(
                        "Missing title, roomName or when".to_string(),
                    ))
                }
            };

        let created_by = self
            .created_by
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_CREATED_BY.to_string());

        Ok(NewClass {
            title,
            room_name,
            when,
            created_by,
        })
    }
}

/// Request body for `POST /attendance`.
///
/// `classId` and `stdId` are accepted as JSON numbers or numeric strings
/// and coerced; non-numeric `classId` input is stored as absent rather
/// than rejected.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordAttendanceRequest {
    pub class_id: Option<Value>,
    pub room_name: Option<String>,
    pub std_id: Option<Value>,
    pub event: Option<String>,
}

impl RecordAttendanceRequest {
    /// Validate the request and apply defaults.
    ///
    /// `stdId` is required and must coerce to a positive integer; every
    /// other field is optional. A `classId` that coerces to zero or a
    /// negative number is stored as absent, like any other falsy value.
    pub fn validate(&self) -> Result<NewAttendance, ApiError> {
        let std_id = match coerce_integer(self.std_id.as_ref()) {
            Some(n) if n > 0 => n,
            _ => return Err(ApiError::Validation("STD_ID is required".to_string())),
        };

        let event = self
            .event
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ATTENDANCE_EVENT.to_string());

        Ok(NewAttendance {
            class_id: coerce_integer(self.class_id.as_ref()).filter(|n| *n > 0),
            room_name: self.room_name.clone().filter(|s| !s.is_empty()),
            std_id,
            event,
        })
    }
}

/// Coerce a JSON value to an integer: numbers pass through, numeric
/// strings are parsed, everything else becomes absent.
pub fn coerce_integer(value: Option<&Value>) -> Option<i64> {
    match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Response for `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always true while the process is alive.
    pub ok: bool,

    /// Seconds since the service started.
    pub uptime: f64,
}

/// Response for `GET /token`.
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    /// Signed access token.
    pub token: String,

    /// Normalized identity the token is bound to.
    pub identity: String,

    /// Normalized room the token is scoped to.
    pub room: String,
}

/// Acknowledgement for `POST /attendance`.
#[derive(Debug, Clone, Serialize)]
pub struct AckResponse {
    pub ok: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use serde_json::json;

    fn class_request(body: Value) -> CreateClassRequest {
        serde_json::from_value(body).unwrap()
    }

    fn attendance_request(body: Value) -> RecordAttendanceRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_create_class_valid() {
        let request = class_request(json!({
            "title": "Algebra 101",
            "roomName": "algebra-101",
            "when": "2026-09-01T10:00:00Z",
            "createdBy": "teacher@example.com",
        }));

        let new_class = request.validate().unwrap();
        assert_eq!(new_class.title, "Algebra 101");
        assert_eq!(new_class.room_name, "algebra-101");
        assert_eq!(new_class.created_by, "teacher@example.com");
    }

    #[test]
    fn test_create_class_created_by_defaults() {
        let request = class_request(json!({
            "title": "Algebra 101",
            "roomName": "algebra-101",
            "when": "2026-09-01T10:00:00Z",
        }));

        let new_class = request.validate().unwrap();
        assert_eq!(new_class.created_by, "unknown");
    }

    #[test]
    fn test_create_class_missing_fields_rejected() {
        for body in [
            json!({"roomName": "r", "when": "2026-09-01T10:00:00Z"}),
            json!({"title": "t", "when": "2026-09-01T10:00:00Z"}),
            json!({"title": "t", "roomName": "r"}),
            json!({"title": "", "roomName": "r", "when": "2026-09-01T10:00:00Z"}),
        ] {
            let result = class_request(body).validate();
            assert!(
                matches!(result, Err(ApiError::Validation(ref msg)) if msg == "Missing title, roomName or when")
            );
        }
    }

    #[test]
    fn test_create_class_whitespace_fields_accepted_verbatim() {
        let request = class_request(json!({
            "title": "  ",
            "roomName": " algebra-101 ",
            "when": "2026-09-01T10:00:00Z",
        }));

        let new_class = request.validate().unwrap();
        assert_eq!(new_class.title, "  ");
        assert_eq!(new_class.room_name, " algebra-101 ");
    }

    #[test]
    fn test_attendance_valid_with_defaults() {
        let request = attendance_request(json!({"stdId": 42}));

        let new = request.validate().unwrap();
        assert_eq!(new.std_id, 42);
        assert_eq!(new.event, "join");
        assert_eq!(new.class_id, None);
        assert_eq!(new.room_name, None);
    }

    #[test]
    fn test_attendance_missing_std_id_rejected() {
        for body in [
            json!({}),
            json!({"stdId": null}),
            json!({"stdId": 0}),
            json!({"stdId": -3}),
            json!({"stdId": "not-a-number"}),
            json!({"stdId": ""}),
        ] {
            let result = attendance_request(body).validate();
            assert!(
                matches!(result, Err(ApiError::Validation(ref msg)) if msg == "STD_ID is required")
            );
        }
    }

    #[test]
    fn test_attendance_numeric_string_std_id() {
        let request = attendance_request(json!({"stdId": "42"}));
        assert_eq!(request.validate().unwrap().std_id, 42);
    }

    #[test]
    fn test_attendance_class_id_coercion() {
        let coerced = attendance_request(json!({"stdId": 1, "classId": "7"}))
            .validate()
            .unwrap();
        assert_eq!(coerced.class_id, Some(7));

        let absent = attendance_request(json!({"stdId": 1, "classId": "seven"}))
            .validate()
            .unwrap();
        assert_eq!(absent.class_id, None);
    }

    #[test]
    fn test_attendance_falsy_class_id_stored_absent() {
        for class_id in [json!(0), json!("0"), json!(-2)] {
            let new = attendance_request(json!({"stdId": 1, "classId": class_id}))
                .validate()
                .unwrap();
            assert_eq!(new.class_id, None);
        }
    }

    #[test]
    fn test_coerce_integer() {
        assert_eq!(coerce_integer(Some(&json!(5))), Some(5));
        assert_eq!(coerce_integer(Some(&json!("5"))), Some(5));
        assert_eq!(coerce_integer(Some(&json!(" 5 "))), Some(5));
        assert_eq!(coerce_integer(Some(&json!("5.5"))), None);
        assert_eq!(coerce_integer(Some(&json!(true))), None);
        assert_eq!(coerce_integer(Some(&json!(null))), None);
        assert_eq!(coerce_integer(None), None);
    }

    #[test]
    fn test_class_record_wire_format_is_camel_case() {
        let record = ClassRecord {
            id: 1,
            title: "Algebra 101".to_string(),
            room_name: "algebra-101".to_string(),
            when: "2026-09-01T10:00:00Z".parse().unwrap(),
            created_by: "unknown".to_string(),
        };

        let wire = serde_json::to_value(&record).unwrap();
        assert!(wire.get("roomName").is_some());
        assert!(wire.get("createdBy").is_some());
        assert!(wire.get("room_name").is_none());
    }

    #[test]
    fn test_attendance_event_serializes_absent_class_id_as_null() {
        let event = AttendanceEvent {
            ts: Utc::now(),
            class_id: None,
            room_name: None,
            std_id: 42,
            event: "join".to_string(),
        };

        let wire = serde_json::to_value(&event).unwrap();
        assert!(wire["classId"].is_null());
        assert_eq!(wire["stdId"], 42);
    }
}
