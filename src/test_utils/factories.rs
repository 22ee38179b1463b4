//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use chrono::{DateTime, TimeZone, Utc};

use crate::entities::waitlist_entry::{WaitlistEntry, WaitlistSubmission};

/// Create a valid submission (Jane Doe at Boston College, no phone).
pub fn create_test_submission(
    overrides: impl FnOnce(&mut WaitlistSubmission),
) -> WaitlistSubmission {
    let mut submission = WaitlistSubmission {
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
        email: Some("jane@bc.edu".to_string()),
        phone: None,
        year_of_study: Some("Freshman".to_string()),
        school: Some("Boston College".to_string()),
    };
    overrides(&mut submission);
    submission
}

/// Create a stored entry with sensible defaults.
pub fn create_test_entry(id: i64, overrides: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let mut entry = WaitlistEntry {
        id,
        first_name: "Existing".to_string(),
        last_name: format!("Student{id}"),
        email: format!("student{id}@bc.edu"),
        phone: None,
        year_of_study: "Junior".to_string(),
        school: "Boston College".to_string(),
        created_at: test_datetime(),
    };
    overrides(&mut entry);
    entry
}

pub fn test_datetime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}
