use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw waitlist signup as posted by the form.
///
/// Every field is optional so that a missing key, `null` and `""` all surface
/// as a missing-field validation error instead of a body rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistSubmission {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub year_of_study: Option<String>,
    #[serde(default)]
    pub school: Option<String>,
}

/// A validated entry ready to be written to the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewWaitlistEntry {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub year_of_study: String,
    pub school: String,
}

// Waitlist row as stored in the db.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub year_of_study: String,
    pub school: String,
    pub created_at: DateTime<Utc>,
}
