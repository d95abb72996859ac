use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A clinic that signed up for the waitlist. Rows are never updated or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub email: String,
    pub clinic_name: String,
    pub clinic_size: String,
    pub created_at: DateTime<Utc>,
}

/// A validated signup, ready to be stored. `id` and `created_at` are assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWaitlistEntry {
    pub email: String,
    pub clinic_name: String,
    pub clinic_size: String,
}
