use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Liveness payload returned by `GET /`.
#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
    pub message: &'static str,
    /// UTC, millisecond precision, `Z` suffix.
    pub timestamp: String,
}

impl Health {
    pub fn now(message: &'static str) -> Self {
        Self {
            status: "ok",
            message,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Confirmation body for destructive collection operations.
#[derive(Serialize, Debug)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Confirmation body for a whole-collection replace.
#[derive(Serialize, Debug)]
pub struct ImportSummary {
    pub message: &'static str,
    pub count: usize,
}
