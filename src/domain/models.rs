use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Workflow state of a report.
///
/// Serializes to the exact literals older slots already contain
/// (`"Pending"`, `"In Progress"`, `"Resolved"`). Deserialization is
/// lenient: anything unrecognized parses as `Pending` so a single odd
/// record cannot poison the whole slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Status {
    Pending,
    InProgress,
    Resolved,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In Progress",
            Status::Resolved => "Resolved",
        }
    }

    pub fn parse_lenient(raw: &str) -> Self {
        match raw {
            "In Progress" => Status::InProgress,
            "Resolved" => Status::Resolved,
            _ => Status::Pending,
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Status::parse_lenient(&raw))
    }
}

/// A single citizen-submitted issue record.
///
/// The `rename` attributes pin the persisted field names; see the
/// compatibility note in the module docs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub category: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "imageData")]
    pub image_data: String,
    pub status: Status,
    #[serde(rename = "submittedAt")]
    pub submitted_at: DateTime<Utc>,
}

/// One row of the authority dashboard. Carries the style token so
/// renderers never have to re-derive it from the status.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardRow {
    pub id: String,
    pub category: String,
    pub location: String,
    pub status: Status,
    pub style: crate::services::query::StyleToken,
    #[serde(rename = "submittedAt")]
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct DashboardReport {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub rows: Vec<DashboardRow>,
}

/// Outcome of a `set-status` request. `matched` is re-derived by
/// re-reading the slot; an unknown id is a no-op, not an error.
#[derive(Debug, Serialize)]
pub struct SetStatusOutcome {
    pub id: String,
    pub status: Status,
    pub matched: bool,
}
