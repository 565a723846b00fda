use crate::domain::models::{Report, Status};
use serde::Serialize;

/// Display style for a status badge. Renderers map these to whatever
/// visual treatment they use; the mapping itself lives here so every
/// view agrees on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleToken {
    Alert,
    Warn,
    Ok,
}

impl StyleToken {
    pub fn as_str(self) -> &'static str {
        match self {
            StyleToken::Alert => "alert",
            StyleToken::Warn => "warn",
            StyleToken::Ok => "ok",
        }
    }
}

pub fn status_style_tag(status: Status) -> StyleToken {
    match status {
        Status::Pending => StyleToken::Alert,
        Status::InProgress => StyleToken::Warn,
        Status::Resolved => StyleToken::Ok,
    }
}

/// Exact-match status filter, preserving input order.
pub fn filter_by_status(reports: &[Report], status: Status) -> Vec<Report> {
    reports
        .iter()
        .filter(|r| r.status == status)
        .cloned()
        .collect()
}

/// Exact-match category filter, preserving input order.
pub fn filter_by_category(reports: &[Report], category: &str) -> Vec<Report> {
    reports
        .iter()
        .filter(|r| r.category == category)
        .cloned()
        .collect()
}

/// Descending by submission time. `sort_by` is stable, so reports that
/// share a timestamp keep their original relative order.
pub fn sort_newest_first(reports: &[Report]) -> Vec<Report> {
    let mut sorted = reports.to_vec();
    sorted.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    sorted
}
