use crate::domain::constants::SUBMIT_SUCCESS_MESSAGE;
use crate::domain::models::Status;
use crate::services::errors::AppError;
use crate::services::output::{print_detail, print_out};
use crate::services::query::{filter_by_category, filter_by_status, sort_newest_first};
use crate::services::store::{audit, ReportStore};
use crate::services::submission::{SubmissionAttempt, SubmissionInput};
use std::path::PathBuf;

pub fn handle_submit(
    json: bool,
    store: &dyn ReportStore,
    category: String,
    location: String,
    description: String,
    photo: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut attempt = SubmissionAttempt::new(SubmissionInput {
        category,
        location,
        description,
        photo,
    });
    let report = attempt.run(store)?;
    audit(
        "submit",
        serde_json::json!({"id": report.id, "category": report.category}),
    );

    print_detail(json, report, |r| {
        vec![
            SUBMIT_SUCCESS_MESSAGE.to_string(),
            format!("id: {}", r.id),
        ]
    })
}

pub fn handle_list(
    json: bool,
    store: &dyn ReportStore,
    category: Option<&str>,
    status: Option<Status>,
) -> anyhow::Result<()> {
    let mut reports = store.load_all();
    if let Some(category) = category {
        reports = filter_by_category(&reports, category);
    }
    if let Some(status) = status {
        reports = filter_by_status(&reports, status);
    }
    let reports = sort_newest_first(&reports);
    print_out(json, &reports, |r| {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            r.id,
            r.category,
            r.location,
            r.status.as_str(),
            r.submitted_at.to_rfc3339()
        )
    })
}

pub fn handle_show(json: bool, store: &dyn ReportStore, id: &str) -> anyhow::Result<()> {
    let report = store
        .load_all()
        .into_iter()
        .find(|r| r.id == id)
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;

    print_detail(json, report, |r| {
        let mut lines = vec![
            format!("id: {}", r.id),
            format!("category: {}", r.category),
            format!("location: {}", r.location),
        ];
        if !r.description.is_empty() {
            lines.push(format!("description: {}", r.description));
        }
        lines.push(format!("status: {}", r.status.as_str()));
        lines.push(format!("submitted: {}", r.submitted_at.to_rfc3339()));
        lines
    })
}
