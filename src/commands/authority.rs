use crate::domain::models::{DashboardReport, DashboardRow, SetStatusOutcome, Status};
use crate::services::output::{print_detail, print_one};
use crate::services::query::{filter_by_status, sort_newest_first, status_style_tag};
use crate::services::store::{audit, ReportStore};

pub fn handle_dashboard(
    json: bool,
    store: &dyn ReportStore,
    status: Option<Status>,
) -> anyhow::Result<()> {
    let snapshot = store.load_all();

    let mut shown = snapshot.clone();
    if let Some(status) = status {
        shown = filter_by_status(&shown, status);
    }
    let rows: Vec<DashboardRow> = sort_newest_first(&shown)
        .into_iter()
        .map(|r| DashboardRow {
            style: status_style_tag(r.status),
            id: r.id,
            category: r.category,
            location: r.location,
            status: r.status,
            submitted_at: r.submitted_at,
        })
        .collect();

    // Counts always cover the whole collection, filter or not, so the
    // summary line stays meaningful while drilling into one status.
    let report = DashboardReport {
        total: snapshot.len(),
        pending: filter_by_status(&snapshot, Status::Pending).len(),
        in_progress: filter_by_status(&snapshot, Status::InProgress).len(),
        resolved: filter_by_status(&snapshot, Status::Resolved).len(),
        rows,
    };

    print_detail(json, report, |r| {
        let mut lines = vec![format!(
            "total: {}\tpending: {}\tin_progress: {}\tresolved: {}",
            r.total, r.pending, r.in_progress, r.resolved
        )];
        for row in &r.rows {
            lines.push(format!(
                "{}\t{}\t{}\t{}\t{}",
                row.id,
                row.category,
                row.location,
                row.status.as_str(),
                row.style.as_str()
            ));
        }
        lines
    })
}

pub fn handle_set_status(
    json: bool,
    store: &dyn ReportStore,
    id: &str,
    status: Status,
) -> anyhow::Result<()> {
    store.update_status(id, status)?;

    // The store treats an unknown id as a no-op, so confirmation comes
    // from re-reading the slot. The audit trail only records changes
    // that actually landed.
    let matched = store
        .load_all()
        .iter()
        .any(|r| r.id == id && r.status == status);
    if matched {
        audit(
            "set_status",
            serde_json::json!({"id": id, "status": status.as_str()}),
        );
    }

    let outcome = SetStatusOutcome {
        id: id.to_string(),
        status,
        matched,
    };
    print_one(json, outcome, |o| {
        if o.matched {
            format!("{} -> {}", o.id, o.status.as_str())
        } else {
            format!("no report with id {} (no change)", o.id)
        }
    })
}
