use crate::domain::constants::{AUDIT_FILE, DATA_DIR, REPORTS_FILE};
use crate::domain::models::{Report, Status};
use crate::services::errors::AppError;
use std::cell::RefCell;
use std::path::PathBuf;

/// Owner of the persisted report collection.
///
/// All mutation goes through this trait; other components only ever see
/// snapshots from `load_all`. The read-modify-write-whole-slot pattern is
/// intentionally simple: single user, single process, last writer wins.
pub trait ReportStore {
    /// Full collection in insertion order. Fails soft: an absent or
    /// malformed slot yields an empty collection, never an error.
    fn load_all(&self) -> Vec<Report>;

    /// Persists the given sequence wholesale, overwriting prior content.
    fn replace_all(&self, reports: &[Report]) -> anyhow::Result<()>;

    /// Appends without validating; validation belongs to the submission
    /// pipeline.
    fn append(&self, report: Report) -> anyhow::Result<()> {
        let mut all = self.load_all();
        all.push(report);
        self.replace_all(&all)
    }

    /// Sets the status of the report with the given id. An unknown id is
    /// a silent no-op and does not rewrite the slot; callers needing
    /// confirmation re-derive it by re-reading.
    fn update_status(&self, id: &str, status: Status) -> anyhow::Result<()> {
        let mut all = self.load_all();
        match all.iter_mut().find(|r| r.id == id) {
            Some(report) => {
                report.status = status;
                self.replace_all(&all)
            }
            None => Ok(()),
        }
    }
}

/// File-backed store: one JSON array of reports in a single slot under
/// `$HOME/.local/share/civix/`.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn open_default() -> anyhow::Result<Self> {
        let home = std::env::var("HOME")?;
        Ok(Self::new(
            PathBuf::from(home).join(DATA_DIR).join(REPORTS_FILE),
        ))
    }
}

impl ReportStore for JsonFileStore {
    fn load_all(&self) -> Vec<Report> {
        if !self.path.exists() {
            return Vec::new();
        }
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "unreadable report slot, starting empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(reports) => reports,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "malformed report slot, starting empty");
                Vec::new()
            }
        }
    }

    fn replace_all(&self, reports: &[Report]) -> anyhow::Result<()> {
        let body = serde_json::to_string_pretty(reports)
            .map_err(|e| AppError::StorageWrite(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::StorageWrite(e.to_string()))?;
        }
        // Write-then-rename so readers never observe a partial slot.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, body).map_err(|e| AppError::StorageWrite(e.to_string()))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| AppError::StorageWrite(e.to_string()))?;
        Ok(())
    }
}

/// In-memory store, the test double called for by the injectable-store
/// design. Also usable for dry runs.
#[derive(Default)]
pub struct MemoryStore {
    reports: RefCell<Vec<Report>>,
}

impl ReportStore for MemoryStore {
    fn load_all(&self) -> Vec<Report> {
        self.reports.borrow().clone()
    }

    fn replace_all(&self, reports: &[Report]) -> anyhow::Result<()> {
        *self.reports.borrow_mut() = reports.to_vec();
        Ok(())
    }
}

/// Best-effort audit trail of state-mutating actions. Never fatal.
pub fn audit(action: &str, data: serde_json::Value) {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return,
    };
    let path = PathBuf::from(home).join(DATA_DIR).join(AUDIT_FILE);
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": chrono::Utc::now().to_rfc3339(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample(id: &str, status: Status) -> Report {
        Report {
            id: id.to_string(),
            category: "Pothole".to_string(),
            location: "Main St".to_string(),
            description: String::new(),
            image_data: "data:image/png;base64,AA==".to_string(),
            status,
            submitted_at: Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap(),
        }
    }

    fn file_store() -> (tempfile::TempDir, JsonFileStore) {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let store = JsonFileStore::new(tmp.path().join("reports.json"));
        (tmp, store)
    }

    #[test]
    fn replace_then_load_round_trips_in_order() {
        let (_tmp, store) = file_store();
        let reports = vec![
            sample("a", Status::Pending),
            sample("b", Status::Resolved),
            sample("c", Status::InProgress),
        ];
        store.replace_all(&reports).unwrap();
        assert_eq!(store.load_all(), reports);
    }

    #[test]
    fn missing_slot_loads_empty() {
        let (_tmp, store) = file_store();
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn malformed_slot_loads_empty() {
        let (tmp, store) = file_store();
        std::fs::write(tmp.path().join("reports.json"), "{not json").unwrap();
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn append_preserves_insertion_order() {
        let (_tmp, store) = file_store();
        store.append(sample("first", Status::Pending)).unwrap();
        store.append(sample("second", Status::Pending)).unwrap();
        let ids: Vec<_> = store.load_all().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[test]
    fn update_status_is_idempotent() {
        let (_tmp, store) = file_store();
        store.append(sample("a", Status::Pending)).unwrap();
        store.update_status("a", Status::Resolved).unwrap();
        let once = store.load_all();
        store.update_status("a", Status::Resolved).unwrap();
        assert_eq!(store.load_all(), once);
        assert_eq!(once[0].status, Status::Resolved);
    }

    #[test]
    fn update_status_unknown_id_is_noop() {
        let (_tmp, store) = file_store();
        store.append(sample("a", Status::Pending)).unwrap();
        let before = store.load_all();
        store.update_status("nonexistent", Status::Resolved).unwrap();
        assert_eq!(store.load_all(), before);
    }

    #[test]
    fn write_failure_is_a_storage_write_error() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        // Parent path is a regular file, so the data dir cannot be
        // created; this fails regardless of process privileges.
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = JsonFileStore::new(blocker.join("reports.json"));

        let err = store
            .replace_all(&[sample("a", Status::Pending)])
            .unwrap_err();
        assert_eq!(crate::services::errors::error_code(&err), "STORAGE_WRITE");
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn memory_store_honors_the_same_contract() {
        let store = MemoryStore::default();
        store.append(sample("a", Status::Pending)).unwrap();
        store.append(sample("b", Status::Pending)).unwrap();
        store.update_status("b", Status::InProgress).unwrap();
        store.update_status("ghost", Status::Resolved).unwrap();
        let all = store.load_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].status, Status::InProgress);
    }

    #[test]
    fn slot_keeps_wire_field_names_on_disk() {
        let (tmp, store) = file_store();
        store.append(sample("a", Status::InProgress)).unwrap();
        let raw = std::fs::read_to_string(tmp.path().join("reports.json")).unwrap();
        assert!(raw.contains("\"imageData\""));
        assert!(raw.contains("\"submittedAt\""));
        assert!(raw.contains("\"In Progress\""));
    }
}
