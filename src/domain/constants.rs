//! Stable constants shared across services and command handlers.

/// Data directory relative to `$HOME`, holding the report slot and audit log.
pub const DATA_DIR: &str = ".local/share/civix";

/// File name of the persisted report slot inside [`DATA_DIR`].
pub const REPORTS_FILE: &str = "reports.json";

/// File name of the append-only audit log inside [`DATA_DIR`].
pub const AUDIT_FILE: &str = "audit.jsonl";

pub const REQUIRED_FIELDS_MESSAGE: &str =
    "Please fill out all required fields and add a photo.";

pub const IMAGE_READ_MESSAGE: &str =
    "Could not read the attached photo. Please try again.";

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Report submitted successfully!";
