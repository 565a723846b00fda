//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `store.rs` — report slot persistence (trait + file/memory backends) + audit log.
//! - `query.rs` — pure snapshot filtering/sorting and status style mapping.
//! - `submission.rs` — the submit state machine (validate/read/persist).
//! - `photo.rs` — photo file to embeddable data URI.
//! - `errors.rs` — user-surfaced error taxonomy and envelope codes.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod errors;
pub mod output;
pub mod photo;
pub mod query;
pub mod store;
pub mod submission;
