//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep report/output structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — report entity, status enum, output structs.
//! - `constants.rs` — stable constants (storage paths, user-facing messages).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! `Report` and `Status` define the persisted slot schema. Field names and
//! status literals must stay byte-identical to what older slots contain;
//! changes here require an explicit migration.

pub mod constants;
pub mod models;
