//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `citizen.rs` — submit/list/show (the reporter-facing views).
//! - `authority.rs` — dashboard/set-status (the municipal review views).
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod authority;
pub mod citizen;

pub use authority::{handle_dashboard, handle_set_status};
pub use citizen::{handle_list, handle_show, handle_submit};
