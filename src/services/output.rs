//! Output surface of the civix CLI.
//!
//! Every command prints through these helpers. In `--json` mode the
//! payload is wrapped in the `{"ok": true, "data": …}` envelope (failures
//! get `{"ok": false, "error": {code, message}}` from `main`); payload
//! shapes are pinned by `docs/contracts/*.schema.json`. In text mode,
//! collections render as tab-separated rows and single records as
//! key-value lines.

use crate::domain::models::JsonOut;
use serde::Serialize;

/// Collection output: JSON envelope or one tab-separated row per entry.
pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

/// Single-record output with a one-line text rendering.
pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Single-record output with a multi-line text rendering, for the report
/// detail and dashboard views.
pub fn print_detail<T: Serialize>(
    json: bool,
    data: T,
    lines: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for line in lines(&data) {
            println!("{}", line);
        }
    }
    Ok(())
}
