//! Machine-readable stdout payloads.

use serde_json::json;

use tinct_model::{Result, TinctError};
use tinct_scheme::SchemeTable;

/// The success payload: the palette as a flat `{slot: hex}` JSON object.
pub fn table_payload(table: &SchemeTable) -> Result<String> {
    serde_json::to_string(table).map_err(|error| TinctError::Upstream(error.to_string()))
}

/// The failure payload: `{"error": message}`.
pub fn error_payload(error: &TinctError) -> String {
    json!({ "error": error.to_string() }).to_string()
}
