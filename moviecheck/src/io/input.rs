//! Loading an already-fetched catalogue response body.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use jsonschema::Draft;
use serde_json::Value;
use tracing::debug;

const RESPONSE_SCHEMA: &str = include_str!("../../../schemas/catalogue_response/v1.schema.json");

/// Path argument meaning "read from stdin".
pub const STDIN_PATH: &str = "-";

/// Read a response body from `path` (or stdin for `-`) and return its raw
/// `results` entries.
pub fn load_results(path: &Path) -> Result<Vec<Value>> {
    let raw = if path.as_os_str() == STDIN_PATH {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read response from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
    };
    parse_results(&raw).with_context(|| format!("load results from {}", path.display()))
}

/// Parse a response body: either `{"results": [...]}` or a bare array.
pub fn parse_results(raw: &str) -> Result<Vec<Value>> {
    let body: Value = serde_json::from_str(raw).context("parse response json")?;
    validate_envelope(&body)?;
    let results = match body {
        Value::Array(items) => items,
        Value::Object(mut object) => match object.remove("results") {
            Some(Value::Array(items)) => items,
            _ => bail!("response has no results array"),
        },
        _ => bail!("response must be an object or an array"),
    };
    debug!(count = results.len(), "response results loaded");
    Ok(results)
}

/// Validate the response envelope against the bundled JSON Schema (Draft 2020-12).
fn validate_envelope(body: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(RESPONSE_SCHEMA).context("parse response schema")?;
    let compiled = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&schema)
        .context("compile response schema")?;
    let messages: Vec<String> = compiled
        .iter_errors(body)
        .map(|err| err.to_string())
        .collect();
    if !messages.is_empty() {
        bail!("response schema validation failed:\n- {}", messages.join("\n- "));
    }
    Ok(())
}
