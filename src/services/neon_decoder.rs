//! Decoding of `config.<env>.neon` files into nested mappings.
//!
//! NEON is read as YAML after a line-level rewrite of the constructs YAML
//! rejects: leading tabs become spaces, plain values starting with `%`
//! (parameter references) or `@` (service references) are quoted, and the
//! NEON booleans `yes`/`no`/`on`/`off` become `true`/`false`.

use std::path::Path;

use serde_yaml::Value;

use crate::domain::AppError;

const TAB_WIDTH: usize = 4;

/// Decode file content into a YAML value. Blank or comment-only content decodes to `Null`.
pub fn decode(content: &str, path: &Path) -> Result<Value, AppError> {
    let normalized = content.lines().map(normalize_line).collect::<Vec<_>>().join("\n");
    let has_content = normalized.lines().map(str::trim).any(|l| !l.is_empty() && !l.starts_with('#'));
    if !has_content {
        return Ok(Value::Null);
    }
    serde_yaml::from_str(&normalized)
        .map_err(|e| AppError::Parse { path: path.to_path_buf(), details: e.to_string() })
}

/// Whether a decoded document counts as empty and should be skipped.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        Value::Tagged(tagged) => is_falsy(&tagged.value),
    }
}

/// The `parameters.database.default` block, if present and non-empty.
pub fn database_block(document: &Value) -> Option<&Value> {
    document
        .get("parameters")
        .and_then(|p| p.get("database"))
        .and_then(|d| d.get("default"))
        .filter(|block| !is_falsy(block))
}

fn normalize_line(line: &str) -> String {
    let line = expand_leading_tabs(line);
    let body = line.trim_start();
    if body.starts_with('#') {
        return line;
    }

    let mut rest = body;
    while let Some(item) = rest.strip_prefix("- ") {
        rest = item.trim_start();
    }
    let value = match rest.find(": ") {
        Some(i) if !rest.starts_with(['%', '@']) => rest[i + 2..].trim_start(),
        _ => rest,
    };
    let value_start = line.len() - value.len();

    match rewrite_scalar(value) {
        Some(rewritten) => format!("{}{}", &line[..value_start], rewritten),
        None => line,
    }
}

/// YAML spelling of a NEON plain scalar, when it differs.
fn rewrite_scalar(value: &str) -> Option<String> {
    let (scalar, comment) = match value.find(" #") {
        Some(i) => value.split_at(i),
        None => (value, ""),
    };
    let scalar = scalar.trim_end();

    if scalar.starts_with(['%', '@']) {
        return Some(format!("'{}'{}", scalar.replace('\'', "''"), comment));
    }
    match scalar.to_ascii_lowercase().as_str() {
        "yes" | "on" => Some(format!("true{}", comment)),
        "no" | "off" => Some(format!("false{}", comment)),
        _ => None,
    }
}

fn expand_leading_tabs(line: &str) -> String {
    let indent = line.len() - line.trim_start_matches(['\t', ' ']).len();
    let (lead, rest) = line.split_at(indent);
    let expanded: String =
        lead.chars().map(|c| if c == '\t' { " ".repeat(TAB_WIDTH) } else { c.to_string() }).collect();
    expanded + rest
}
