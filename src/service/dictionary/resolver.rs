//! Record identity resolution and positioned-payload lookup.
//!
//! Each alias has one fixed identity rule. Positioned lookups receive a
//! URL-embedded JSON payload and resolve to a concrete row; when no match
//! can be made against a non-empty alias the first row is served instead so
//! the UI is never left without a record to position on.

use percent_encoding::percent_decode_str;
use serde_json::Value;

use crate::model::dictionary::{value_string, AliasRow};

/// Identity fields for one alias, in fallback order.
///
/// Product x account bindings identify by the ERP product and only fall back
/// to their own sequence code when the product field is absent.
fn identity_fields(alias: &str) -> &'static [&'static str] {
    match alias {
        "Z10" => &["Z10_COD"],
        "Z11" => &["Z11_COD"],
        "Z00" => &["Z00_COD"],
        "Z01" => &["Z01_PRDERP", "Z01_COD"],
        "Z02" => &["Z02_COD"],
        "Z04" => &["Z04_COD"],
        _ => &[],
    }
}

/// Resolves the logical identity of a record, coerced to its string form.
/// An empty result means "identity unknown" and is used as a sentinel to
/// skip matching; this never fails.
pub fn resolve_id(alias: &str, row: &AliasRow) -> String {
    for field in identity_fields(&alias.to_uppercase()) {
        let value = value_string(row.get(*field));
        if !value.is_empty() {
            return value;
        }
    }

    String::new()
}

/// Decodes and parses the URL-embedded positioned payload.
///
/// Some clients serialize the payload with a run of duplicated closing
/// braces at the end; when the decoded text does not parse as-is, the run is
/// collapsed to a single brace and parsing is retried. Anything still
/// unparsable yields an empty positioned record.
pub fn parse_positioned_payload(raw: &str) -> AliasRow {
    let Ok(decoded) = percent_decode_str(raw).decode_utf8() else {
        return AliasRow::new();
    };

    let trimmed = decoded.trim_end();
    let payload = serde_json::from_str::<Value>(trimmed).ok().or_else(|| {
        if !trimmed.ends_with('}') {
            return None;
        }

        let sanitized = format!("{}}}", trimmed.trim_end_matches('}'));
        serde_json::from_str(&sanitized).ok()
    });

    let Some(payload) = payload else {
        return AliasRow::new();
    };

    // The positioned record is the `item` sub-object when present, the whole
    // payload otherwise.
    let positioned = match payload.get("item") {
        Some(item) if item.is_object() => item.clone(),
        _ => payload,
    };

    positioned.as_object().cloned().unwrap_or_default()
}

/// Scans the alias's rows for the positioned record's identity.
///
/// No identity or no match falls back to the alias's first row; an alias
/// with zero rows yields an empty object. Never an error.
pub fn find_positioned(alias: &str, positioned: &AliasRow, rows: &[AliasRow]) -> Value {
    if rows.is_empty() {
        return Value::Object(AliasRow::new());
    }

    let code = resolve_id(alias, positioned);

    if !code.is_empty() {
        if let Some(found) = rows.iter().find(|row| resolve_id(alias, row) == code) {
            return Value::Object(found.clone());
        }
    }

    Value::Object(rows[0].clone())
}
