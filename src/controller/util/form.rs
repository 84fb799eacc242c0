//! Legacy form-envelope handling for write payloads.

use serde_json::Value;

use crate::model::dictionary::AliasRow;

/// Unwraps a payload wrapped in a single top-level key starting with `FORM`
/// (the legacy form envelope). Bodies without the envelope, or with a
/// non-object envelope value, are used as-is; non-object bodies normalize to
/// an empty record.
pub fn normalize_body(body: &Value) -> AliasRow {
    let Some(map) = body.as_object() else {
        return AliasRow::new();
    };

    if let Some((_, inner)) = map.iter().find(|(key, _)| key.starts_with("FORM")) {
        if let Some(envelope) = inner.as_object() {
            return envelope.clone();
        }
    }

    map.clone()
}
