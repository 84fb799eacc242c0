//! Wire types for the data dictionary: alias schemas, field descriptors, and
//! the opaque row shape served for dynamically-named tables.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// One record belonging to an alias's dataset.
///
/// Rows have no compile-time shape; columns are whatever the alias's physical
/// table carries, keyed uppercase on the wire.
pub type AliasRow = serde_json::Map<String, Value>;

/// Canonical string form of a row value, used for filtering, ordering, and
/// identity comparison. Missing and null values are the empty string.
pub fn value_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => number.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Dictionary field type, serialized as the single-letter codes the UI
/// contract uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FieldType {
    #[serde(rename = "C")]
    Character,
    #[serde(rename = "N")]
    Numeric,
    #[serde(rename = "D")]
    Date,
    #[serde(rename = "L")]
    Logical,
    #[serde(rename = "M")]
    Memo,
}

impl FieldType {
    /// Single-letter code used in persistent storage.
    pub fn as_code(&self) -> &'static str {
        match self {
            FieldType::Character => "C",
            FieldType::Numeric => "N",
            FieldType::Date => "D",
            FieldType::Logical => "L",
            FieldType::Memo => "M",
        }
    }

    pub fn from_code(code: &str) -> Option<FieldType> {
        match code {
            "C" => Some(FieldType::Character),
            "N" => Some(FieldType::Numeric),
            "D" => Some(FieldType::Date),
            "L" => Some(FieldType::Logical),
            "M" => Some(FieldType::Memo),
            _ => None,
        }
    }
}

/// One entry of a select-constrained field's enumeration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldOption {
    /// Stored value; the contract allows strings, numbers, and booleans.
    #[schema(value_type = Object)]
    pub value: Value,
    pub label: String,
}

/// One column's full UI/validation contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldDescriptor {
    pub field: String,
    pub title: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub size: i32,
    pub required: bool,
    pub editable: bool,
    pub enabled: bool,
    #[serde(rename = "virtual")]
    pub is_virtual: bool,
    #[serde(default)]
    pub options: Vec<FieldOption>,
    #[serde(default)]
    pub decimals: i32,
    #[serde(default)]
    pub exist_trigger: bool,
    #[serde(default)]
    pub help: String,
    pub order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agrup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_query: Option<String>,
    /// Declarative lookup binding; passed through opaquely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub standard_query_detail: Option<Value>,
}

/// UI grouping tab.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Folder {
    pub id: String,
    pub title: String,
}

/// UI grouping section, ordered for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Agrup {
    pub id: String,
    pub title: String,
    pub order: i32,
}

/// The full metadata describing one alias: field structure plus UI grouping.
///
/// `fields` order is the canonical display and initializer order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AliasSchema {
    pub description: String,
    #[serde(rename = "struct")]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub folders: Vec<Folder>,
    #[serde(default)]
    pub agrups: Vec<Agrup>,
}

/// Request body of a schema synchronization call.
///
/// Exactly one source is honored per call: the `aliasSchemas` mapping, then
/// the ordered `schemas` list, then the compiled-in seed via `useSeed`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SyncRequest {
    #[serde(rename = "aliasSchemas", default)]
    pub alias_schemas: Option<std::collections::BTreeMap<String, AliasSchema>>,
    #[serde(default)]
    pub schemas: Option<Vec<SyncSchemaEntry>>,
    #[serde(rename = "useSeed", default)]
    pub use_seed: bool,
}

/// One entry of the ordered-list synchronization format.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SyncSchemaEntry {
    pub alias: String,
    #[serde(flatten)]
    pub schema: AliasSchema,
}
