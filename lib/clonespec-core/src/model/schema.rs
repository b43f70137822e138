use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::{Payload, RefOr, is_false};

/// A data type definition.
///
/// `allOf`, `oneOf` and `anyOf` each hold a single schema slot rather than a list,
/// matching the documents this crate is fed with.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// The type tag, e.g. `object`, `string`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Box<RefOr<Schema>>>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Box<RefOr<Schema>>>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Box<RefOr<Schema>>>,
    /// The element type of an array schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<RefOr<Schema>>>,
    /// Named properties of an object schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, RefOr<Schema>>>,
    /// The type of properties not listed in `properties`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Box<RefOr<Schema>>>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A refinement of the type, e.g. `int64`, `date-time`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Payload>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Payload>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<Number>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,
    /// Whether `maximum` itself is excluded.
    #[serde(default, skip_serializing_if = "is_false")]
    pub exclusive_maximum: bool,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,
    /// Whether `minimum` itself is excluded.
    #[serde(default, skip_serializing_if = "is_false")]
    pub exclusive_minimum: bool,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// An ECMA-262 regular expression, kept verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "is_false")]
    pub unique_items: bool,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<u64>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<u64>,
    /// Names of the mandatory properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    /// The allowed values.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Payload>>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "is_false")]
    pub nullable: bool,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "is_false")]
    pub deprecated: bool,
}

impl Schema {
    /// Creates a schema with only a type tag.
    pub fn of_type(schema_type: impl Into<String>) -> Self {
        Self {
            schema_type: Some(schema_type.into()),
            ..Self::default()
        }
    }

    /// Mutable access to an inline property schema.
    ///
    /// Returns `None` when the property is missing or is a reference.
    pub fn property_mut(&mut self, name: &str) -> Option<&mut Schema> {
        self.properties
            .as_mut()?
            .get_mut(name)
            .and_then(RefOr::as_value_mut)
    }
}
