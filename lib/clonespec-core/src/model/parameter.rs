use serde::{Deserialize, Serialize};

use super::{RefOr, Schema, is_false};

/// The location of a parameter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterIn {
    /// `?name=value`
    #[default]
    Query,
    /// An HTTP header.
    Header,
    /// A templated segment of the path.
    Path,
    /// A cookie.
    Cookie,
}

/// A single operation parameter.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// The parameter name, case sensitive.
    pub name: String,
    /// Where the parameter is read from.
    #[serde(rename = "in")]
    pub location: ParameterIn,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Always `true` for path parameters.
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "is_false")]
    pub deprecated: bool,
    /// Allows sending the parameter with an empty value.
    #[serde(default, skip_serializing_if = "is_false")]
    pub allow_empty_value: bool,
    /// The type of the parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<RefOr<Schema>>,
    /// How the value is serialized, e.g. `form` or `simple`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Whether arrays and objects expand to separate parameters.
    #[serde(default, skip_serializing_if = "is_false")]
    pub explode: bool,
}

/// A response or encoding header.
///
/// Same as a [`Parameter`] without `name` and `in`.
#[allow(missing_docs)]
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub deprecated: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub allow_empty_value: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<RefOr<Schema>>,
}
