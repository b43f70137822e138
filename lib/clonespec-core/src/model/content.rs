use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Header, Payload, RefOr, Schema, is_false};

/// The body accepted by an operation.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Media type (e.g. `application/json`) to its description.
    ///
    /// Request bodies hold media types inline only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
}

/// A single response of an operation.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// A short description of the response, required on the wire.
    #[serde(default)]
    pub description: String,
    /// Response headers by name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, RefOr<Header>>>,
    /// Media type to its description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, RefOr<MediaType>>>,
}

/// The schema and examples of one media type.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<RefOr<Schema>>,
    /// A single example, shared with any copy of the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Payload>,
    /// Named examples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<IndexMap<String, RefOr<Example>>>,
    /// Property name to its encoding, for multipart and form bodies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<IndexMap<String, Encoding>>,
}

/// A named example.
#[allow(missing_docs)]
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Payload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_value: Option<String>,
}

/// How a single property of a request body is encoded.
#[allow(missing_docs)]
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encoding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, RefOr<Header>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub explode: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub allow_reserved: bool,
}
