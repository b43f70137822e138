use serde::{Deserialize, Serialize};

use super::{Components, Info, Paths, SecurityRequirement, Server, Tag, XTagGroup};

/// The root of an OpenAPI document.
///
/// Build it from decoded content (see [`OpenApi::from_json`]) or by hand:
///
/// ```rust
/// use clonespec_core::{Info, OpenApi};
///
/// let spec = OpenApi {
///     openapi: "3.0.3".to_string(),
///     info: Some(Info {
///         title: "Items".to_string(),
///         version: "1.0.0".to_string(),
///         ..Info::default()
///     }),
///     ..OpenApi::default()
/// };
/// assert!(spec.paths.is_empty());
/// ```
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenApi {
    /// The OpenAPI version, e.g. `3.0.3`.
    pub openapi: String,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Info>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,
    /// The path table.
    #[serde(default)]
    pub paths: Paths,
    /// Reusable objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Security requirements applying to every operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
    /// The `x-tagGroups` vendor extension.
    #[serde(
        rename = "x-tagGroups",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub x_tag_groups: Option<Vec<XTagGroup>>,
    /// Labels selecting which operations downstream tooling keeps.
    ///
    /// Not part of the wire form.
    #[serde(skip)]
    pub include_labels: Vec<String>,
}
