use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// General information about the API.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    /// The title of the API.
    pub title: String,
    /// A description of the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A URL to the terms of service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,
    /// Contact information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    /// License information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    /// The version of the API document.
    pub version: String,
    /// The `x-logo` vendor extension.
    #[serde(rename = "x-logo", default, skip_serializing_if = "Option::is_none")]
    pub x_logo: Option<XLogo>,
}

/// Contact information for the exposed API.
#[allow(missing_docs)]
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// License information for the exposed API.
#[allow(missing_docs)]
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// The `x-logo` vendor extension, used by documentation renderers.
#[allow(missing_docs)]
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XLogo {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// A server hosting the API.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Server {
    /// The server URL, possibly templated with `{variable}`.
    pub url: String,
    /// A description of the host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Values for the URL template variables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<IndexMap<String, ServerVariable>>,
}

/// A variable used in a server URL template.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerVariable {
    /// The allowed values.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    /// The value used when none is supplied.
    pub default: String,
    /// A description of the variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A tag used to group operations.
#[allow(missing_docs)]
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An entry of the `x-tagGroups` vendor extension, grouping tags in navigation.
#[allow(missing_docs)]
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct XTagGroup {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
