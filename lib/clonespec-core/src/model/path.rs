use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Parameter, RefOr, RequestBody, Response, SecurityRequirement, Server, is_false};

/// The path table: URL template to [`PathItem`].
pub type Paths = IndexMap<String, PathItem>;

/// Responses of an operation, keyed by status code (or `default`).
pub type Responses = IndexMap<String, RefOr<Response>>;

/// The eight HTTP methods a [`PathItem`] can hold an operation for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HttpMethod {
    /// `GET`
    #[display("get")]
    Get,
    /// `PUT`
    #[display("put")]
    Put,
    /// `POST`
    #[display("post")]
    Post,
    /// `DELETE`
    #[display("delete")]
    Delete,
    /// `OPTIONS`
    #[display("options")]
    Options,
    /// `HEAD`
    #[display("head")]
    Head,
    /// `PATCH`
    #[display("patch")]
    Patch,
    /// `TRACE`
    #[display("trace")]
    Trace,
}

impl HttpMethod {
    /// All methods, in the order they appear in a path item.
    pub const ALL: [Self; 8] = [
        Self::Get,
        Self::Put,
        Self::Post,
        Self::Delete,
        Self::Options,
        Self::Head,
        Self::Patch,
        Self::Trace,
    ];
}

/// The operations available on a single path.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    /// An external definition of this path item.
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub ref_location: Option<String>,
    /// A short summary applying to all operations of the path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// A description applying to all operations of the path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<Operation>,
    /// Servers overriding the document servers for this path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,
    /// Parameters shared by all operations of the path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<RefOr<Parameter>>>,
}

impl PathItem {
    /// Returns the operation bound to `method`, if any.
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Trace => self.trace.as_ref(),
        }
    }

    /// Mutable access to the operation slot for `method`.
    pub fn operation_mut(&mut self, method: HttpMethod) -> &mut Option<Operation> {
        match method {
            HttpMethod::Get => &mut self.get,
            HttpMethod::Put => &mut self.put,
            HttpMethod::Post => &mut self.post,
            HttpMethod::Delete => &mut self.delete,
            HttpMethod::Options => &mut self.options,
            HttpMethod::Head => &mut self.head,
            HttpMethod::Patch => &mut self.patch,
            HttpMethod::Trace => &mut self.trace,
        }
    }

    /// Iterates over the defined operations, in [`HttpMethod::ALL`] order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        HttpMethod::ALL
            .into_iter()
            .filter_map(|method| self.operation(method).map(|operation| (method, operation)))
    }
}

/// A single API operation on a path.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Tags for documentation grouping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unique identifier of the operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Operation-level parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<RefOr<Parameter>>>,
    /// The request body, if the operation accepts one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    /// Possible responses.
    #[serde(default)]
    pub responses: Responses,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "is_false")]
    pub deprecated: bool,
    /// Servers overriding the path and document servers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,
    /// Security requirements overriding the document ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
    /// The `x-codeSamples` vendor extension.
    #[serde(
        rename = "x-codeSamples",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub x_code_samples: Option<Vec<XCodeSample>>,
    /// The `x-internal` vendor extension, hiding the operation from public output.
    #[serde(rename = "x-internal", default, skip_serializing_if = "is_false")]
    pub x_internal: bool,
    /// Labels matched against [`OpenApi::include_labels`](super::OpenApi::include_labels).
    ///
    /// Not part of the wire form.
    #[serde(skip)]
    pub labels: Option<Vec<String>>,
}

/// A code sample attached to an operation through `x-codeSamples`.
#[allow(missing_docs)]
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct XCodeSample {
    pub lang: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub source: String,
}
