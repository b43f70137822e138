//! The in-memory OpenAPI document model.
//!
//! The node types form an owned tree. Optional fields and collections use `Option`
//! so that an absent collection stays distinct from an empty one, mappings are
//! [`IndexMap`](indexmap::IndexMap)s to keep decode order, and every
//! "value or reference" slot is a [`RefOr`].
//!
//! Nodes below [`OpenApi`] do not implement [`Clone`]: copies go through
//! [`DeepClone`](crate::DeepClone).

mod components;
mod content;
mod document;
mod info;
mod parameter;
mod path;
mod reference;
mod schema;
mod security;

pub use self::components::Components;
pub use self::content::{Encoding, Example, MediaType, RequestBody, Response};
pub use self::document::OpenApi;
pub use self::info::{Contact, Info, License, Server, ServerVariable, Tag, XLogo, XTagGroup};
pub use self::parameter::{Header, Parameter, ParameterIn};
pub use self::path::{HttpMethod, Operation, PathItem, Paths, Responses, XCodeSample};
pub use self::reference::{Payload, RefOr, Reference};
pub(crate) use self::reference::{join_path, union_error_path};
pub use self::schema::Schema;
pub use self::security::{OAuthFlow, OAuthFlows, SecurityRequirement, SecurityScheme};

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
