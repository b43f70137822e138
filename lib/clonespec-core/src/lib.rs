//! # Clonespec Core
//!
//! Deep copies of in-memory OpenAPI documents.
//!
//! Tools that rewrite a document (filtering operations by label, splitting schemas,
//! hiding internal endpoints) usually start from a copy so the source stays untouched.
//! This crate provides that copy: [`clone_document`] returns a document that is equal
//! to the source but shares no mutable state with it.
//!
//! ## Quick Start
//!
//! ```rust
//! use clonespec_core::{HttpMethod, OpenApi, clone_document};
//!
//! let spec = OpenApi::from_json(r#"{
//!     "openapi": "3.0.3",
//!     "info": {"title": "Items", "version": "1.0.0"},
//!     "paths": {
//!         "/items": {"get": {"operationId": "listItems", "responses": {"200": {"description": "OK"}}}}
//!     }
//! }"#)?;
//!
//! let mut copy = clone_document(&spec);
//! if let Some(item) = copy.paths.get_mut("/items") {
//!     *item.operation_mut(HttpMethod::Get) = None;
//! }
//!
//! assert!(spec.paths["/items"].get.is_some());
//! assert!(copy.paths["/items"].get.is_none());
//! # Ok::<(), clonespec_core::CodecError>(())
//! ```
//!
//! ## What is copied
//!
//! - Every node, sequence and mapping gets fresh storage.
//! - Absent fields stay absent, present-but-empty collections stay present and empty.
//! - Each [`RefOr`] keeps its side; [`Reference`]s are copied as opaque strings and are
//!   never resolved.
//! - [`Payload`]s (`default`, `example`, enum members, example values) are immutable
//!   and shared between the source and the copy. This is the one place where the copy
//!   is shallow.
//!
//! ## Features
//!
//! - `yaml`: `ToYaml` and `OpenApi::from_yaml`, backed by `serde-saphyr`.

mod cloner;
mod codec;
pub mod model;

#[cfg(feature = "yaml")]
mod yaml;

pub use self::cloner::{DeepClone, clone_document};
pub use self::codec::CodecError;
pub use self::model::{
    Components, Contact, Encoding, Example, Header, HttpMethod, Info, License, MediaType,
    OAuthFlow, OAuthFlows, OpenApi, Operation, Parameter, ParameterIn, PathItem, Paths, Payload,
    RefOr, Reference, RequestBody, Response, Responses, Schema, SecurityRequirement,
    SecurityScheme, Server, ServerVariable, Tag, XCodeSample, XLogo, XTagGroup,
};

#[cfg(feature = "yaml")]
pub use self::yaml::{ToYaml, YamlError};
