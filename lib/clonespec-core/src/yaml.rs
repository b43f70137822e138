//! YAML support using serde-saphyr.
//!
//! Only available with the `yaml` feature.
//!
//! # Example
//!
//! ```rust,ignore
//! use clonespec_core::{OpenApi, ToYaml, clone_document};
//!
//! let spec = OpenApi::from_yaml(&std::fs::read_to_string("openapi.yml")?)?;
//! let copy = clone_document(&spec);
//!
//! std::fs::write("openapi-copy.yml", copy.to_yaml()?)?;
//! ```

use serde::Serialize;
use tracing::debug;

use crate::codec::CodecError;
use crate::model::OpenApi;

/// Error type for YAML serialization.
pub type YamlError = serde_saphyr::ser_error::Error;

/// Extension trait writing any serializable value, typically an [`OpenApi`], as YAML.
pub trait ToYaml: Serialize + Sized {
    /// Serializes this value to a YAML string.
    ///
    /// # Errors
    ///
    /// Returns a [`YamlError`] if serialization fails.
    fn to_yaml(&self) -> Result<String, YamlError> {
        serde_saphyr::to_string(self)
    }
}

impl<T: Serialize + Sized> ToYaml for T {}

impl OpenApi {
    /// Decodes a document from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::YamlDecode`] if the text is not a valid document.
    pub fn from_yaml(yaml: &str) -> Result<Self, CodecError> {
        let spec: Self = serde_saphyr::from_str(yaml).map_err(|err| CodecError::YamlDecode {
            error: err.to_string(),
        })?;

        debug!(bytes = yaml.len(), paths = spec.paths.len(), "document decoded");
        Ok(spec)
    }
}
