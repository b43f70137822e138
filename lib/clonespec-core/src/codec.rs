//! Decoding and encoding documents.
//!
//! The clone engine works on decoded documents only; these helpers are the thin
//! collaborator turning JSON text into an [`OpenApi`] and back.

use tracing::debug;

use crate::model::{OpenApi, join_path, union_error_path};

/// Errors raised while decoding or encoding a document.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum CodecError {
    /// The JSON text is not a valid document.
    ///
    /// `path` locates the offending field, e.g. `paths./items.get.responses`.
    #[display("Failed to decode document at '{path}': {error}")]
    #[from(skip)]
    Json {
        /// Where decoding failed.
        path: String,
        /// The underlying JSON error.
        error: serde_json::Error,
    },

    /// The document could not be written as JSON.
    Encode(serde_json::Error),

    /// The YAML text is not a valid document.
    #[cfg(feature = "yaml")]
    #[display("Failed to decode YAML document: {error}")]
    #[from(skip)]
    YamlDecode {
        /// Description of the YAML failure.
        error: String,
    },
}

impl OpenApi {
    /// Decodes a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Json`] with the path of the first invalid field, or of the
    /// trailing content if the text holds more than one JSON value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clonespec_core::OpenApi;
    ///
    /// let spec = OpenApi::from_json(r#"{"openapi": "3.0.3", "paths": {}}"#)?;
    /// assert_eq!(spec.openapi, "3.0.3");
    /// # Ok::<(), clonespec_core::CodecError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CodecError> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        let spec: Self = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
            let path = err.path().to_string();
            let error = err.into_inner();
            let message = error.to_string();
            let path = match union_error_path(&message) {
                Some(inner) => join_path(&path, inner),
                None => path,
            };
            CodecError::Json { path, error }
        })?;
        deserializer.end().map_err(|error| CodecError::Json {
            path: ".".to_string(),
            error,
        })?;

        debug!(bytes = json.len(), paths = spec.paths.len(), "document decoded");
        Ok(spec)
    }

    /// Encodes the document as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encode`] if a payload cannot be written as JSON.
    pub fn to_json(&self) -> Result<String, CodecError> {
        let json = serde_json::to_string(self)?;
        debug!(bytes = json.len(), "document encoded");
        Ok(json)
    }

    /// Encodes the document as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encode`] if a payload cannot be written as JSON.
    pub fn to_json_pretty(&self) -> Result<String, CodecError> {
        let json = serde_json::to_string_pretty(self)?;
        debug!(bytes = json.len(), "document encoded");
        Ok(json)
    }

    /// Encodes the document as a JSON value.
    ///
    /// Comparing values ignores key order, which makes it the natural way to check two
    /// documents encode to the same content.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encode`] if a payload cannot be written as JSON.
    pub fn to_json_value(&self) -> Result<serde_json::Value, CodecError> {
        Ok(serde_json::to_value(self)?)
    }
}
