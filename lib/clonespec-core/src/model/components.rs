use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Example, Header, Parameter, RefOr, Response, Schema, SecurityScheme};

/// Named registries of reusable objects.
///
/// Each registry is independent; a missing registry is kept apart from an empty one.
#[allow(missing_docs)]
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schemas: Option<IndexMap<String, RefOr<Schema>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responses: Option<IndexMap<String, RefOr<Response>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<IndexMap<String, RefOr<Parameter>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<IndexMap<String, RefOr<Example>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, RefOr<Header>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_schemes: Option<IndexMap<String, RefOr<SecurityScheme>>>,
}

impl Components {
    /// Returns the registered schema named `name`.
    pub fn schema(&self, name: &str) -> Option<&RefOr<Schema>> {
        self.schemas.as_ref()?.get(name)
    }

    /// Mutable access to the inline schema named `name`.
    pub fn schema_mut(&mut self, name: &str) -> Option<&mut Schema> {
        self.schemas
            .as_mut()?
            .get_mut(name)
            .and_then(RefOr::as_value_mut)
    }
}
