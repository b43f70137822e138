use std::sync::Arc;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// The key marking a JSON object as a reference.
pub(crate) const REF_KEY: &str = "$ref";

/// A pointer to a reusable component, such as `#/components/schemas/User`.
///
/// The pointer is kept as an opaque string: it is never resolved.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// The JSON pointer, encoded as `$ref`.
    #[serde(rename = "$ref")]
    pub ref_location: String,
}

impl Reference {
    /// Creates a reference from any pointer string.
    pub fn new(ref_location: impl Into<String>) -> Self {
        Self {
            ref_location: ref_location.into(),
        }
    }

    /// Creates a reference to a schema registered under `components/schemas`.
    pub fn from_schema_name(name: impl AsRef<str>) -> Self {
        Self::new(format!("#/components/schemas/{}", name.as_ref()))
    }
}

/// Either a [`Reference`] or a concrete value.
///
/// On the wire the reference side is written as `{"$ref": "..."}` alone, the value side
/// as the value's own fields.
///
/// Decoding picks the reference side as soon as the object carries a `$ref` string;
/// any sibling keys are dropped.
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RefOr<T> {
    /// A reference to a reusable component.
    Ref(Reference),
    /// An inline value.
    T(T),
}

impl<T> RefOr<T> {
    /// Returns the reference, if this is the reference side.
    pub fn as_ref_location(&self) -> Option<&str> {
        match self {
            Self::Ref(reference) => Some(&reference.ref_location),
            Self::T(_) => None,
        }
    }

    /// Returns the inline value, if this is the value side.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Ref(_) => None,
            Self::T(value) => Some(value),
        }
    }

    /// Mutable access to the inline value, if this is the value side.
    pub fn as_value_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ref(_) => None,
            Self::T(value) => Some(value),
        }
    }
}

impl<T> From<Reference> for RefOr<T> {
    fn from(reference: Reference) -> Self {
        Self::Ref(reference)
    }
}

/// Decodes through a buffered [`Value`] to look for `$ref` before committing to a side.
///
/// Each nested union buffers its own subtree again, so decoding cost grows with the
/// number of unions between the root and a leaf. Errors raised inside the value side
/// carry the path within the union in their message, which the JSON codec joins onto
/// the path of the union itself.
impl<'de, T> Deserialize<'de> for RefOr<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        if let Some(object) = value.as_object()
            && let Some(ref_value) = object.get(REF_KEY)
        {
            let Some(ref_location) = ref_value.as_str() else {
                return Err(D::Error::custom(format_args!(
                    "`{REF_KEY}` must be a string, found {ref_value}"
                )));
            };
            if object.len() > 1 {
                let ignored = object
                    .keys()
                    .filter(|key| *key != REF_KEY)
                    .cloned()
                    .collect::<Vec<_>>();
                warn!(%ref_location, ?ignored, "sibling keys of a reference are ignored");
            }
            return Ok(Self::Ref(Reference::new(ref_location)));
        }

        serde_path_to_error::deserialize(value)
            .map(Self::T)
            .map_err(union_error)
    }
}

const UNION_ERROR_PREFIX: &str = "in union at '";

fn union_error<E>(err: serde_path_to_error::Error<serde_json::Error>) -> E
where
    E: serde::de::Error,
{
    let path = err.path().to_string();
    let message = err.into_inner().to_string();
    let (path, message) = match union_error_path(&message) {
        Some(inner) => (
            join_path(&path, inner),
            message
                .split_once("': ")
                .map_or(message.as_str(), |(_, rest)| rest),
        ),
        None => (join_path(&path, ""), message.as_str()),
    };
    E::custom(format_args!("{UNION_ERROR_PREFIX}{path}': {message}"))
}

/// Returns the path within the union reported by an error raised while decoding the
/// value side of a [`RefOr`].
pub(crate) fn union_error_path(message: &str) -> Option<&str> {
    message
        .strip_prefix(UNION_ERROR_PREFIX)?
        .split_once("': ")
        .map(|(path, _)| path)
}

/// Joins two dotted paths, `.` standing for the root.
pub(crate) fn join_path(outer: &str, inner: &str) -> String {
    let joined = [outer, inner]
        .into_iter()
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join(".");
    if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// An opaque decoded value: `default`, `example`, enum members, example values.
///
/// The payload is immutable and reference counted. Copying a payload shares the
/// underlying value instead of duplicating it, so a cloned document and its source may
/// point at the same payload. This is sound only because nothing mutates a payload in
/// place; there is deliberately no mutable access.
#[derive(Debug, PartialEq, Serialize, Deserialize, derive_more::Deref)]
#[serde(transparent)]
#[deref(forward)]
pub struct Payload(Arc<Value>);

impl Payload {
    /// Wraps a decoded value.
    pub fn new(value: impl Into<Value>) -> Self {
        Self(Arc::new(value.into()))
    }

    /// Returns `true` if both payloads share the same allocation.
    pub fn shares_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn share(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self(Arc::new(value))
    }
}
