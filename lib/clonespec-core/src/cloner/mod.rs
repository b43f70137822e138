//! Structural deep copy of OpenAPI documents.
//!
//! Every node of the [model](crate::model) implements [`DeepClone`]. A deep clone owns
//! freshly allocated storage for every node, sequence and mapping of the source, so
//! mutating the copy is never observable through the source and vice versa.
//!
//! The rules are uniform:
//!
//! - absent stays absent (`None` clones to `None` without allocating),
//! - present stays present, including empty sequences and mappings,
//! - a [`RefOr`](crate::RefOr) keeps its side,
//! - mappings keep their key set and their iteration order,
//! - scalars are copied by value.
//!
//! The one exception is [`Payload`](crate::Payload): payloads are immutable and are
//! shared between the source and the copy rather than duplicated.
//!
//! Node implementations destructure `Self` without a rest pattern, so a field added to
//! the model does not compile until it gets a clone rule here.

use std::hash::Hash;

use indexmap::IndexMap;
use serde_json::Number;

use crate::model::ParameterIn;

mod components;
mod content;
mod document;
mod metadata;
mod parameters;
mod paths;
mod schema;
mod union;

pub use self::document::clone_document;

/// Produces a copy that shares no mutable state with `self`.
///
/// ```rust
/// use clonespec_core::{DeepClone, Operation};
///
/// let original = Operation {
///     labels: Some(vec!["public".to_string()]),
///     ..Operation::default()
/// };
///
/// let mut copy = original.deep_clone();
/// copy.labels.get_or_insert_with(Vec::new).push("beta".to_string());
///
/// assert_eq!(original.labels, Some(vec!["public".to_string()]));
/// ```
pub trait DeepClone {
    /// Returns an independent copy of `self`.
    #[must_use]
    fn deep_clone(&self) -> Self;
}

macro_rules! copy_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DeepClone for $ty {
                fn deep_clone(&self) -> Self {
                    *self
                }
            }
        )*
    };
}

copy_by_value!(bool, u64, ParameterIn);

macro_rules! clone_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DeepClone for $ty {
                fn deep_clone(&self) -> Self {
                    self.clone()
                }
            }
        )*
    };
}

clone_by_value!(String, Number);

impl<T> DeepClone for Option<T>
where
    T: DeepClone,
{
    fn deep_clone(&self) -> Self {
        self.as_ref().map(T::deep_clone)
    }
}

impl<T> DeepClone for Box<T>
where
    T: DeepClone,
{
    fn deep_clone(&self) -> Self {
        Box::new(T::deep_clone(self))
    }
}

impl<T> DeepClone for Vec<T>
where
    T: DeepClone,
{
    fn deep_clone(&self) -> Self {
        self.iter().map(T::deep_clone).collect()
    }
}

impl<K, V> DeepClone for IndexMap<K, V>
where
    K: DeepClone + Hash + Eq,
    V: DeepClone,
{
    fn deep_clone(&self) -> Self {
        self.iter()
            .map(|(key, value)| (key.deep_clone(), value.deep_clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_absent_option_absent() {
        let absent: Option<Vec<String>> = None;

        assert_eq!(absent.deep_clone(), None);
    }

    #[test]
    fn should_keep_empty_collections_present() {
        let empty_list: Option<Vec<String>> = Some(Vec::new());
        let empty_map: Option<IndexMap<String, String>> = Some(IndexMap::new());

        assert_eq!(empty_list.deep_clone(), Some(Vec::new()));
        assert_eq!(empty_map.deep_clone(), Some(IndexMap::new()));
    }

    #[test]
    fn should_allocate_fresh_sequence() {
        let original = vec!["a".to_string(), "b".to_string()];

        let mut copy = original.deep_clone();
        if let Some(first) = copy.first_mut() {
            *first = "z".to_string();
        }
        copy.push("c".to_string());

        assert_eq!(original, ["a", "b"]);
        assert_eq!(copy, ["z", "b", "c"]);
        assert_ne!(original.as_ptr(), copy.as_ptr());
    }

    #[test]
    fn should_preserve_mapping_order_and_keys() {
        let original = IndexMap::from([
            ("zeta".to_string(), "1".to_string()),
            ("alpha".to_string(), "2".to_string()),
            ("mu".to_string(), "3".to_string()),
        ]);

        let mut copy = original.deep_clone();

        assert_eq!(
            copy.keys().collect::<Vec<_>>(),
            original.keys().collect::<Vec<_>>()
        );
        copy.insert("omega".to_string(), "4".to_string());
        assert_eq!(original.len(), 3);
    }

    #[test]
    fn should_copy_scalars_by_value() {
        assert!(true.deep_clone());
        assert_eq!(42_u64.deep_clone(), 42);
        assert_eq!(Number::from_f64(1.5).deep_clone(), Number::from_f64(1.5));
        assert_eq!(ParameterIn::Cookie.deep_clone(), ParameterIn::Cookie);
    }

    #[test]
    fn should_allocate_fresh_box() {
        let original = Box::new("boxed".to_string());

        let copy = original.deep_clone();

        assert_eq!(copy, original);
        assert!(!std::ptr::eq(original.as_ref(), copy.as_ref()));
    }
}
