use tracing::{debug, trace};

use super::DeepClone;
use crate::model::{OpenApi, Paths};

/// Returns an independent copy of `spec`.
///
/// The copy is structurally equal to `spec`; mutating either document afterwards is
/// never visible through the other. Opaque payloads (`default`, `example`, enum
/// members, example values) are shared, see [`Payload`](crate::Payload).
///
/// Cloning cannot fail.
///
/// ```rust
/// use clonespec_core::{OpenApi, PathItem, clone_document};
///
/// let mut original = OpenApi::default();
/// original.paths.insert("/items".to_string(), PathItem::default());
///
/// let mut copy = clone_document(&original);
/// copy.paths.insert("/orders".to_string(), PathItem::default());
///
/// assert_eq!(original.paths.len(), 1);
/// assert_eq!(copy.paths.len(), 2);
/// ```
pub fn clone_document(spec: &OpenApi) -> OpenApi {
    debug!(
        openapi = %spec.openapi,
        paths = spec.paths.len(),
        components = spec.components.is_some(),
        "cloning document"
    );
    let result = spec.deep_clone();
    debug!(paths = result.paths.len(), "document cloned");
    result
}

impl DeepClone for OpenApi {
    fn deep_clone(&self) -> Self {
        let Self {
            openapi,
            info,
            servers,
            paths,
            components,
            tags,
            security,
            x_tag_groups,
            include_labels,
        } = self;
        Self {
            openapi: openapi.deep_clone(),
            info: info.deep_clone(),
            servers: servers.deep_clone(),
            paths: clone_paths(paths),
            components: components.deep_clone(),
            tags: tags.deep_clone(),
            security: security.deep_clone(),
            x_tag_groups: x_tag_groups.deep_clone(),
            include_labels: include_labels.deep_clone(),
        }
    }
}

fn clone_paths(paths: &Paths) -> Paths {
    paths
        .iter()
        .map(|(template, item)| {
            trace!(%template, "cloning path item");
            (template.deep_clone(), item.deep_clone())
        })
        .collect()
}

/// Same as [`clone_document`].
impl Clone for OpenApi {
    fn clone(&self) -> Self {
        clone_document(self)
    }
}
