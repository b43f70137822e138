use super::DeepClone;
use crate::model::{Operation, PathItem, XCodeSample};

impl DeepClone for PathItem {
    fn deep_clone(&self) -> Self {
        let Self {
            ref_location,
            summary,
            description,
            get,
            put,
            post,
            delete,
            options,
            head,
            patch,
            trace,
            servers,
            parameters,
        } = self;
        Self {
            ref_location: ref_location.deep_clone(),
            summary: summary.deep_clone(),
            description: description.deep_clone(),
            get: get.deep_clone(),
            put: put.deep_clone(),
            post: post.deep_clone(),
            delete: delete.deep_clone(),
            options: options.deep_clone(),
            head: head.deep_clone(),
            patch: patch.deep_clone(),
            trace: trace.deep_clone(),
            servers: servers.deep_clone(),
            parameters: parameters.deep_clone(),
        }
    }
}

impl DeepClone for Operation {
    fn deep_clone(&self) -> Self {
        let Self {
            tags,
            summary,
            description,
            operation_id,
            parameters,
            request_body,
            responses,
            deprecated,
            servers,
            security,
            x_code_samples,
            x_internal,
            labels,
        } = self;
        Self {
            tags: tags.deep_clone(),
            summary: summary.deep_clone(),
            description: description.deep_clone(),
            operation_id: operation_id.deep_clone(),
            parameters: parameters.deep_clone(),
            request_body: request_body.deep_clone(),
            responses: responses.deep_clone(),
            deprecated: deprecated.deep_clone(),
            servers: servers.deep_clone(),
            security: security.deep_clone(),
            x_code_samples: x_code_samples.deep_clone(),
            x_internal: x_internal.deep_clone(),
            labels: labels.deep_clone(),
        }
    }
}

impl DeepClone for XCodeSample {
    fn deep_clone(&self) -> Self {
        let Self {
            lang,
            label,
            source,
        } = self;
        Self {
            lang: lang.deep_clone(),
            label: label.deep_clone(),
            source: source.deep_clone(),
        }
    }
}
