use super::DeepClone;
use crate::model::{Encoding, Example, MediaType, RequestBody, Response};

impl DeepClone for RequestBody {
    fn deep_clone(&self) -> Self {
        let Self {
            description,
            content,
            required,
        } = self;
        Self {
            description: description.deep_clone(),
            content: content.deep_clone(),
            required: required.deep_clone(),
        }
    }
}

impl DeepClone for Response {
    fn deep_clone(&self) -> Self {
        let Self {
            description,
            headers,
            content,
        } = self;
        Self {
            description: description.deep_clone(),
            headers: headers.deep_clone(),
            content: content.deep_clone(),
        }
    }
}

impl DeepClone for MediaType {
    fn deep_clone(&self) -> Self {
        let Self {
            schema,
            example,
            examples,
            encoding,
        } = self;
        Self {
            schema: schema.deep_clone(),
            example: example.deep_clone(),
            examples: examples.deep_clone(),
            encoding: encoding.deep_clone(),
        }
    }
}

impl DeepClone for Example {
    fn deep_clone(&self) -> Self {
        let Self {
            summary,
            description,
            value,
            external_value,
        } = self;
        Self {
            summary: summary.deep_clone(),
            description: description.deep_clone(),
            value: value.deep_clone(),
            external_value: external_value.deep_clone(),
        }
    }
}

impl DeepClone for Encoding {
    fn deep_clone(&self) -> Self {
        let Self {
            content_type,
            headers,
            style,
            explode,
            allow_reserved,
        } = self;
        Self {
            content_type: content_type.deep_clone(),
            headers: headers.deep_clone(),
            style: style.deep_clone(),
            explode: explode.deep_clone(),
            allow_reserved: allow_reserved.deep_clone(),
        }
    }
}
