use super::DeepClone;
use crate::model::{Header, Parameter};

impl DeepClone for Parameter {
    fn deep_clone(&self) -> Self {
        let Self {
            name,
            location,
            description,
            required,
            deprecated,
            allow_empty_value,
            schema,
            style,
            explode,
        } = self;
        Self {
            name: name.deep_clone(),
            location: location.deep_clone(),
            description: description.deep_clone(),
            required: required.deep_clone(),
            deprecated: deprecated.deep_clone(),
            allow_empty_value: allow_empty_value.deep_clone(),
            schema: schema.deep_clone(),
            style: style.deep_clone(),
            explode: explode.deep_clone(),
        }
    }
}

impl DeepClone for Header {
    fn deep_clone(&self) -> Self {
        let Self {
            description,
            required,
            deprecated,
            allow_empty_value,
            schema,
        } = self;
        Self {
            description: description.deep_clone(),
            required: required.deep_clone(),
            deprecated: deprecated.deep_clone(),
            allow_empty_value: allow_empty_value.deep_clone(),
            schema: schema.deep_clone(),
        }
    }
}
