use super::DeepClone;
use crate::model::Schema;

/// Recurses through `allOf`, `oneOf`, `anyOf`, `items`, `properties` and
/// `additionalProperties`.
///
/// Decoded documents are trees, so the recursion always terminates; its depth is the
/// depth of the source document.
impl DeepClone for Schema {
    fn deep_clone(&self) -> Self {
        let Self {
            schema_type,
            all_of,
            one_of,
            any_of,
            items,
            properties,
            additional_properties,
            description,
            format,
            default,
            example,
            title,
            multiple_of,
            maximum,
            exclusive_maximum,
            minimum,
            exclusive_minimum,
            max_length,
            min_length,
            pattern,
            max_items,
            min_items,
            unique_items,
            max_properties,
            min_properties,
            required,
            enum_values,
            nullable,
            deprecated,
        } = self;
        Self {
            schema_type: schema_type.deep_clone(),
            all_of: all_of.deep_clone(),
            one_of: one_of.deep_clone(),
            any_of: any_of.deep_clone(),
            items: items.deep_clone(),
            properties: properties.deep_clone(),
            additional_properties: additional_properties.deep_clone(),
            description: description.deep_clone(),
            format: format.deep_clone(),
            default: default.deep_clone(),
            example: example.deep_clone(),
            title: title.deep_clone(),
            multiple_of: multiple_of.deep_clone(),
            maximum: maximum.deep_clone(),
            exclusive_maximum: exclusive_maximum.deep_clone(),
            minimum: minimum.deep_clone(),
            exclusive_minimum: exclusive_minimum.deep_clone(),
            max_length: max_length.deep_clone(),
            min_length: min_length.deep_clone(),
            pattern: pattern.deep_clone(),
            max_items: max_items.deep_clone(),
            min_items: min_items.deep_clone(),
            unique_items: unique_items.deep_clone(),
            max_properties: max_properties.deep_clone(),
            min_properties: min_properties.deep_clone(),
            required: required.deep_clone(),
            enum_values: enum_values.deep_clone(),
            nullable: nullable.deep_clone(),
            deprecated: deprecated.deep_clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use rstest::rstest;
    use serde_json::{Number, json};

    use super::*;
    use crate::model::{Payload, RefOr, Reference};

    fn inline(schema: Schema) -> Option<Box<RefOr<Schema>>> {
        Some(Box::new(RefOr::T(schema)))
    }

    fn item_schema() -> Schema {
        Schema {
            properties: Some(IndexMap::from([
                ("id".to_string(), RefOr::T(Schema::of_type("string"))),
                (
                    "tags".to_string(),
                    RefOr::T(Schema {
                        items: inline(Schema::of_type("string")),
                        unique_items: true,
                        max_items: Some(16),
                        ..Schema::of_type("array")
                    }),
                ),
                (
                    "owner".to_string(),
                    RefOr::Ref(Reference::from_schema_name("User")),
                ),
            ])),
            additional_properties: inline(Schema::of_type("string")),
            required: Some(vec!["id".to_string()]),
            default: Some(Payload::new(json!({"id": "0"}))),
            ..Schema::of_type("object")
        }
    }

    #[test]
    fn should_clone_nested_schema() {
        let original = item_schema();

        let copy = original.deep_clone();

        assert_eq!(copy, original);
    }

    #[test]
    fn should_detach_nested_property() {
        let original = item_schema();

        let mut copy = original.deep_clone();
        if let Some(tags) = copy.property_mut("tags") {
            tags.max_items = Some(1);
            tags.items = None;
        }
        if let Some(properties) = copy.properties.as_mut() {
            properties.shift_remove("owner");
        }

        let properties = original.properties.as_ref().expect("properties");
        assert_eq!(properties.len(), 3);
        let tags = properties
            .get("tags")
            .and_then(RefOr::as_value)
            .expect("inline tags");
        assert_eq!(tags.max_items, Some(16));
        assert!(tags.items.is_some());
    }

    #[test]
    fn should_detach_enum_values() {
        let original = Schema {
            enum_values: Some(vec![
                Payload::new("a"),
                Payload::new("b"),
                Payload::new("c"),
            ]),
            ..Schema::of_type("string")
        };

        let mut copy = original.deep_clone();
        assert_eq!(copy.enum_values, original.enum_values);

        if let Some(first) = copy.enum_values.as_mut().and_then(|it| it.first_mut()) {
            *first = Payload::new("z");
        }

        let values = original
            .enum_values
            .iter()
            .flatten()
            .map(|it| it.as_str())
            .collect::<Vec<_>>();
        assert_eq!(values, [Some("a"), Some("b"), Some("c")]);
    }

    #[rstest]
    #[case::all_of(Schema { all_of: inline(Schema::of_type("object")), ..Schema::default() })]
    #[case::one_of(Schema { one_of: inline(Schema::of_type("string")), ..Schema::default() })]
    #[case::any_of(Schema { any_of: inline(Schema::of_type("number")), ..Schema::default() })]
    #[case::items(Schema { items: inline(Schema::of_type("boolean")), ..Schema::of_type("array") })]
    fn should_detach_single_slot(#[case] original: Schema) {
        let mut copy = original.deep_clone();
        assert_eq!(copy, original);

        for slot in [
            &mut copy.all_of,
            &mut copy.one_of,
            &mut copy.any_of,
            &mut copy.items,
        ] {
            if let Some(schema) = slot.as_deref_mut().and_then(RefOr::as_value_mut) {
                schema.nullable = true;
            }
        }

        assert_ne!(copy, original);
        for slot in [
            &original.all_of,
            &original.one_of,
            &original.any_of,
            &original.items,
        ] {
            if let Some(schema) = slot.as_deref().and_then(RefOr::as_value) {
                assert!(!schema.nullable);
            }
        }
    }

    #[test]
    fn should_copy_constraints_verbatim() {
        let original = Schema {
            multiple_of: Number::from_f64(0.5),
            maximum: Some(100.into()),
            exclusive_maximum: true,
            minimum: Some((-1).into()),
            max_length: Some(64),
            min_length: Some(1),
            pattern: Some("^[a-z]+$".to_string()),
            min_items: Some(0),
            max_properties: Some(3),
            min_properties: Some(1),
            nullable: true,
            deprecated: true,
            title: Some("Constrained".to_string()),
            format: Some("float".to_string()),
            ..Schema::of_type("number")
        };

        let copy = original.deep_clone();

        assert_eq!(copy, original);
        assert!(copy.all_of.is_none());
        assert!(copy.properties.is_none());
        assert!(copy.enum_values.is_none());
    }

    #[test]
    fn should_clone_deep_chain() {
        let mut original = Schema::of_type("string");
        for _ in 0..64 {
            original = Schema {
                items: inline(original),
                ..Schema::of_type("array")
            };
        }

        let copy = original.deep_clone();

        assert_eq!(copy, original);
    }
}
