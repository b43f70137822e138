use clonespec_core::{
    Components, Info, OpenApi, Operation, Parameter, ParameterIn, PathItem, RefOr, Response,
    Schema,
};
use indexmap::IndexMap;
use rstest::fixture;
use tracing::info;

pub const STORE_SPEC: &str = include_str!("../fixtures/spec.json");

pub fn init_tracing() {
    // should be run once, fail otherwise, we skip that error
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    info!("Tracing initialized");
}

/// The decoded store document from `fixtures/spec.json`.
#[fixture]
pub fn store_spec() -> OpenApi {
    init_tracing();
    match OpenApi::from_json(STORE_SPEC) {
        Ok(spec) => spec,
        Err(error) => {
            panic!("fail to decode store fixture: {error}");
        }
    }
}

/// `GET /items/{id}` with an `id` path parameter and a `limit` query parameter, plus an
/// `Item` component schema.
#[fixture]
pub fn items_spec() -> OpenApi {
    init_tracing();

    let id = Parameter {
        name: "id".to_string(),
        location: ParameterIn::Path,
        required: true,
        schema: Some(RefOr::T(Schema::of_type("string"))),
        ..Parameter::default()
    };
    let limit = Parameter {
        name: "limit".to_string(),
        location: ParameterIn::Query,
        schema: Some(RefOr::T(Schema {
            minimum: Some(0.into()),
            ..Schema::of_type("integer")
        })),
        ..Parameter::default()
    };
    let get = Operation {
        operation_id: Some("getItem".to_string()),
        parameters: Some(vec![RefOr::T(id), RefOr::T(limit)]),
        responses: IndexMap::from([(
            "200".to_string(),
            RefOr::T(Response {
                description: "The item".to_string(),
                ..Response::default()
            }),
        )]),
        ..Operation::default()
    };

    let item = Schema {
        properties: Some(IndexMap::from([(
            "id".to_string(),
            RefOr::T(Schema::of_type("string")),
        )])),
        required: Some(vec!["id".to_string()]),
        ..Schema::of_type("object")
    };

    OpenApi {
        openapi: "3.0.3".to_string(),
        info: Some(Info {
            title: "Items".to_string(),
            version: "1.0.0".to_string(),
            ..Info::default()
        }),
        paths: IndexMap::from([(
            "/items/{id}".to_string(),
            PathItem {
                get: Some(get),
                ..PathItem::default()
            },
        )]),
        components: Some(Components {
            schemas: Some(IndexMap::from([("Item".to_string(), RefOr::T(item))])),
            ..Components::default()
        }),
        ..OpenApi::default()
    }
}
