use super::DeepClone;
use crate::model::{Components, OAuthFlow, OAuthFlows, SecurityScheme};

impl DeepClone for Components {
    fn deep_clone(&self) -> Self {
        let Self {
            schemas,
            responses,
            parameters,
            examples,
            headers,
            security_schemes,
        } = self;
        Self {
            schemas: schemas.deep_clone(),
            responses: responses.deep_clone(),
            parameters: parameters.deep_clone(),
            examples: examples.deep_clone(),
            headers: headers.deep_clone(),
            security_schemes: security_schemes.deep_clone(),
        }
    }
}

impl DeepClone for SecurityScheme {
    fn deep_clone(&self) -> Self {
        let Self {
            scheme_type,
            scheme,
            bearer_format,
            description,
            location,
            name,
            open_id_connect_url,
            flows,
        } = self;
        Self {
            scheme_type: scheme_type.deep_clone(),
            scheme: scheme.deep_clone(),
            bearer_format: bearer_format.deep_clone(),
            description: description.deep_clone(),
            location: location.deep_clone(),
            name: name.deep_clone(),
            open_id_connect_url: open_id_connect_url.deep_clone(),
            flows: flows.deep_clone(),
        }
    }
}

impl DeepClone for OAuthFlows {
    fn deep_clone(&self) -> Self {
        let Self {
            implicit,
            password,
            client_credentials,
            authorization_code,
        } = self;
        Self {
            implicit: implicit.deep_clone(),
            password: password.deep_clone(),
            client_credentials: client_credentials.deep_clone(),
            authorization_code: authorization_code.deep_clone(),
        }
    }
}

impl DeepClone for OAuthFlow {
    fn deep_clone(&self) -> Self {
        let Self {
            authorization_url,
            token_url,
            refresh_url,
            scopes,
        } = self;
        Self {
            authorization_url: authorization_url.deep_clone(),
            token_url: token_url.deep_clone(),
            refresh_url: refresh_url.deep_clone(),
            scopes: scopes.deep_clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::model::{
        Example, Header, Parameter, ParameterIn, RefOr, Reference, Response, Schema,
    };

    fn oauth() -> SecurityScheme {
        SecurityScheme {
            scheme_type: "oauth2".to_string(),
            description: Some("OAuth2 login".to_string()),
            flows: Some(OAuthFlows {
                authorization_code: Some(OAuthFlow {
                    authorization_url: Some("https://auth.example.com/authorize".to_string()),
                    token_url: Some("https://auth.example.com/token".to_string()),
                    refresh_url: None,
                    scopes: Some(IndexMap::from([
                        ("read".to_string(), "Read items".to_string()),
                        ("write".to_string(), "Write items".to_string()),
                    ])),
                }),
                ..OAuthFlows::default()
            }),
            ..SecurityScheme::default()
        }
    }

    fn components() -> Components {
        Components {
            schemas: Some(IndexMap::from([
                ("Item".to_string(), RefOr::T(Schema::of_type("object"))),
                (
                    "Alias".to_string(),
                    RefOr::Ref(Reference::from_schema_name("Item")),
                ),
            ])),
            responses: Some(IndexMap::from([(
                "NotFound".to_string(),
                RefOr::T(Response {
                    description: "Not found".to_string(),
                    ..Response::default()
                }),
            )])),
            parameters: Some(IndexMap::from([(
                "Cursor".to_string(),
                RefOr::T(Parameter {
                    name: "cursor".to_string(),
                    location: ParameterIn::Query,
                    ..Parameter::default()
                }),
            )])),
            examples: Some(IndexMap::new()),
            headers: Some(IndexMap::from([(
                "RateLimit".to_string(),
                RefOr::T(Header::default()),
            )])),
            security_schemes: Some(IndexMap::from([
                ("oauth".to_string(), RefOr::T(oauth())),
                (
                    "legacy".to_string(),
                    RefOr::Ref(Reference::new("#/components/securitySchemes/oauth")),
                ),
            ])),
        }
    }

    #[test]
    fn should_clone_components() {
        let original = components();

        let copy = original.deep_clone();

        assert_eq!(copy, original);
    }

    #[test]
    fn should_detach_registries() {
        let original = components();

        let mut copy = original.deep_clone();
        if let Some(schema) = copy.schema_mut("Item") {
            schema.description = Some("changed".to_string());
        }
        if let Some(examples) = copy.examples.as_mut() {
            examples.insert("New".to_string(), RefOr::T(Example::default()));
        }
        copy.headers = None;

        assert_eq!(
            original
                .schema("Item")
                .and_then(RefOr::as_value)
                .and_then(|it| it.description.clone()),
            None
        );
        assert_eq!(original.examples, Some(IndexMap::new()));
        assert!(original.headers.is_some());
    }

    #[test]
    fn should_keep_absent_registries_absent() {
        let copy = Components::default().deep_clone();

        assert_eq!(copy, Components::default());
        assert!(copy.schemas.is_none());
        assert!(copy.security_schemes.is_none());
    }

    #[test]
    fn should_detach_oauth_scopes() {
        let original = oauth();

        let mut copy = original.deep_clone();
        if let Some(scopes) = copy
            .flows
            .as_mut()
            .and_then(|flows| flows.authorization_code.as_mut())
            .and_then(|flow| flow.scopes.as_mut())
        {
            scopes.insert("admin".to_string(), "Administer".to_string());
            scopes.shift_remove("read");
        }

        let flow = original
            .flows
            .as_ref()
            .and_then(|flows| flows.authorization_code.as_ref())
            .expect("authorization code flow");
        let scopes = flow.scopes.as_ref().expect("scopes");
        assert_eq!(scopes.keys().collect::<Vec<_>>(), ["read", "write"]);
    }

    #[test]
    fn should_keep_missing_flows_absent() {
        let copy = oauth().deep_clone();

        let flows = copy.flows.as_ref().expect("flows");
        assert!(flows.implicit.is_none());
        assert!(flows.password.is_none());
        assert!(flows.client_credentials.is_none());
        assert!(flows.authorization_code.is_some());
    }
}
