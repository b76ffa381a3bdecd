use routegen_core::assemble::{self, EndpointConfig};
use routegen_core::document::{SchemaOrRef, SchemaType};
use routegen_core::error::GenerateError;

fn config_with_response(name: &str, example: &str) -> EndpointConfig {
    EndpointConfig {
        response_schema_name: Some(name.to_string()),
        response_schema_resource: Some(example.to_string()),
        ..EndpointConfig::default()
    }
}

#[test]
fn get_user_endpoint_end_to_end() {
    let routes = vec!["GET /users/{id}".to_string()];
    let configs = vec![config_with_response("User", r#"{"id": 1, "name": "Alice"}"#)];

    let doc = assemble::generate(&routes, &configs, "https://api.example.com").unwrap();

    assert_eq!(doc.openapi, "3.0.3");
    assert_eq!(doc.servers.len(), 1);
    assert_eq!(doc.servers[0].url, "https://api.example.com");

    let item = doc.paths.get("/users/{id}").expect("path item");
    let get = item.get.as_ref().expect("GET operation");

    assert_eq!(get.parameters.len(), 1);
    assert_eq!(get.parameters[0].name, "id");
    assert!(get.parameters[0].required);

    let ok = &get.responses["200"];
    match ok.content["application/json"].schema.as_ref().unwrap() {
        SchemaOrRef::Ref { ref_path } => {
            assert_eq!(ref_path, "#/components/schemas/User");
        }
        SchemaOrRef::Schema(_) => panic!("expected $ref"),
    }
    assert!(get.responses["404"].content.is_empty());

    let user = &doc.components.schemas["User"];
    assert_eq!(user.properties["id"].schema_type, Some(SchemaType::Integer));
    assert_eq!(user.properties["name"].schema_type, Some(SchemaType::String));

    assert!(get.security.is_none());
    assert!(get.request_body.is_none());
}

#[test]
fn delete_endpoint_has_204_and_no_request_body() {
    let routes = vec!["DELETE /items/{id}".to_string()];
    let configs = vec![EndpointConfig::default()];

    let doc = assemble::generate(&routes, &configs, "http://localhost").unwrap();
    let delete = doc.paths["/items/{id}"].delete.as_ref().unwrap();

    let codes: Vec<&String> = delete.responses.keys().collect();
    assert_eq!(codes, ["204", "404"]);
    assert!(delete.responses.values().all(|r| r.content.is_empty()));
    assert!(delete.request_body.is_none());
}

#[test]
fn invalid_method_aborts_whole_call() {
    let routes = vec![
        "GET /good".to_string(),
        "TELEPORT /bad".to_string(),
    ];
    let configs = vec![EndpointConfig::default(), EndpointConfig::default()];

    let err = assemble::generate(&routes, &configs, "http://localhost").unwrap_err();
    assert!(matches!(err, GenerateError::Route(_)));
}

#[test]
fn malformed_request_schema_downgrades_but_keeps_response() {
    let routes = vec!["POST /users".to_string()];
    let configs = vec![EndpointConfig {
        request_schema_name: Some("NewUser".to_string()),
        request_schema_resource: Some("{not valid json".to_string()),
        response_schema_name: Some("User".to_string()),
        response_schema_resource: Some(r#"{"id": 1}"#.to_string()),
        security_schemes: Vec::new(),
    }];

    let doc = assemble::generate(&routes, &configs, "http://localhost").unwrap();
    let post = doc.paths["/users"].post.as_ref().unwrap();

    assert!(post.request_body.is_none());
    assert!(!doc.components.schemas.contains_key("NewUser"));

    // The response side is untouched by the request-side failure.
    assert!(doc.components.schemas.contains_key("User"));
    assert!(!post.responses["201"].content.is_empty());
}

#[test]
fn request_body_references_registered_schema() {
    let routes = vec!["POST /users".to_string()];
    let configs = vec![EndpointConfig {
        request_schema_name: Some("NewUser".to_string()),
        request_schema_resource: Some(r#"{"name": "Alice"}"#.to_string()),
        ..EndpointConfig::default()
    }];

    let doc = assemble::generate(&routes, &configs, "http://localhost").unwrap();
    let post = doc.paths["/users"].post.as_ref().unwrap();

    let body = post.request_body.as_ref().unwrap();
    assert!(body.required);
    match body.content["application/json"].schema.as_ref().unwrap() {
        SchemaOrRef::Ref { ref_path } => {
            assert_eq!(ref_path, "#/components/schemas/NewUser");
        }
        SchemaOrRef::Schema(_) => panic!("expected $ref"),
    }
    assert!(doc.components.schemas.contains_key("NewUser"));
}

#[test]
fn methods_sharing_a_path_merge_into_one_path_item() {
    let routes = vec!["GET /users".to_string(), "POST /users".to_string()];
    let configs = vec![EndpointConfig::default(), EndpointConfig::default()];

    let doc = assemble::generate(&routes, &configs, "http://localhost").unwrap();
    assert_eq!(doc.paths.len(), 1);

    let item = &doc.paths["/users"];
    assert!(item.get.is_some());
    assert!(item.post.is_some());
}

#[test]
fn same_path_and_method_last_write_wins() {
    let routes = vec!["GET /users".to_string(), "GET /users".to_string()];
    let configs = vec![
        config_with_response("First", r#"{"a": 1}"#),
        config_with_response("Second", r#"{"b": 2}"#),
    ];

    let doc = assemble::generate(&routes, &configs, "http://localhost").unwrap();
    let get = doc.paths["/users"].get.as_ref().unwrap();
    match get.responses["200"].content["application/json"]
        .schema
        .as_ref()
        .unwrap()
    {
        SchemaOrRef::Ref { ref_path } => {
            assert_eq!(ref_path, "#/components/schemas/Second");
        }
        SchemaOrRef::Schema(_) => panic!("expected $ref"),
    }
    // Both schemas were registered along the way.
    assert!(doc.components.schemas.contains_key("First"));
    assert!(doc.components.schemas.contains_key("Second"));
}

#[test]
fn shorter_config_list_ends_pairing_early() {
    let routes = vec!["GET /a".to_string(), "GET /b".to_string()];
    let configs = vec![EndpointConfig::default()];

    let doc = assemble::generate(&routes, &configs, "http://localhost").unwrap();
    assert!(doc.paths.contains_key("/a"));
    assert!(!doc.paths.contains_key("/b"));
}

#[test]
fn security_schemes_registered_and_required() {
    let routes = vec!["GET /secure".to_string()];
    let configs = vec![EndpointConfig {
        security_schemes: vec!["BearerAuth".to_string(), "ApiKeyAuth".to_string()],
        ..EndpointConfig::default()
    }];

    let doc = assemble::generate(&routes, &configs, "http://localhost").unwrap();

    assert!(doc.components.security_schemes.contains_key("BearerAuth"));
    assert!(doc.components.security_schemes.contains_key("ApiKeyAuth"));

    let get = doc.paths["/secure"].get.as_ref().unwrap();
    let security = get.security.as_ref().unwrap();
    assert_eq!(security.len(), 2);
    assert_eq!(security[0]["BearerAuth"], Vec::<String>::new());
    assert_eq!(security[1]["ApiKeyAuth"], Vec::<String>::new());
}

#[test]
fn unknown_security_scheme_is_skipped_not_fatal() {
    let routes = vec!["GET /secure".to_string()];
    let configs = vec![EndpointConfig {
        security_schemes: vec!["DigestAuth".to_string()],
        ..EndpointConfig::default()
    }];

    let doc = assemble::generate(&routes, &configs, "http://localhost").unwrap();
    assert!(doc.components.security_schemes.is_empty());
}

#[test]
fn tags_summary_and_operation_id() {
    let routes = vec!["GET /users/{id}/posts".to_string()];
    let configs = vec![EndpointConfig::default()];

    let doc = assemble::generate(&routes, &configs, "http://localhost").unwrap();
    let get = doc.paths["/users/{id}/posts"].get.as_ref().unwrap();

    assert_eq!(get.tags, ["users"]);
    assert_eq!(get.summary.as_deref(), Some("GET /users/{id}/posts"));
    assert_eq!(
        get.description.as_deref(),
        Some("Generated endpoint for GET /users/{id}/posts")
    );
    assert_eq!(get.operation_id.as_deref(), Some("getusers{id}posts"));
}

#[test]
fn operation_ids_can_collide_across_distinct_paths() {
    // Known limitation: "/ab/c" and "/a/bc" collapse to the same id once
    // the separators are removed.
    let routes = vec!["GET /ab/c".to_string(), "GET /a/bc".to_string()];
    let configs = vec![EndpointConfig::default(), EndpointConfig::default()];

    let doc = assemble::generate(&routes, &configs, "http://localhost").unwrap();
    let first = doc.paths["/ab/c"].get.as_ref().unwrap();
    let second = doc.paths["/a/bc"].get.as_ref().unwrap();
    assert_eq!(first.operation_id, second.operation_id);
}

#[test]
fn every_ref_resolves_to_a_registered_schema() {
    let routes = vec![
        "GET /users/{id}".to_string(),
        "POST /users".to_string(),
        "PATCH /users/{id}".to_string(),
    ];
    let configs = vec![
        config_with_response("User", r#"{"id": 1}"#),
        EndpointConfig {
            request_schema_name: Some("NewUser".to_string()),
            request_schema_resource: Some(r#"{"name": "x"}"#.to_string()),
            response_schema_name: Some("User".to_string()),
            response_schema_resource: Some(r#"{"id": 1}"#.to_string()),
            ..EndpointConfig::default()
        },
        config_with_response("Broken", "{oops"),
    ];

    let doc = assemble::generate(&routes, &configs, "http://localhost").unwrap();
    let json = serde_json::to_value(&doc).unwrap();

    let mut refs = Vec::new();
    collect_refs(&json, &mut refs);
    assert!(!refs.is_empty());
    for r in refs {
        let name = r.strip_prefix("#/components/schemas/").expect("ref shape");
        assert!(
            doc.components.schemas.contains_key(name),
            "dangling $ref: {r}"
        );
    }
}

fn collect_refs(value: &serde_json::Value, out: &mut Vec<String>) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, value) in map {
                if key == "$ref" {
                    if let serde_json::Value::String(s) = value {
                        out.push(s.clone());
                    }
                }
                collect_refs(value, out);
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                collect_refs(item, out);
            }
        }
        _ => {}
    }
}
