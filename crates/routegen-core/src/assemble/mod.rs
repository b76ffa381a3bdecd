pub mod responses;
pub mod schemes;

use indexmap::IndexMap;
use log::warn;
use serde_json::Value;

use crate::document::{
    Components, Document, Info, MediaType, Operation, PathItem, RequestBody, Server,
};
use crate::error::GenerateError;
use crate::infer::infer_schema;
use crate::route::{RouteSpec, parse_route};

use schemes::SecuritySchemeKind;

/// Emitted OpenAPI version.
pub const OPENAPI_VERSION: &str = "3.0.3";
/// Fixed document metadata.
pub const DOC_TITLE: &str = "API Test";
pub const DOC_VERSION: &str = "1.0.11";

/// Per-route generation options, positionally paired with a route string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EndpointConfig {
    pub request_schema_name: Option<String>,
    pub request_schema_resource: Option<String>,
    pub response_schema_name: Option<String>,
    pub response_schema_resource: Option<String>,
    pub security_schemes: Vec<String>,
}

/// Generate an OpenAPI document from route strings and their paired
/// endpoint configurations.
///
/// Entries are processed in caller order; re-registering the same
/// `(path, method)` pair overwrites the earlier operation. A shorter config
/// list ends the pairing loop early without error. The only fatal condition
/// is a route string with an unrecognized HTTP method — no partial document
/// is returned in that case.
pub fn generate(
    routes: &[String],
    configs: &[EndpointConfig],
    server_url: &str,
) -> Result<Document, GenerateError> {
    let mut builder = DocumentBuilder::new();
    for (raw, config) in routes.iter().zip(configs) {
        let route = parse_route(raw)?;
        builder.add_endpoint(&route, config);
    }
    Ok(builder.finish(server_url))
}

/// Accumulates path items and component registrations across endpoints,
/// then assembles the final document.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    components: Components,
    paths: IndexMap<String, PathItem>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one parsed route and its configuration.
    pub fn add_endpoint(&mut self, route: &RouteSpec, config: &EndpointConfig) {
        self.register_security_schemes(&config.security_schemes);

        let request_schema = self.register_example_schema(
            config.request_schema_name.as_deref(),
            config.request_schema_resource.as_deref(),
            "request",
        );
        let response_schema = self.register_example_schema(
            config.response_schema_name.as_deref(),
            config.response_schema_resource.as_deref(),
            "response",
        );

        let request_body = request_schema.map(|name| RequestBody {
            description: Some("Request body".to_string()),
            required: true,
            content: MediaType::json_ref(&name),
        });

        let security = if config.security_schemes.is_empty() {
            None
        } else {
            Some(
                config
                    .security_schemes
                    .iter()
                    .map(|scheme| IndexMap::from([(scheme.clone(), Vec::<String>::new())]))
                    .collect(),
            )
        };

        let method = route.method;
        let path = &route.path;
        let tag = path.split('/').nth(1).unwrap_or("").to_string();

        let operation = Operation {
            tags: vec![tag],
            summary: Some(format!("{method} {path}")),
            description: Some(format!("Generated endpoint for {method} {path}")),
            // Known limitation: removing the separators can collide for
            // structurally different paths.
            operation_id: Some(format!("{}{}", method.lowercase(), path.replace('/', ""))),
            parameters: route.parameters.clone(),
            request_body,
            responses: responses::responses_for(method, response_schema.as_deref()),
            security,
        };

        self.paths
            .entry(path.clone())
            .or_default()
            .set(method, operation);
    }

    /// Assemble the final document around the accumulated state.
    pub fn finish(self, server_url: &str) -> Document {
        Document {
            openapi: OPENAPI_VERSION.to_string(),
            info: Info {
                title: DOC_TITLE.to_string(),
                description: None,
                version: DOC_VERSION.to_string(),
            },
            servers: vec![Server {
                url: server_url.to_string(),
                description: None,
            }],
            paths: self.paths,
            components: self.components,
        }
    }

    fn register_security_schemes(&mut self, names: &[String]) {
        for name in names {
            match SecuritySchemeKind::from_name(name) {
                Some(kind) => {
                    self.components
                        .security_schemes
                        .insert(kind.name().to_string(), kind.descriptor());
                }
                None => warn!("unknown security scheme: {name}"),
            }
        }
    }

    /// Infer and register a named schema from a raw JSON example. A missing
    /// or unparseable example downgrades to "no schema" for this endpoint;
    /// the returned name is the registered key, guaranteeing that every
    /// `$ref` built from it resolves.
    fn register_example_schema(
        &mut self,
        name: Option<&str>,
        resource: Option<&str>,
        side: &str,
    ) -> Option<String> {
        let name = name?;
        let Some(resource) = resource else {
            warn!("{side} schema {name} has no example payload; skipping");
            return None;
        };
        match serde_json::from_str::<Value>(resource) {
            Ok(value) => {
                self.components
                    .schemas
                    .insert(name.to_string(), infer_schema(&value));
                Some(name.to_string())
            }
            Err(err) => {
                warn!("{side} schema {name} example is not valid JSON, skipping: {err}");
                None
            }
        }
    }
}
