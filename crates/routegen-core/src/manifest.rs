use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::assemble::EndpointConfig;
use crate::error::ManifestError;

/// A generation manifest: the server base URL plus one entry per route.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub server_url: String,

    #[serde(default)]
    pub endpoints: Vec<EndpointEntry>,
}

/// One manifest entry: a route string and its optional example payloads
/// and security-scheme names.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointEntry {
    pub route: String,

    #[serde(default)]
    pub request_schema: Option<NamedExample>,

    #[serde(default)]
    pub response_schema: Option<NamedExample>,

    #[serde(default)]
    pub security: Vec<String>,
}

/// A named schema with its raw JSON example text. The text is kept
/// unparsed here so malformed payloads reach the engine's recoverable path
/// instead of failing the manifest load.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedExample {
    pub name: String,
    pub example: String,
}

impl Manifest {
    pub fn from_yaml(input: &str) -> Result<Self, ManifestError> {
        Ok(serde_yaml_ng::from_str(input)?)
    }

    pub fn from_json(input: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a manifest file, choosing the parser from the extension.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }

    /// Split into the positionally-paired inputs the engine consumes.
    pub fn into_inputs(self) -> (Vec<String>, Vec<EndpointConfig>) {
        let mut routes = Vec::with_capacity(self.endpoints.len());
        let mut configs = Vec::with_capacity(self.endpoints.len());
        for entry in self.endpoints {
            routes.push(entry.route);
            let (request_schema_name, request_schema_resource) = split_example(entry.request_schema);
            let (response_schema_name, response_schema_resource) =
                split_example(entry.response_schema);
            configs.push(EndpointConfig {
                request_schema_name,
                request_schema_resource,
                response_schema_name,
                response_schema_resource,
                security_schemes: entry.security,
            });
        }
        (routes, configs)
    }
}

fn split_example(example: Option<NamedExample>) -> (Option<String>, Option<String>) {
    match example {
        Some(example) => (Some(example.name), Some(example.example)),
        None => (None, None),
    }
}

/// Sample manifest written by `routegen init`.
pub fn default_manifest_content() -> &'static str {
    r#"# routegen manifest
server_url: https://api.example.com/v1

endpoints:
  - route: "GET /users/{id}?verbose=true"
    response_schema:
      name: User
      example: '{"id": 1, "name": "Alice", "createdAt": "2024-01-05T10:00:00Z"}'
    security: [BearerAuth]

  - route: "POST /users"
    request_schema:
      name: NewUser
      example: '{"name": "Alice"}'
    response_schema:
      name: User
      example: '{"id": 1, "name": "Alice", "createdAt": "2024-01-05T10:00:00Z"}'

  - route: "DELETE /users/{id}"
"#
}
