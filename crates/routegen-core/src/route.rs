use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::document::{Parameter, ParameterLocation, Schema, SchemaType};
use crate::error::RouteError;

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{(\w+)\}").unwrap());

/// The recognized HTTP methods, matched case-sensitively at the start of a
/// route string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Options,
        HttpMethod::Head,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        }
    }

    pub fn lowercase(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed route string: method, path template, and the parameters
/// inferred from placeholders and the query string.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSpec {
    pub method: HttpMethod,
    pub path: String,
    pub parameters: Vec<Parameter>,
}

/// Parse a raw route string of the form `METHOD /path?query`.
///
/// Path placeholders become required integer parameters; query pairs become
/// optional string parameters carrying the literal value as their example.
/// Duplicate placeholder names each produce a separate parameter entry.
pub fn parse_route(input: &str) -> Result<RouteSpec, RouteError> {
    let method = HttpMethod::ALL
        .into_iter()
        .find(|m| input.starts_with(m.as_str()))
        .ok_or_else(|| RouteError::InvalidMethod(input.to_string()))?;

    let rest = input[method.as_str().len()..].trim();

    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    let mut parameters = Vec::new();

    for captures in PLACEHOLDER_RE.captures_iter(path) {
        let name = &captures[1];
        parameters.push(Parameter {
            name: name.to_string(),
            location: ParameterLocation::Path,
            description: Some(format!("The {name} parameter")),
            required: true,
            schema: Schema {
                schema_type: Some(SchemaType::Integer),
                format: Some("int64".to_string()),
                ..Schema::default()
            },
        });
    }

    if let Some(query) = query {
        for pair in query.split('&') {
            let (name, value) = match pair.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (pair, None),
            };
            parameters.push(Parameter {
                name: name.to_string(),
                location: ParameterLocation::Query,
                description: Some(format!("The {name} parameter")),
                required: false,
                schema: Schema {
                    schema_type: Some(SchemaType::String),
                    example: value.map(|v| serde_json::Value::String(v.to_string())),
                    ..Schema::default()
                },
            });
        }
    }

    Ok(RouteSpec {
        method,
        path: path.to_string(),
        parameters,
    })
}
