use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::schema::SchemaOrRef;

/// The only content type the generator emits.
pub const APPLICATION_JSON: &str = "application/json";

/// A media type object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaOrRef>,
}

impl MediaType {
    /// JSON content referencing a named component schema.
    pub fn json_ref(schema_name: &str) -> IndexMap<String, MediaType> {
        let mut content = IndexMap::new();
        content.insert(
            APPLICATION_JSON.to_string(),
            MediaType {
                schema: Some(SchemaOrRef::component(schema_name)),
            },
        );
        content
    }
}

/// A request body definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub required: bool,

    pub content: IndexMap<String, MediaType>,
}

/// A response definition. Content is absent for no-body entries
/// (204 and the plain error codes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub description: String,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, MediaType>,
}

impl Response {
    pub fn plain(description: &str) -> Self {
        Self {
            description: description.to_string(),
            content: IndexMap::new(),
        }
    }

    pub fn json(description: &str, schema_name: &str) -> Self {
        Self {
            description: description.to_string(),
            content: MediaType::json_ref(schema_name),
        }
    }
}
