use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::schema::Schema;
use super::security::SecurityScheme;

/// Components object holding reusable named definitions.
///
/// Second registration under an already-used name overwrites the first;
/// insertion order is otherwise preserved in the output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Components {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub schemas: IndexMap<String, Schema>,

    #[serde(
        rename = "securitySchemes",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub security_schemes: IndexMap<String, SecurityScheme>,
}
