use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::document::{Schema, SchemaType};

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(19|20)\d{2}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$").unwrap()
});

static DATE_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(19|20)\d{2}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01]).([0-1][0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9](\.[0-9]{1,3})?(Z|(\+|-)([0-1][0-9]|2[0-3]):[0-5][0-9])$",
    )
    .unwrap()
});

/// Largest integer exactly representable as an f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Infer a schema describing the shape of an example JSON value.
///
/// Scalar examples are replaced with fixed illustrative constants; only the
/// structure (and date-format recognition for strings) comes from the input.
/// Arrays are sampled from their first element — heterogeneous arrays are
/// not reconciled across elements.
pub fn infer_schema(value: &Value) -> Schema {
    match value {
        Value::Array(items) => Schema {
            schema_type: Some(SchemaType::Array),
            items: Some(Box::new(match items.first() {
                Some(first) => infer_schema(first),
                None => Schema::default(),
            })),
            ..Schema::default()
        },
        Value::Object(map) => Schema {
            schema_type: Some(SchemaType::Object),
            properties: map
                .iter()
                .map(|(name, value)| (name.clone(), infer_schema(value)))
                .collect(),
            ..Schema::default()
        },
        Value::Number(number) => {
            let float = number.as_f64().unwrap_or(f64::NAN);
            if float.is_finite() && float.fract() == 0.0 && float.abs() <= MAX_SAFE_INTEGER {
                Schema {
                    schema_type: Some(SchemaType::Integer),
                    format: Some("int64".to_string()),
                    example: Some(Value::from(10)),
                    ..Schema::default()
                }
            } else {
                Schema {
                    schema_type: Some(SchemaType::Number),
                    format: Some(String::new()),
                    ..Schema::default()
                }
            }
        }
        Value::String(text) => {
            // date-time first: it is the more specific of the two patterns
            if DATE_TIME_RE.is_match(text) {
                string_schema("date-time", "YYYY-MM-DDTHH:MM:SSZ")
            } else if DATE_RE.is_match(text) {
                string_schema("date", "YYYY-MM-DD")
            } else {
                Schema {
                    schema_type: Some(SchemaType::String),
                    example: Some(Value::String("string".to_string())),
                    ..Schema::default()
                }
            }
        }
        Value::Bool(_) => Schema {
            schema_type: Some(SchemaType::Boolean),
            example: Some(Value::Bool(true)),
            ..Schema::default()
        },
        Value::Null => Schema::typed(SchemaType::Null),
    }
}

fn string_schema(format: &str, example: &str) -> Schema {
    Schema {
        schema_type: Some(SchemaType::String),
        format: Some(format.to_string()),
        example: Some(Value::String(example.to_string())),
        ..Schema::default()
    }
}
