use indexmap::IndexMap;

use crate::document::{MediaType, Response};
use crate::route::HttpMethod;

/// Per-method response template: the success entry plus the fixed error
/// entries attached for that method.
struct ResponseTemplate {
    success_code: &'static str,
    success_description: &'static str,
    errors: &'static [(&'static str, &'static str)],
}

fn template(method: HttpMethod) -> ResponseTemplate {
    match method {
        HttpMethod::Get => ResponseTemplate {
            success_code: "200",
            success_description: "Success",
            errors: &[("400", "Bad Request"), ("404", "Resource not found")],
        },
        HttpMethod::Post => ResponseTemplate {
            success_code: "201",
            success_description: "Resource created successfully",
            errors: &[("400", "Bad Request")],
        },
        HttpMethod::Put => ResponseTemplate {
            success_code: "200",
            success_description: "Resource updated successfully",
            errors: &[("404", "Resource not found")],
        },
        HttpMethod::Delete => ResponseTemplate {
            success_code: "204",
            success_description: "Resource deleted successfully",
            errors: &[("404", "Resource not found")],
        },
        HttpMethod::Patch => ResponseTemplate {
            success_code: "200",
            success_description: "Resource modified successfully",
            errors: &[("400", "Bad request")],
        },
        HttpMethod::Options | HttpMethod::Head => ResponseTemplate {
            success_code: "200",
            success_description: "Success",
            errors: &[("400", "Bad request")],
        },
    }
}

/// Build the responses map for a method. When a response schema was
/// registered, the success entry carries a `$ref` to it — except the 204,
/// which never declares content.
pub(crate) fn responses_for(
    method: HttpMethod,
    response_schema: Option<&str>,
) -> IndexMap<String, Response> {
    let template = template(method);

    let success = match response_schema {
        Some(name) if template.success_code != "204" => Response {
            description: template.success_description.to_string(),
            content: MediaType::json_ref(name),
        },
        _ => Response::plain(template.success_description),
    };

    let mut responses = IndexMap::new();
    responses.insert(template.success_code.to_string(), success);
    for (code, description) in template.errors {
        responses.insert(code.to_string(), Response::plain(description));
    }
    responses
}
