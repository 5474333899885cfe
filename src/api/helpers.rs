//! Response builders for API Gateway proxy responses.

use serde_json::{Value, json};

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const MARKDOWN_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

/// Returns an HTML page with the given status code.
#[must_use]
pub fn html_response(status_code: u16, body: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": HTML_CONTENT_TYPE },
        "body": body
    })
}

/// Returns a JSON body with the given status code.
#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": JSON_CONTENT_TYPE },
        "body": body.to_string()
    })
}

/// Returns a 200 response the browser saves as `file_name`.
#[must_use]
pub fn markdown_attachment(file_name: &str, body: &str) -> Value {
    json!({
        "statusCode": 200,
        "headers": {
            "Content-Type": MARKDOWN_CONTENT_TYPE,
            "Content-Disposition": format!("attachment; filename=\"{file_name}\"")
        },
        "body": body
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "error": message }))
}

#[must_use]
pub fn method_not_allowed() -> Value {
    json!({
        "statusCode": 405,
        "headers": { "Allow": "GET, POST", "Content-Type": JSON_CONTENT_TYPE },
        "body": json!({ "error": "Method not allowed" }).to_string()
    })
}
