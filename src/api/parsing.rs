use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use std::collections::HashMap;

use crate::core::models::{
    BriefRequest, EngineMode, MAX_BULLETS, MIN_BULLETS, OutputFormat, PostText, ProfileText,
};
use crate::errors::BriefError;

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// HTTP method from either API Gateway payload version.
pub fn http_method(payload: &Value) -> Option<&str> {
    payload
        .get("requestContext")
        .and_then(|c| c.get("http"))
        .and_then(|h| h.get("method"))
        .and_then(|m| m.as_str())
        .or_else(|| payload.get("httpMethod").and_then(|m| m.as_str()))
}

pub fn request_path(payload: &Value) -> &str {
    payload
        .get("rawPath")
        .and_then(|v| v.as_str())
        .or_else(|| payload.get("path").and_then(|v| v.as_str()))
        .unwrap_or("/")
}

/// Request path with the API Gateway stage prefix (e.g. `/prod`) removed.
pub fn route_path(payload: &Value) -> &str {
    let path = request_path(payload);
    let stage = payload
        .get("requestContext")
        .and_then(|c| c.get("stage"))
        .and_then(|s| s.as_str())
        .filter(|s| !s.is_empty() && *s != "$default");

    stage
        .and_then(|stage| path.strip_prefix('/')?.strip_prefix(stage))
        .filter(|rest| rest.is_empty() || rest.starts_with('/'))
        .unwrap_or(path)
}

pub fn is_json_content(payload: &Value) -> bool {
    payload
        .get("headers")
        .and_then(|h| get_header_value(h, "content-type"))
        .is_some_and(|ct| ct.to_ascii_lowercase().starts_with("application/json"))
}

/// Request body as text, undoing API Gateway's base64 wrapping when flagged.
pub fn decode_body(payload: &Value) -> Result<String, BriefError> {
    let body = match payload.get("body") {
        None | Some(Value::Null) => return Ok(String::new()),
        Some(Value::String(s)) => s,
        Some(_) => {
            return Err(BriefError::InvalidInput("Invalid body format".to_string()));
        }
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !is_base64 {
        return Ok(body.clone());
    }

    let bytes = STANDARD
        .decode(body.trim())
        .map_err(|e| BriefError::InvalidInput(format!("Failed to decode base64 body: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| BriefError::InvalidInput(format!("Body is not valid UTF-8: {}", e)))
}

fn form_fields(body: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(body.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn json_fields(body: &str) -> Result<HashMap<String, String>, BriefError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| BriefError::InvalidInput(format!("Invalid JSON body: {}", e)))?;
    let Some(object) = value.as_object() else {
        return Err(BriefError::InvalidInput(
            "JSON body must be an object".to_string(),
        ));
    };

    Ok(object
        .iter()
        .filter_map(|(k, v)| {
            let text = match v {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                _ => return None,
            };
            Some((k.clone(), text))
        })
        .collect())
}

/// Any integer is accepted and clamped to the range the form offers.
fn parse_bullets(raw: &str) -> Result<u8, BriefError> {
    let count = raw
        .trim()
        .parse::<i64>()
        .map_err(|e| BriefError::InvalidInput(format!("bullets: {}", e)))?;
    let clamped = count.clamp(i64::from(MIN_BULLETS), i64::from(MAX_BULLETS));
    u8::try_from(clamped).map_err(|e| BriefError::InvalidInput(format!("bullets: {}", e)))
}

/// Parses a form-encoded or JSON submission into a `BriefRequest`.
///
/// Only the field formats are checked here; text content is validated by
/// the normalizer.
pub fn parse_brief_request(body: &str, is_json: bool) -> Result<BriefRequest, BriefError> {
    let mut fields = if is_json {
        json_fields(body)?
    } else {
        form_fields(body)
    };

    let mut take = |key: &str| fields.remove(key).filter(|v| !v.trim().is_empty());

    let mode = take("mode")
        .map(|raw| raw.parse::<EngineMode>())
        .transpose()
        .map_err(BriefError::InvalidInput)?;

    let bullets = take("bullets")
        .map(|raw| parse_bullets(&raw))
        .transpose()?;

    let format = take("format")
        .map(|raw| raw.parse::<OutputFormat>())
        .transpose()
        .map_err(BriefError::InvalidInput)?
        .unwrap_or_default();

    Ok(BriefRequest {
        profile: ProfileText(take("profile").unwrap_or_default()),
        posts: PostText(take("posts").unwrap_or_default()),
        goal: take("goal"),
        mode,
        bullets,
        format,
    })
}
