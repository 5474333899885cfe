//! API Lambda handler - serves the form page and turns submissions into briefs.
//!
//! This module handles:
//! - Routing on method and path
//! - Body decoding (form-encoded or JSON, optionally base64)
//! - Rendering the brief as HTML, JSON or a Markdown download

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use std::env;
use tracing::{error, info, warn};

use super::{helpers, parsing};
use crate::ai::{InferenceClient, Summarizer};
use crate::core::config::AppConfig;
use crate::core::models::OutputFormat;
use crate::errors::BriefError;
use crate::features::generate_brief;
use crate::views::{self, Outcome, Prefill};

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never fails on bad requests; those become 4xx/5xx responses. The
/// `Result` is what `lambda_runtime::service_fn` expects.
#[tracing::instrument(level = "info", skip(event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    Ok(respond(|key| env::var(key).ok(), &event.payload).await)
}

/// Loads configuration through `lookup` and routes the event with the hosted
/// inference client. Invalid configuration becomes a 500 response.
pub async fn respond<F>(lookup: F, payload: &Value) -> Value
where
    F: Fn(&str) -> Option<String>,
{
    let config = match AppConfig::from_lookup(lookup) {
        Ok(config) => config,
        Err(e) => {
            error!("Config error: {}", e);
            return helpers::err_response(500, &format!("Configuration error: {e}"));
        }
    };

    let client = InferenceClient::new(&config);
    route(&config, &client, payload).await
}

/// Routes one API Gateway event. Split out from the Lambda entry so any
/// `Summarizer` can be plugged in.
pub async fn route(config: &AppConfig, summarizer: &dyn Summarizer, payload: &Value) -> Value {
    let method = parsing::http_method(payload).unwrap_or("GET");
    let path = parsing::route_path(payload);
    info!(method = %method, path = %path, "Request received");

    if !matches!(path.trim_end_matches('/'), "" | "/brief") {
        return helpers::err_response(404, "Not found");
    }

    match method.to_ascii_uppercase().as_str() {
        "GET" => {
            helpers::html_response(200, &views::render_page(&Prefill::empty(config.default_mode), None))
        }
        "HEAD" => helpers::html_response(200, ""),
        "POST" => handle_submission(config, summarizer, payload).await,
        _ => helpers::method_not_allowed(),
    }
}

async fn handle_submission(config: &AppConfig, summarizer: &dyn Summarizer, payload: &Value) -> Value {
    let is_json = parsing::is_json_content(payload);

    let request = match parsing::decode_body(payload)
        .and_then(|body| parsing::parse_brief_request(&body, is_json))
    {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected submission: {}", e);
            return if is_json {
                error_json(&e)
            } else {
                error_page(&Prefill::empty(config.default_mode), &e)
            };
        }
    };

    let wants_json = is_json || request.format == OutputFormat::Json;
    let prefill = Prefill::from_request(&request, config.default_mode);

    match generate_brief(config, summarizer, &request).await {
        Ok(brief) => match request.format {
            OutputFormat::Json => helpers::json_response(200, &json!(brief)),
            OutputFormat::Markdown => {
                helpers::markdown_attachment(views::MARKDOWN_FILE_NAME, &views::render_markdown(&brief))
            }
            OutputFormat::Html if wants_json => helpers::json_response(200, &json!(brief)),
            OutputFormat::Html => {
                helpers::html_response(200, &views::render_page(&prefill, Some(Outcome::Brief(&brief))))
            }
        },
        Err(e) => {
            match &e {
                BriefError::InvalidInput(_) => warn!("Brief not generated: {}", e),
                BriefError::EngineUnavailable(_) => error!("Brief not generated: {}", e),
            }
            if wants_json {
                error_json(&e)
            } else {
                error_page(&prefill, &e)
            }
        }
    }
}

// Engine details can carry upstream bodies; only input problems are echoed.
fn public_detail(e: &BriefError) -> Option<&str> {
    match e {
        BriefError::InvalidInput(detail) => Some(detail.as_str()),
        BriefError::EngineUnavailable(_) => None,
    }
}

fn error_json(e: &BriefError) -> Value {
    helpers::json_response(
        e.status_code(),
        &json!({ "error": e.user_message(), "detail": public_detail(e) }),
    )
}

fn error_page(prefill: &Prefill, e: &BriefError) -> Value {
    let message = match public_detail(e) {
        Some(detail) => format!("{} ({})", e.user_message(), detail),
        None => e.user_message().to_string(),
    };
    helpers::html_response(
        e.status_code(),
        &views::render_page(prefill, Some(Outcome::Error(&message))),
    )
}
