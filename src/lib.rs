//! Meeting Brief - turns a pasted LinkedIn profile and recent posts into a
//! short meeting-prep brief.
//!
//! Each request is a single linear pass:
//! 1. The input normalizer cleans and caps the pasted text
//! 2. The assembler combines it into one payload with labeled sections
//! 3. The summarization adapter sends that payload to a hosted engine in the
//!    selected `EngineMode`
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda (behind API Gateway) to serve the form and the brief
//! - reqwest for the Hugging Face Inference API
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use meeting_brief::ai::InferenceClient;
//! use meeting_brief::core::config::AppConfig;
//! use meeting_brief::core::models::{BriefRequest, EngineMode, PostText, ProfileText};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     meeting_brief::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let client = InferenceClient::new(&config);
//!
//!     let request = BriefRequest {
//!         profile: ProfileText("Jane Doe, VP Eng at Example Corp".to_string()),
//!         posts: PostText("Posted about Q3 roadmap.".to_string()),
//!         mode: Some(EngineMode::Fast),
//!         ..BriefRequest::default()
//!     };
//!
//!     let brief = meeting_brief::features::generate_brief(&config, &client, &request).await?;
//!     println!("{}", brief.text);
//!
//!     Ok(())
//! }
//! ```

pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod features;
pub mod views;

pub use errors::BriefError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. Calling it more than once is harmless; only
/// the first call installs the subscriber.
///
/// # Example
///
/// ```
/// meeting_brief::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
