use tracing::info;

use crate::ai::{Summarizer, assemble};
use crate::core::config::AppConfig;
use crate::core::models::{Brief, BriefRequest, PostText, ProfileText};
use crate::core::normalize::{normalize, sanitize_goal};
use crate::errors::BriefError;

/// Generate a meeting brief for one submission.
///
/// Runs normalize, assemble and summarize in that order. Every input check
/// happens before the engine is called, so invalid submissions never cost
/// an engine request.
#[tracing::instrument(level = "info", skip_all, fields(mode = tracing::field::Empty))]
pub async fn generate_brief(
    config: &AppConfig,
    summarizer: &dyn Summarizer,
    request: &BriefRequest,
) -> Result<Brief, BriefError> {
    let mode = request.mode.unwrap_or(config.default_mode);
    tracing::Span::current().record("mode", mode.as_str());

    let profile = normalize(
        request.profile.content(),
        ProfileText::SOURCE,
        config.max_input_chars,
    )?;

    // Posts are optional; blank or fully stripped text means none were pasted.
    let posts = normalize(
        request.posts.content(),
        PostText::SOURCE,
        config.max_input_chars,
    )
    .ok();

    let goal = match request.goal.as_deref() {
        Some(raw) => sanitize_goal(raw)?,
        None => None,
    };

    let payload = assemble(&profile, posts.as_ref(), goal.as_deref(), request.bullets());

    info!(
        profile_chars = profile.char_count(),
        posts_chars = posts.as_ref().map_or(0, |p| p.char_count()),
        has_goal = goal.is_some(),
        "Assembled brief payload"
    );

    let text = summarizer.summarize(&payload, mode).await?;

    info!(brief_chars = text.chars().count(), "Brief generated");

    Ok(Brief { text, mode })
}
