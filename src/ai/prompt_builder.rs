//! Assembles normalized inputs into the payload sent to the engine.

use crate::core::models::{MAX_BULLETS, MIN_BULLETS, NormalizedInput};

pub const PROFILE_LABEL: &str = "PROFILE:";
pub const POSTS_LABEL: &str = "RECENT POSTS:";
pub const GOAL_LABEL: &str = "MEETING GOAL:";

const NO_POSTS: &str = "None provided.";
const NO_GOAL: &str = "Not specified.";

/// Labeled sections plus the instruction prompt wrapping them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BriefPayload {
    /// The PROFILE / RECENT POSTS / MEETING GOAL block on its own.
    pub sections: String,
    /// `sections` wrapped with output instructions.
    pub prompt: String,
}

/// Combines the normalized inputs into a single payload.
///
/// Sections always appear in the same order and missing posts or goal are
/// written out explicitly, so identical inputs give byte-identical output.
#[must_use]
pub fn assemble(
    profile: &NormalizedInput,
    posts: Option<&NormalizedInput>,
    goal: Option<&str>,
    bullets: u8,
) -> BriefPayload {
    let bullets = bullets.clamp(MIN_BULLETS, MAX_BULLETS);

    let sections = format!(
        "{PROFILE_LABEL}\n{}\n\n{POSTS_LABEL}\n{}\n\n{GOAL_LABEL}\n{}",
        profile.as_str(),
        posts.map_or(NO_POSTS, NormalizedInput::as_str),
        goal.filter(|g| !g.trim().is_empty()).unwrap_or(NO_GOAL),
    );

    let prompt = format!(
        "You are a concise assistant creating a one-page connection/meeting brief for a professional networking call. \
Use the inputs below to produce clearly labeled sections. Keep language neutral, factual, and useful.\n\n\
{sections}\n\n\
Produce the output with these labeled sections and bullet lists:\n\n\
PROFILE SNAPSHOT:\n- 3 short lines about seniority, domain, value-focus.\n\n\
TOP SKILLS:\n- Up to {bullets} short bullets (skill/tool names).\n\n\
TALKING POINTS:\n- Up to {bullets} actionable topics based on posts/profile.\n\n\
ICEBREAKERS:\n- 3 friendly openers tailored to the person.\n\n\
OPENING QUESTION:\n- One smart open-ended question.\n\n\
SAMPLE DM:\n- A 2-3 sentence LinkedIn DM to request a short chat.\n\n\
MEETING AGENDA:\n- 3 bullets for a 15-30 minute call.\n\n\
If information is missing, be conservative and generic. Do not invent companies or facts."
    );

    BriefPayload { sections, prompt }
}
