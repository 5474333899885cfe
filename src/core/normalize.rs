//! Cleanup of pasted text before it reaches the engine.

use super::models::{NormalizedInput, SourceLabel};
use crate::errors::BriefError;

/// List of disallowed patterns in the meeting goal (prompt injection protection)
pub const DISALLOWED_PATTERNS: [&str; 4] = ["system:", "assistant:", "user:", "{{"];

/// Maximum length allowed for the free-text meeting goal
pub const MAX_GOAL_LENGTH: usize = 800;

/// Characters that survive `char::is_control` but still break copy-pasted text.
const INVISIBLE_CHARS: [char; 5] = ['\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}'];

fn is_stripped(c: char) -> bool {
    c.is_control() || INVISIBLE_CHARS.contains(&c)
}

/// Cleans pasted text and caps it at `max_chars` characters.
///
/// Whitespace runs (including newlines) become single spaces, control and
/// zero-width characters are dropped, and the result is trimmed. The output
/// is a fixed point: normalizing it again returns the same string.
///
/// # Errors
///
/// Returns `BriefError::InvalidInput` if nothing is left after cleanup.
pub fn normalize(
    raw: &str,
    source: SourceLabel,
    max_chars: usize,
) -> Result<NormalizedInput, BriefError> {
    let mut text = String::with_capacity(raw.len().min(max_chars.saturating_mul(4)));
    let mut kept = 0usize;

    'segments: for segment in raw.split_whitespace() {
        let mut cleaned = segment.chars().filter(|c| !is_stripped(*c)).peekable();
        if cleaned.peek().is_none() {
            continue;
        }
        if !text.is_empty() {
            if kept >= max_chars {
                break;
            }
            text.push(' ');
            kept += 1;
        }
        for c in cleaned {
            if kept >= max_chars {
                break 'segments;
            }
            text.push(c);
            kept += 1;
        }
    }

    let trimmed_len = text.trim_end().len();
    text.truncate(trimmed_len);

    if text.is_empty() {
        return Err(BriefError::InvalidInput(format!(
            "{} text is empty after cleanup",
            source.as_str()
        )));
    }

    Ok(NormalizedInput { source, text })
}

/// Validates and cleans the optional meeting goal.
///
/// Returns `Ok(None)` when the goal is blank. Checks run on the cleaned text,
/// so stripped characters cannot split a disallowed pattern.
///
/// # Errors
///
/// Returns `BriefError::InvalidInput` when the goal is too long or contains
/// a role marker or template pattern.
pub fn sanitize_goal(raw: &str) -> Result<Option<String>, BriefError> {
    // Blank, or only invisible characters were pasted.
    let Ok(goal) = normalize(raw, SourceLabel::Goal, usize::MAX) else {
        return Ok(None);
    };

    if goal.char_count() > MAX_GOAL_LENGTH {
        return Err(BriefError::InvalidInput(format!(
            "Meeting goal exceeds maximum length of {} characters",
            MAX_GOAL_LENGTH
        )));
    }

    let lowered = goal.as_str().to_lowercase();
    for pattern in DISALLOWED_PATTERNS.iter() {
        if lowered.contains(pattern) {
            return Err(BriefError::InvalidInput(format!(
                "Meeting goal contains disallowed pattern: {}",
                pattern
            )));
        }
    }

    Ok(Some(goal.text))
}
