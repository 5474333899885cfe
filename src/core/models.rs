use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of bullets per list in the brief.
pub const DEFAULT_BULLETS: u8 = 5;
pub const MIN_BULLETS: u8 = 3;
pub const MAX_BULLETS: u8 = 8;

/// Which hosted summarization behavior to invoke.
///
/// The difference between modes is owned by the engine; this crate only
/// selects a model and payload per mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineMode {
    #[serde(rename = "summarization-only")]
    SummarizationOnly,
    #[serde(rename = "fast")]
    Fast,
}

impl EngineMode {
    pub const ALL: [EngineMode; 2] = [EngineMode::SummarizationOnly, EngineMode::Fast];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EngineMode::SummarizationOnly => "summarization-only",
            EngineMode::Fast => "fast",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            EngineMode::SummarizationOnly => "Summarization only",
            EngineMode::Fast => "Fast",
        }
    }
}

impl fmt::Display for EngineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "summarization-only" | "summarization_only" | "summarize" => {
                Ok(EngineMode::SummarizationOnly)
            }
            "fast" => Ok(EngineMode::Fast),
            other => Err(format!(
                "unknown engine mode '{other}' (expected 'summarization-only' or 'fast')"
            )),
        }
    }
}

/// Where a piece of pasted text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLabel {
    Profile,
    Posts,
    Goal,
}

impl SourceLabel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SourceLabel::Profile => "profile",
            SourceLabel::Posts => "posts",
            SourceLabel::Goal => "goal",
        }
    }
}

/// Raw profile text as pasted by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileText(pub String);

/// Raw text of one or more recent posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostText(pub String);

impl ProfileText {
    pub const SOURCE: SourceLabel = SourceLabel::Profile;

    #[must_use]
    pub fn content(&self) -> &str {
        &self.0
    }
}

impl PostText {
    pub const SOURCE: SourceLabel = SourceLabel::Posts;

    #[must_use]
    pub fn content(&self) -> &str {
        &self.0
    }
}

/// Pasted text after cleanup. Only `core::normalize` constructs these, so
/// the length cap always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInput {
    pub(crate) source: SourceLabel,
    pub(crate) text: String,
}

impl NormalizedInput {
    #[must_use]
    pub fn source(&self) -> SourceLabel {
        self.source
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Output format requested with a submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// One form submission.
#[derive(Debug, Clone, Default)]
pub struct BriefRequest {
    pub profile: ProfileText,
    pub posts: PostText,
    pub goal: Option<String>,
    pub mode: Option<EngineMode>,
    pub bullets: Option<u8>,
    pub format: OutputFormat,
}

impl BriefRequest {
    /// Bullet count clamped to the range the form offers.
    #[must_use]
    pub fn bullets(&self) -> u8 {
        self.bullets
            .unwrap_or(DEFAULT_BULLETS)
            .clamp(MIN_BULLETS, MAX_BULLETS)
    }
}

/// The generated brief for a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Brief {
    #[serde(rename = "brief")]
    pub text: String,
    pub mode: EngineMode,
}
