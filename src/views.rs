use crate::core::models::{
    Brief, BriefRequest, DEFAULT_BULLETS, EngineMode, MAX_BULLETS, MIN_BULLETS,
};

pub const PAGE_TITLE: &str = "Connection Prep Agent";
pub const MARKDOWN_FILE_NAME: &str = "connection_prep_brief.md";

/// Values the form is re-filled with after a submission.
#[derive(Debug, Clone)]
pub struct Prefill {
    pub profile: String,
    pub posts: String,
    pub goal: String,
    pub mode: EngineMode,
    pub bullets: u8,
}

impl Prefill {
    #[must_use]
    pub fn empty(default_mode: EngineMode) -> Self {
        Self {
            profile: String::new(),
            posts: String::new(),
            goal: String::new(),
            mode: default_mode,
            bullets: DEFAULT_BULLETS,
        }
    }

    #[must_use]
    pub fn from_request(request: &BriefRequest, default_mode: EngineMode) -> Self {
        Self {
            profile: request.profile.content().to_string(),
            posts: request.posts.content().to_string(),
            goal: request.goal.clone().unwrap_or_default(),
            mode: request.mode.unwrap_or(default_mode),
            bullets: request.bullets(),
        }
    }
}

/// What to show under the form.
#[derive(Debug, Clone, Copy)]
pub enum Outcome<'a> {
    Brief(&'a Brief),
    Error(&'a str),
}

#[must_use]
pub fn escape_html(text: &str) -> String {
    text.chars()
        .fold(String::with_capacity(text.len()), |mut escaped, ch| {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(ch),
            }
            escaped
        })
}

fn mode_options(selected: EngineMode) -> String {
    EngineMode::ALL
        .iter()
        .map(|mode| {
            format!(
                r#"<label><input type="radio" name="mode" value="{}"{}> {}</label>"#,
                mode.as_str(),
                if *mode == selected { " checked" } else { "" },
                mode.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn outcome_section(outcome: Option<Outcome<'_>>) -> String {
    match outcome {
        None => String::new(),
        Some(Outcome::Brief(brief)) => {
            let text = escape_html(&brief.text);
            format!(
                r#"<section class="brief">
      <h2>Connection Prep Brief</h2>
      <p class="mode">Mode: {mode}</p>
      <pre>{text}</pre>
    </section>"#,
                mode = brief.mode.label(),
            )
        }
        Some(Outcome::Error(message)) => format!(
            r#"<section class="error" role="alert"><p>{}</p></section>"#,
            escape_html(message)
        ),
    }
}

/// Renders the single page: the input form plus an optional brief or error.
#[must_use]
pub fn render_page(prefill: &Prefill, outcome: Option<Outcome<'_>>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>{title}</title>
  </head>
  <body>
    <h1>{title}</h1>
    <p>Paste a LinkedIn profile (About / Experience / Headline) and optionally 1-3 recent posts.</p>
    <form method="post" action="/brief">
      <label for="profile">LinkedIn Profile</label>
      <textarea id="profile" name="profile" rows="10" required>{profile}</textarea>
      <label for="posts">Recent posts (optional)</label>
      <textarea id="posts" name="posts" rows="8">{posts}</textarea>
      <label for="goal">Meeting goal (optional)</label>
      <input id="goal" name="goal" type="text" value="{goal}">
      <fieldset>
        <legend>Engine mode</legend>
        {modes}
      </fieldset>
      <label for="bullets">Max bullets per list</label>
      <input id="bullets" name="bullets" type="number" min="{min}" max="{max}" value="{bullets}">
      <button type="submit" name="format" value="html">Generate Brief</button>
      <button type="submit" name="format" value="markdown">Download as Markdown</button>
    </form>
    {outcome}
  </body>
</html>
"#,
        title = PAGE_TITLE,
        profile = escape_html(&prefill.profile),
        posts = escape_html(&prefill.posts),
        goal = escape_html(&prefill.goal),
        modes = mode_options(prefill.mode),
        min = MIN_BULLETS,
        max = MAX_BULLETS,
        bullets = prefill.bullets,
        outcome = outcome_section(outcome),
    )
}

/// Markdown document offered as a download.
#[must_use]
pub fn render_markdown(brief: &Brief) -> String {
    format!(
        "# Connection Prep Brief\n\n_Mode: {}_\n\n{}\n",
        brief.mode.label(),
        brief.text.trim_end()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_covers_attribute_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }
}
