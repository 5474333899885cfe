use meeting_brief::core::models::{Brief, BriefRequest, EngineMode, PostText, ProfileText};
use meeting_brief::views::{Outcome, Prefill, escape_html, render_markdown, render_page};

#[test]
fn render_empty_page_has_all_inputs() {
    let html = render_page(&Prefill::empty(EngineMode::Fast), None);
    for name in ["profile", "posts", "goal", "mode", "bullets", "format"] {
        assert!(
            html.contains(&format!(r#"name="{name}""#)),
            "missing input {name}"
        );
    }
    assert!(html.contains(r#"value="fast" checked"#));
    assert!(!html.contains(r#"class="brief""#));
    assert!(!html.contains(r#"class="error""#));
}

#[test]
fn prefill_is_escaped() {
    let request = BriefRequest {
        profile: ProfileText("</textarea><script>alert(1)</script>".to_string()),
        posts: PostText("Tom & Jerry".to_string()),
        goal: Some(r#"say "hi""#.to_string()),
        bullets: Some(7),
        ..BriefRequest::default()
    };
    let html = render_page(&Prefill::from_request(&request, EngineMode::Fast), None);

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;/textarea&gt;&lt;script&gt;"));
    assert!(html.contains("Tom &amp; Jerry"));
    assert!(html.contains(r#"value="say &quot;hi&quot;""#));
    assert!(html.contains(r#"value="7""#));
}

#[test]
fn brief_outcome_is_rendered_escaped() {
    let brief = Brief {
        text: "ICEBREAKERS:\n- <b>Congrats</b> on the launch".to_string(),
        mode: EngineMode::SummarizationOnly,
    };
    let html = render_page(&Prefill::empty(EngineMode::Fast), Some(Outcome::Brief(&brief)));

    assert!(html.contains("<h2>Connection Prep Brief</h2>"));
    assert!(html.contains("Mode: Summarization only"));
    assert!(html.contains("- &lt;b&gt;Congrats&lt;/b&gt; on the launch"));
}

#[test]
fn error_outcome_is_rendered_as_alert() {
    let html = render_page(
        &Prefill::empty(EngineMode::Fast),
        Some(Outcome::Error("Try again <later>")),
    );
    assert!(html.contains(r#"role="alert""#));
    assert!(html.contains("Try again &lt;later&gt;"));
}

#[test]
fn markdown_download_wraps_brief() {
    let brief = Brief {
        text: "TOP SKILLS:\n- Rust\n\n".to_string(),
        mode: EngineMode::Fast,
    };
    assert_eq!(
        render_markdown(&brief),
        "# Connection Prep Brief\n\n_Mode: Fast_\n\nTOP SKILLS:\n- Rust\n"
    );
}

#[test]
fn escape_html_leaves_plain_text_alone() {
    assert_eq!(escape_html("Jane Doe, VP Eng"), "Jane Doe, VP Eng");
}
