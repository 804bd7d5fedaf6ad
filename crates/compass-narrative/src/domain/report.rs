//! The insights report returned to the respondent.

use chrono::{DateTime, Utc};
use compass_scoring::domain::report::ReportContext;
use pulldown_cmark::{Event, Options, Parser, html};
use serde::Serialize;
use uuid::Uuid;

/// Heading shown above every report.
pub const REPORT_TITLE: &str = "What is Your Compass Telling You?";

/// Fixed section appended after the generated narrative.
pub const CLOSING_MARKDOWN: &str = "\
### Ready to Bridge the Gap?

The Compass Assessment has identified where your focus is needed most. Learning a system \
to consistently align your **V**alues, **I**nterests, **S**trengths, and **N**eeds is the \
single most powerful step you can take toward becoming a **Harmonious Leader**.

* **For Comprehensive Learning:** [Join an upcoming offering of our Course on the Leader's \
Compass!](https://plei.thinkific.com/courses/compass-coming-soon)
* **For Personalized Guidance:** Explore 1-on-1 Coaching to accelerate your transformation.
";

/// A scored assessment together with its generated narrative.
#[derive(Debug, Clone, Serialize)]
pub struct InsightsReport {
    /// Unique report identifier.
    pub report_id: Uuid,
    /// Correlation ID of the command that produced the report.
    pub correlation_id: Uuid,
    /// When the narrative was generated.
    pub generated_at: DateTime<Utc>,
    /// Report heading.
    pub title: &'static str,
    /// Scores, classification and archetype.
    pub context: ReportContext,
    /// Narrative as returned by the generator.
    pub narrative_markdown: String,
    /// Narrative rendered to HTML.
    pub narrative_html: String,
    /// Closing call to action (Markdown).
    pub closing_markdown: &'static str,
}

/// Renders Markdown to HTML with tables and strikethrough enabled.
///
/// Raw HTML in the input is escaped and shown as text.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown_converts_headers_and_emphasis() {
        let html = render_markdown("### Narrative Profile\n\nYou are **driven**.");

        assert!(html.contains("<h3>Narrative Profile</h3>"));
        assert!(html.contains("<strong>driven</strong>"));
    }

    #[test]
    fn test_render_markdown_escapes_raw_html() {
        let html = render_markdown(
            "### Profile\n\n<script>alert(1)</script>\n\nHi <img src=x onerror=alert(2)>",
        );

        assert!(html.contains("<h3>Profile</h3>"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("&lt;img src=x onerror=alert(2)&gt;"));
    }

    #[test]
    fn test_closing_markdown_links_the_course() {
        let html = render_markdown(CLOSING_MARKDOWN);

        assert!(html.contains("<h3>Ready to Bridge the Gap?</h3>"));
        assert!(html.contains(r#"<a href="https://plei.thinkific.com/courses/compass-coming-soon">"#));
        assert!(html.contains("1-on-1 Coaching"));
    }

    #[test]
    fn test_render_markdown_handles_empty_input() {
        assert_eq!(render_markdown(""), "");
    }
}
