//! Summary Markdown Rendering
//!
//! Summaries arrive as markdown from the summarizer. They are rendered with
//! pulldown-cmark; raw HTML in the source is shown as text, never injected.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser};

/// Shown when no summary has been produced for the current selection
pub const EMPTY_SUMMARY_TEXT: &str = "No summary yet";

/// Render a summary for display; blank or absent text gives the empty notice
pub fn render_summary(text: Option<&str>) -> String {
    match text.map(str::trim).filter(|t| !t.is_empty()) {
        Some(text) => parse_markdown(text),
        None => format!("<p class=\"summary-empty\">{}</p>", EMPTY_SUMMARY_TEXT),
    }
}

pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options()).map(escape_raw_html);
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

fn escape_raw_html(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(CowStr::from(html.into_string())),
        other => other,
    }
}
