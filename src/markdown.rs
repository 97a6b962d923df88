//! Markdown Rendering
//!
//! Todo descriptions are rendered with pulldown-cmark. Raw HTML in the
//! source is shown as text, never injected, and link or image targets are
//! limited to web, mail and relative URLs.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

/// Replacement target for links and images with a disallowed scheme
const BLOCKED_URL: &str = "#";

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Render a description to HTML safe for `inner_html`
pub fn render_markdown(text: &str) -> String {
    let events = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Event::Start(Tag::Link {
            link_type,
            dest_url: checked_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Event::Start(Tag::Image {
            link_type,
            dest_url: checked_url(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

fn checked_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_allowed_url(&url) {
        url
    } else {
        log::debug!("[MARKDOWN] blocked link target {:?}", &*url);
        CowStr::Borrowed(BLOCKED_URL)
    }
}

/// Relative URLs, or absolute ones with an allowed scheme.
/// Browsers skip whitespace and control characters inside a scheme.
fn is_allowed_url(url: &str) -> bool {
    let cleaned: String = url.chars().filter(|c| !c.is_whitespace() && !c.is_control()).collect();
    match cleaned.find([':', '/', '?', '#']) {
        Some(i) if cleaned[i..].starts_with(':') => {
            let scheme = cleaned[..i].to_ascii_lowercase();
            ALLOWED_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    }
}

/// First line of a description, stripped of markup, for card previews
pub fn plain_preview(text: &str, max_chars: usize) -> String {
    let mut preview = String::new();
    for event in Parser::new_ext(text, get_options()) {
        match event {
            Event::Text(t) | Event::Code(t) | Event::Html(t) | Event::InlineHtml(t) => preview.push_str(&t),
            Event::SoftBreak | Event::HardBreak => preview.push(' '),
            Event::End(_) if !preview.is_empty() && !preview.ends_with(' ') => preview.push(' '),
            _ => {}
        }
        if preview.chars().count() > max_chars {
            break;
        }
    }
    let preview = preview.trim();
    if preview.chars().count() > max_chars {
        let cut: String = preview.chars().take(max_chars).collect();
        format!("{}…", cut.trim_end())
    } else {
        preview.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_formatting() {
        let html = render_markdown("**bold** and ~~gone~~");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));

        let block = render_markdown("<div onclick=\"x()\">\nboom\n</div>");
        assert!(!block.contains("<div"));
    }

    #[test]
    fn test_script_links_are_blocked() {
        for source in [
            "[click](javascript:alert(document.cookie))",
            "[click](JaVaScRiPt:alert(1))",
            "[click](javascript&#58;alert(1))",
            "<javascript:alert(1)>",
            "![img](javascript:alert(1))",
            "[data](data:text/html;base64,PHNjcmlwdD4=)",
        ] {
            let html = render_markdown(source).to_lowercase();
            assert!(!html.contains("=\"javascript:"), "{source} -> {html}");
            assert!(!html.contains("=\"data:"), "{source} -> {html}");
        }
        let html = render_markdown("[click](javascript:alert(document.cookie))");
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r##"href="#""##));
    }

    #[test]
    fn test_safe_links_are_kept() {
        assert!(render_markdown("[site](https://example.com/a?b=1)").contains(r#"href="https://example.com/a?b=1""#));
        assert!(render_markdown("[mail](mailto:ann@example.com)").contains(r#"href="mailto:ann@example.com""#));
        assert!(render_markdown("[detail](/todos/1)").contains(r#"href="/todos/1""#));
        assert!(render_markdown("[anchor](#notes)").contains(r##"href="#notes""##));
    }

    #[test]
    fn test_task_list() {
        let html = render_markdown("- [x] done\n- [ ] open");
        assert!(html.contains("checkbox"));
    }

    #[test]
    fn test_plain_preview() {
        assert_eq!(plain_preview("# Title\n\nsome *text*", 100), "Title some text");
        assert_eq!(plain_preview("abcdefghij", 4), "abcd…");
        assert_eq!(plain_preview("", 10), "");
    }
}
