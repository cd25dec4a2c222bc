//! Markdown to HTML fragment rendering.

use pulldown_cmark::{Options, Parser, html};

use crate::diagram::rewrite_diagram_blocks;

/// Parser options: GFM tables, strikethrough and task lists.
fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM
}

/// Render raw markdown text to an HTML fragment.
///
/// Pure function: same input, same output, no side effects. Fenced code
/// blocks tagged with the reserved diagram language are rewritten into a
/// dedicated diagram container so the client can render them separately.
#[must_use]
pub fn render(raw_text: &str) -> String {
    let parser = Parser::new_ext(raw_text, parser_options());
    let mut out = String::with_capacity(raw_text.len() * 2);
    html::push_html(&mut out, parser);
    rewrite_diagram_blocks(&out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_paragraph() {
        let html = render("Hello world.");

        assert_eq!(html, "<p>Hello world.</p>\n");
    }

    #[test]
    fn test_render_heading_and_list() {
        let html = render("# Title\n\n- one\n- two\n");

        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<li>one</li>"));
        assert!(html.contains("<li>two</li>"));
    }

    #[test]
    fn test_render_gfm_table() {
        let html = render("| a | b |\n|---|---|\n| 1 | 2 |\n");

        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_render_plain_code_block_untouched() {
        let html = render("```rust\nfn main() {}\n```\n");

        assert!(html.contains(r#"<pre><code class="language-rust">"#));
    }

    #[test]
    fn test_render_tags_diagram_block() {
        let html = render("```mermaid\ngraph TD; A-->B;\n```\n");

        assert!(html.contains(r#"<pre class="mermaid">"#));
        assert!(!html.contains("language-mermaid"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let input = "# A\n\nSome *text* with a [link](/guide).\n";

        assert_eq!(render(input), render(input));
    }
}
