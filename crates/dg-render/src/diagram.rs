//! Diagram fence rewriting.
//!
//! The raw renderer emits fenced diagram sources as generic code blocks.
//! The client-side diagram library looks for `<pre class="mermaid">`
//! containers after content injection, so the generic wrapper is rewritten
//! here. This is a textual substitution over the rendered HTML, not a
//! parse-tree transformation.

use std::sync::LazyLock;

use regex::Regex;

/// Reserved fence language marking a diagram block.
pub const DIAGRAM_LANGUAGE: &str = "mermaid";

/// Matches the code-block wrapper the markdown renderer emits for
/// diagram-tagged fences.
static DIAGRAM_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<pre><code class="language-mermaid">(.*?)</code></pre>"#)
        .expect("diagram block regex is valid")
});

/// Rewrite diagram code blocks into dedicated diagram containers.
///
/// Idempotent: already-rewritten output contains no matching wrapper, so
/// running it twice is a no-op.
#[must_use]
pub fn rewrite_diagram_blocks(html: &str) -> String {
    DIAGRAM_BLOCK
        .replace_all(html, r#"<pre class="mermaid">$1</pre>"#)
        .into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_rewrites_diagram_wrapper() {
        let html = "<pre><code class=\"language-mermaid\">graph TD;\nA--&gt;B;\n</code></pre>";

        let out = rewrite_diagram_blocks(html);

        assert_eq!(out, "<pre class=\"mermaid\">graph TD;\nA--&gt;B;\n</pre>");
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let html = "<pre><code class=\"language-mermaid\">sequenceDiagram\n</code></pre>";

        let once = rewrite_diagram_blocks(html);
        let twice = rewrite_diagram_blocks(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_leaves_other_code_blocks_alone() {
        let html = "<pre><code class=\"language-rust\">fn main() {}\n</code></pre>";

        assert_eq!(rewrite_diagram_blocks(html), html);
    }

    #[test]
    fn test_rewrites_multiple_blocks() {
        let html = "<pre><code class=\"language-mermaid\">a\n</code></pre>\
                    <p>between</p>\
                    <pre><code class=\"language-mermaid\">b\n</code></pre>";

        let out = rewrite_diagram_blocks(html);

        assert_eq!(out.matches("<pre class=\"mermaid\">").count(), 2);
        assert!(out.contains("<p>between</p>"));
    }
}
