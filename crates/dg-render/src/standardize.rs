//! Legacy document standardization.
//!
//! A best-effort normalization pass applied to a known legacy subset of
//! source documents before rendering. It ensures a minimal structural
//! contract: a top-level title, a table-of-contents marker, and an
//! examples section. Conforming documents pass through unchanged.

use std::sync::LazyLock;

use regex::Regex;

use dg_routes::title_from_stem;

/// Any heading that already serves as a table of contents.
static TOC_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^#{1,6}\s+(table of contents|contents)\s*$")
        .expect("toc heading regex is valid")
});

/// Any heading that already serves as an examples section.
static EXAMPLES_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^#{1,6}\s+examples\s*$").expect("examples heading regex is valid")
});

/// First second-level heading, the insertion point for the TOC marker.
static FIRST_H2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^##\s").expect("h2 regex is valid"));

/// Placeholder body for a synthesized examples section.
const EXAMPLES_PLACEHOLDER: &str = "Examples for this document have not been written yet.";

/// Standardize a legacy document.
///
/// Ensures, in order:
/// 1. the document begins with a top-level heading, synthesizing one from
///    `title_hint` (word-cased) when absent;
/// 2. a `[TOC]` marker sits immediately before the first second-level
///    heading, unless a "Table of Contents" or "Contents" heading exists;
/// 3. an "Examples" section closes the document when none is present.
#[must_use]
pub fn standardize(raw_text: &str, title_hint: &str) -> String {
    let mut text = raw_text.to_owned();

    if !starts_with_h1(&text) {
        let title = title_from_stem(title_hint);
        text = format!("# {title}\n\n{text}");
    }

    if !TOC_HEADING.is_match(&text)
        && let Some(m) = FIRST_H2.find(&text)
    {
        text.insert_str(m.start(), "[TOC]\n\n");
    }

    if !EXAMPLES_HEADING.is_match(&text) {
        if !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&format!("\n## Examples\n\n{EXAMPLES_PLACEHOLDER}\n"));
    }

    text
}

/// True if the first non-blank line is a top-level heading.
fn starts_with_h1(text: &str) -> bool {
    text.lines()
        .find(|line| !line.trim().is_empty())
        .is_some_and(|line| line.starts_with("# "))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_synthesizes_title_from_hint() {
        let out = standardize("Some intro text.\n", "p2p-spec");

        assert!(out.starts_with("# P2P Spec\n\n"));
        assert!(out.contains("Some intro text."));
    }

    #[test]
    fn test_keeps_existing_title() {
        let out = standardize("# Existing Title\n\nBody.\n", "ignored-hint");

        assert!(out.starts_with("# Existing Title\n"));
        assert!(!out.contains("Ignored Hint"));
    }

    #[test]
    fn test_inserts_toc_marker_before_first_h2() {
        let out = standardize("# Title\n\nIntro.\n\n## First Section\n\nBody.\n", "t");

        let toc_pos = out.find("[TOC]").unwrap();
        let h2_pos = out.find("## First Section").unwrap();
        assert!(toc_pos < h2_pos);
        assert_eq!(&out[toc_pos..h2_pos], "[TOC]\n\n");
    }

    #[test]
    fn test_skips_toc_marker_when_contents_heading_exists() {
        let out = standardize("# Title\n\n## Contents\n\n## Body\n", "t");

        assert!(!out.contains("[TOC]"));
    }

    #[test]
    fn test_skips_toc_marker_when_no_h2_exists() {
        let out = standardize("# Title\n\nJust a paragraph.\n", "t");

        assert!(!out.contains("[TOC]"));
    }

    #[test]
    fn test_appends_examples_section() {
        let out = standardize("# Title\n\nBody.\n", "t");

        assert!(out.ends_with(
            "\n## Examples\n\nExamples for this document have not been written yet.\n"
        ));
    }

    #[test]
    fn test_keeps_existing_examples_section() {
        let input = "# Title\n\n## Examples\n\n`real example`\n";
        let out = standardize(input, "t");

        assert_eq!(out.matches("Examples").count(), 1);
        assert!(out.contains("`real example`"));
    }

    #[test]
    fn test_conforming_document_unchanged() {
        let input = "# Title\n\n## Contents\n\n## Examples\n\nDone.\n";

        assert_eq!(standardize(input, "t"), input);
    }

    #[test]
    fn test_bare_document_gets_full_contract() {
        let out = standardize("Intro only.\n", "legacy-doc");

        assert!(out.starts_with("# Legacy Doc\n\n"));
        assert!(out.contains("Intro only."));
        assert!(out.contains("## Examples"));
    }
}
