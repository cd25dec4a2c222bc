//! Hash routing helpers and internal link interception.

use std::sync::LazyLock;

use regex::Regex;

use dg_manifest::HOME_ROUTE_ID;

/// Anchors whose target looks like an internal route id.
///
/// Route ids are lowercase alphanumerics, hyphens and `/` separators, so
/// `href="/core/p2p"` is internal while `href="https://…"` and already
/// rewritten `href="#/…"` targets are not.
static INTERNAL_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"href="/([a-z0-9][a-z0-9/-]*)""#).expect("internal href regex is valid")
});

/// Extract the route id from a location hash.
///
/// `"#/core/p2p"` → `"core/p2p"`; an empty or bare hash maps to the home
/// route.
#[must_use]
pub fn route_from_hash(hash: &str) -> &str {
    let route = hash
        .trim_start_matches('#')
        .trim_start_matches('/')
        .trim_end_matches('/');
    if route.is_empty() { HOME_ROUTE_ID } else { route }
}

/// Rewrite internal anchors to intercepted hash navigation.
///
/// Every `href="/{routeId}"` becomes `href="#/{routeId}"` with a
/// `data-route` attribute the shell's click handler dispatches on, so
/// in-content links navigate without a full page load. Already-rewritten
/// anchors no longer match, making the rewrite idempotent.
#[must_use]
pub fn rewrite_internal_links(html: &str) -> String {
    INTERNAL_HREF
        .replace_all(html, r##"href="#/$1" data-route="$1""##)
        .into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_route_from_hash_strips_prefix() {
        assert_eq!(route_from_hash("#/core/p2p"), "core/p2p");
        assert_eq!(route_from_hash("#guide"), "guide");
    }

    #[test]
    fn test_route_from_hash_empty_is_home() {
        assert_eq!(route_from_hash(""), "home");
        assert_eq!(route_from_hash("#"), "home");
        assert_eq!(route_from_hash("#/"), "home");
    }

    #[test]
    fn test_rewrites_internal_anchor() {
        let html = r#"<a href="/core/p2p">spec</a>"#;

        let out = rewrite_internal_links(html);

        assert_eq!(
            out,
            r##"<a href="#/core/p2p" data-route="core/p2p">spec</a>"##
        );
    }

    #[test]
    fn test_leaves_external_links_alone() {
        let html = r#"<a href="https://example.com/page">ext</a>"#;

        assert_eq!(rewrite_internal_links(html), html);
    }

    #[test]
    fn test_leaves_uppercase_targets_alone() {
        // Not a route id shape; likely a real absolute path.
        let html = r#"<a href="/README">readme</a>"#;

        assert_eq!(rewrite_internal_links(html), html);
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let html = r#"<a href="/guide">g</a>"#;

        let once = rewrite_internal_links(html);
        let twice = rewrite_internal_links(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_rewrites_multiple_anchors() {
        let html = r#"<a href="/a">a</a> <a href="/b-c">b</a>"#;

        let out = rewrite_internal_links(html);

        assert!(out.contains(r##"href="#/a""##));
        assert!(out.contains(r#"data-route="b-c""#));
    }
}
