//! Host view seam.

/// The loader's window onto its host page.
///
/// Covers the two collaborators the loader is allowed to touch: the
/// designated content container and the browser history. Implementations
/// bridge to the actual DOM/history APIs; [`RecordingView`] stands in for
/// them in tests and headless hosts.
pub trait ContentView: Send {
    /// Replace the container's content with the given HTML fragment.
    fn inject(&mut self, html: &str);

    /// Record a history entry for a displayed route.
    fn push_history(&mut self, route_id: &str);
}

/// View that records every injection and history entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingView {
    /// Injected HTML fragments, oldest first.
    pub injected: Vec<String>,
    /// History entries, oldest first.
    pub history: Vec<String>,
}

impl RecordingView {
    /// Create an empty recording view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently injected fragment, if any.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.injected.last().map(String::as_str)
    }
}

impl ContentView for RecordingView {
    fn inject(&mut self, html: &str) {
        self.injected.push(html.to_owned());
    }

    fn push_history(&mut self, route_id: &str) {
        self.history.push(route_id.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_recording_view_tracks_injections_in_order() {
        let mut view = RecordingView::new();
        view.inject("<p>a</p>");
        view.inject("<p>b</p>");

        assert_eq!(view.current(), Some("<p>b</p>"));
        assert_eq!(view.injected.len(), 2);
    }

    #[test]
    fn test_recording_view_tracks_history() {
        let mut view = RecordingView::new();
        view.push_history("guide");
        view.push_history("core/p2p");

        assert_eq!(view.history, vec!["guide", "core/p2p"]);
    }
}
