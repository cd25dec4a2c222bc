//! Client content-loading state machine for DG.
//!
//! [`ContentLoader`] drives hash-based navigation for the browsing shell:
//! given a route id it fetches the content, rewrites in-content links to
//! intercepted navigation, injects the result into the host view, and
//! records a history entry. Successive navigations race safely through a
//! monotonically increasing generation counter; a superseded fetch is
//! discarded on completion without touching the view or history.

mod links;
mod loader;
mod source;
mod view;

pub use links::{rewrite_internal_links, route_from_hash};
pub use loader::{ContentLoader, LoaderState, NavigationOutcome, NOT_FOUND_FRAGMENT};
pub use source::{ContentSource, FetchError, InMemorySource};
pub use view::{ContentView, RecordingView};
