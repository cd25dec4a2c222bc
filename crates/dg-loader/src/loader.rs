//! Navigation state machine with generation-counter staleness.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use dg_manifest::HOME_ROUTE_ID;

use crate::links::{rewrite_internal_links, route_from_hash};
use crate::source::{ContentSource, FetchError};
use crate::view::ContentView;

/// Fragment shown when neither the requested route nor the home route can
/// be retrieved.
pub const NOT_FOUND_FRAGMENT: &str = "<h1>Content not found</h1>";

/// Where the loader currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderState {
    /// No navigation has been dispatched yet.
    Idle,
    /// A fetch for `route` is in flight under the given generation token.
    Loading {
        /// Requested route id.
        route: String,
        /// Token the fetch must still hold at completion to take effect.
        generation: u64,
    },
    /// The view shows the content for `route`.
    Displayed {
        /// Displayed route id.
        route: String,
    },
    /// The requested route could not be retrieved; the view shows fallback
    /// content instead.
    Error {
        /// Route id that failed to load.
        route: String,
    },
}

/// How a dispatched navigation settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Content was injected and a history entry recorded.
    Displayed,
    /// The route was missing; fallback content was injected without a
    /// history entry.
    FellBack,
    /// A newer navigation superseded this one before it completed; the
    /// view and history were left untouched.
    Discarded,
}

/// Drives the content container of a documentation shell.
///
/// Each call to [`navigate`](Self::navigate) claims the next generation
/// token before any suspension point, so the latest dispatched navigation
/// always wins: an earlier fetch that completes after a later one finds
/// its token stale and is discarded without touching the view or history.
/// The token travels through the navigation as an immutable value rather
/// than being re-read from shared state mid-flight.
#[derive(Debug)]
pub struct ContentLoader<S, V> {
    source: S,
    view: Mutex<V>,
    state: Mutex<LoaderState>,
    generation: AtomicU64,
}

impl<S, V> ContentLoader<S, V>
where
    S: ContentSource,
    V: ContentView,
{
    /// Create an idle loader over a content source and host view.
    pub fn new(source: S, view: V) -> Self {
        Self {
            source,
            view: Mutex::new(view),
            state: Mutex::new(LoaderState::Idle),
            generation: AtomicU64::new(0),
        }
    }

    /// Navigate to a route id.
    ///
    /// The generation token is claimed synchronously, before the returned
    /// future is first polled. Dispatch order therefore fixes the winner
    /// even when the futures are awaited concurrently.
    pub fn navigate<'a>(
        &'a self,
        route_id: &str,
    ) -> impl Future<Output = NavigationOutcome> + Send + use<'a, S, V> {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let route = route_id.to_owned();
        async move {
            {
                let mut state = self.state.lock().await;
                *state = LoaderState::Loading {
                    route: route.clone(),
                    generation: token,
                };
            }
            tracing::debug!(route = %route, generation = token, "navigation dispatched");
            match self.source.fetch(&route).await {
                Ok(entry) => self.settle_displayed(&route, &entry.html, token).await,
                Err(FetchError::RouteNotFound(_)) => {
                    tracing::warn!(route = %route, "route not found, falling back to home");
                    let fallback = match self.source.fetch(HOME_ROUTE_ID).await {
                        Ok(home) => home.html,
                        Err(_) => NOT_FOUND_FRAGMENT.to_owned(),
                    };
                    self.settle_error(&route, &fallback, token).await
                }
                Err(FetchError::Unavailable(reason)) => {
                    tracing::warn!(route = %route, %reason, "content source unavailable");
                    self.settle_error(&route, NOT_FOUND_FRAGMENT, token).await
                }
            }
        }
    }

    /// Navigate to the route encoded in a location hash.
    ///
    /// An empty or bare hash navigates home. This is the entry point for
    /// hash-change and history (back/forward) events alike.
    pub fn navigate_hash<'a>(
        &'a self,
        hash: &str,
    ) -> impl Future<Output = NavigationOutcome> + Send + use<'a, S, V> {
        self.navigate(route_from_hash(hash))
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> LoaderState {
        self.state.lock().await.clone()
    }

    /// Tear down the loader and hand back its view.
    pub fn into_view(self) -> V {
        self.view.into_inner()
    }

    async fn settle_displayed(&self, route: &str, html: &str, token: u64) -> NavigationOutcome {
        let mut view = self.view.lock().await;
        if self.is_stale(token) {
            return NavigationOutcome::Discarded;
        }
        view.inject(&rewrite_internal_links(html));
        view.push_history(route);
        *self.state.lock().await = LoaderState::Displayed {
            route: route.to_owned(),
        };
        NavigationOutcome::Displayed
    }

    async fn settle_error(&self, route: &str, html: &str, token: u64) -> NavigationOutcome {
        let mut view = self.view.lock().await;
        if self.is_stale(token) {
            return NavigationOutcome::Discarded;
        }
        // Fallback content is visible but never becomes a history entry.
        view.inject(&rewrite_internal_links(html));
        *self.state.lock().await = LoaderState::Error {
            route: route.to_owned(),
        };
        NavigationOutcome::FellBack
    }

    fn is_stale(&self, token: u64) -> bool {
        let current = self.generation.load(Ordering::SeqCst);
        if current == token {
            return false;
        }
        tracing::debug!(generation = token, current, "discarding stale navigation");
        true
    }
}
