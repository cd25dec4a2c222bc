//! Content retrieval seam.

use std::future::Future;

use dg_manifest::{ContentEntry, ContentIndex};

/// Error returned when content retrieval fails.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The requested route id is absent from the content index.
    #[error("Route not found: {0}")]
    RouteNotFound(String),
    /// The content source could not be reached or decoded.
    #[error("Content source unavailable: {0}")]
    Unavailable(String),
}

/// Asynchronous content retrieval by route id.
///
/// The fetch is the loader's only suspension point. Implementations range
/// from an in-memory lookup over a consolidated index to a per-route
/// network fetch; the loader does not care which.
pub trait ContentSource: Send + Sync {
    /// Fetch the content entry for a route id.
    fn fetch(
        &self,
        route_id: &str,
    ) -> impl Future<Output = Result<ContentEntry, FetchError>> + Send;
}

/// Content source backed by a loaded [`ContentIndex`].
///
/// This is the consolidated-`content.json` deployment mode: every route's
/// HTML is resident in memory and a fetch is a plain lookup.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    index: ContentIndex,
}

impl InMemorySource {
    /// Create a source over an already-loaded index.
    #[must_use]
    pub fn new(index: ContentIndex) -> Self {
        Self { index }
    }

    /// Parse a source from serialized `content.json` text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Unavailable`] if the JSON cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, FetchError> {
        let index: ContentIndex =
            serde_json::from_str(json).map_err(|e| FetchError::Unavailable(e.to_string()))?;
        Ok(Self::new(index))
    }
}

impl ContentSource for InMemorySource {
    fn fetch(
        &self,
        route_id: &str,
    ) -> impl Future<Output = Result<ContentEntry, FetchError>> + Send {
        let result = self
            .index
            .get(route_id)
            .cloned()
            .ok_or_else(|| FetchError::RouteNotFound(route_id.to_owned()));
        async move { result }
    }
}
