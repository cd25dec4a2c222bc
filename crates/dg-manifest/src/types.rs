//! Artifact data model: route entries, manifest, content index, categories.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Route id of the fixed home entry.
pub const HOME_ROUTE_ID: &str = "home";

/// Display title of the fixed home entry.
pub const HOME_TITLE: &str = "Home";

/// One entry in the navigation manifest.
///
/// Entries with an empty `id` are non-navigable category headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Canonical route id, or empty for a category header.
    pub id: String,
    /// Human-readable label.
    pub title: String,
    /// Category the route belongs to, absent for home and headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl RouteEntry {
    /// Create a navigable entry.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: None,
        }
    }

    /// Create a non-navigable category header.
    #[must_use]
    pub fn header(title: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            category: None,
        }
    }

    /// True if this entry is a category header rather than a page.
    #[must_use]
    pub fn is_header(&self) -> bool {
        self.id.is_empty()
    }
}

/// Ordered sequence of route entries, starting with the fixed home entry.
///
/// Serializes to the `routes.json` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationManifest(pub Vec<RouteEntry>);

impl NavigationManifest {
    /// Iterate over navigable (non-header) entries.
    pub fn pages(&self) -> impl Iterator<Item = &RouteEntry> {
        self.0.iter().filter(|e| !e.is_header())
    }
}

/// Rendered content and public path for one route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    /// Pre-rendered HTML fragment.
    pub html: String,
    /// Public path: `/` for home, `/{routeId}` otherwise.
    pub path: String,
}

/// Flat route id → content mapping.
///
/// Serializes to the `content.json` object; the `BTreeMap` keeps key
/// order stable across rebuilds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentIndex(pub BTreeMap<String, ContentEntry>);

impl ContentIndex {
    /// Look up content by route id.
    #[must_use]
    pub fn get(&self, route_id: &str) -> Option<&ContentEntry> {
        self.0.get(route_id)
    }

    /// True if the route id is present.
    #[must_use]
    pub fn contains(&self, route_id: &str) -> bool {
        self.0.contains_key(route_id)
    }

    /// Number of indexed routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the index has no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over indexed route ids in stable order.
    pub fn route_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Public path for a route id: `/` for home, `/{routeId}` otherwise.
    #[must_use]
    pub fn public_path(route_id: &str) -> String {
        if route_id == HOME_ROUTE_ID {
            "/".to_owned()
        } else {
            format!("/{route_id}")
        }
    }
}

/// One named navigation group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    /// Display name, rendered as a sidebar header.
    pub name: String,
    /// Route ids expected to exist after resolution, in display order.
    pub routes: Vec<String>,
}

/// Ordered list of navigation categories.
///
/// A route not listed in any category is still retrievable via direct
/// navigation and present in the content index, but does not appear in
/// the rendered sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable(pub Vec<Category>);

impl CategoryTable {
    /// Iterate over categories in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.0.iter()
    }
}

impl FromIterator<Category> for CategoryTable {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
