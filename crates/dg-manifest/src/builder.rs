//! Manifest and content index construction.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::{
    CategoryTable, ContentEntry, ContentIndex, HOME_ROUTE_ID, HOME_TITLE, NavigationManifest,
    RouteEntry,
};

/// One fully resolved page, ready for aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPage {
    /// Canonical route id, unique across the build.
    pub id: String,
    /// Display title derived from the filename.
    pub title: String,
    /// Pre-rendered HTML fragment.
    pub html: String,
}

/// Aggregates resolved pages into the published artifacts.
///
/// The category table is supplied at construction so synthetic tables can
/// drive tests without global state.
#[derive(Debug, Clone, Default)]
pub struct ManifestBuilder {
    categories: CategoryTable,
}

impl ManifestBuilder {
    /// Create a builder with the given category table.
    #[must_use]
    pub fn new(categories: CategoryTable) -> Self {
        Self { categories }
    }

    /// Build the navigation manifest and content index.
    ///
    /// The manifest always begins with the fixed home entry, followed by
    /// one header plus its route entries per category, in table order,
    /// filtered to routes that actually resolved. Every resolved route
    /// appears exactly once: an id listed more than once in the table
    /// keeps its first occurrence. Routes absent from the table are
    /// indexed but not listed. Categories with no resolved routes are
    /// omitted entirely.
    #[must_use]
    pub fn build(&self, pages: Vec<ResolvedPage>) -> (NavigationManifest, ContentIndex) {
        let by_id: BTreeMap<String, ResolvedPage> =
            pages.into_iter().map(|p| (p.id.clone(), p)).collect();

        let mut entries = vec![RouteEntry::new(HOME_ROUTE_ID, HOME_TITLE)];
        let mut listed: BTreeSet<&str> = BTreeSet::new();

        for category in self.categories.iter() {
            let resolved: Vec<&str> = category
                .routes
                .iter()
                .map(String::as_str)
                .filter(|id| {
                    *id != HOME_ROUTE_ID && by_id.contains_key(*id) && listed.insert(*id)
                })
                .collect();

            if resolved.is_empty() {
                continue;
            }

            entries.push(RouteEntry::header(category.name.clone()));
            for id in resolved {
                let page = &by_id[id];
                entries.push(RouteEntry {
                    id: page.id.clone(),
                    title: page.title.clone(),
                    category: Some(category.name.clone()),
                });
            }
        }

        let index = ContentIndex(
            by_id
                .into_values()
                .map(|page| {
                    let path = ContentIndex::public_path(&page.id);
                    (page.id, ContentEntry { html: page.html, path })
                })
                .collect(),
        );

        (NavigationManifest(entries), index)
    }
}
