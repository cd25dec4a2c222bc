//! Navigation manifest and content index building for DG.
//!
//! Aggregates resolved routes into the two published artifacts: the
//! ordered, category-grouped [`NavigationManifest`] (`routes.json`) and
//! the flat [`ContentIndex`] (`content.json`). Category membership is a
//! hand-authored [`CategoryTable`] supplied at construction time.

mod builder;
mod types;

pub use builder::{ManifestBuilder, ResolvedPage};
pub use types::{
    Category, CategoryTable, ContentEntry, ContentIndex, HOME_ROUTE_ID, HOME_TITLE,
    NavigationManifest, RouteEntry,
};
