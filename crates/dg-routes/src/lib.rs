//! Route id resolution and title derivation for DG.
//!
//! A route id is the canonical, URL-safe string identifying one
//! documentation page. Ids come from an explicit override table first and
//! a directory-aware slugification fallback second; titles come from the
//! filename stem with word casing and acronym corrections.

mod resolver;
mod title;

pub use resolver::{RouteOverrides, RouteResolver, file_stem, slugify};
pub use title::title_from_stem;
