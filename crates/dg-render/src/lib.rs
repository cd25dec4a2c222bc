//! Markdown rendering and legacy document standardization for DG.
//!
//! [`render`] converts raw markdown text to an HTML fragment, delegating
//! grammar parsing to pulldown-cmark and tagging fenced diagram blocks so
//! a client-side diagram library can find them after injection.
//! [`standardize`] is the optional pre-pass that brings legacy documents
//! up to a minimal structural contract.

mod diagram;
mod renderer;
mod standardize;

pub use diagram::{DIAGRAM_LANGUAGE, rewrite_diagram_blocks};
pub use renderer::render;
pub use standardize::standardize;
