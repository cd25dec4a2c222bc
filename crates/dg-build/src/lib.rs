//! Build pipeline for the DG documentation generator.
//!
//! [`build`] turns a tree of markdown sources into the published
//! artifacts: one pre-rendered HTML fragment per route, the ordered
//! `routes.json` navigation manifest and the consolidated `content.json`
//! content index. Route planning is a pure, synchronous stage so id
//! collisions fail the build before anything touches the output
//! directory; per-document read/render/write work then fans out across
//! tokio tasks and the manifest stage waits on a join barrier so it only
//! ever sees a complete route set.

mod error;
mod options;
mod pipeline;
mod writer;

pub use error::BuildError;
pub use options::BuildOptions;
pub use pipeline::{BuildReport, PlannedRoute, build, plan_routes};
