//! Walk, plan, render, write.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task::JoinSet;

use dg_manifest::{ManifestBuilder, ResolvedPage};
use dg_render::{render, standardize};
use dg_routes::{RouteResolver, file_stem, title_from_stem};
use dg_source::{SourceErrorKind, SourceFile};

use crate::error::BuildError;
use crate::options::BuildOptions;
use crate::writer;

/// Fragment written in place of a source file that could not be read.
/// The route still resolves so navigation stays consistent.
const UNREADABLE_FRAGMENT: &str = "<p>Content not found</p>";

/// One route the planner committed to before any I/O beyond the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRoute {
    /// Canonical route id, unique across the plan.
    pub id: String,
    /// Display title derived from the filename stem.
    pub title: String,
    /// Walker descriptor for the backing file.
    pub file: SourceFile,
    /// Whether the standardization pre-pass applies.
    pub legacy: bool,
}

/// Outcome of a completed build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Route ids present in the content index, in stable order.
    pub routes: Vec<String>,
    /// Non-fatal problems encountered along the way.
    pub warnings: Vec<String>,
}

/// Walk the source roots and resolve every route, without rendering.
///
/// This is the pure planning stage: ids and titles depend only on file
/// names and the override table, so collisions are caught here, before
/// the pipeline writes anything.
///
/// # Errors
///
/// Returns [`BuildError::MissingSources`] if no root could be walked and
/// [`BuildError::RouteIdCollision`] if two files resolve to one id.
pub fn plan_routes(options: &BuildOptions) -> Result<Vec<PlannedRoute>, BuildError> {
    let (planned, warnings) = plan(options)?;
    for warning in warnings {
        tracing::warn!("{warning}");
    }
    Ok(planned)
}

fn plan(options: &BuildOptions) -> Result<(Vec<PlannedRoute>, Vec<String>), BuildError> {
    let mut warnings = Vec::new();
    let mut files = Vec::new();
    let mut walked = 0usize;

    for root in &options.source_dirs {
        match dg_source::walk(root) {
            Ok(found) => {
                walked += 1;
                files.extend(found);
            }
            Err(e) if e.kind() == SourceErrorKind::DirectoryNotFound => {
                tracing::warn!(root = %root.display(), "Source root missing, skipping");
                warnings.push(e.to_string());
            }
            Err(e) => {
                warnings.push(e.to_string());
            }
        }
    }

    if walked == 0 {
        return Err(BuildError::MissingSources(options.source_dirs.clone()));
    }

    let resolver = RouteResolver::new(options.overrides.clone());
    let mut claimed: BTreeMap<String, PathBuf> = BTreeMap::new();
    let mut planned = Vec::with_capacity(files.len());

    for file in files {
        let id = resolver.resolve(&file.file_name, &file.dir_prefix);
        if let Some(first) = claimed.insert(id.clone(), file.abs_path.clone()) {
            return Err(BuildError::RouteIdCollision {
                id,
                first,
                second: file.abs_path,
            });
        }
        planned.push(PlannedRoute {
            title: title_from_stem(file_stem(&file.file_name)),
            legacy: options.is_legacy_prefix(&file.dir_prefix),
            id,
            file,
        });
    }

    Ok((planned, warnings))
}

/// Run the full build: plan, render concurrently, write artifacts.
///
/// Per-document work (read, optional standardization, render, fragment
/// write) runs on its own tokio task; the manifest stage starts only
/// after every task has settled, so `routes.json` and `content.json`
/// always reflect the complete route set. An unreadable file is demoted
/// to a warning and a placeholder fragment.
///
/// # Errors
///
/// Returns [`BuildError`] on a route id collision, when no source root
/// exists, or when writing to the output directory fails.
pub async fn build(options: BuildOptions) -> Result<BuildReport, BuildError> {
    let (planned, mut warnings) = plan(&options)?;
    tracing::info!(
        routes = planned.len(),
        output = %options.output_dir.display(),
        "Starting build"
    );

    tokio::fs::create_dir_all(&options.output_dir)
        .await
        .map_err(|e| BuildError::write(&options.output_dir, e))?;

    let output_dir: Arc<Path> = Arc::from(options.output_dir.as_path());
    let mut tasks = JoinSet::new();
    for route in planned {
        let output_dir = Arc::clone(&output_dir);
        tasks.spawn(async move { process_route(route, &output_dir).await });
    }

    // Join barrier: the manifest must never see a partial route set.
    let mut pages = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        let (page, warning) = joined??;
        if let Some(warning) = warning {
            tracing::warn!("{warning}");
            warnings.push(warning);
        }
        pages.push(page);
    }

    let (manifest, index) = ManifestBuilder::new(options.categories.clone()).build(pages);
    writer::write_manifest(&options.output_dir, &manifest, &index).await?;

    let routes: Vec<String> = index.route_ids().map(ToOwned::to_owned).collect();
    tracing::info!(routes = routes.len(), warnings = warnings.len(), "Build finished");
    Ok(BuildReport { routes, warnings })
}

async fn process_route(
    route: PlannedRoute,
    output_dir: &Path,
) -> Result<(ResolvedPage, Option<String>), BuildError> {
    let stem = file_stem(&route.file.file_name).to_owned();
    let (html, warning) = match route.file.read().await {
        Ok(doc) => {
            let text = if route.legacy {
                standardize(&doc.raw_text, &stem)
            } else {
                doc.raw_text
            };
            (render(&text), None)
        }
        Err(e) => (UNREADABLE_FRAGMENT.to_owned(), Some(e.to_string())),
    };

    writer::write_fragment(output_dir, &route.id, &html).await?;

    Ok((
        ResolvedPage {
            id: route.id,
            title: route.title,
            html,
        },
        warning,
    ))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use dg_manifest::{Category, CategoryTable, ContentIndex, NavigationManifest};
    use dg_routes::RouteOverrides;

    use super::*;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    fn options(source: &Path, output: &Path) -> BuildOptions {
        BuildOptions {
            source_dirs: vec![source.to_path_buf()],
            output_dir: output.to_path_buf(),
            ..BuildOptions::default()
        }
    }

    #[test]
    fn test_plan_resolves_ids_and_titles() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("my-new-feature.md"), "# Hi").unwrap();

        let planned = plan_routes(&options(temp_dir.path(), Path::new("out"))).unwrap();

        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].id, "my-new-feature");
        assert_eq!(planned[0].title, "My New Feature");
    }

    #[test]
    fn test_plan_applies_overrides_without_prefix() {
        let temp_dir = create_test_dir();
        let core = temp_dir.path().join("core");
        fs::create_dir(&core).unwrap();
        fs::write(core.join("P2P-spec.md"), "# P2P").unwrap();

        let mut opts = options(temp_dir.path(), Path::new("out"));
        opts.overrides = RouteOverrides::from_iter([("p2p-spec.md", "core/p2p")]);

        let planned = plan_routes(&opts).unwrap();

        assert_eq!(planned[0].id, "core/p2p");
    }

    #[test]
    fn test_plan_detects_collision() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("My Page.md"), "a").unwrap();
        fs::write(temp_dir.path().join("my-page.md"), "b").unwrap();

        let err = plan_routes(&options(temp_dir.path(), Path::new("out"))).unwrap_err();

        assert!(matches!(err, BuildError::RouteIdCollision { id, .. } if id == "my-page"));
    }

    #[test]
    fn test_plan_fails_when_every_root_is_missing() {
        let temp_dir = create_test_dir();
        let missing = temp_dir.path().join("gone");

        let err = plan_routes(&options(&missing, Path::new("out"))).unwrap_err();

        assert!(matches!(err, BuildError::MissingSources(_)));
    }

    #[tokio::test]
    async fn test_build_writes_fragments_and_artifacts() {
        let temp_dir = create_test_dir();
        let source = temp_dir.path().join("docs");
        let output = temp_dir.path().join("out");
        fs::create_dir_all(source.join("core")).unwrap();
        fs::write(source.join("guide.md"), "# Guide\n\nHello.").unwrap();
        fs::write(source.join("core").join("peers.md"), "# Peers").unwrap();

        let report = build(options(&source, &output)).await.unwrap();

        assert_eq!(report.routes, vec!["core/peers", "guide"]);
        assert!(report.warnings.is_empty());
        assert!(output.join("guide.html").is_file());
        assert!(output.join("core").join("peers.html").is_file());

        let manifest: NavigationManifest =
            serde_json::from_str(&fs::read_to_string(output.join("routes.json")).unwrap()).unwrap();
        assert_eq!(manifest.0[0].id, "home");
        assert_eq!(manifest.0[0].title, "Home");

        let index: ContentIndex =
            serde_json::from_str(&fs::read_to_string(output.join("content.json")).unwrap())
                .unwrap();
        assert!(index.contains("guide"));
        assert_eq!(index.get("core/peers").unwrap().path, "/core/peers");
    }

    #[tokio::test]
    async fn test_build_orders_manifest_by_category_table() {
        let temp_dir = create_test_dir();
        let source = temp_dir.path().join("docs");
        let output = temp_dir.path().join("out");
        fs::create_dir(&source).unwrap();
        fs::write(source.join("alpha.md"), "# A").unwrap();
        fs::write(source.join("beta.md"), "# B").unwrap();

        let mut opts = options(&source, &output);
        opts.categories = CategoryTable::from_iter([Category {
            name: "Guides".to_owned(),
            routes: vec!["beta".to_owned(), "alpha".to_owned(), "missing".to_owned()],
        }]);

        build(opts).await.unwrap();

        let manifest: NavigationManifest =
            serde_json::from_str(&fs::read_to_string(output.join("routes.json")).unwrap()).unwrap();
        let labels: Vec<&str> = manifest.0.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(labels, vec!["home", "", "beta", "alpha"]);
    }

    #[tokio::test]
    async fn test_build_is_idempotent() {
        let temp_dir = create_test_dir();
        let source = temp_dir.path().join("docs");
        let output = temp_dir.path().join("out");
        fs::create_dir(&source).unwrap();
        fs::write(source.join("guide.md"), "# Guide\n\n- one\n- two").unwrap();

        build(options(&source, &output)).await.unwrap();
        let routes_first = fs::read(output.join("routes.json")).unwrap();
        let content_first = fs::read(output.join("content.json")).unwrap();
        let html_first = fs::read(output.join("guide.html")).unwrap();

        build(options(&source, &output)).await.unwrap();

        assert_eq!(routes_first, fs::read(output.join("routes.json")).unwrap());
        assert_eq!(content_first, fs::read(output.join("content.json")).unwrap());
        assert_eq!(html_first, fs::read(output.join("guide.html")).unwrap());
    }

    #[tokio::test]
    async fn test_unreadable_file_becomes_placeholder_with_warning() {
        let temp_dir = create_test_dir();
        let source = temp_dir.path().join("docs");
        let output = temp_dir.path().join("out");
        fs::create_dir(&source).unwrap();
        fs::write(source.join("broken.md"), [0xffu8, 0xfe, 0x42]).unwrap();

        let report = build(options(&source, &output)).await.unwrap();

        assert_eq!(report.routes, vec!["broken"]);
        assert_eq!(report.warnings.len(), 1);
        let index: ContentIndex =
            serde_json::from_str(&fs::read_to_string(output.join("content.json")).unwrap())
                .unwrap();
        assert_eq!(index.get("broken").unwrap().html, UNREADABLE_FRAGMENT);
    }

    #[tokio::test]
    async fn test_missing_root_among_several_is_a_warning() {
        let temp_dir = create_test_dir();
        let source = temp_dir.path().join("docs");
        let output = temp_dir.path().join("out");
        fs::create_dir(&source).unwrap();
        fs::write(source.join("guide.md"), "# Guide").unwrap();

        let mut opts = options(&source, &output);
        opts.source_dirs.push(temp_dir.path().join("gone"));

        let report = build(opts).await.unwrap();

        assert_eq!(report.routes, vec!["guide"]);
        assert_eq!(report.warnings.len(), 1);
    }

    #[tokio::test]
    async fn test_legacy_prefix_runs_standardization() {
        let temp_dir = create_test_dir();
        let source = temp_dir.path().join("docs");
        let output = temp_dir.path().join("out");
        fs::create_dir_all(source.join("legacy")).unwrap();
        fs::write(source.join("legacy").join("old-notes.md"), "Some text.").unwrap();

        let mut opts = options(&source, &output);
        opts.standardize_prefixes = vec!["legacy".to_owned()];

        build(opts).await.unwrap();

        let html = fs::read_to_string(output.join("legacy").join("old-notes.html")).unwrap();
        assert!(html.contains("<h1>Old Notes</h1>"));
        assert!(html.contains("Examples"));
    }

    #[tokio::test]
    async fn test_home_override_gets_root_path() {
        let temp_dir = create_test_dir();
        let source = temp_dir.path().join("docs");
        let output = temp_dir.path().join("out");
        fs::create_dir(&source).unwrap();
        fs::write(source.join("index.md"), "# Welcome").unwrap();

        let mut opts = options(&source, &output);
        opts.overrides = RouteOverrides::from_iter([("index.md", "home")]);

        let report = build(opts).await.unwrap();

        assert_eq!(report.routes, vec!["home"]);
        let index: ContentIndex =
            serde_json::from_str(&fs::read_to_string(output.join("content.json")).unwrap())
                .unwrap();
        assert_eq!(index.get("home").unwrap().path, "/");
    }

    #[tokio::test]
    async fn test_build_handles_spaced_directory_names() {
        let temp_dir = create_test_dir();
        let source = temp_dir.path().join("docs");
        let output = temp_dir.path().join("out");
        fs::create_dir_all(source.join("My Docs")).unwrap();
        fs::write(source.join("My Docs").join("page.md"), "# Page").unwrap();

        let report = build(options(&source, &output)).await.unwrap();

        assert_eq!(report.routes, vec!["my-docs/page"]);
        assert!(output.join("my-docs").join("page.html").is_file());
    }
}
