//! Filename to route id resolution.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Explicit filename → route id mapping.
///
/// Keys are lowercase filenames including the markdown extension; matching
/// is case-insensitive on the incoming filename, but the mapped id is used
/// verbatim. Overrides exist for historically-named or irregularly-cased
/// source files and take absolute precedence over slugification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteOverrides(BTreeMap<String, String>);

impl<'de> Deserialize<'de> for RouteOverrides {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Keys in config files may carry the original filename casing;
        // normalize through insert so lookups stay case-insensitive.
        let map = BTreeMap::<String, String>::deserialize(deserializer)?;
        Ok(map.into_iter().collect())
    }
}

impl RouteOverrides {
    /// Create an empty override table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one override entry. The filename key is lowercased on insert.
    pub fn insert(&mut self, filename: impl Into<String>, route_id: impl Into<String>) {
        self.0.insert(filename.into().to_lowercase(), route_id.into());
    }

    /// Look up an override by filename, case-insensitively.
    #[must_use]
    pub fn get(&self, filename: &str) -> Option<&str> {
        self.0.get(&filename.to_lowercase()).map(String::as_str)
    }

    /// Number of override entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteOverrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut overrides = Self::new();
        for (filename, route_id) in iter {
            overrides.insert(filename, route_id);
        }
        overrides
    }
}

/// Maps `(filename, directory prefix)` pairs to canonical route ids.
///
/// The override table is supplied at construction so synthetic tables can
/// be used in tests without touching global state.
#[derive(Debug, Clone, Default)]
pub struct RouteResolver {
    overrides: RouteOverrides,
}

impl RouteResolver {
    /// Create a resolver with the given override table.
    #[must_use]
    pub fn new(overrides: RouteOverrides) -> Self {
        Self { overrides }
    }

    /// Resolve a filename and directory prefix to a route id.
    ///
    /// Override hits return the mapped id verbatim, without any prefixing.
    /// Otherwise the filename is slugified and a non-empty prefix is
    /// prepended as `{prefix}/{slug}`.
    #[must_use]
    pub fn resolve(&self, file_name: &str, dir_prefix: &str) -> String {
        if let Some(id) = self.overrides.get(file_name) {
            return id.to_owned();
        }

        let slug = slugify(file_name);
        if dir_prefix.is_empty() {
            slug
        } else {
            format!("{dir_prefix}/{slug}")
        }
    }
}

/// Filename stem without the markdown extension.
///
/// The extension is matched case-insensitively, mirroring the walker's
/// extension filter.
#[must_use]
pub fn file_stem(file_name: &str) -> &str {
    let ext_start = file_name.len().wrapping_sub(3);
    if file_name.len() > 3
        && file_name.is_char_boundary(ext_start)
        && file_name[ext_start..].eq_ignore_ascii_case(".md")
    {
        &file_name[..ext_start]
    } else {
        file_name
    }
}

/// Slugify a markdown filename into a route id fragment.
///
/// Strips the `.md` extension, lowercases, replaces every run of non-word
/// characters with a single hyphen, and trims leading/trailing hyphens.
#[must_use]
pub fn slugify(file_name: &str) -> String {
    let stem = file_stem(file_name);

    let mut slug = String::with_capacity(stem.len());
    let mut pending_hyphen = false;

    for c in stem.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
