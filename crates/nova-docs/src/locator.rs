//! Content Locator.
//!
//! Maps a [`Slug`] to exactly one markdown document by trying a fixed chain
//! of [`LocateStrategy`] values: overview, direct file, directory index,
//! alias, recursive search. The first strategy that finds a document wins.

use nova_storage::{Storage, StorageError, join_path};

use crate::error::DocError;
use crate::slug::Slug;

/// Default location of the overview document.
pub const DEFAULT_OVERVIEW_PATH: &str = "overview/introduction.md";

/// Single-segment slugs that resolve to a document elsewhere in the tree.
pub const ALIASES: &[(&str, &str)] = &[
    ("foundation", "governance/foundation.md"),
    ("tokenomics", "governance/tokenomics.md"),
    ("consensus-rules", "technical-docs/consensus-rules.md"),
    ("cryptography", "technical-docs/cryptography.md"),
    ("security", "technical-docs/security-mitigation.md"),
    ("installation", "node-operation/installation-guide.md"),
    ("environmental", "environmental/environmental-features.md"),
];

const INDEX_FILE: &str = "index.md";
const README_FILE: &str = "README.md";

/// A located markdown document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocatedDoc {
    /// Raw markdown content.
    pub content: String,
    /// Path of the source file relative to the docs root.
    pub source: String,
}

/// One step of the lookup chain.
pub trait LocateStrategy: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Try to find the document for `slug`.
    ///
    /// `Ok(None)` means this strategy has no match and the chain continues.
    fn locate(&self, storage: &dyn Storage, slug: &Slug)
    -> Result<Option<LocatedDoc>, StorageError>;

    /// Returns `true` if no later strategy may be tried for `slug` once this
    /// one has run, whether or not it found a document.
    fn is_terminal(&self, _slug: &Slug) -> bool {
        false
    }
}

/// Read `path` if it is a regular file.
fn read_candidate(storage: &dyn Storage, path: &str) -> Result<Option<LocatedDoc>, StorageError> {
    if !storage.is_file(path) {
        return Ok(None);
    }
    match storage.read(path) {
        Ok(content) => Ok(Some(LocatedDoc {
            content,
            source: path.to_owned(),
        })),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// `["overview"]` maps to a fixed document and never falls through.
pub struct OverviewStrategy {
    path: String,
}

impl OverviewStrategy {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl LocateStrategy for OverviewStrategy {
    fn name(&self) -> &'static str {
        "overview"
    }

    fn locate(
        &self,
        storage: &dyn Storage,
        slug: &Slug,
    ) -> Result<Option<LocatedDoc>, StorageError> {
        if !slug.is_overview() {
            return Ok(None);
        }
        read_candidate(storage, &self.path)
    }

    fn is_terminal(&self, slug: &Slug) -> bool {
        slug.is_overview()
    }
}

/// `{slug}.md`.
pub struct DirectFileStrategy;

impl LocateStrategy for DirectFileStrategy {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn locate(
        &self,
        storage: &dyn Storage,
        slug: &Slug,
    ) -> Result<Option<LocatedDoc>, StorageError> {
        read_candidate(storage, &format!("{}.md", slug.to_path()))
    }
}

/// `{slug}/index.md`.
pub struct DirectoryIndexStrategy;

impl LocateStrategy for DirectoryIndexStrategy {
    fn name(&self) -> &'static str {
        "index"
    }

    fn locate(
        &self,
        storage: &dyn Storage,
        slug: &Slug,
    ) -> Result<Option<LocatedDoc>, StorageError> {
        read_candidate(storage, &join_path(&slug.to_path(), INDEX_FILE))
    }
}

/// Single-segment aliases from a fixed table.
///
/// An alias whose target is missing falls through.
pub struct AliasStrategy {
    aliases: &'static [(&'static str, &'static str)],
}

impl AliasStrategy {
    #[must_use]
    pub fn new(aliases: &'static [(&'static str, &'static str)]) -> Self {
        Self { aliases }
    }
}

impl Default for AliasStrategy {
    fn default() -> Self {
        Self::new(ALIASES)
    }
}

impl LocateStrategy for AliasStrategy {
    fn name(&self) -> &'static str {
        "alias"
    }

    fn locate(
        &self,
        storage: &dyn Storage,
        slug: &Slug,
    ) -> Result<Option<LocatedDoc>, StorageError> {
        let [segment] = slug.segments() else {
            return Ok(None);
        };
        match self.aliases.iter().find(|(alias, _)| *alias == segment.as_str()) {
            Some((_, target)) => read_candidate(storage, target),
            None => Ok(None),
        }
    }
}

/// Depth-first search of the whole tree for `{last segment}.md`.
///
/// Names are compared case-insensitively; entries of each directory are
/// visited in byte-wise name order. `README.md` never matches.
pub struct RecursiveSearchStrategy;

impl RecursiveSearchStrategy {
    fn search(
        storage: &dyn Storage,
        dir: &str,
        target: &str,
    ) -> Result<Option<LocatedDoc>, StorageError> {
        let entries = match storage.list(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(dir = %dir, error = %e, "Skipping unreadable directory");
                return Ok(None);
            }
        };

        for entry in entries {
            let path = join_path(dir, &entry.name);
            if entry.is_dir() {
                if let Some(doc) = Self::search(storage, &path, target)? {
                    return Ok(Some(doc));
                }
            } else if entry.name != README_FILE && entry.name.to_lowercase() == target {
                match read_candidate(storage, &path) {
                    Ok(Some(doc)) => return Ok(Some(doc)),
                    Ok(None) => {}
                    Err(e) => {
                        tracing::warn!(path = %path, error = %e, "Skipping unreadable match");
                    }
                }
            }
        }
        Ok(None)
    }
}

impl LocateStrategy for RecursiveSearchStrategy {
    fn name(&self) -> &'static str {
        "recursive"
    }

    fn locate(
        &self,
        storage: &dyn Storage,
        slug: &Slug,
    ) -> Result<Option<LocatedDoc>, StorageError> {
        let Some(last) = slug.last() else {
            return Ok(None);
        };
        let target = format!("{last}.md").to_lowercase();
        Self::search(storage, "", &target)
    }
}

/// Ordered chain of lookup strategies.
pub struct Locator {
    strategies: Vec<Box<dyn LocateStrategy>>,
}

impl Locator {
    /// Create the standard chain with the given overview document path.
    #[must_use]
    pub fn new(overview_path: impl Into<String>) -> Self {
        Self::with_strategies(vec![
            Box::new(OverviewStrategy::new(overview_path)),
            Box::new(DirectFileStrategy),
            Box::new(DirectoryIndexStrategy),
            Box::new(AliasStrategy::default()),
            Box::new(RecursiveSearchStrategy),
        ])
    }

    /// Create a locator from an explicit strategy chain.
    #[must_use]
    pub fn with_strategies(strategies: Vec<Box<dyn LocateStrategy>>) -> Self {
        Self { strategies }
    }

    /// Find the document for `slug`.
    ///
    /// Storage errors inside a strategy are logged and count as no match.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::NotFound`] if no strategy finds a document.
    pub fn locate(&self, storage: &dyn Storage, slug: &Slug) -> Result<LocatedDoc, DocError> {
        if slug.is_empty() {
            return Err(DocError::not_found(slug));
        }

        for strategy in &self.strategies {
            match strategy.locate(storage, slug) {
                Ok(Some(doc)) => {
                    tracing::debug!(
                        slug = %slug,
                        strategy = strategy.name(),
                        source = %doc.source,
                        "Located document"
                    );
                    return Ok(doc);
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(
                        slug = %slug,
                        strategy = strategy.name(),
                        error = %e,
                        "Failed to read candidate document"
                    );
                }
            }
            if strategy.is_terminal(slug) {
                break;
            }
        }

        Err(DocError::not_found(slug))
    }
}

impl Default for Locator {
    fn default() -> Self {
        Self::new(DEFAULT_OVERVIEW_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nova_storage::MockStorage;
    use pretty_assertions::assert_eq;

    fn slug(path: &str) -> Slug {
        Slug::parse(path).unwrap()
    }

    fn source_of(storage: &MockStorage, path: &str) -> Option<String> {
        Locator::default()
            .locate(storage, &slug(path))
            .ok()
            .map(|doc| doc.source)
    }

    #[test]
    fn test_overview_special_case() {
        let storage = MockStorage::new()
            .with_file("overview/introduction.md", "# Introduction")
            .with_file("overview.md", "# Shadowed");

        let doc = Locator::default().locate(&storage, &slug("overview")).unwrap();
        assert_eq!(doc.content, "# Introduction");
        assert_eq!(doc.source, "overview/introduction.md");
    }

    #[test]
    fn test_overview_missing_does_not_fall_through() {
        let storage = MockStorage::new()
            .with_file("overview.md", "# Direct")
            .with_file("overview/index.md", "# Index")
            .with_file("misc/overview.md", "# Nested");

        let err = Locator::default()
            .locate(&storage, &slug("overview"))
            .unwrap_err();
        assert!(matches!(err, DocError::NotFound { slug } if slug == "overview"));
    }

    #[test]
    fn test_custom_overview_path() {
        let storage = MockStorage::new().with_file("intro.md", "# Intro");

        let doc = Locator::new("intro.md")
            .locate(&storage, &slug("overview"))
            .unwrap();
        assert_eq!(doc.source, "intro.md");
    }

    #[test]
    fn test_direct_file() {
        let storage = MockStorage::new()
            .with_file("governance/tokenomics.md", "# Tokenomics")
            .with_file("other/tokenomics.md", "# Other");

        let doc = Locator::default()
            .locate(&storage, &slug("governance/tokenomics"))
            .unwrap();
        assert_eq!(doc.content, "# Tokenomics");
        assert_eq!(doc.source, "governance/tokenomics.md");
    }

    #[test]
    fn test_direct_file_preferred_over_index() {
        let storage = MockStorage::new()
            .with_file("governance.md", "# File")
            .with_file("governance/index.md", "# Index");

        assert_eq!(
            source_of(&storage, "governance"),
            Some("governance.md".to_owned())
        );
    }

    #[test]
    fn test_directory_index() {
        let storage = MockStorage::new().with_file("node-operation/index.md", "# Nodes");

        assert_eq!(
            source_of(&storage, "node-operation"),
            Some("node-operation/index.md".to_owned())
        );
    }

    #[test]
    fn test_alias() {
        let storage = MockStorage::new()
            .with_file("technical-docs/security-mitigation.md", "# Security");

        assert_eq!(
            source_of(&storage, "security"),
            Some("technical-docs/security-mitigation.md".to_owned())
        );
    }

    #[test]
    fn test_alias_wins_over_earlier_recursive_match() {
        let storage = MockStorage::new()
            .with_file("archive/tokenomics.md", "# Archived")
            .with_file("governance/tokenomics.md", "# Tokenomics");

        assert_eq!(
            source_of(&storage, "tokenomics"),
            Some("governance/tokenomics.md".to_owned())
        );
    }

    #[test]
    fn test_alias_only_for_single_segment() {
        let storage = MockStorage::new().with_file("governance/foundation.md", "# Foundation");

        let doc = Locator::with_strategies(vec![Box::new(AliasStrategy::default())])
            .locate(&storage, &slug("x/foundation"));
        assert!(doc.is_err());
    }

    #[test]
    fn test_alias_missing_target_falls_through() {
        let storage = MockStorage::new().with_file("archive/cryptography.md", "# Old");

        assert_eq!(
            source_of(&storage, "cryptography"),
            Some("archive/cryptography.md".to_owned())
        );
    }

    #[test]
    fn test_recursive_search_case_insensitive() {
        let storage = MockStorage::new().with_file("deep/nested/Roadmap.md", "# Roadmap");

        assert_eq!(
            source_of(&storage, "roadmap"),
            Some("deep/nested/Roadmap.md".to_owned())
        );
    }

    #[test]
    fn test_recursive_search_uses_last_segment_only() {
        let storage = MockStorage::new().with_file("governance/voting.md", "# Voting");

        assert_eq!(
            source_of(&storage, "unrelated/voting"),
            Some("governance/voting.md".to_owned())
        );
    }

    #[test]
    fn test_recursive_search_deterministic_order() {
        let storage = MockStorage::new()
            .with_file("b/guide.md", "b")
            .with_file("a/z/guide.md", "a/z")
            .with_file("c/guide.md", "c");

        assert_eq!(source_of(&storage, "guide"), Some("a/z/guide.md".to_owned()));
    }

    #[test]
    fn test_recursive_search_skips_unreadable_match() {
        let storage = MockStorage::new()
            .with_unreadable_file("a/guide.md")
            .with_file("b/guide.md", "# Guide");

        assert_eq!(source_of(&storage, "guide"), Some("b/guide.md".to_owned()));
    }

    #[test]
    fn test_recursive_search_skips_readme() {
        let storage = MockStorage::new().with_file("docs/README.md", "# Readme");

        assert_eq!(source_of(&storage, "readme"), None);
        assert_eq!(source_of(&storage, "README"), None);
    }

    #[test]
    fn test_not_found() {
        let storage = MockStorage::new().with_file("governance/tokenomics.md", "# T");

        let err = Locator::default()
            .locate(&storage, &slug("nonexistent-topic"))
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Documentation not found: nonexistent-topic");
    }

    #[test]
    fn test_empty_slug_not_a_document() {
        let storage = MockStorage::new().with_file("index.md", "# Root");

        assert!(Locator::default().locate(&storage, &Slug::default()).is_err());
    }

    #[test]
    fn test_read_error_treated_as_no_match() {
        let storage = MockStorage::new()
            .with_unreadable_file("governance/tokenomics.md")
            .with_file("governance/tokenomics/index.md", "# Index");

        assert_eq!(
            source_of(&storage, "governance/tokenomics"),
            Some("governance/tokenomics/index.md".to_owned())
        );
    }

    #[test]
    fn test_locate_is_deterministic() {
        let storage = MockStorage::new()
            .with_file("x/dup.md", "x")
            .with_file("y/dup.md", "y");
        let locator = Locator::default();

        let first = locator.locate(&storage, &slug("dup")).unwrap();
        let second = locator.locate(&storage, &slug("dup")).unwrap();
        assert_eq!(first, second);
    }
}
