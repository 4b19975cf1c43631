//! Slugs and the path normalizer.
//!
//! A [`Slug`] is the sequence of URL path segments after `/docs/`. The
//! functions [`humanize`] and [`display_title`] turn raw file and directory
//! names into the labels shown to readers.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Slug that always resolves to the overview document.
pub const OVERVIEW_SEGMENT: &str = "overview";

/// Error returned when a slug segment could address a path outside the docs root.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    /// Child segment is empty.
    #[error("Empty slug segment")]
    Empty,
    /// Segment is `.` or `..`.
    #[error("Invalid slug segment: {0:?}")]
    RelativeSegment(String),
    /// Segment contains a path separator.
    #[error("Slug segment contains a path separator: {0:?}")]
    Separator(String),
}

/// Ordered, non-empty path segments identifying a documentation page.
///
/// Serializes as an array of strings (`["governance", "tokenomics"]`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Slug(Vec<String>);

impl Slug {
    /// Parse a request path such as `"governance/tokenomics"`.
    ///
    /// Empty segments are dropped, so leading, trailing and doubled slashes
    /// are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use nova_docs::Slug;
    ///
    /// let slug = Slug::parse("/governance//tokenomics/").unwrap();
    /// assert_eq!(slug.segments(), ["governance", "tokenomics"]);
    /// assert!(Slug::parse("governance/../secrets").is_err());
    /// ```
    pub fn parse(path: &str) -> Result<Self, SlugError> {
        Self::from_segments(path.split('/'))
    }

    /// Build a slug from individual segments, dropping empty ones.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, SlugError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parts = Vec::new();
        for segment in segments {
            let segment = segment.as_ref();
            if segment.is_empty() {
                continue;
            }
            validate_segment(segment)?;
            parts.push(segment.to_owned());
        }
        Ok(Self(parts))
    }

    /// The overview slug, `["overview"]`.
    #[must_use]
    pub fn overview() -> Self {
        Self(vec![OVERVIEW_SEGMENT.to_owned()])
    }

    /// Slug of a direct child of this slug.
    pub fn child(&self, name: &str) -> Result<Self, SlugError> {
        if name.is_empty() {
            return Err(SlugError::Empty);
        }
        validate_segment(name)?;
        let mut parts = self.0.clone();
        parts.push(name.to_owned());
        Ok(Self(parts))
    }

    /// Path segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the documentation root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Final segment, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Returns `true` if this is exactly `["overview"]`.
    #[must_use]
    pub fn is_overview(&self) -> bool {
        self.0.len() == 1 && self.0[0] == OVERVIEW_SEGMENT
    }

    /// Segments joined with `/` (root-relative storage path form).
    #[must_use]
    pub fn to_path(&self) -> String {
        self.0.join("/")
    }

    /// URL of the page (`/docs` for the root).
    #[must_use]
    pub fn url(&self) -> String {
        if self.0.is_empty() {
            "/docs".to_owned()
        } else {
            format!("/docs/{}", self.to_path())
        }
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

impl FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn validate_segment(segment: &str) -> Result<(), SlugError> {
    if segment == "." || segment == ".." {
        return Err(SlugError::RelativeSegment(segment.to_owned()));
    }
    if segment.contains(['/', '\\']) {
        return Err(SlugError::Separator(segment.to_owned()));
    }
    Ok(())
}

/// Convert a raw file or directory name into a display label.
///
/// Strips one trailing `.md`, turns underscores into spaces, splits before
/// ASCII capitals and capitalizes each word. Hyphens are preserved.
///
/// # Examples
///
/// ```
/// use nova_docs::humanize;
///
/// assert_eq!(humanize("consensus_rules"), "Consensus Rules");
/// assert_eq!(humanize("apiReference"), "Api Reference");
/// assert_eq!(humanize("security-mitigation.md"), "Security-mitigation");
/// ```
#[must_use]
pub fn humanize(name: &str) -> String {
    let stem = name.strip_suffix(".md").unwrap_or(name);

    let mut spaced = String::with_capacity(stem.len() + 4);
    for c in stem.chars() {
        if c == '_' {
            spaced.push(' ');
            continue;
        }
        if c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    spaced
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Page title for a slug: humanized segments joined with `" - "`.
///
/// # Examples
///
/// ```
/// use nova_docs::{Slug, display_title};
///
/// let slug = Slug::parse("governance/tokenomics").unwrap();
/// assert_eq!(display_title(&slug), "Governance - Tokenomics");
/// ```
#[must_use]
pub fn display_title(slug: &Slug) -> String {
    slug.segments()
        .iter()
        .map(|segment| humanize(segment))
        .collect::<Vec<_>>()
        .join(" - ")
}
