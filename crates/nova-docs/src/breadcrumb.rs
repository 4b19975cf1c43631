//! Breadcrumb Builder.

use serde::Serialize;

use crate::slug::{OVERVIEW_SEGMENT, Slug, humanize};

/// One link in the breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    /// Display name.
    pub name: String,
    /// Absolute URL path.
    pub path: String,
}

impl Breadcrumb {
    fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Build the breadcrumb trail for `slug`.
///
/// Always starts with `Documentation` and has one entry per segment. An
/// `overview` segment links to `/docs/overview` and does not contribute to
/// the paths of later segments.
///
/// # Examples
///
/// ```
/// use nova_docs::{Slug, breadcrumbs};
///
/// let trail = breadcrumbs(&Slug::parse("governance/tokenomics").unwrap());
/// assert_eq!(trail[2].path, "/docs/governance/tokenomics");
/// ```
#[must_use]
pub fn breadcrumbs(slug: &Slug) -> Vec<Breadcrumb> {
    let mut trail = Vec::with_capacity(slug.len() + 1);
    trail.push(Breadcrumb::new("Documentation", "/docs"));

    let mut current = String::new();
    for segment in slug.segments() {
        if segment == OVERVIEW_SEGMENT {
            trail.push(Breadcrumb::new("Overview", "/docs/overview"));
            continue;
        }
        if !current.is_empty() {
            current.push('/');
        }
        current.push_str(segment);
        trail.push(Breadcrumb::new(humanize(segment), format!("/docs/{current}")));
    }

    trail
}
