//! Error types for content resolution.

use crate::slug::SlugError;

/// Error returned when a slug cannot be served.
#[derive(Debug, thiserror::Error)]
pub enum DocError {
    /// No document, alias or listable directory matches the slug.
    #[error("Documentation not found: {slug}")]
    NotFound {
        /// Slug as requested (segments joined with `/`).
        slug: String,
    },
    /// Request path is not a valid slug.
    #[error(transparent)]
    InvalidSlug(#[from] SlugError),
}

impl DocError {
    pub(crate) fn not_found(slug: &impl ToString) -> Self {
        Self::NotFound {
            slug: slug.to_string(),
        }
    }

    /// Returns `true` if the page should be answered with the not-found page.
    ///
    /// Invalid slugs are indistinguishable from missing pages to readers.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::InvalidSlug(_))
    }
}
