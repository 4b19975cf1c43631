//! Static site generation for Supernova documentation.

mod builder;

pub use builder::{BuildConfig, BuildError, BuildReport, StaticSiteBuilder};
