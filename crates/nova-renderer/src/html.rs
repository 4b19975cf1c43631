//! HTML output helpers: escaping, code blocks, images and link resolution.

use std::fmt::Write;

/// URL prefix under which documentation pages are served.
const DOCS_PREFIX: &str = "/docs";

/// Escape HTML special characters.
///
/// # Examples
///
/// ```
/// use nova_renderer::escape_html;
///
/// assert_eq!(escape_html("<a & b>"), "&lt;a &amp; b&gt;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

pub(crate) fn code_block(lang: Option<&str>, content: &str, out: &mut String) {
    if let Some(lang) = lang {
        write!(
            out,
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            escape_html(lang),
            escape_html(content)
        )
        .unwrap();
    } else {
        write!(out, "<pre><code>{}</code></pre>", escape_html(content)).unwrap();
    }
}

pub(crate) fn image(src: &str, alt: &str, title: &str, out: &mut String) {
    let title_attr = if title.is_empty() {
        String::new()
    } else {
        format!(r#" title="{}""#, escape_html(title))
    };
    write!(
        out,
        r#"<img src="{}"{title_attr} alt="{}">"#,
        escape_html(src),
        escape_html(alt)
    )
    .unwrap();
}

/// Resolve a markdown link URL found in a document living in `base_dir`.
///
/// `base_dir` is the root-relative directory of the source file (`""` for the
/// documentation root). Relative `.md` links become `/docs/...` URLs:
/// - `./sibling.md` → `/docs/{base_dir}/sibling`
/// - `../parent.md` → `/docs/{parent of base_dir}/parent`
/// - `sub/index.md` → `/docs/{base_dir}/sub`
/// - `/governance/tokenomics.md` → `/docs/governance/tokenomics`
///
/// External links, fragment-only links, and non-markdown links are returned unchanged.
///
/// # Examples
///
/// ```
/// use nova_renderer::resolve_link;
///
/// assert_eq!(resolve_link("./foundation.md", "governance"), "/docs/governance/foundation");
/// assert_eq!(resolve_link("https://example.com", "governance"), "https://example.com");
/// ```
#[must_use]
#[allow(clippy::case_sensitive_file_extension_comparisons)]
pub fn resolve_link(url: &str, base_dir: &str) -> String {
    if url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with("//")
        || url.starts_with("mailto:")
        || url.starts_with("tel:")
        || url.starts_with('#')
    {
        return url.to_owned();
    }

    if !url.ends_with(".md") && !url.contains(".md#") {
        return url.to_owned();
    }

    let (path_part, fragment) = match url.find('#') {
        Some(hash_pos) => (&url[..hash_pos], &url[hash_pos..]),
        None => (url, ""),
    };

    let resolved = if path_part.starts_with('/') {
        path_part.trim_start_matches('/').to_owned()
    } else {
        resolve_relative_path(path_part, base_dir)
    };

    let clean = resolved.strip_suffix(".md").unwrap_or(&resolved);
    let clean = clean.strip_suffix("/index").unwrap_or(clean);
    let clean = if clean == "index" { "" } else { clean };

    if clean.is_empty() {
        format!("{DOCS_PREFIX}{fragment}")
    } else {
        format!("{DOCS_PREFIX}/{clean}{fragment}")
    }
}

/// Resolve a relative path against a base directory.
///
/// `..` above the root is clamped rather than escaping it.
fn resolve_relative_path(relative: &str, base: &str) -> String {
    let mut segments: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();

    for component in relative.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(component),
        }
    }

    segments.join("/")
}
