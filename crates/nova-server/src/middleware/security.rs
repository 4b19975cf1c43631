//! Response hardening headers applied to every route.

use axum::http::HeaderValue;
use axum::http::header::HeaderName;
use tower_http::set_header::SetResponseHeaderLayer;

/// Policy for server-rendered doc pages: no scripts at all, inline
/// `<style>` for the table block, images from anywhere over https.
const CSP: &str = "default-src 'self'; \
                   script-src 'none'; \
                   style-src 'self' 'unsafe-inline'; \
                   img-src 'self' data: https:; \
                   frame-ancestors 'none'";

fn overriding(name: &'static str, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static(name),
        HeaderValue::from_static(value),
    )
}

pub(crate) fn csp_layer() -> SetResponseHeaderLayer<HeaderValue> {
    overriding("content-security-policy", CSP)
}

/// Stops browsers from sniffing JSON API bodies as HTML.
pub(crate) fn content_type_options_layer() -> SetResponseHeaderLayer<HeaderValue> {
    overriding("x-content-type-options", "nosniff")
}

/// Docs pages are never embedded in frames.
pub(crate) fn frame_options_layer() -> SetResponseHeaderLayer<HeaderValue> {
    overriding("x-frame-options", "DENY")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csp_blocks_scripts_allows_inline_styles() {
        let directives: Vec<&str> = CSP.split(';').map(str::trim).collect();

        assert!(directives.contains(&"script-src 'none'"));
        assert!(directives.contains(&"style-src 'self' 'unsafe-inline'"));
        assert!(directives.contains(&"frame-ancestors 'none'"));
    }

    #[test]
    fn test_csp_is_valid_header_value() {
        assert!(HeaderValue::from_str(CSP).is_ok());
    }
}
