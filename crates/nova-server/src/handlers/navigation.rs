//! Sidebar tree as JSON.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use nova_docs::NavItem;
use serde::Serialize;

use crate::state::AppState;

/// Body of GET /api/navigation: top-level directories first, then pages.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    items: Vec<NavItem>,
}

/// Handle GET /api/navigation.
///
/// The tree is rebuilt from the docs directory on each request.
pub(crate) async fn get_navigation(State(state): State<Arc<AppState>>) -> Json<NavigationResponse> {
    Json(NavigationResponse {
        items: state.site.navigation(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_items_keep_children() {
        let response = NavigationResponse {
            items: vec![NavItem {
                name: "Governance".to_owned(),
                path: "governance".to_owned(),
                is_directory: true,
                children: vec![NavItem {
                    name: "Tokenomics".to_owned(),
                    path: "governance/tokenomics".to_owned(),
                    is_directory: false,
                    children: vec![],
                }],
            }],
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["items"][0]["is_directory"], true);
        assert_eq!(json["items"][0]["children"][0]["path"], "governance/tokenomics");
        assert!(json["items"][0]["children"][0].get("children").is_none());
    }
}
