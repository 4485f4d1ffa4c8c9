//! Page Routes
//!
//! The two HTML pages, embedded at compile time and served by the API
//! process itself.
//!
//! - GET / - Dashboard page
//! - GET /summary - Summary page
//!
//! Any other path falls through to the dashboard page, mirroring the
//! navigation behavior of a single-page layout router.

use axum::{http::Uri, response::Html};

const DASHBOARD_HTML: &str = include_str!("../../../assets/dashboard.html");
const SUMMARY_HTML: &str = include_str!("../../../assets/summary.html");

/// The two pages the app can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Summary,
}

/// Map a URL path to a page. Pure function of the path string; unknown
/// paths resolve to the dashboard.
pub fn page_for_path(path: &str) -> Page {
    match path {
        "/summary" => Page::Summary,
        _ => Page::Dashboard,
    }
}

fn render(page: Page) -> Html<&'static str> {
    match page {
        Page::Dashboard => Html(DASHBOARD_HTML),
        Page::Summary => Html(SUMMARY_HTML),
    }
}

/// GET /
pub async fn dashboard_page() -> Html<&'static str> {
    render(Page::Dashboard)
}

/// GET /summary
pub async fn summary_page() -> Html<&'static str> {
    render(Page::Summary)
}

/// Fallback for unknown paths.
pub async fn fallback_page(uri: Uri) -> Html<&'static str> {
    render(page_for_path(uri.path()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_for_path() {
        assert_eq!(page_for_path("/"), Page::Dashboard);
        assert_eq!(page_for_path("/summary"), Page::Summary);
        assert_eq!(page_for_path("/anything-else"), Page::Dashboard);
        assert_eq!(page_for_path(""), Page::Dashboard);
    }

    #[test]
    fn test_pages_embed_their_mount_points() {
        assert!(DASHBOARD_HTML.contains("id=\"crop-dropdown\""));
        assert!(SUMMARY_HTML.contains("id=\"summary-text\""));
    }
}
