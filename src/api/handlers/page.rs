use axum::response::Html;

/// Serve the bundled kiosk page.
/// Route: GET /
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../../static/index.html"))
}
