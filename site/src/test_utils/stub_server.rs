//! Stub DEV.to API over real HTTP
//!
//! Each route prefix plays one scenario; point a `DevToClient` at
//! `{server}/{scenario}` and it requests `{scenario}/articles`.
//!
//! - `ok`: one article per `per_page`, titled `"{username} #{n}"`
//! - `empty`: `[]`
//! - `broken`: 500
//! - `garbage`: 200 with an HTML body
//! - `slow`: valid payload after 2 seconds

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

pub const SLOW_RESPONSE_DELAY: Duration = Duration::from_secs(2);

/// Start the stub on an ephemeral port and return its base URL
pub async fn spawn_stub_api() -> String {
    let app = Router::new()
        .route("/ok/articles", get(ok_articles))
        .route("/empty/articles", get(|| async { "[]" }))
        .route(
            "/broken/articles",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
        )
        .route(
            "/garbage/articles",
            get(|| async { "<html><body>Service unavailable</body></html>" }),
        )
        .route("/slow/articles", get(slow_articles));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn ok_articles(Query(params): Query<HashMap<String, String>>) -> String {
    let username = params.get("username").cloned().unwrap_or_default();
    let per_page: usize = params
        .get("per_page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(30);

    let items: Vec<serde_json::Value> = (1..=per_page)
        .map(|n| {
            serde_json::json!({
                "id": n,
                "title": format!("{} #{}", username, n),
                "url": format!("https://dev.to/{}/post-{}", username, n),
                "comments_count": 0,
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}

async fn slow_articles() -> &'static str {
    tokio::time::sleep(SLOW_RESPONSE_DELAY).await;
    r#"[{"title":"Too late","url":"https://dev.to/x/too-late"}]"#
}
