//! HTTP request handlers for the Doorman web server
//!
//! Handlers are organized by functionality; shared request and response
//! types live in [`types`].

pub mod health;
pub mod members;
pub mod portal;
pub mod types;

pub use health::*;
pub use members::*;
pub use portal::*;
pub use types::*;

use axum::response::Html;

/// Landing page served for unmatched paths
pub async fn landing_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Doorman</title>
    <style>
        body { font-family: system-ui, sans-serif; margin: 0; padding: 2rem; background: #f5f5f5; }
        .container { max-width: 640px; margin: 0 auto; background: white; padding: 2rem; border-radius: 8px; }
        code { background: #f8f9fa; padding: 0.1rem 0.3rem; border-radius: 3px; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Doorman</h1>
        <p>Role-gated membership portal. Portal pages derive your role from the
        <code>userId</code> query parameter and admit you only when it matches
        the page's required role.</p>
        <ul>
            <li><code>GET /portal/manager?userId=a...</code></li>
            <li><code>GET /portal/vip?userId=b...</code></li>
            <li><code>GET /portal/member?userId=...</code></li>
            <li><code>GET /api/health</code></li>
            <li><code>POST /api/members</code></li>
            <li><code>GET /api/members/{id}</code></li>
            <li><a href="/swagger-ui">API documentation</a></li>
        </ul>
    </div>
</body>
</html>"#,
    )
}
