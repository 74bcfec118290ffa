//! Info page handler

use axum::extract::State;
use axum::response::Html;
use std::sync::Arc;

use crate::server::InboxConfig;

/// Serve the static info page shown for GET requests on any path.
pub async fn info(State(config): State<Arc<InboxConfig>>) -> Html<String> {
    let port = config.port;
    Html(format!(
        r#"<html>
<head><title>JSON POST Server</title></head>
<body>
    <h1>JSON POST Server Running</h1>
    <p>Server is listening on port {port}</p>
    <p>Send POST requests with JSON body to this server.</p>
    <h3>Example using curl:</h3>
    <pre>
curl -X POST http://localhost:{port} \
  -H "Content-Type: application/json" \
  -d '{{"message": "Hello, Server!", "value": 42}}'
    </pre>
</body>
</html>
"#
    ))
}
