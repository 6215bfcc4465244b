//! JSON protocol and WebSocket transport.
//!
//! Each connected client receives an `init` message with the current element
//! snapshot, then an `update` message per element the root container
//! re-renders. Clients send `input` events carrying the edited element's
//! current text value; nothing else crosses the wire.

use axum::{
    Router,
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::{Html, IntoResponse},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast::{self, error::RecvError};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::app::App;
use crate::element::Element;

/// Messages from client to server.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub(crate) enum ClientMessage {
    #[serde(rename = "input")]
    Input { id: String, value: String },
}

/// Messages from server to client.
#[derive(Debug, Serialize, Clone)]
#[serde(tag = "type")]
pub(crate) enum ServerMessage {
    #[serde(rename = "init")]
    Init { elements: Vec<Element> },
    #[serde(rename = "update")]
    Update { id: String, element: Element },
}

/// Yields the next message to forward to a client, or `None` when the
/// container is gone.
///
/// A client that falls behind the broadcast buffer is resynchronized: its
/// receiver is replaced with a fresh one at the tail (so no stale updates
/// are replayed) and it gets the current element snapshot instead of the
/// gap.
async fn next_update(
    app: &App,
    update_rx: &mut broadcast::Receiver<ServerMessage>,
) -> Option<ServerMessage> {
    match update_rx.recv().await {
        Ok(msg) => Some(msg),
        Err(RecvError::Closed) => None,
        Err(RecvError::Lagged(skipped)) => {
            tracing::debug!(skipped, "client lagged behind; resynchronizing");
            *update_rx = update_rx.resubscribe();
            Some(ServerMessage::Init {
                elements: app.elements(),
            })
        }
    }
}

async fn websocket_handler(ws: WebSocketUpgrade, State(app): State<App>) -> impl IntoResponse {
    ws.on_upgrade(|socket| websocket(socket, app))
}

async fn websocket(stream: WebSocket, app: App) {
    use futures_util::sink::SinkExt;
    use futures_util::stream::StreamExt;

    let (mut sender, mut receiver) = stream.split();

    // Send the initial UI state. The search element's value is already the
    // owner's state, so the input is controlled from the first paint.
    let init_msg = ServerMessage::Init {
        elements: app.elements(),
    };
    let json = serde_json::to_string(&init_msg).unwrap();
    if sender.send(Message::Text(json.into())).await.is_err() {
        return;
    }

    // Subscribe to render-pass updates from the root container.
    let mut update_rx = app.subscribe();

    // Forward updates to this client.
    let app_for_send = app.clone();
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = next_update(&app_for_send, &mut update_rx).await {
            let json = serde_json::to_string(&msg).unwrap();
            if sender.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    // Dispatch incoming events upward. Malformed frames are dropped; the
    // protocol has no error path.
    let app_clone = app.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            if let Message::Text(text) = msg
                && let Ok(client_msg) = serde_json::from_str::<ClientMessage>(&text)
            {
                match client_msg {
                    ClientMessage::Input { id, value } => {
                        app_clone.handle_input(&id, &value);
                    }
                }
            }
        }
    });

    // Wait for either task to finish
    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    }
}

// Default HTML template - wraps the page layout
fn generate_html(title: &str, body_content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body>
{body_content}
    <script src="/static/app.js"></script>
</body>
</html>"#,
        title = title,
        body_content = body_content
    )
}

/// Configuration for creating the application router
pub struct RouterConfig {
    /// Application root container
    pub app: App,
    /// Path to static files directory
    pub static_dir: String,
    /// HTML page title
    pub title: String,
    /// HTML body content (the UI layout)
    pub body_html: String,
}

impl RouterConfig {
    /// Creates a new router configuration
    pub fn new(app: App, body_html: impl Into<String>) -> Self {
        Self {
            app,
            static_dir: "static".to_string(),
            title: "Hacker Stories".to_string(),
            body_html: body_html.into(),
        }
    }

    /// Sets the page title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the static files directory
    pub fn static_dir(mut self, dir: impl Into<String>) -> Self {
        self.static_dir = dir.into();
        self
    }
}

/// Creates an Axum router for the application.
///
/// The router includes:
/// - `/` - Serves the main HTML page with the UI layout
/// - `/ws` - WebSocket endpoint for UI communication
/// - `/static` - Serves the client runtime (app.js, app.css)
pub fn create_router(config: RouterConfig) -> Router {
    let html_content = generate_html(&config.title, &config.body_html);
    let app = config.app.clone();

    Router::new()
        .route("/", get(move || async move { Html(html_content) }))
        .route("/ws", get(websocket_handler))
        .nest_service("/static", ServeDir::new(config.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(app)
}

/// Convenience function to start the server.
///
/// # Example
/// ```no_run
/// use hacker_stories::{App, seed_stories, start_server};
///
/// #[tokio::main]
/// async fn main() {
///     let app = App::new(seed_stories(), "React");
///     let html = r#"
///         <div>
///             <h1>My Hacker Stories</h1>
///             <ui-search id="search"></ui-search>
///             <hr />
///             <ui-story-list id="stories"></ui-story-list>
///         </div>
///     "#;
///     start_server(app, html, "Hacker Stories", "127.0.0.1:3000")
///         .await
///         .unwrap();
/// }
/// ```
pub async fn start_server(
    app: App,
    html: impl Into<String>,
    title: impl Into<String>,
    addr: impl AsRef<str>,
) -> Result<(), std::io::Error> {
    let config = RouterConfig::new(app, html).title(title);
    let router = create_router(config);

    let listener = tokio::net::TcpListener::bind(addr.as_ref()).await?;
    tracing::info!("server running on http://{}", addr.as_ref());

    axum::serve(listener, router).await
}
