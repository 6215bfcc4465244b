//! Hacker Stories server
//!
//! Serves the instructional search UI: a hardcoded story list, a controlled
//! search input, and a filtered keyed list, all driven by Rust-side state.
//!
//! Run with: cargo run
//! Then open http://127.0.0.1:3000 in your browser

use hacker_stories::{App, seed_stories, start_server};

#[tokio::main]
async fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    // The root container owns the stories and the search term. "React" is
    // the default search, so the list starts out filtered and the input
    // starts out populated.
    let app = App::new(seed_stories(), "React");

    // Define the UI layout in HTML. The custom elements are bound to their
    // Rust-side counterparts by id.
    let html = r#"
        <div class="container">
            <h1>My Hacker Stories</h1>
            <ui-search id="search"></ui-search>
            <hr />
            <ui-story-list id="stories"></ui-story-list>
        </div>
    "#;

    start_server(app, html, "Hacker Stories", "127.0.0.1:3000")
        .await
        .unwrap();
}
