//! Hacker Stories - a controlled-input search UI served from Rust
//!
//! An instructional single-page app demonstrating controlled form inputs,
//! unidirectional data flow, and keyed list rendering/filtering. The data
//! layer is in Rust and the UI is in HTML, connected by a JSON protocol
//! over WebSocket.
//!
//! # Architecture
//!
//! - **Rust Layer**: The [`App`] root container owns the story collection
//!   and the one piece of mutable state (the search term). On every state
//!   change it derives the filtered view and pushes fresh element values
//!   down to connected clients.
//! - **HTML Layer**: Custom HTML elements (`<ui-search>`, `<ui-story-list>`)
//!   placed and styled in the page layout. The client runtime reconciles
//!   them to the server-supplied values; it holds no state of its own.
//! - **JSON Protocol**: Bidirectional WebSocket communication. The client
//!   sends input events, the server sends element updates.
//!
//! Data flows strictly downward (state to elements to DOM) and events flow
//! strictly upward (DOM event to notifier to state update to re-render).
//! The search input is *controlled*: its displayed value is forced from
//! owner state on every update, including the very first paint, so the text
//! on screen is always a function of application state rather than of the
//! input element's own edit buffer.
//!
//! # HTML Elements
//!
//! ## `<ui-search>`
//!
//! Corresponds to [`Element::Search`]. Renders a label, a text input, and a
//! "Searching for ..." echo of the current value. Every edit sends an
//! `input` event to the server with the element's id and current text.
//!
//! **Rust Side:**
//! ```rust
//! # use hacker_stories::Element;
//! let search = Element::Search {
//!     id: "search".to_string(),
//!     label: "Search".to_string(),
//!     value: "React".to_string(),
//!     on_input: None,
//! };
//! ```
//!
//! **HTML Side:**
//! ```html
//! <ui-search id="search"></ui-search>
//! ```
//!
//! ## `<ui-story-list>`
//!
//! Corresponds to [`Element::StoryList`]. Renders one row per story, in
//! payload order, each keyed by the story's `object_id` so rows survive
//! unrelated updates. The title is a hyperlink; author, comment count, and
//! points follow as plain text.
//!
//! **Rust Side:**
//! ```rust
//! # use hacker_stories::{story_list, seed_stories};
//! let stories = seed_stories();
//! let refs: Vec<_> = stories.iter().collect();
//! let list = story_list("stories", &refs);
//! ```
//!
//! **HTML Side:**
//! ```html
//! <ui-story-list id="stories"></ui-story-list>
//! ```
//!
//! # Example
//!
//! ```no_run
//! use hacker_stories::{App, seed_stories, start_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = App::new(seed_stories(), "React");
//!
//!     let html = r#"
//!         <div>
//!             <h1>My Hacker Stories</h1>
//!             <ui-search id="search"></ui-search>
//!             <hr />
//!             <ui-story-list id="stories"></ui-story-list>
//!         </div>
//!     "#;
//!
//!     start_server(app, html, "Hacker Stories", "127.0.0.1:3000")
//!         .await
//!         .unwrap();
//! }
//! ```

mod app;
mod element;
mod server;
mod story;

pub use app::{App, LIST_ID, SEARCH_ID};
pub use element::{Element, InputCallback, StoryRow, story_list};
pub use server::{RouterConfig, create_router, start_server};
pub use story::{Story, search_stories, seed_stories};
