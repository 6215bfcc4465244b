//! The root container: owner of the search state and the render pass.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use tokio::sync::broadcast;

use crate::element::{Element, story_list};
use crate::server::ServerMessage;
use crate::story::{Story, search_stories};

/// Element id of the controlled search input.
pub const SEARCH_ID: &str = "search";
/// Element id of the story list.
pub const LIST_ID: &str = "stories";

/// The application root: holds the story collection and the single piece of
/// mutable state (the search term), and pushes derived views down to the
/// client on every change.
///
/// Data flows strictly downward (state to elements to rendered DOM); events
/// flow strictly upward (DOM event to notifier to [`App::update_search`] to
/// re-render). The search term has exactly one writer; all reads and writes
/// happen sequentially within the event/render cycle.
///
/// # Thread Safety
/// `App` is designed to be shared across async tasks and cloned freely.
/// All mutations are protected by internal locks.
///
/// # Example
/// ```
/// use hacker_stories::{App, seed_stories};
///
/// let app = App::new(seed_stories(), "React");
/// assert_eq!(app.search_term(), "React");
/// ```
#[derive(Clone)]
pub struct App {
    stories: Arc<Vec<Story>>,
    search_term: Arc<Mutex<String>>,
    elements: Arc<Mutex<HashMap<String, Element>>>,
    update_tx: broadcast::Sender<ServerMessage>,
}

impl App {
    /// Creates the container and performs the initial render pass.
    ///
    /// The search input is controlled from the very first render: the init
    /// payload a connecting client receives already carries
    /// `initial_search` as the displayed value, so owner state and the
    /// input element never diverge.
    pub fn new(stories: Vec<Story>, initial_search: impl Into<String>) -> Self {
        let (tx, _) = broadcast::channel(100);
        let app = Self {
            stories: Arc::new(stories),
            search_term: Arc::new(Mutex::new(initial_search.into())),
            elements: Arc::new(Mutex::new(HashMap::new())),
            update_tx: tx,
        };
        app.render();
        app
    }

    /// Replaces the search term with `value`, taken verbatim from the
    /// triggering event, then re-renders.
    ///
    /// This is the container's only externally triggerable mutation. Any
    /// string is accepted, including empty; the operation cannot fail.
    pub fn update_search(&self, value: &str) {
        tracing::debug!(value, "search term updated");
        *self.search_term.lock().unwrap() = value.to_string();
        self.render();
    }

    /// The render pass: reads the current search term, derives the filtered
    /// view, and re-registers both child elements with fresh values.
    ///
    /// The search element gets a fresh notifier each pass, like props. Each
    /// re-registered element is broadcast to connected clients; the state
    /// mutation is fully applied before this pass reads it.
    fn render(&self) {
        let term = self.search_term.lock().unwrap().clone();
        let filtered = search_stories(&self.stories, &term);

        let notifier = self.clone();
        self.update_element(Element::Search {
            id: SEARCH_ID.to_string(),
            label: "Search".to_string(),
            value: term,
            on_input: Some(Arc::new(Box::new(move |value| notifier.update_search(value)))),
        });
        self.update_element(story_list(LIST_ID, &filtered));
    }

    /// Registers `element` under its id and broadcasts it to all connected
    /// clients. An element already registered under that id is replaced.
    fn update_element(&self, element: Element) {
        let id = element.id().to_string();
        self.elements.lock().unwrap().insert(id.clone(), element.clone());
        let _ = self.update_tx.send(ServerMessage::Update { id, element });
    }

    /// Snapshot of all elements, used to initialize new clients.
    pub fn elements(&self) -> Vec<Element> {
        self.elements.lock().unwrap().values().cloned().collect()
    }

    /// Snapshot of one element by id.
    pub fn element(&self, id: &str) -> Option<Element> {
        self.elements.lock().unwrap().get(id).cloned()
    }

    /// The current search term.
    pub fn search_term(&self) -> String {
        self.search_term.lock().unwrap().clone()
    }

    /// Dispatches an input event from the client to the element's notifier.
    ///
    /// Unknown ids and elements without a notifier are ignored. The handler
    /// runs outside the registry lock since it re-enters the registry when
    /// it triggers a render pass.
    pub fn handle_input(&self, id: &str, value: &str) {
        let handler = {
            let elements = self.elements.lock().unwrap();
            if let Some(Element::Search { on_input: Some(handler), .. }) = elements.get(id) {
                Some(handler.clone())
            } else {
                None
            }
        };
        if let Some(handler) = handler {
            handler(value);
        }
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<ServerMessage> {
        self.update_tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::StoryRow;
    use crate::story::seed_stories;

    fn displayed_value(app: &App) -> String {
        match app.element(SEARCH_ID) {
            Some(Element::Search { value, .. }) => value,
            other => panic!("expected a search element, got {other:?}"),
        }
    }

    fn rendered_rows(app: &App) -> Vec<StoryRow> {
        match app.element(LIST_ID) {
            Some(Element::StoryList { stories, .. }) => stories,
            other => panic!("expected a story list, got {other:?}"),
        }
    }

    fn row_titles(app: &App) -> Vec<String> {
        rendered_rows(app).into_iter().map(|r| r.title).collect()
    }

    #[test]
    fn initial_render_is_controlled_and_filtered() {
        let app = App::new(seed_stories(), "React");
        // The input shows the default before any interaction.
        assert_eq!(displayed_value(&app), "React");
        // The list is already filtered by it: Redux is excluded.
        assert_eq!(row_titles(&app), ["React"]);
    }

    #[test]
    fn input_events_flow_into_state_and_back_down() {
        let app = App::new(seed_stories(), "React");
        app.handle_input(SEARCH_ID, "dux");
        assert_eq!(app.search_term(), "dux");
        assert_eq!(displayed_value(&app), "dux");
        assert_eq!(row_titles(&app), ["Redux"]);
    }

    #[test]
    fn every_event_in_a_sequence_is_applied_in_order() {
        let app = App::new(seed_stories(), "React");
        for value in ["R", "Re", "Red", "Redu", "Redux"] {
            app.handle_input(SEARCH_ID, value);
            assert_eq!(displayed_value(&app), value);
            let stories = seed_stories();
            let expected: Vec<String> = search_stories(&stories, value)
                .iter()
                .map(|s| s.title.clone())
                .collect();
            assert_eq!(row_titles(&app), expected);
        }
    }

    #[test]
    fn empty_search_restores_the_full_list() {
        let app = App::new(seed_stories(), "React");
        app.handle_input(SEARCH_ID, "");
        assert_eq!(displayed_value(&app), "");
        assert_eq!(row_titles(&app), ["React", "Redux"]);
    }

    #[test]
    fn no_match_renders_zero_rows() {
        let app = App::new(seed_stories(), "xyz");
        assert!(rendered_rows(&app).is_empty());
    }

    #[test]
    fn events_for_unknown_ids_are_ignored() {
        let app = App::new(seed_stories(), "React");
        app.handle_input("nonexistent", "dux");
        assert_eq!(app.search_term(), "React");
    }

    #[test]
    fn render_pass_broadcasts_search_then_list() {
        let app = App::new(seed_stories(), "React");
        let mut rx = app.subscribe();
        app.update_search("dux");

        let first = rx.try_recv().expect("search update");
        let ServerMessage::Update { id, element } = first else {
            panic!("expected an update message");
        };
        assert_eq!(id, SEARCH_ID);
        assert!(matches!(element, Element::Search { value, .. } if value == "dux"));

        let second = rx.try_recv().expect("list update");
        let ServerMessage::Update { id, element } = second else {
            panic!("expected an update message");
        };
        assert_eq!(id, LIST_ID);
        let Element::StoryList { stories, .. } = element else {
            panic!("expected a story list");
        };
        assert_eq!(stories.len(), 1);
        assert_eq!(stories[0].title, "Redux");
    }
}
