//! UI element types that are created in Rust and rendered in HTML.
//!
//! Each element has an `id` matching a custom HTML element in the page
//! layout. Elements carry no geometry or styling information - that is
//! handled by HTML/CSS on the client.

use std::sync::Arc;

use serde::Serialize;

use crate::story::Story;

pub type InputCallback = Option<Arc<Box<dyn Fn(&str) + Send + Sync + 'static>>>;

/// UI elements pushed to the client.
///
/// Elements are stateless projections of owner state: the root container
/// rebuilds them with fresh values on every render pass, and the client
/// reconciles its DOM to match.
#[derive(Clone, Serialize)]
#[serde(tag = "kind")]
pub enum Element {
    /// A controlled text search field.
    ///
    /// `value` is the displayed value, forced from owner state on every
    /// render including the first: the input element's own edit buffer is
    /// never the source of truth. `on_input` is the upward change notifier,
    /// invoked with the element's current text on every edit.
    ///
    /// # HTML Element
    /// Renders as `<ui-search id="...">` with a label, the input, and a
    /// "Searching for ..." echo of the current value.
    #[serde(rename = "search")]
    Search {
        id: String,
        label: String,
        value: String,
        #[serde(skip)]
        on_input: InputCallback,
    },

    /// A keyed list of story rows.
    ///
    /// Rows arrive in display order; each carries the story's `object_id`
    /// as its reconciliation key so the client can reuse DOM rows across
    /// updates. An empty `stories` renders an empty list.
    ///
    /// # HTML Element
    /// Renders as `<ui-story-list id="...">`, one `<li>` per row with the
    /// title as a hyperlink plus author, comment count, and points.
    #[serde(rename = "story-list")]
    StoryList { id: String, stories: Vec<StoryRow> },
}

impl Element {
    /// The element's id, used as its registry key.
    pub fn id(&self) -> &str {
        match self {
            Element::Search { id, .. } => id,
            Element::StoryList { id, .. } => id,
        }
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Search { id, label, value, .. } => f
                .debug_struct("Search")
                .field("id", id)
                .field("label", label)
                .field("value", value)
                .field("on_input", &"<handler>")
                .finish(),
            Element::StoryList { id, stories } => f
                .debug_struct("StoryList")
                .field("id", id)
                .field("stories", stories)
                .finish(),
        }
    }
}

/// One rendered story row: a pure projection of a [`Story`] into the fields
/// the client displays, keyed by the story's `object_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryRow {
    pub key: u64,
    pub title: String,
    pub url: String,
    pub author: String,
    pub num_comments: u32,
    pub points: i32,
}

impl StoryRow {
    pub fn project(story: &Story) -> Self {
        Self {
            key: story.object_id,
            title: story.title.clone(),
            url: story.url.clone(),
            author: story.author.clone(),
            num_comments: story.num_comments,
            points: story.points,
        }
    }
}

/// Projects an ordered sequence of stories into an ordered sequence of
/// keyed rows.
pub fn story_list(id: impl Into<String>, stories: &[&Story]) -> Element {
    Element::StoryList {
        id: id.into(),
        stories: stories.iter().map(|s| StoryRow::project(s)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::seed_stories;

    #[test]
    fn row_projection_carries_all_display_fields() {
        let stories = seed_stories();
        let row = StoryRow::project(&stories[0]);
        assert_eq!(row.key, 0);
        assert_eq!(row.title, "React");
        assert_eq!(row.url, "https://reactjs.org/");
        assert_eq!(row.author, "Jordan Walke");
        assert_eq!(row.num_comments, 3);
        assert_eq!(row.points, 4);
    }

    #[test]
    fn story_list_keys_rows_by_object_id_in_order() {
        let stories = seed_stories();
        let refs: Vec<&Story> = stories.iter().collect();
        let Element::StoryList { id, stories: rows } = story_list("stories", &refs) else {
            panic!("expected a story list");
        };
        assert_eq!(id, "stories");
        assert_eq!(rows.iter().map(|r| r.key).collect::<Vec<_>>(), [0, 1]);
    }

    #[test]
    fn elements_serialize_with_kind_tags() {
        let element = Element::Search {
            id: "search".to_string(),
            label: "Search".to_string(),
            value: "React".to_string(),
            on_input: None,
        };
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["kind"], "search");
        assert_eq!(json["value"], "React");
        // Handlers never cross the wire.
        assert!(json.get("on_input").is_none());
    }
}
