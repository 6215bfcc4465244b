//! Story records and the search filter.
//!
//! The story collection is a static literal created once at startup and never
//! mutated. The filtered view is not stored anywhere: it is recomputed from
//! the collection and the current search term on every render pass.

/// One story entry.
///
/// `object_id` is unique and stable for the lifetime of the session; it keys
/// the rendered rows on the client so unrelated updates do not discard and
/// recreate unaffected rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    pub object_id: u64,
    pub title: String,
    pub url: String,
    pub author: String,
    pub num_comments: u32,
    pub points: i32,
}

/// The hardcoded story collection.
pub fn seed_stories() -> Vec<Story> {
    vec![
        Story {
            object_id: 0,
            title: "React".to_string(),
            url: "https://reactjs.org/".to_string(),
            author: "Jordan Walke".to_string(),
            num_comments: 3,
            points: 4,
        },
        Story {
            object_id: 1,
            title: "Redux".to_string(),
            url: "https://redux.js.org/".to_string(),
            author: "Dan Abramov, Andrew Clark".to_string(),
            num_comments: 2,
            points: 5,
        },
    ]
}

/// Returns the stories whose title contains `term`, case-insensitively,
/// preserving input order.
///
/// An empty `term` matches every story, so the full list comes back
/// unchanged. The term is taken verbatim: no trimming, no validation.
pub fn search_stories<'a>(stories: &'a [Story], term: &str) -> Vec<&'a Story> {
    let needle = term.to_lowercase();
    stories
        .iter()
        .filter(|story| story.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles<'a>(stories: &[&'a Story]) -> Vec<&'a str> {
        stories.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn empty_term_matches_everything() {
        let stories = seed_stories();
        let found = search_stories(&stories, "");
        assert_eq!(titles(&found), ["React", "Redux"]);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let stories = seed_stories();
        assert_eq!(titles(&search_stories(&stories, "eact")), ["React"]);
        assert_eq!(titles(&search_stories(&stories, "REACT")), ["React"]);
        assert_eq!(titles(&search_stories(&stories, "dux")), ["Redux"]);
    }

    #[test]
    fn no_match_yields_empty_view() {
        let stories = seed_stories();
        assert!(search_stories(&stories, "xyz").is_empty());
    }

    #[test]
    fn matches_preserve_input_order() {
        let stories = seed_stories();
        // Both titles contain "re" once lowercased.
        assert_eq!(titles(&search_stories(&stories, "Re")), ["React", "Redux"]);
    }

    #[test]
    fn matching_is_on_title_only() {
        let stories = seed_stories();
        // "Jordan" is an author, not a title.
        assert!(search_stories(&stories, "Jordan").is_empty());
    }
}
