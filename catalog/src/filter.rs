use std::collections::HashMap;

use crate::models::Video;

/// One axis of the browse filter: either no constraint or an exact label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Maps a select-box value to a selection. The literal "All" (and the
    /// empty string) mean unconstrained.
    pub fn from_label(label: &str) -> Self {
        if label.is_empty() || label == "All" {
            Selection::All
        } else {
            Selection::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Selection::All => "All",
            Selection::Only(label) => label,
        }
    }

    /// Whether a video's field satisfies this axis. A missing field can
    /// never satisfy an exact constraint.
    pub fn matches(&self, field: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => field == Some(wanted.as_str()),
        }
    }
}

/// The three filter axes a catalog page exposes. Subject and semester are
/// exact matches, the query is matched case-insensitively as a substring.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub subject: Selection,
    pub semester: Selection,
    pub query: String,
}

/// Narrows an already-fetched video list. Purely in memory: every clause
/// must hold for a video to survive, input order is preserved, and the
/// input slice is never mutated.
///
/// The query matches against the title, the subject label and the
/// uploader's display name (resolved through `uploader_names`, keyed by
/// uploader id). An uploader missing from the map simply cannot match on
/// name.
pub fn filter_videos(
    videos: &[Video],
    criteria: &FilterCriteria,
    uploader_names: &HashMap<String, String>,
) -> Vec<Video> {
    let query = criteria.query.trim().to_lowercase();

    videos
        .iter()
        .filter(|video| criteria.subject.matches(video.subject.as_deref()))
        .filter(|video| criteria.semester.matches(video.semester.as_deref()))
        .filter(|video| {
            if query.is_empty() {
                return true;
            }
            video.title.to_lowercase().contains(&query)
                || video
                    .subject
                    .as_ref()
                    .map_or(false, |subject| subject.to_lowercase().contains(&query))
                || uploader_names
                    .get(&video.uploader_id)
                    .map_or(false, |name| name.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, title: &str, subject: Option<&str>, semester: Option<&str>) -> Video {
        Video {
            id: id.to_string(),
            title: title.to_string(),
            subject: subject.map(str::to_string),
            semester: semester.map(str::to_string),
            topic: None,
            description: None,
            video_url: None,
            thumbnail_url: None,
            views: 0,
            created_at: String::new(),
            uploader_id: format!("uploader-{id}"),
        }
    }

    fn sample() -> Vec<Video> {
        vec![
            video("a", "Intro to Arrays", Some("CSE"), Some("1-Odd")),
            video("b", "ECE Basics", Some("ECE"), Some("1-Odd")),
        ]
    }

    fn ids(videos: &[Video]) -> Vec<&str> {
        videos.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn no_criteria_passes_everything_through_in_order() {
        let videos = sample();
        let filtered = filter_videos(&videos, &FilterCriteria::default(), &HashMap::new());
        assert_eq!(ids(&filtered), ["a", "b"]);
    }

    #[test]
    fn subject_selection_is_exact() {
        let videos = sample();
        let criteria = FilterCriteria {
            subject: Selection::Only("CSE".to_string()),
            ..Default::default()
        };
        let filtered = filter_videos(&videos, &criteria, &HashMap::new());
        assert_eq!(ids(&filtered), ["a"]);
    }

    #[test]
    fn query_matches_title_case_insensitively() {
        let videos = sample();
        let criteria = FilterCriteria {
            query: "ece".to_string(),
            ..Default::default()
        };
        let filtered = filter_videos(&videos, &criteria, &HashMap::new());
        assert_eq!(ids(&filtered), ["b"]);
    }

    #[test]
    fn query_matches_subject_label() {
        let videos = sample();
        let criteria = FilterCriteria {
            query: "cse".to_string(),
            ..Default::default()
        };
        let filtered = filter_videos(&videos, &criteria, &HashMap::new());
        assert_eq!(ids(&filtered), ["a"]);
    }

    #[test]
    fn query_matches_uploader_display_name() {
        let videos = sample();
        let names = HashMap::from([("uploader-a".to_string(), "Prof. Meena".to_string())]);

        let criteria = FilterCriteria {
            query: "meena".to_string(),
            ..Default::default()
        };
        let filtered = filter_videos(&videos, &criteria, &names);
        assert_eq!(ids(&filtered), ["a"]);
    }

    #[test]
    fn uploader_absent_from_lookup_cannot_match_on_name() {
        let videos = sample();
        let criteria = FilterCriteria {
            query: "meena".to_string(),
            ..Default::default()
        };
        let filtered = filter_videos(&videos, &criteria, &HashMap::new());
        assert!(filtered.is_empty());
    }

    #[test]
    fn clauses_combine_with_and() {
        let videos = sample();
        let criteria = FilterCriteria {
            subject: Selection::Only("CSE".to_string()),
            query: "ece".to_string(),
            ..Default::default()
        };
        let filtered = filter_videos(&videos, &criteria, &HashMap::new());
        assert!(filtered.is_empty());
    }

    #[test]
    fn semester_selection_is_exact() {
        let mut videos = sample();
        videos.push(video("c", "Signals", Some("ECE"), Some("2-Odd")));

        let criteria = FilterCriteria {
            semester: Selection::Only("2-Odd".to_string()),
            ..Default::default()
        };
        let filtered = filter_videos(&videos, &criteria, &HashMap::new());
        assert_eq!(ids(&filtered), ["c"]);
    }

    #[test]
    fn missing_subject_fails_an_exact_selection_but_passes_all() {
        let videos = vec![video("x", "Untagged", None, None)];

        let exact = FilterCriteria {
            subject: Selection::Only("CSE".to_string()),
            ..Default::default()
        };
        assert!(filter_videos(&videos, &exact, &HashMap::new()).is_empty());

        let open = FilterCriteria::default();
        assert_eq!(ids(&filter_videos(&videos, &open, &HashMap::new())), ["x"]);
    }

    #[test]
    fn whitespace_only_query_is_treated_as_empty() {
        let videos = sample();
        let criteria = FilterCriteria {
            query: "   ".to_string(),
            ..Default::default()
        };
        let filtered = filter_videos(&videos, &criteria, &HashMap::new());
        assert_eq!(ids(&filtered), ["a", "b"]);
    }

    #[test]
    fn filtering_is_deterministic() {
        let videos = sample();
        let criteria = FilterCriteria {
            query: "basics".to_string(),
            ..Default::default()
        };
        let first = filter_videos(&videos, &criteria, &HashMap::new());
        let second = filter_videos(&videos, &criteria, &HashMap::new());
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter_videos(&[], &FilterCriteria::default(), &HashMap::new()).is_empty());
    }

    #[test]
    fn selection_round_trips_through_labels() {
        assert_eq!(Selection::from_label("All"), Selection::All);
        assert_eq!(Selection::from_label(""), Selection::All);
        assert_eq!(
            Selection::from_label("CSE"),
            Selection::Only("CSE".to_string())
        );
        assert_eq!(Selection::Only("ECE".to_string()).label(), "ECE");
    }
}
