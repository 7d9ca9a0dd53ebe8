//! Tab filter + stable sort for the community feed
//!
//! Pinned posts sort first, announcements next, everything else by
//! recency. The key is compared lexicographically with every component
//! descending, and the sort is stable, so records with identical keys
//! keep their input order.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use crate::models::{PostRecord, Scope};

/// User-selected feed scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedTab {
    ForYou,
    MyCircle,
}

/// A tab value from the UI layer that names neither known tab
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid feed tab: {0}")]
pub struct InvalidTabError(pub String);

impl FromStr for FeedTab {
    type Err = InvalidTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forYou" => Ok(FeedTab::ForYou),
            "myCircle" => Ok(FeedTab::MyCircle),
            other => Err(InvalidTabError(other.to_string())),
        }
    }
}

impl FeedTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedTab::ForYou => "forYou",
            FeedTab::MyCircle => "myCircle",
        }
    }
}

/// Anything the composer can order
///
/// The full post type in the API layer carries author and media fields
/// the composer never reads; it only needs access to the feed record.
pub trait FeedEntry {
    fn feed_record(&self) -> &PostRecord;
}

impl FeedEntry for PostRecord {
    fn feed_record(&self) -> &PostRecord {
        self
    }
}

/// Composite sort key: `(pinned, announcement, createdAt)`
///
/// `None` timestamps order below every parsed timestamp, which places
/// unparseable records last in their tier under the descending compare.
type SortKey = (bool, bool, Option<DateTime<Utc>>);

fn sort_key(record: &PostRecord) -> SortKey {
    let created = record.created_at_utc();
    if created.is_none() {
        debug!(
            post_id = %record.id,
            created_at = %record.created_at,
            "unparseable createdAt, record sorts last in its tier"
        );
    }
    (record.is_pinned, record.is_announcement, created)
}

/// Derive the exact ordered sequence to render for a tab.
///
/// `ForYou` retains public posts, including legacy records with no
/// visibility tag; `MyCircle` retains only posts tagged `circle`. The
/// filtered set is then stably sorted newest-first within the
/// pinned / announcement / ordinary tiers.
///
/// Input records are never modified, only filtered and reordered.
pub fn compose<T: FeedEntry>(posts: Vec<T>, tab: FeedTab) -> Vec<T> {
    let mut entries: Vec<(SortKey, T)> = posts
        .into_iter()
        .filter(|post| match tab {
            FeedTab::ForYou => post.feed_record().scope() == Scope::Public,
            FeedTab::MyCircle => post.feed_record().scope() == Scope::Circle,
        })
        .map(|post| (sort_key(post.feed_record()), post))
        .collect();

    // slice::sort_by is stable; the reversed compare keeps ties in input order
    entries.sort_by(|a, b| b.0.cmp(&a.0));

    entries.into_iter().map(|(_, post)| post).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Visibility;

    fn create_test_post(
        id: &str,
        visibility: Option<Visibility>,
        is_pinned: bool,
        is_announcement: bool,
        created_at: &str,
    ) -> PostRecord {
        PostRecord {
            id: id.to_string(),
            visibility,
            is_pinned,
            is_announcement,
            created_at: created_at.to_string(),
        }
    }

    fn ids(posts: &[PostRecord]) -> Vec<&str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_legacy_posts_appear_in_for_you_only() {
        let posts = vec![create_test_post("legacy", None, false, false, "2024-01-01")];

        let for_you = compose(posts.clone(), FeedTab::ForYou);
        assert_eq!(ids(&for_you), vec!["legacy"]);

        let my_circle = compose(posts, FeedTab::MyCircle);
        assert!(my_circle.is_empty());
    }

    #[test]
    fn test_circle_posts_appear_in_my_circle_only() {
        let posts = vec![create_test_post(
            "circle",
            Some(Visibility::Circle),
            false,
            false,
            "2024-01-01",
        )];

        let my_circle = compose(posts.clone(), FeedTab::MyCircle);
        assert_eq!(ids(&my_circle), vec!["circle"]);

        let for_you = compose(posts, FeedTab::ForYou);
        assert!(for_you.is_empty());
    }

    #[test]
    fn test_pinned_posts_sort_before_everything() {
        let posts = vec![
            create_test_post("fresh", Some(Visibility::Public), false, false, "2024-06-01"),
            create_test_post("announcement", Some(Visibility::Public), false, true, "2024-05-01"),
            create_test_post("pinned", Some(Visibility::Public), true, false, "2023-01-01"),
        ];

        let composed = compose(posts, FeedTab::ForYou);
        assert_eq!(ids(&composed), vec!["pinned", "announcement", "fresh"]);
    }

    #[test]
    fn test_announcements_sort_before_ordinary_posts() {
        let posts = vec![
            create_test_post("ordinary", Some(Visibility::Public), false, false, "2024-06-01"),
            create_test_post("announcement", Some(Visibility::Public), false, true, "2024-01-01"),
        ];

        let composed = compose(posts, FeedTab::ForYou);
        assert_eq!(ids(&composed), vec!["announcement", "ordinary"]);
    }

    #[test]
    fn test_newest_first_within_a_tier() {
        let posts = vec![
            create_test_post("older", Some(Visibility::Public), false, false, "2024-01-01"),
            create_test_post("newer", Some(Visibility::Public), false, false, "2024-02-01"),
            create_test_post("newest", Some(Visibility::Public), false, false, "2024-03-01"),
        ];

        let composed = compose(posts, FeedTab::ForYou);
        assert_eq!(ids(&composed), vec!["newest", "newer", "older"]);
    }

    #[test]
    fn test_identical_keys_keep_input_order() {
        let posts = vec![
            create_test_post("first", Some(Visibility::Public), false, false, "2024-01-01"),
            create_test_post("second", Some(Visibility::Public), false, false, "2024-01-01"),
            create_test_post("third", Some(Visibility::Public), false, false, "2024-01-01"),
        ];

        let composed = compose(posts, FeedTab::ForYou);
        assert_eq!(ids(&composed), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_compose_is_idempotent_on_its_own_output() {
        let posts = vec![
            create_test_post("a", Some(Visibility::Public), false, false, "2024-01-03"),
            create_test_post("b", Some(Visibility::Public), true, false, "2024-01-01"),
            create_test_post("c", Some(Visibility::Public), false, true, "2024-01-02"),
            create_test_post("d", None, false, false, "2024-01-04"),
        ];

        let once = compose(posts, FeedTab::ForYou);
        let twice = compose(once.clone(), FeedTab::ForYou);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_pinned_then_announcement_then_recency_scenario() {
        let posts = vec![
            create_test_post("A", Some(Visibility::Public), false, false, "2024-01-03"),
            create_test_post("B", Some(Visibility::Public), true, false, "2024-01-01"),
            create_test_post("C", Some(Visibility::Public), false, true, "2024-01-02"),
        ];

        let composed = compose(posts, FeedTab::ForYou);
        assert_eq!(ids(&composed), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_circle_and_legacy_split_scenario() {
        let d = create_test_post("D", Some(Visibility::Circle), false, false, "2024-01-01");
        let e = create_test_post("E", None, false, false, "2024-01-01");

        let my_circle = compose(vec![d.clone(), e.clone()], FeedTab::MyCircle);
        assert_eq!(ids(&my_circle), vec!["D"]);

        let for_you = compose(vec![d, e], FeedTab::ForYou);
        assert_eq!(ids(&for_you), vec!["E"]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(compose(Vec::<PostRecord>::new(), FeedTab::ForYou).is_empty());
        assert!(compose(Vec::<PostRecord>::new(), FeedTab::MyCircle).is_empty());
    }

    #[test]
    fn test_unparseable_timestamps_sort_last_in_their_tier() {
        let posts = vec![
            create_test_post("broken", Some(Visibility::Public), false, false, "not a date"),
            create_test_post("old", Some(Visibility::Public), false, false, "2020-01-01"),
            create_test_post("pinned-broken", Some(Visibility::Public), true, false, ""),
            create_test_post("pinned", Some(Visibility::Public), true, false, "2020-01-01"),
        ];

        let composed = compose(posts, FeedTab::ForYou);
        assert_eq!(ids(&composed), vec!["pinned", "pinned-broken", "old", "broken"]);
    }

    #[test]
    fn test_tab_parses_known_values() {
        assert_eq!("forYou".parse::<FeedTab>().unwrap(), FeedTab::ForYou);
        assert_eq!("myCircle".parse::<FeedTab>().unwrap(), FeedTab::MyCircle);
        assert_eq!(FeedTab::ForYou.as_str(), "forYou");
    }

    #[test]
    fn test_unknown_tab_is_an_error_not_a_default() {
        let err = "trending".parse::<FeedTab>().unwrap_err();
        assert_eq!(err, InvalidTabError("trending".to_string()));
    }
}
