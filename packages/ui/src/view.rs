//! # Post list view model
//!
//! The pure half of rendering: given the post list, the current session and
//! the search query, compute exactly what should be visible. No side
//! effects, no backend, no DOM — the component layer applies the result.

use api::{Post, Timestamp};
use store::SessionUser;

/// Placeholder shown when the filtered list is empty.
pub const NO_POSTS_NOTICE: &str = "No posts yet.";
/// Placeholder shown while logged out; no backend read backs it.
pub const LOGGED_OUT_NOTICE: &str = "Please login to view posts.";

/// One visible post row. Title and content are plain text; the component
/// layer renders them as text nodes, never as markup.
#[derive(Clone, Debug, PartialEq)]
pub struct PostRow {
    pub id: String,
    pub title: String,
    pub content: String,
    /// `by {author} • {created}`, plus ` • edited {updated}` when edited.
    pub meta: String,
    /// Whether Edit/Delete controls are attached.
    pub can_edit: bool,
}

/// Compute the visible rows.
///
/// The query is trimmed and lowercased; a post survives iff the query is
/// empty or a case-insensitive substring of its title or content. Input
/// order is preserved (callers pass the list newest-first).
pub fn post_list(posts: &[Post], current_user: Option<&SessionUser>, query: &str) -> Vec<PostRow> {
    let query = query.trim().to_lowercase();
    posts
        .iter()
        .filter(|post| matches(post, &query))
        .map(|post| row(post, current_user))
        .collect()
}

fn matches(post: &Post, query: &str) -> bool {
    query.is_empty()
        || post.title.to_lowercase().contains(query)
        || post.content.to_lowercase().contains(query)
}

fn row(post: &Post, current_user: Option<&SessionUser>) -> PostRow {
    // The author field is the display label stamped at publish time, not a
    // uid; ownership matches on it by exact string equality.
    let can_edit = current_user.is_some_and(|user| user.email == post.author);
    PostRow {
        id: post.id.clone(),
        title: post.title.clone(),
        content: post.content.clone(),
        meta: meta_line(post),
        can_edit,
    }
}

fn meta_line(post: &Post) -> String {
    let mut meta = format!(
        "by {} • {}",
        post.author,
        format_timestamp(post.created_at.as_ref())
    );
    if is_edited(post) {
        meta.push_str(&format!(
            " • edited {}",
            format_timestamp(post.updated_at.as_ref())
        ));
    }
    meta
}

/// A post counts as edited when `updated_at` is present and denotes a
/// different instant than `created_at`, regardless of wire encoding.
fn is_edited(post: &Post) -> bool {
    let Some(updated) = &post.updated_at else {
        return false;
    };
    match &post.created_at {
        Some(created) => updated.to_datetime() != created.to_datetime(),
        None => true,
    }
}

/// Locale-ish formatting of a normalised timestamp; absent or unparseable
/// values render as `Unknown`.
pub fn format_timestamp(value: Option<&Timestamp>) -> String {
    value
        .and_then(Timestamp::to_datetime)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, title: &str, content: &str, author: &str) -> Post {
        Post {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    fn user(email: &str) -> SessionUser {
        SessionUser {
            uid: "uid-1".to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let posts = vec![
            post("1", "First", "aaa", "a@x.com"),
            post("2", "Second", "bbb", "b@x.com"),
        ];

        let rows = post_list(&posts, None, "");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "1");
        assert_eq!(rows[1].id, "2");
    }

    #[test]
    fn test_substring_match_is_case_insensitive_over_title_and_content() {
        let posts = vec![post("1", "Hello", "World", "a@x.com")];

        assert_eq!(post_list(&posts, None, "wor").len(), 1);
        assert_eq!(post_list(&posts, None, "HELLO").len(), 1);
        assert_eq!(post_list(&posts, None, "  wor  ").len(), 1);
        assert!(post_list(&posts, None, "zzz").is_empty());
    }

    #[test]
    fn test_filter_returns_a_subsequence() {
        let posts = vec![
            post("1", "apples", "x", "a@x.com"),
            post("2", "bananas", "x", "a@x.com"),
            post("3", "apple pie", "x", "a@x.com"),
        ];

        let rows = post_list(&posts, None, "apple");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "1");
        assert_eq!(rows[1].id, "3");
    }

    #[test]
    fn test_controls_attach_only_when_author_matches_session_email() {
        let posts = vec![
            post("1", "Mine", "x", "a@x.com"),
            post("2", "Theirs", "x", "b@x.com"),
        ];

        let rows = post_list(&posts, Some(&user("a@x.com")), "");
        assert!(rows[0].can_edit);
        assert!(!rows[1].can_edit);

        let rows = post_list(&posts, None, "");
        assert!(rows.iter().all(|row| !row.can_edit));
    }

    #[test]
    fn test_meta_line_without_edit() {
        let mut p = post("1", "t", "c", "a@x.com");
        p.created_at = Some(Timestamp::Millis(1_700_000_000_000));

        let rows = post_list(&[p], None, "");
        assert_eq!(rows[0].meta, "by a@x.com • 2023-11-14 22:13");
    }

    #[test]
    fn test_edited_marker_requires_a_different_instant() {
        let mut p = post("1", "t", "c", "a@x.com");
        // Same instant in two encodings: not edited.
        p.created_at = Some(Timestamp::Millis(1_700_000_000_000));
        p.updated_at = Some(Timestamp::Seconds {
            seconds: 1_700_000_000,
            nanos: 0,
        });
        let rows = post_list(&[p.clone()], None, "");
        assert!(!rows[0].meta.contains("edited"));

        p.updated_at = Some(Timestamp::Millis(1_700_000_060_000));
        let rows = post_list(&[p], None, "");
        assert!(rows[0].meta.ends_with("• edited 2023-11-14 22:14"));
    }

    #[test]
    fn test_absent_or_unparseable_timestamps_format_as_unknown() {
        assert_eq!(format_timestamp(None), "Unknown");
        assert_eq!(
            format_timestamp(Some(&Timestamp::Iso("garbage".to_string()))),
            "Unknown"
        );
        assert_eq!(
            format_timestamp(Some(&Timestamp::server_set())),
            "Unknown"
        );
    }
}
