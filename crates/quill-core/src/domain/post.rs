use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::reading_time::estimate_reading_time;
use crate::error::DomainError;

/// Lifecycle state of a post.
///
/// `Draft` is visible only to its author; `Published` is visible to everyone
/// and is terminal - there is no transition back to draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostState {
    Draft,
    Published,
}

impl PostState {
    /// Parse a state name as it appears on the wire (`"draft"` / `"published"`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(Self::Draft),
            "published" => Some(Self::Published),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

/// Post entity - a blog post owned by its author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    /// Set once at creation; never changes afterwards.
    pub author_id: Uuid,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub body: String,
    pub state: PostState,
    /// Derived from `body`; recomputed whenever the body changes.
    pub reading_time: String,
    pub read_count: i64,
    /// Stamped exactly once, on the draft -> published transition.
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Partial update to a post. Only these fields are mutable; everything
/// else submitted by a client is dropped before it reaches this type.
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub body: Option<String>,
    pub state: Option<PostState>,
}

impl Post {
    /// Create a new draft with a computed reading time and zero reads.
    pub fn new(
        author_id: Uuid,
        title: String,
        description: String,
        tags: Vec<String>,
        body: String,
    ) -> Self {
        let reading_time = estimate_reading_time(&body);
        Self {
            id: Uuid::new_v4(),
            author_id,
            title,
            description,
            tags,
            body,
            state: PostState::Draft,
            reading_time,
            read_count: 0,
            published_at: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_published(&self) -> bool {
        self.state == PostState::Published
    }

    /// Transition this post from draft to published, stamping `published_at`.
    ///
    /// Publishing is not idempotent: a second call fails with
    /// [`DomainError::AlreadyPublished`] and leaves `published_at` untouched.
    pub fn publish(&mut self) -> Result<(), DomainError> {
        if self.is_published() {
            return Err(DomainError::AlreadyPublished);
        }
        self.state = PostState::Published;
        self.published_at = Some(Utc::now());
        Ok(())
    }

    /// Apply a partial update, recomputing the reading time when the body
    /// changes and routing state changes through the state machine.
    pub fn apply_update(&mut self, update: PostUpdate) -> Result<(), DomainError> {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(body) = update.body {
            self.reading_time = estimate_reading_time(&body);
            self.body = body;
        }
        if let Some(state) = update.state {
            match (self.state, state) {
                (PostState::Draft, PostState::Published) => self.publish()?,
                (PostState::Published, PostState::Draft) => {
                    return Err(DomainError::InvalidArgument(
                        "A published blog cannot return to draft".to_string(),
                    ));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> Post {
        Post::new(
            Uuid::new_v4(),
            "First post".to_string(),
            "An introduction".to_string(),
            vec!["intro".to_string()],
            "hello world".to_string(),
        )
    }

    #[test]
    fn new_post_starts_as_unread_draft() {
        let post = draft();
        assert_eq!(post.state, PostState::Draft);
        assert_eq!(post.read_count, 0);
        assert!(post.published_at.is_none());
        assert_eq!(post.reading_time, "1 min read");
    }

    #[test]
    fn publish_stamps_published_at() {
        let mut post = draft();
        post.publish().unwrap();
        assert_eq!(post.state, PostState::Published);
        assert!(post.published_at.is_some());
    }

    #[test]
    fn publish_twice_is_rejected_and_keeps_timestamp() {
        let mut post = draft();
        post.publish().unwrap();
        let first = post.published_at;

        let err = post.publish().unwrap_err();
        assert!(matches!(err, DomainError::AlreadyPublished));
        assert_eq!(post.published_at, first);
    }

    #[test]
    fn update_body_recomputes_reading_time() {
        let mut post = draft();
        let body = vec!["word"; 400].join(" ");
        post.apply_update(PostUpdate {
            body: Some(body),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(post.reading_time, "2 min read");
    }

    #[test]
    fn update_without_body_keeps_reading_time() {
        let mut post = draft();
        post.apply_update(PostUpdate {
            title: Some("Renamed".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(post.title, "Renamed");
        assert_eq!(post.reading_time, "1 min read");
    }

    #[test]
    fn update_to_published_goes_through_state_machine() {
        let mut post = draft();
        post.apply_update(PostUpdate {
            state: Some(PostState::Published),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(post.state, PostState::Published);
        assert!(post.published_at.is_some());
    }

    #[test]
    fn update_back_to_draft_is_rejected() {
        let mut post = draft();
        post.publish().unwrap();

        let err = post
            .apply_update(PostUpdate {
                state: Some(PostState::Draft),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
        assert_eq!(post.state, PostState::Published);
    }

    #[test]
    fn update_to_same_state_is_a_no_op() {
        let mut post = draft();
        post.apply_update(PostUpdate {
            state: Some(PostState::Draft),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(post.state, PostState::Draft);
        assert!(post.published_at.is_none());
    }

    #[test]
    fn parse_state_names() {
        assert_eq!(PostState::parse("draft"), Some(PostState::Draft));
        assert_eq!(PostState::parse("published"), Some(PostState::Published));
        assert_eq!(PostState::parse("archived"), None);
    }
}
