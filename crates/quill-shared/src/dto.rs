//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_core::domain::{Post, PostState, User};

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request to create a blog. Description and tags may be omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBlogRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub body: String,
}

/// Partial update to a blog. Fields outside this set are dropped during
/// deserialization, so a submitted `author` or `read_count` never reaches
/// the workflow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub body: Option<String>,
    /// `"draft"` or `"published"`; validated by the handler.
    pub state: Option<String>,
}

/// Query parameters for the public blog listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListBlogsQuery {
    pub title: Option<String>,
    /// Comma-separated tag list.
    pub tags: Option<String>,
    pub author: Option<String>,
    pub order_by: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

/// Query parameters for the logged-in user's blog listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OwnBlogsQuery {
    pub state: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub order: Option<String>,
}

/// A user's public fields - never the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}

/// A blog as returned by owner-facing endpoints; the author appears as an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogData {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub author: Uuid,
    pub state: PostState,
    pub reading_time: String,
    pub read_count: i64,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for BlogData {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            description: post.description,
            tags: post.tags,
            author: post.author_id,
            state: post.state,
            reading_time: post.reading_time,
            read_count: post.read_count,
            published_at: post.published_at,
            created_at: post.created_at,
        }
    }
}

/// A blog with its author's public fields joined in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogDetail {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub author: UserSummary,
    pub state: PostState,
    pub reading_time: String,
    pub read_count: i64,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<(Post, User)> for BlogDetail {
    fn from((post, user): (Post, User)) -> Self {
        Self {
            id: post.id,
            title: post.title,
            description: post.description,
            tags: post.tags,
            author: UserSummary::from(&user),
            state: post.state,
            reading_time: post.reading_time,
            read_count: post.read_count,
            published_at: post.published_at,
            created_at: post.created_at,
        }
    }
}

/// Payload of a successful create; the blog sits under a `blog` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedBlog {
    pub blog: BlogData,
}

/// Response to a successful signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub message: String,
    pub token: String,
    pub user: UserSummary,
}

/// Response to a successful login; only the email is echoed back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginUser {
    pub email: String,
}

/// Response to a successful publish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishResponse {
    pub message: String,
    pub blog: BlogData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_drops_unknown_fields() {
        let raw = r#"{
            "title": "New title",
            "author": "someone-else",
            "read_count": 9999,
            "published_at": "2020-01-01T00:00:00Z"
        }"#;

        let update: UpdateBlogRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(update.title.as_deref(), Some("New title"));
        assert!(update.description.is_none());
        assert!(update.state.is_none());
    }

    #[test]
    fn create_request_defaults_description_and_tags() {
        let raw = r#"{"title": "T", "body": "B"}"#;
        let req: CreateBlogRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(req.description, "");
        assert!(req.tags.is_empty());
    }

    #[test]
    fn blog_data_serializes_state_in_lowercase() {
        let post = Post::new(
            Uuid::new_v4(),
            "T".to_string(),
            String::new(),
            vec![],
            "body".to_string(),
        );
        let value = serde_json::to_value(BlogData::from(post)).unwrap();
        assert_eq!(value["state"], "draft");
        assert_eq!(value["read_count"], 0);
        assert!(value["published_at"].is_null());
    }

    #[test]
    fn user_summary_never_carries_the_hash() {
        let user = User::new(
            "Ada".to_string(),
            "Lovelace".to_string(),
            "ada@example.com".to_string(),
            "$argon2id$...".to_string(),
        );
        let value = serde_json::to_value(UserSummary::from(&user)).unwrap();
        assert!(value.get("password_hash").is_none());
        assert_eq!(value["email"], "ada@example.com");
    }
}
