//! Repository ports and the query types they accept.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostState, User};
use crate::error::RepoError;

/// Sort keys accepted by the published-blog listing. Each sorts descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    ReadingTime,
    ReadCount,
    /// Creation time.
    Timestamp,
}

impl SortKey {
    /// Parse an `order_by` query value. Unrecognized keys yield `None`,
    /// which callers treat as "no sort applied".
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "reading_time" => Some(Self::ReadingTime),
            "read_count" => Some(Self::ReadCount),
            "timestamp" => Some(Self::Timestamp),
            _ => None,
        }
    }
}

/// Sort direction for the own-blogs listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Anything other than `"asc"` sorts descending.
    pub fn parse(value: &str) -> Self {
        if value == "asc" { Self::Asc } else { Self::Desc }
    }
}

/// 1-indexed pagination window; `offset = (page - 1) * limit`.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub page: u64,
    pub limit: u64,
}

impl Page {
    /// Build a window, clamping page and limit to at least 1.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }

    /// Number of pages needed for `total` records.
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

/// Filter for the public listing. Fields are optional and validated
/// independently by the HTTP layer before this struct is built.
#[derive(Debug, Clone, Default)]
pub struct PublishedFilter {
    /// Case-insensitive substring match on the title.
    pub title: Option<String>,
    /// Match if the post's tag set intersects this set.
    pub tags: Option<Vec<String>>,
    /// Exact author id; syntax is validated before this point.
    pub author: Option<Uuid>,
    pub order_by: Option<SortKey>,
}

/// Filter for a user's own blogs: every state by default, optionally
/// narrowed to one, ordered by creation time.
#[derive(Debug, Clone)]
pub struct AuthorFilter {
    pub author: Uuid,
    pub state: Option<PostState>,
    pub order: SortOrder,
}

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address (exact, case-sensitive match).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Find a post joined with its author.
    async fn find_with_author(&self, id: Uuid) -> Result<Option<(Post, User)>, RepoError>;

    /// Write back the mutable fields of a post. The author and creation
    /// timestamp columns are never touched by this path.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Atomically bump `read_count` by one at the storage layer.
    async fn increment_read_count(&self, id: Uuid) -> Result<(), RepoError>;

    /// List published posts with their authors, filtered and paginated.
    async fn list_published(
        &self,
        filter: &PublishedFilter,
        page: Page,
    ) -> Result<Vec<(Post, User)>, RepoError>;

    /// List a user's posts regardless of state, returning the page of
    /// records plus the total count matching the filter.
    async fn list_by_author(
        &self,
        filter: &AuthorFilter,
        page: Page,
    ) -> Result<(Vec<Post>, u64), RepoError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_parses_known_fields_only() {
        assert_eq!(SortKey::parse("reading_time"), Some(SortKey::ReadingTime));
        assert_eq!(SortKey::parse("read_count"), Some(SortKey::ReadCount));
        assert_eq!(SortKey::parse("timestamp"), Some(SortKey::Timestamp));
        assert_eq!(SortKey::parse("title"), None);
        assert_eq!(SortKey::parse(""), None);
    }

    #[test]
    fn sort_order_defaults_to_desc() {
        assert_eq!(SortOrder::parse("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("sideways"), SortOrder::Desc);
    }

    #[test]
    fn page_offset_is_one_indexed() {
        assert_eq!(Page::new(1, 20).offset(), 0);
        assert_eq!(Page::new(3, 20).offset(), 40);
    }

    #[test]
    fn page_clamps_to_first_page() {
        let page = Page::new(0, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 1);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = Page::new(1, 10);
        assert_eq!(page.total_pages(0), 0);
        assert_eq!(page.total_pages(10), 1);
        assert_eq!(page.total_pages(11), 2);
    }
}
