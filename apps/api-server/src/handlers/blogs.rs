//! Blog workflow handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::{Post, PostState, PostUpdate};
use quill_core::ports::{AuthorFilter, Page, PublishedFilter, SortKey, SortOrder};
use quill_shared::dto::{
    BlogData, BlogDetail, CreateBlogRequest, CreatedBlog, ListBlogsQuery, OwnBlogsQuery,
    PublishResponse, UpdateBlogRequest,
};
use quill_shared::{DataResponse, MessageResponse, PagedResponse};

use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Default page size for the public listing.
const DEFAULT_PUBLIC_LIMIT: u64 = 20;
/// Default page size for a user's own listing.
const DEFAULT_OWN_LIMIT: u64 = 10;

/// POST /api/blogs
pub async fn create_blog(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateBlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = Post::new(
        identity.user_id,
        req.title,
        req.description,
        req.tags,
        req.body,
    );
    let saved = state.posts.insert(post).await?;

    Ok(HttpResponse::Created().json(DataResponse::success(CreatedBlog {
        blog: BlogData::from(saved),
    })))
}

/// GET /api/blogs
pub async fn list_blogs(
    state: web::Data<AppState>,
    query: web::Query<ListBlogsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    let filter = build_published_filter(&query)?;
    let page = Page::new(
        query.page.unwrap_or(1),
        query.limit.unwrap_or(DEFAULT_PUBLIC_LIMIT),
    );

    let rows = state.posts.list_published(&filter, page).await?;
    let blogs: Vec<BlogDetail> = rows.into_iter().map(BlogDetail::from).collect();

    Ok(HttpResponse::Ok().json(DataResponse::success(blogs)))
}

/// GET /api/blogs/user/blogs
pub async fn user_blogs(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<OwnBlogsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    let filter = build_author_filter(identity.user_id, &query)?;
    let page = Page::new(
        query.page.unwrap_or(1),
        query.limit.unwrap_or(DEFAULT_OWN_LIMIT),
    );

    let (posts, total) = state.posts.list_by_author(&filter, page).await?;
    let blogs: Vec<BlogData> = posts.into_iter().map(BlogData::from).collect();

    Ok(HttpResponse::Ok().json(PagedResponse::success(
        blogs,
        total,
        page.page,
        page.total_pages(total),
    )))
}

/// GET /api/blogs/{id}
///
/// Auth is optional here: published blogs are open to anonymous callers,
/// drafts only to their author. Every successful fetch bumps the read count.
pub async fn get_blog(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    identity: OptionalIdentity,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let (mut post, author) = state
        .posts
        .find_with_author(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;

    let is_author = identity
        .0
        .as_ref()
        .is_some_and(|i| i.user_id == post.author_id);
    if !post.is_published() && !is_author {
        return Err(AppError::Forbidden("Access denied: Not your draft".to_string()));
    }

    state.posts.increment_read_count(id).await?;
    post.read_count += 1;

    Ok(HttpResponse::Ok().json(DataResponse::success(BlogDetail::from((post, author)))))
}

/// PUT /api/blogs/{id}
pub async fn update_blog(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateBlogRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let mut post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;

    if post.author_id != identity.user_id {
        return Err(AppError::Forbidden(
            "You are not authorized to update this blog".to_string(),
        ));
    }

    let next_state = match req.state.as_deref() {
        Some(raw) => Some(
            PostState::parse(raw)
                .ok_or_else(|| AppError::InvalidArgument(format!("Invalid state: {raw}")))?,
        ),
        None => None,
    };

    post.apply_update(PostUpdate {
        title: req.title,
        description: req.description,
        tags: req.tags,
        body: req.body,
        state: next_state,
    })?;

    let updated = state.posts.update(post).await?;

    Ok(HttpResponse::Ok().json(DataResponse::success(BlogData::from(updated))))
}

/// DELETE /api/blogs/{id}
pub async fn delete_blog(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;

    if post.author_id != identity.user_id {
        return Err(AppError::Forbidden(
            "You are not authorized to delete this blog".to_string(),
        ));
    }

    state.posts.delete(id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::success("Blog deleted successfully")))
}

/// PATCH /api/blogs/{id}/publish
pub async fn publish_blog(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let mut post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;

    if post.author_id != identity.user_id {
        return Err(AppError::Forbidden(
            "Not authorized to publish this blog".to_string(),
        ));
    }

    post.publish()?;
    let published = state.posts.update(post).await?;

    Ok(HttpResponse::Ok().json(PublishResponse {
        message: "Blog published successfully".to_string(),
        blog: BlogData::from(published),
    }))
}

/// Build the public-listing filter, validating each field independently.
fn build_published_filter(query: &ListBlogsQuery) -> Result<PublishedFilter, AppError> {
    let author = match query.author.as_deref() {
        Some(raw) => Some(
            Uuid::parse_str(raw)
                .map_err(|_| AppError::InvalidArgument("Invalid author ID".to_string()))?,
        ),
        None => None,
    };

    let tags = query.tags.as_deref().map(|raw| {
        raw.split(',')
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect::<Vec<_>>()
    });

    // Unrecognized sort keys are silently ignored rather than rejected.
    let order_by = query.order_by.as_deref().and_then(SortKey::parse);

    Ok(PublishedFilter {
        title: query.title.clone(),
        tags,
        author,
        order_by,
    })
}

/// Build the own-listing filter for the authenticated user.
fn build_author_filter(author: Uuid, query: &OwnBlogsQuery) -> Result<AuthorFilter, AppError> {
    let state = match query.state.as_deref() {
        Some(raw) => Some(
            PostState::parse(raw)
                .ok_or_else(|| AppError::InvalidArgument(format!("Invalid state filter: {raw}")))?,
        ),
        None => None,
    };

    Ok(AuthorFilter {
        author,
        state,
        order: query.order.as_deref().map(SortOrder::parse).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_filter_rejects_malformed_author_id() {
        let query = ListBlogsQuery {
            author: Some("not-a-uuid".to_string()),
            ..Default::default()
        };

        let err = build_published_filter(&query).unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[test]
    fn published_filter_splits_comma_separated_tags() {
        let query = ListBlogsQuery {
            tags: Some("rust, web ,".to_string()),
            ..Default::default()
        };

        let filter = build_published_filter(&query).unwrap();
        assert_eq!(
            filter.tags,
            Some(vec!["rust".to_string(), "web".to_string()])
        );
    }

    #[test]
    fn published_filter_ignores_unknown_sort_keys() {
        let query = ListBlogsQuery {
            order_by: Some("title".to_string()),
            ..Default::default()
        };

        let filter = build_published_filter(&query).unwrap();
        assert!(filter.order_by.is_none());
    }

    #[test]
    fn published_filter_accepts_known_sort_keys() {
        let query = ListBlogsQuery {
            order_by: Some("read_count".to_string()),
            ..Default::default()
        };

        let filter = build_published_filter(&query).unwrap();
        assert_eq!(filter.order_by, Some(SortKey::ReadCount));
    }

    #[test]
    fn author_filter_rejects_unknown_state() {
        let query = OwnBlogsQuery {
            state: Some("archived".to_string()),
            ..Default::default()
        };

        let err = build_author_filter(Uuid::new_v4(), &query).unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[test]
    fn author_filter_defaults_to_descending_creation_time() {
        let filter = build_author_filter(Uuid::new_v4(), &OwnBlogsQuery::default()).unwrap();
        assert_eq!(filter.order, SortOrder::Desc);
        assert!(filter.state.is_none());
    }
}
