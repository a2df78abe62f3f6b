//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::{PgBinOper, PgExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, Unchanged,
};

use quill_core::domain::{Post, User};
use quill_core::error::RepoError;
use quill_core::ports::{
    AuthorFilter, Page, PostRepository, PublishedFilter, SortKey, SortOrder, UserRepository,
};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask email for logging to avoid PII in logs
        let masked = if let Some(at_pos) = email.find('@') {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = if local.len() > 1 {
                format!("{}***", &local[..1])
            } else {
                "***".to_string()
            };
            format!("{}{}", masked_local, domain)
        } else {
            "***".to_string()
        };
        tracing::debug!(user_email = %masked, "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}

/// Escape LIKE metacharacters in user-supplied search text.
fn like_escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn sort_column(key: SortKey) -> post::Column {
    match key {
        SortKey::ReadingTime => post::Column::ReadingTime,
        SortKey::ReadCount => post::Column::ReadCount,
        SortKey::Timestamp => post::Column::CreatedAt,
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_with_author(&self, id: uuid::Uuid) -> Result<Option<(Post, User)>, RepoError> {
        let row = PostEntity::find_by_id(id)
            .find_also_related(UserEntity)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        match row {
            Some((post, Some(author))) => Ok(Some((post.into(), author.into()))),
            Some((post, None)) => Err(RepoError::Query(format!(
                "post {} has no author row",
                post.id
            ))),
            None => Ok(None),
        }
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        // Only the mutable columns are written; author_id, created_at and
        // read_count stay untouched at the storage layer.
        let active = post::ActiveModel {
            id: Unchanged(post.id),
            title: Set(post.title),
            description: Set(post.description),
            tags: Set(post.tags),
            body: Set(post.body),
            state: Set(post.state.into()),
            reading_time: Set(post.reading_time),
            published_at: Set(post.published_at.map(Into::into)),
            ..Default::default()
        };

        let model = active.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => RepoError::NotFound,
            other => RepoError::Query(other.to_string()),
        })?;

        Ok(model.into())
    }

    async fn increment_read_count(&self, id: uuid::Uuid) -> Result<(), RepoError> {
        let result = PostEntity::update_many()
            .col_expr(
                post::Column::ReadCount,
                Expr::col(post::Column::ReadCount).add(1),
            )
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn list_published(
        &self,
        filter: &PublishedFilter,
        page: Page,
    ) -> Result<Vec<(Post, User)>, RepoError> {
        let mut select = PostEntity::find().filter(post::Column::State.eq(post::PostState::Published));

        if let Some(title) = &filter.title {
            select = select.filter(
                Expr::col((post::Entity, post::Column::Title))
                    .ilike(format!("%{}%", like_escape(title))),
            );
        }
        if let Some(tags) = &filter.tags {
            select = select.filter(
                Expr::col((post::Entity, post::Column::Tags))
                    .binary(PgBinOper::Overlap, Expr::val(tags.clone())),
            );
        }
        if let Some(author) = filter.author {
            select = select.filter(post::Column::AuthorId.eq(author));
        }

        let mut select = select.find_also_related(UserEntity);
        if let Some(key) = filter.order_by {
            select = select.order_by_desc(sort_column(key));
        }

        let rows = select
            .offset(page.offset())
            .limit(page.limit)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        rows.into_iter()
            .map(|(post, author)| {
                let author = author.ok_or_else(|| {
                    RepoError::Query(format!("post {} has no author row", post.id))
                })?;
                Ok((post.into(), author.into()))
            })
            .collect()
    }

    async fn list_by_author(
        &self,
        filter: &AuthorFilter,
        page: Page,
    ) -> Result<(Vec<Post>, u64), RepoError> {
        let mut select = PostEntity::find().filter(post::Column::AuthorId.eq(filter.author));

        if let Some(state) = filter.state {
            select = select.filter(post::Column::State.eq(post::PostState::from(state)));
        }

        let total = select
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        let order = match filter.order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        let models = select
            .order_by(post::Column::CreatedAt, order)
            .offset(page.offset())
            .limit(page.limit)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok((models.into_iter().map(Into::into).collect(), total))
    }
}
