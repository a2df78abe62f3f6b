//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub tags: Vec<String>,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub state: PostState,
    pub reading_time: String,
    pub read_count: i64,
    pub published_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
}

/// Post lifecycle state as stored in the `state` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PostState {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "published")]
    Published,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<PostState> for quill_core::domain::PostState {
    fn from(state: PostState) -> Self {
        match state {
            PostState::Draft => Self::Draft,
            PostState::Published => Self::Published,
        }
    }
}

impl From<quill_core::domain::PostState> for PostState {
    fn from(state: quill_core::domain::PostState) -> Self {
        match state {
            quill_core::domain::PostState::Draft => Self::Draft,
            quill_core::domain::PostState::Published => Self::Published,
        }
    }
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for quill_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            author_id: model.author_id,
            title: model.title,
            description: model.description,
            tags: model.tags,
            body: model.body,
            state: model.state.into(),
            reading_time: model.reading_time,
            read_count: model.read_count,
            published_at: model.published_at.map(Into::into),
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<quill_core::domain::Post> for ActiveModel {
    fn from(post: quill_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            author_id: Set(post.author_id),
            title: Set(post.title),
            description: Set(post.description),
            tags: Set(post.tags),
            body: Set(post.body),
            state: Set(post.state.into()),
            reading_time: Set(post.reading_time),
            read_count: Set(post.read_count),
            published_at: Set(post.published_at.map(Into::into)),
            created_at: Set(post.created_at.into()),
        }
    }
}
