use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use quill_core::domain::{Post, PostState, User};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository, UserRepository};

use crate::database::entity::{post, user};
use crate::database::postgres_repo::{PostgresPostRepository, PostgresUserRepository};

fn post_model(id: uuid::Uuid, author_id: uuid::Uuid) -> post::Model {
    let now = chrono::Utc::now();
    post::Model {
        id,
        author_id,
        title: "Test Post".to_owned(),
        description: "A description".to_owned(),
        tags: vec!["testing".to_owned()],
        body: "Content".to_owned(),
        state: post::PostState::Draft,
        reading_time: "1 min read".to_owned(),
        read_count: 0,
        published_at: None,
        created_at: now.into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let post_id = uuid::Uuid::new_v4();
    let author_id = uuid::Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model(post_id, author_id)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    assert!(result.is_some());
    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, post_id);
    assert_eq!(post.author_id, author_id);
    assert_eq!(post.state, PostState::Draft);
}

#[tokio::test]
async fn test_find_user_by_email() {
    let user_id = uuid::Uuid::new_v4();
    let now = chrono::Utc::now();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user::Model {
            id: user_id,
            first_name: "Test".to_owned(),
            last_name: "User".to_owned(),
            email: "testuser@example.com".to_owned(),
            password_hash: "hash".to_owned(),
            created_at: now.into(),
        }]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);

    let result: Option<User> = repo.find_by_email("testuser@example.com").await.unwrap();

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.id, user_id);
    assert_eq!(found.email, "testuser@example.com");
}

#[tokio::test]
async fn test_increment_read_count() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(repo.increment_read_count(uuid::Uuid::new_v4()).await.is_ok());
}

#[tokio::test]
async fn test_increment_read_count_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let err = repo
        .increment_read_count(uuid::Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_delete_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let err = BaseRepository::<Post, uuid::Uuid>::delete(&repo, uuid::Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}
