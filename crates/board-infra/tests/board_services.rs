//! Post and comment services running against an in-memory SQLite store.

use std::sync::Arc;

use board_core::domain::{PageRequest, Sort};
use board_core::ports::{CommentRepository, PostRepository};
use board_core::{CommentService, DomainError, PostService};
use board_infra::database::connect;
use board_infra::{DatabaseConfig, SeaOrmStore};
use board_shared::dto::{
    CreateCommentRequest, CreatePostRequest, UpdateCommentRequest, UpdatePostRequest,
};

struct Board {
    store: Arc<SeaOrmStore>,
    posts: PostService<SeaOrmStore>,
    comments: CommentService<SeaOrmStore>,
}

async fn board() -> Board {
    let db = connect(&DatabaseConfig::in_memory()).await.unwrap();
    let store = Arc::new(SeaOrmStore::new(db));
    Board {
        posts: PostService::new(Arc::clone(&store)),
        comments: CommentService::new(Arc::clone(&store)),
        store,
    }
}

fn create(title: &str, content: &str) -> CreatePostRequest {
    CreatePostRequest {
        title: title.to_string(),
        content: content.to_string(),
        author: "kim".to_string(),
    }
}

fn comment(content: &str) -> CreateCommentRequest {
    CreateCommentRequest {
        content: content.to_string(),
        author: "lee".to_string(),
    }
}

fn assert_post_not_found(result: Result<impl std::fmt::Debug, DomainError>, expected: i32) {
    match result {
        Err(DomainError::NotFound { entity_type, id }) => {
            assert_eq!(entity_type, "Post");
            assert_eq!(id, expected);
        }
        other => panic!("expected post {expected} not found, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_returns_summary_without_comments() {
    let board = board().await;
    let request = create("Hello", "First post");

    let created = board.posts.create_post(&request).await.unwrap();

    assert_eq!(created.title, request.title);
    assert_eq!(created.content, request.content);
    assert_eq!(created.author, request.author);
    assert_eq!(created.comment_count, 0);
    assert_eq!(created.created_at, created.updated_at);
}

#[tokio::test]
async fn test_get_after_create_matches_stored_post() {
    let board = board().await;
    let created = board.posts.create_post(&create("Hello", "Body")).await.unwrap();

    let detail = board.posts.get_post(created.id).await.unwrap();

    assert_eq!(detail.id, created.id);
    assert_eq!(detail.title, "Hello");
    assert_eq!(detail.content, "Body");
    assert_eq!(detail.author, "kim");
    assert!(detail.comments.is_empty());
}

#[tokio::test]
async fn test_update_changes_only_title_and_content() {
    let board = board().await;
    let created = board.posts.create_post(&create("Old", "old body")).await.unwrap();

    let updated = board
        .posts
        .update_post(
            created.id,
            &UpdatePostRequest {
                title: "New".to_string(),
                content: "new body".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "New");
    assert_eq!(updated.content, "new body");
    assert_eq!(updated.author, created.author);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    let detail = board.posts.get_post(created.id).await.unwrap();
    assert_eq!(detail.title, "New");
    assert_eq!(detail.updated_at, updated.updated_at);
    assert_eq!(board.store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_missing_post_is_not_found() {
    let board = board().await;
    let request = UpdatePostRequest {
        title: "t".to_string(),
        content: "c".to_string(),
    };

    assert_post_not_found(board.posts.get_post(99).await, 99);
    assert_post_not_found(board.posts.update_post(99, &request).await, 99);
    assert_post_not_found(board.posts.delete_post(99).await, 99);
    assert_post_not_found(board.comments.list_comments(99).await, 99);
    assert_post_not_found(board.comments.add_comment(99, &comment("hi")).await, 99);
}

#[tokio::test]
async fn test_delete_removes_post_and_comments() {
    let board = board().await;
    let post = board.posts.create_post(&create("a", "b")).await.unwrap();
    let keep = board.posts.create_post(&create("c", "d")).await.unwrap();
    board.comments.add_comment(post.id, &comment("one")).await.unwrap();
    board.comments.add_comment(post.id, &comment("two")).await.unwrap();
    board.comments.add_comment(keep.id, &comment("three")).await.unwrap();

    board.posts.delete_post(post.id).await.unwrap();

    assert!(board.store.find_by_id(post.id).await.unwrap().is_none());
    assert!(
        board
            .store
            .find_comments_by_post_id(post.id)
            .await
            .unwrap()
            .is_empty()
    );
    assert_eq!(
        board.store.find_comments_by_post_id(keep.id).await.unwrap().len(),
        1
    );
    assert_post_not_found(board.posts.get_post(post.id).await, post.id);
}

#[tokio::test]
async fn test_search_counts_title_or_content_matches() {
    let board = board().await;
    board.posts.create_post(&create("Kotlin study", "basics")).await.unwrap();
    board.posts.create_post(&create("Java study", "streams")).await.unwrap();
    board
        .posts
        .create_post(&create("Spring study, with Kotlin", "boot"))
        .await
        .unwrap();

    let kotlin = board.posts.search_posts("Kotlin", 0, 10).await.unwrap();
    assert_eq!(kotlin.items.len(), 2);
    assert_eq!(kotlin.total_elements, 2);

    let study = board.posts.search_posts("study", 0, 10).await.unwrap();
    assert_eq!(study.items.len(), 3);
    assert_eq!(study.items[0].title, "Spring study, with Kotlin");
}

#[tokio::test]
async fn test_list_posts_pagination() {
    let board = board().await;
    for i in 0..15 {
        board
            .posts
            .create_post(&create(&format!("post {i}"), "body"))
            .await
            .unwrap();
    }

    let first = board
        .posts
        .list_posts(PageRequest::new(0, 10, Sort::default()))
        .await
        .unwrap();
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total_elements, 15);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.current_page, 0);
    assert_eq!(first.size, 10);

    let second = board
        .posts
        .list_posts(PageRequest::new(1, 10, Sort::default()))
        .await
        .unwrap();
    assert_eq!(second.items.len(), 5);
}

#[tokio::test]
async fn test_list_reports_comment_counts() {
    let board = board().await;
    let post = board.posts.create_post(&create("a", "b")).await.unwrap();
    board.comments.add_comment(post.id, &comment("one")).await.unwrap();
    board.comments.add_comment(post.id, &comment("two")).await.unwrap();

    let list = board
        .posts
        .list_posts(PageRequest::new(0, 10, Sort::default()))
        .await
        .unwrap();
    assert_eq!(list.items[0].comment_count, 2);

    let by_author = board.posts.find_by_author("kim").await.unwrap();
    assert_eq!(by_author.len(), 1);
    assert_eq!(by_author[0].comment_count, 2);
}

#[tokio::test]
async fn test_comment_lifecycle() {
    let board = board().await;
    let post = board.posts.create_post(&create("a", "b")).await.unwrap();

    let added = board.comments.add_comment(post.id, &comment("hi")).await.unwrap();
    assert_eq!(added.post_id, post.id);
    assert_eq!(added.author, "lee");

    let edited = board
        .comments
        .update_comment(
            post.id,
            added.id,
            &UpdateCommentRequest {
                content: "hello".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.content, "hello");
    assert_eq!(edited.created_at, added.created_at);
    assert!(edited.updated_at > added.updated_at);

    let detail = board.posts.get_post(post.id).await.unwrap();
    assert_eq!(detail.comments, vec![edited.clone()]);

    board.comments.remove_comment(post.id, added.id).await.unwrap();
    assert!(board.comments.list_comments(post.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_comment_under_other_post_is_not_found() {
    let board = board().await;
    let owner = board.posts.create_post(&create("a", "b")).await.unwrap();
    let other = board.posts.create_post(&create("c", "d")).await.unwrap();
    let added = board.comments.add_comment(owner.id, &comment("hi")).await.unwrap();

    let result = board.comments.remove_comment(other.id, added.id).await;
    assert!(matches!(
        result,
        Err(DomainError::NotFound {
            entity_type: "Comment",
            ..
        })
    ));
    assert!(board.store.find_comment_by_id(added.id).await.unwrap().is_some());
}
