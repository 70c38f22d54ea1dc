//! Post queries.

use async_trait::async_trait;
use sea_orm::sea_query::{Condition, Expr, Func, LikeExpr, Order, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Select,
};

use board_core::domain::{
    Direction, NewPost, Page, PageRequest, Post, PostWithComments, Sort, SortField, now,
};
use board_core::error::RepoError;
use board_core::ports::PostRepository;

use super::base::{SeaOrmRepository, map_db_err};
use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};

#[async_trait]
impl<C> PostRepository for SeaOrmRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_all(&self, page: &PageRequest) -> Result<Page<Post>, RepoError> {
        self.fetch_page(PostEntity::find(), page).await
    }

    async fn find_by_author(&self, author: &str) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::Author.eq(author))
            .order_by_asc(post::Column::Id)
            .all(&self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_title_containing(
        &self,
        keyword: &str,
        page: &PageRequest,
    ) -> Result<Page<Post>, RepoError> {
        tracing::debug!(keyword, page = page.page, "Finding posts by title");
        let select = PostEntity::find().filter(contains_ignore_case(post::Column::Title, keyword));
        self.fetch_page(select, page).await
    }

    async fn search_by_keyword(
        &self,
        keyword: &str,
        page: &PageRequest,
    ) -> Result<Page<Post>, RepoError> {
        tracing::debug!(keyword, page = page.page, "Searching posts");
        let select = PostEntity::find().filter(
            Condition::any()
                .add(contains_ignore_case(post::Column::Title, keyword))
                .add(contains_ignore_case(post::Column::Content, keyword)),
        );
        self.fetch_page(select, page).await
    }

    async fn find_by_id_with_comments(
        &self,
        id: i32,
    ) -> Result<Option<PostWithComments>, RepoError> {
        // One LEFT JOIN instead of a follow-up query per comment.
        let rows = PostEntity::find_by_id(id)
            .find_with_related(CommentEntity)
            .order_by_asc(comment::Column::Id)
            .all(&self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().next().map(|(post, comments)| PostWithComments {
            post: post.into(),
            comments: comments.into_iter().map(Into::into).collect(),
        }))
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, RepoError> {
        let count = PostEntity::find_by_id(id)
            .count(&self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        PostEntity::find()
            .count(&self.conn)
            .await
            .map_err(map_db_err)
    }

    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from_new(new_post, now())
            .insert(&self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn update(&self, updated: &Post) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(updated)
            .update(&self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<bool, RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}

impl<C> SeaOrmRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn fetch_page(
        &self,
        select: Select<PostEntity>,
        page: &PageRequest,
    ) -> Result<Page<Post>, RepoError> {
        let paginator = sorted(select, &page.sort).paginate(&self.conn, page.size);
        let totals = paginator
            .num_items_and_pages()
            .await
            .map_err(map_db_err)?;
        let in_range = page
            .page
            .checked_mul(page.size)
            .is_some_and(|offset| offset < totals.number_of_items);
        let models = if in_range {
            paginator.fetch_page(page.page).await.map_err(map_db_err)?
        } else {
            Vec::new()
        };

        Ok(Page {
            items: models.into_iter().map(Into::into).collect(),
            total_elements: totals.number_of_items,
            total_pages: totals.number_of_pages,
            current_page: page.page,
            size: page.size,
        })
    }
}

/// Orders by the requested column, then by id so equal timestamps page stably.
fn sorted(select: Select<PostEntity>, sort: &Sort) -> Select<PostEntity> {
    let order = match sort.direction {
        Direction::Asc => Order::Asc,
        Direction::Desc => Order::Desc,
    };
    let column = match sort.field {
        SortField::Id => post::Column::Id,
        SortField::Title => post::Column::Title,
        SortField::Author => post::Column::Author,
        SortField::CreatedAt => post::Column::CreatedAt,
        SortField::UpdatedAt => post::Column::UpdatedAt,
    };

    select
        .order_by(column, order.clone())
        .order_by(post::Column::Id, order)
}

/// `lower(column) LIKE '%keyword%'`, with LIKE wildcards in the keyword matched literally.
fn contains_ignore_case(column: post::Column, keyword: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&keyword.to_lowercase()));
    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape('\\'))
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
