//! Comment queries.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use board_core::domain::{Comment, NewComment, now};
use board_core::error::RepoError;
use board_core::ports::CommentRepository;

use super::base::{SeaOrmRepository, map_db_err};
use super::entity::comment::{self, Entity as CommentEntity};

#[async_trait]
impl<C> CommentRepository for SeaOrmRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_comment_by_id(&self, id: i32) -> Result<Option<Comment>, RepoError> {
        let result = CommentEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_comments_by_post_id(&self, post_id: i32) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::Id)
            .all(&self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn count_comments_by_post_ids(
        &self,
        post_ids: &[i32],
    ) -> Result<HashMap<i32, u64>, RepoError> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i64)> = CommentEntity::find()
            .select_only()
            .column(comment::Column::PostId)
            .column_as(Expr::col(comment::Column::Id).count(), "comment_count")
            .filter(comment::Column::PostId.is_in(post_ids.iter().copied()))
            .group_by(comment::Column::PostId)
            .into_tuple()
            .all(&self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|(post_id, count)| (post_id, count.max(0) as u64))
            .collect())
    }

    async fn insert_comment(&self, new_comment: NewComment) -> Result<Comment, RepoError> {
        tracing::debug!(post_id = new_comment.post_id, "Inserting comment");
        let model = comment::ActiveModel::from_new(new_comment, now())
            .insert(&self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn update_comment(&self, updated: &Comment) -> Result<Comment, RepoError> {
        let model = comment::ActiveModel::from(updated)
            .update(&self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn delete_comment(&self, id: i32) -> Result<bool, RepoError> {
        let result = CommentEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_comments_by_post_id(&self, post_id: i32) -> Result<u64, RepoError> {
        let result = CommentEntity::delete_many()
            .filter(comment::Column::PostId.eq(post_id))
            .exec(&self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}
