//! Table bootstrap derived from the entity definitions.
//!
//! Only creates what is missing; existing tables are never altered.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, Schema};

use super::entity::{comment, post};

pub async fn create_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    create_table(db, &schema, post::Entity).await?;
    create_table(db, &schema, comment::Entity).await?;

    for mut index in schema.create_index_from_entity(comment::Entity) {
        index.if_not_exists();
        db.execute(backend.build(&index)).await?;
    }

    tracing::debug!("Schema ready");
    Ok(())
}

async fn create_table<C, E>(db: &C, schema: &Schema, entity: E) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    db.execute(db.get_database_backend().build(&table)).await?;
    Ok(())
}
