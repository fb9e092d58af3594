use super::queries;
use crate::auction::model::ItemCategory;
use sqlx::PgConnection;

pub async fn find_all(ex: &mut PgConnection) -> Result<Vec<ItemCategory>, sqlx::Error> {
    sqlx::query_as::<_, ItemCategory>(queries::FIND_ALL_CATEGORIES)
        .fetch_all(ex)
        .await
}

pub async fn find_by_name(
    ex: &mut PgConnection,
    name: &str,
) -> Result<Option<ItemCategory>, sqlx::Error> {
    sqlx::query_as::<_, ItemCategory>(queries::FIND_CATEGORY_BY_NAME)
        .bind(name)
        .fetch_optional(ex)
        .await
}

pub async fn find_by_id(
    ex: &mut PgConnection,
    id: i64,
) -> Result<Option<ItemCategory>, sqlx::Error> {
    sqlx::query_as::<_, ItemCategory>(queries::FIND_CATEGORY_BY_ID)
        .bind(id)
        .fetch_optional(ex)
        .await
}
