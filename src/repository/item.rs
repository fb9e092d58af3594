use super::queries;
use crate::auction::model::{Item, NewItem};
use sqlx::PgConnection;

pub async fn find_by_id(ex: &mut PgConnection, id: i64) -> Result<Option<Item>, sqlx::Error> {
    sqlx::query_as::<_, Item>(queries::FIND_ITEM_BY_ID)
        .bind(id)
        .fetch_optional(ex)
        .await
}

/// 상품 저장 후 생성된 행 반환
pub async fn save(ex: &mut PgConnection, item: &NewItem) -> Result<Item, sqlx::Error> {
    sqlx::query_as::<_, Item>(queries::INSERT_ITEM)
        .bind(&item.name)
        .bind(&item.description)
        .bind(&item.image_url)
        .bind(item.modified_at)
        .bind(item.category_id)
        .fetch_one(ex)
        .await
}
