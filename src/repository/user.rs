use super::queries;
use crate::auction::model::User;
use sqlx::PgConnection;

pub async fn find_by_id(ex: &mut PgConnection, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(queries::FIND_USER_BY_ID)
        .bind(id)
        .fetch_optional(ex)
        .await
}
