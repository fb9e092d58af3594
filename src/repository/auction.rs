use super::queries;
use crate::auction::model::{Auction, NewAuction};
use sqlx::PgConnection;

pub async fn find_by_id(ex: &mut PgConnection, id: i64) -> Result<Option<Auction>, sqlx::Error> {
    sqlx::query_as::<_, Auction>(queries::FIND_AUCTION_BY_ID)
        .bind(id)
        .fetch_optional(ex)
        .await
}

/// 경매 저장 후 생성된 행 반환
pub async fn save(ex: &mut PgConnection, auction: &NewAuction) -> Result<Auction, sqlx::Error> {
    sqlx::query_as::<_, Auction>(queries::INSERT_AUCTION)
        .bind(auction.item_quantity)
        .bind(auction.starting_price)
        .bind(auction.buy_now_price)
        .bind(auction.expiration_date)
        .bind(auction.seller_id)
        .bind(auction.item_id)
        .fetch_one(ex)
        .await
}
