use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// 상품 카테고리 모델 (시드 데이터, 이름은 고유)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ItemCategory {
    pub id: i64,
    pub name: String,
}

// 사용자 모델 (이 계층에서는 식별자와 이름만 사용)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
}

// 상품 모델
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub modified_at: DateTime<Utc>,
    pub category_id: i64,
}

// 경매 모델
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Auction {
    pub id: i64,
    pub item_quantity: i32,
    pub starting_price: Decimal,
    pub buy_now_price: Option<Decimal>,
    pub expiration_date: DateTime<Utc>,
    pub seller_id: i64,
    pub item_id: i64,
}

/// 저장 전 상품
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub modified_at: DateTime<Utc>,
    pub category_id: i64,
}

/// 저장 전 경매
#[derive(Debug, Clone)]
pub struct NewAuction {
    pub item_quantity: i32,
    pub starting_price: Decimal,
    pub buy_now_price: Option<Decimal>,
    pub expiration_date: DateTime<Utc>,
    pub seller_id: i64,
    pub item_id: i64,
}
