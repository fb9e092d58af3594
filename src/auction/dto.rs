/// 서비스 경계를 넘나드는 전송 객체
// region:    --- Imports
use super::model::{Auction, Item, ItemCategory};
use crate::error::AuctionError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// endregion: --- Imports

// region:    --- Auction DTO
/// 경매와 상품 필드를 합친 읽기/쓰기용 DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionDto {
    /// 조회 시에만 채워짐 (생성 요청에서는 무시)
    #[serde(default)]
    pub item_id: Option<i64>,
    pub item_quantity: i32,
    pub expiration_date: DateTime<Utc>,
    #[serde(default)]
    pub buy_now_price: Option<Decimal>,
    pub starting_price: Decimal,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// 카테고리 이름
    pub category: String,
    #[serde(default)]
    pub image_url: String,
}

impl AuctionDto {
    /// 경매와 연결된 상품, 카테고리로부터 DTO 생성
    pub fn from_parts(auction: &Auction, item: &Item, category: &ItemCategory) -> Self {
        Self {
            item_id: Some(item.id),
            item_quantity: auction.item_quantity,
            expiration_date: auction.expiration_date,
            buy_now_price: auction.buy_now_price,
            starting_price: auction.starting_price,
            name: item.name.clone(),
            description: item.description.clone(),
            category: category.name.clone(),
            image_url: item.image_url.clone(),
        }
    }

    /// 신규 경매 등록 전 검증
    pub fn validate(&self) -> Result<(), AuctionError> {
        if self.item_quantity < 1 {
            return Err(AuctionError::InvalidAuction(format!(
                "item quantity must be at least 1, got {}",
                self.item_quantity
            )));
        }
        if self.starting_price.is_sign_negative() {
            return Err(AuctionError::InvalidAuction(format!(
                "starting price must not be negative, got {}",
                self.starting_price
            )));
        }
        if let Some(buy_now_price) = self.buy_now_price {
            if buy_now_price < self.starting_price {
                return Err(AuctionError::InvalidAuction(format!(
                    "buy now price {} is below starting price {}",
                    buy_now_price, self.starting_price
                )));
            }
        }
        if self.name.trim().is_empty() {
            return Err(AuctionError::InvalidAuction(
                "item name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
// endregion: --- Auction DTO

// region:    --- View DTOs
/// 진행 중인 경매 요약 행
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ActiveAuctionDto {
    pub auction_id: i64,
    pub item_name: String,
    pub image_url: String,
    pub category: String,
    pub item_quantity: i32,
    pub starting_price: Decimal,
    pub current_price: Option<Decimal>,
    pub buy_now_price: Option<Decimal>,
    pub expiration_date: DateTime<Utc>,
    pub seller: String,
}

/// 종료된 경매 요약 행
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct FinishedAuctionDto {
    pub finished_auction_id: i64,
    pub auction_id: i64,
    pub item_name: String,
    pub image_url: String,
    pub category: String,
    pub item_quantity: i32,
    pub final_price: Option<Decimal>,
    pub seller: String,
    pub buyer: Option<String>,
    pub finished_at: DateTime<Utc>,
    /// "sold" 또는 "bought"
    pub relation: String,
}
// endregion: --- View DTOs

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn listing() -> AuctionDto {
        AuctionDto {
            item_id: None,
            item_quantity: 2,
            expiration_date: Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap(),
            buy_now_price: Some(Decimal::new(25000, 2)),
            starting_price: Decimal::new(10000, 2),
            name: "Vintage camera".to_string(),
            description: "Works fine".to_string(),
            category: "Electronics".to_string(),
            image_url: "https://img.example/camera.png".to_string(),
        }
    }

    #[test]
    fn from_parts_copies_item_and_category_fields() {
        let category = ItemCategory {
            id: 4,
            name: "Electronics".to_string(),
        };
        let item = Item {
            id: 31,
            name: "Vintage camera".to_string(),
            description: "Works fine".to_string(),
            image_url: "https://img.example/camera.png".to_string(),
            modified_at: Utc.with_ymd_and_hms(2029, 12, 1, 8, 30, 0).unwrap(),
            category_id: 4,
        };
        let auction = Auction {
            id: 7,
            item_quantity: 2,
            starting_price: Decimal::new(10000, 2),
            buy_now_price: None,
            expiration_date: Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap(),
            seller_id: 3,
            item_id: 31,
        };

        let dto = AuctionDto::from_parts(&auction, &item, &category);

        assert_eq!(dto.item_id, Some(31));
        assert_eq!(dto.name, item.name);
        assert_eq!(dto.description, item.description);
        assert_eq!(dto.category, "Electronics");
        assert_eq!(dto.image_url, item.image_url);
        assert_eq!(dto.item_quantity, 2);
        assert_eq!(dto.starting_price, Decimal::new(10000, 2));
        assert_eq!(dto.buy_now_price, None);
        assert_eq!(dto.expiration_date, auction.expiration_date);
    }

    #[test]
    fn valid_listing_passes() {
        assert!(listing().validate().is_ok());
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let dto = AuctionDto {
            item_quantity: 0,
            ..listing()
        };
        assert!(matches!(dto.validate(), Err(AuctionError::InvalidAuction(_))));
    }

    #[test]
    fn buy_now_below_starting_price_is_rejected() {
        let dto = AuctionDto {
            buy_now_price: Some(Decimal::new(5000, 2)),
            ..listing()
        };
        assert!(matches!(dto.validate(), Err(AuctionError::InvalidAuction(_))));
    }

    #[test]
    fn negative_starting_price_is_rejected() {
        let dto = AuctionDto {
            starting_price: Decimal::new(-1, 0),
            buy_now_price: None,
            ..listing()
        };
        assert!(matches!(dto.validate(), Err(AuctionError::InvalidAuction(_))));
    }

    #[test]
    fn listing_without_buy_now_price_deserializes() {
        let dto: AuctionDto = serde_json::from_value(serde_json::json!({
            "item_quantity": 1,
            "expiration_date": "2030-01-01T12:00:00Z",
            "starting_price": "10.50",
            "name": "Chess set",
            "category": "Toys"
        }))
        .unwrap();
        assert_eq!(dto.buy_now_price, None);
        assert_eq!(dto.item_id, None);
        assert_eq!(dto.starting_price, Decimal::new(1050, 2));
        assert_eq!(dto.description, "");
    }
}
// endregion: --- Tests
