/// 입찰 관련 커맨드 (HTTP 요청 본문)
/// 사용자 식별자는 호출자가 제공한다. 인증은 이 서비스 밖의 책임이다.
// region:    --- Imports
use crate::auction::dto::AuctionDto;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// endregion: --- Imports

// region:    --- Commands
/// 경매 등록 명령
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuctionCommand {
    pub user_id: i64,
    pub auction: AuctionDto,
}

/// 입찰 명령
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceBidCommand {
    pub user_id: i64,
    pub bid_value: Decimal,
}

/// 즉시 구매 명령
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyNowCommand {
    pub user_id: i64,
}

/// 경매 종료 명령
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishAuctionCommand {
    pub bid_value: Decimal,
}

/// 관심 목록 추가 명령
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchAuctionCommand {
    pub user_id: i64,
    pub relation: String,
}
// endregion: --- Commands
