//! 영속성 협력자: 엔티티별 조회/저장 함수와 페이지 조회(AuctionDao)
//!
//! 모든 함수는 `&mut PgConnection` 을 받으므로 하나의 트랜잭션 안에서 조합할 수 있다.
pub mod auction;
pub mod auction_dao;
pub mod category;
pub mod item;
pub mod page;
pub mod queries;
pub mod user;

pub use page::{Page, PAGE_SIZE_CAP};
