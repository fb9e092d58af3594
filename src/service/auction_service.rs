/// 경매 서비스
/// 1. 조회: 카테고리, 진행 중/종료/내 경매 페이지, 단건
/// 2. 등록: 상품과 경매를 하나의 트랜잭션으로 저장
/// 3. 입찰/즉시 구매/종료/관심 목록: 저장 프로시저로 전달
// region:    --- Imports
use crate::auction::dto::{ActiveAuctionDto, AuctionDto, FinishedAuctionDto};
use crate::auction::model::{NewAuction, NewItem};
use crate::bidding::procedures::{ProcedureCall, ProcedureGateway};
use crate::database::DatabaseManager;
use crate::error::AuctionError;
use crate::repository::{self, auction_dao, Page};
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

// region:    --- Auction Service
pub struct AuctionService {
    db: Arc<DatabaseManager>,
    procedures: Arc<dyn ProcedureGateway>,
}

impl AuctionService {
    /// 데이터베이스 매니저를 프로시저 게이트웨이로도 사용
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        let procedures: Arc<dyn ProcedureGateway> = Arc::clone(&db) as Arc<dyn ProcedureGateway>;
        Self { db, procedures }
    }

    pub fn with_gateway(db: Arc<DatabaseManager>, procedures: Arc<dyn ProcedureGateway>) -> Self {
        Self { db, procedures }
    }

    // region:    --- Queries

    /// 전체 카테고리 이름
    pub async fn find_all_categories(&self) -> Result<Vec<String>, AuctionError> {
        info!("{:<12} --> 카테고리 목록 조회", "Service");
        let mut conn = self.db.pool().acquire().await?;
        let categories = repository::category::find_all(&mut conn).await?;
        Ok(categories.into_iter().map(|category| category.name).collect())
    }

    /// 진행 중인 경매 검색
    pub async fn find_auctions(
        &self,
        search_string: &str,
        category: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<ActiveAuctionDto>, AuctionError> {
        info!(
            "{:<12} --> 경매 검색: search={:?}, category={:?}, offset={}, limit={}",
            "Service", search_string, category, offset, limit
        );
        let page = Page::new(offset, limit)?;
        let mut conn = self.db.pool().acquire().await?;
        let auctions = auction_dao::find_all_paged(&mut conn, search_string, category, page).await?;
        Ok(auctions)
    }

    /// 사용자가 판매하거나 낙찰받은 종료 경매
    pub async fn find_archived_auctions(
        &self,
        user_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<FinishedAuctionDto>, AuctionError> {
        info!(
            "{:<12} --> 종료 경매 조회: user_id={}, offset={}, limit={}",
            "Service", user_id, offset, limit
        );
        let page = Page::new(offset, limit)?;
        let mut conn = self.db.pool().acquire().await?;
        let auctions = auction_dao::find_archived_auctions(&mut conn, user_id, page).await?;
        Ok(auctions)
    }

    /// 사용자와 relation_type 관계인 진행 중인 경매
    pub async fn find_my_auctions(
        &self,
        offset: i64,
        limit: i64,
        user_id: i64,
        relation_type: &str,
    ) -> Result<Vec<ActiveAuctionDto>, AuctionError> {
        info!(
            "{:<12} --> 내 경매 조회: user_id={}, relation={}, offset={}, limit={}",
            "Service", user_id, relation_type, offset, limit
        );
        let page = Page::new(offset, limit)?;
        let mut conn = self.db.pool().acquire().await?;
        let auctions = auction_dao::find_my_auctions(&mut conn, page, user_id, relation_type).await?;
        Ok(auctions)
    }

    /// 경매 단건 조회 (없으면 NotFound)
    pub async fn find_by_id(&self, auction_id: i64) -> Result<AuctionDto, AuctionError> {
        info!("{:<12} --> 경매 조회 id: {}", "Service", auction_id);
        self.db
            .transaction(move |tx| {
                Box::pin(async move {
                    let auction = repository::auction::find_by_id(&mut **tx, auction_id)
                        .await?
                        .ok_or_else(|| AuctionError::not_found("auction", auction_id))?;
                    let item = repository::item::find_by_id(&mut **tx, auction.item_id)
                        .await?
                        .ok_or_else(|| AuctionError::not_found("item", auction.item_id))?;
                    let category = repository::category::find_by_id(&mut **tx, item.category_id)
                        .await?
                        .ok_or_else(|| {
                            AuctionError::not_found("item category", item.category_id)
                        })?;
                    Ok::<_, AuctionError>(AuctionDto::from_parts(&auction, &item, &category))
                })
            })
            .await
    }

    // endregion: --- Queries

    // region:    --- Commands

    /// 상품과 경매를 하나의 트랜잭션으로 등록하고 경매 id 반환
    pub async fn save_auction(
        &self,
        auction_dto: AuctionDto,
        user_id: i64,
    ) -> Result<i64, AuctionError> {
        info!(
            "{:<12} --> 경매 등록: seller={}, item={:?}, category={:?}",
            "Service", user_id, auction_dto.name, auction_dto.category
        );
        auction_dto.validate()?;

        let auction_id = self
            .db
            .transaction(move |tx| {
                Box::pin(async move {
                    let category =
                        repository::category::find_by_name(&mut **tx, &auction_dto.category)
                            .await?
                            .ok_or_else(|| {
                                AuctionError::not_found("item category", &auction_dto.category)
                            })?;
                    let seller = repository::user::find_by_id(&mut **tx, user_id)
                        .await?
                        .ok_or_else(|| AuctionError::not_found("user", user_id))?;

                    let new_item = NewItem {
                        name: auction_dto.name,
                        description: auction_dto.description,
                        image_url: auction_dto.image_url,
                        modified_at: Utc::now(),
                        category_id: category.id,
                    };
                    let item = repository::item::save(&mut **tx, &new_item)
                        .await
                        .map_err(AuctionError::Transaction)?;

                    let new_auction = NewAuction {
                        item_quantity: auction_dto.item_quantity,
                        starting_price: auction_dto.starting_price,
                        buy_now_price: auction_dto.buy_now_price,
                        expiration_date: auction_dto.expiration_date,
                        seller_id: seller.id,
                        item_id: item.id,
                    };
                    let auction = repository::auction::save(&mut **tx, &new_auction)
                        .await
                        .map_err(AuctionError::Transaction)?;

                    Ok::<_, AuctionError>(auction.id)
                })
            })
            .await?;

        info!("{:<12} --> 경매 등록 완료 id: {}", "Service", auction_id);
        Ok(auction_id)
    }

    /// 입찰 (검증은 place_bid 프로시저가 수행)
    pub async fn place_bid_procedure(
        &self,
        auction_id: i64,
        user_id: i64,
        bid_value: Decimal,
    ) -> Result<(), AuctionError> {
        info!(
            "{:<12} --> 입찰: auction_id={}, user_id={}, bid_value={}",
            "Service", auction_id, user_id, bid_value
        );
        self.call(ProcedureCall::place_bid(auction_id, user_id, bid_value))
            .await
    }

    /// 주어진 최종가로 경매 종료
    pub async fn move_auction_to_finished(
        &self,
        auction_id: i64,
        bid_value: Decimal,
    ) -> Result<(), AuctionError> {
        info!(
            "{:<12} --> 경매 종료: auction_id={}, final_price={}",
            "Service", auction_id, bid_value
        );
        self.call(ProcedureCall::move_auction_to_finished(auction_id, bid_value))
            .await
    }

    /// 즉시 구매
    pub async fn buy_now(&self, auction_id: i64, user_id: i64) -> Result<(), AuctionError> {
        info!(
            "{:<12} --> 즉시 구매: auction_id={}, user_id={}",
            "Service", auction_id, user_id
        );
        self.call(ProcedureCall::buy_now(auction_id, user_id)).await
    }

    /// 관심 목록에 관계 추가 ("watching", "bidding" 등)
    pub async fn add_auction_to_watchlist(
        &self,
        user_id: i64,
        auction_id: i64,
        relation: &str,
    ) -> Result<(), AuctionError> {
        info!(
            "{:<12} --> 관심 목록 추가: user_id={}, auction_id={}, relation={}",
            "Service", user_id, auction_id, relation
        );
        self.call(ProcedureCall::add_auction_to_watchlist(
            user_id, auction_id, relation,
        ))
        .await
    }

    /// 프로시저가 거부한 호출만 Procedure, 풀/연결 오류는 Database
    async fn call(&self, call: ProcedureCall) -> Result<(), AuctionError> {
        self.procedures.call(&call).await.map_err(|err| match err {
            err @ sqlx::Error::Database(_) => AuctionError::Procedure(err),
            other => AuctionError::Database(other),
        })
    }

    // endregion: --- Commands
}
// endregion: --- Auction Service

// endregion: --- Tests
