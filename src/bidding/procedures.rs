/// 저장 프로시저 게이트웨이
/// 입찰 검증, 잔액 이체, 경매 종료 같은 트랜잭션 규칙은 모두 데이터베이스 프로시저 안에 있다.
/// 이 계층은 인자 순서와 타입을 맞춰 CALL 한 번만 실행한다.
// region:    --- Imports
use crate::database::DatabaseManager;
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::debug;

// endregion: --- Imports

// region:    --- Procedure Call
pub const PLACE_BID: &str = "place_bid";
pub const MOVE_AUCTION_TO_FINISHED: &str = "move_auction_to_finished";
pub const BUY_NOW: &str = "buy_now";
pub const ADD_AUCTION_TO_WATCHLIST: &str = "add_auction_to_watchlist";

/// 프로시저 인자
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcedureArg {
    Id(i64),
    Money(Decimal),
    Tag(String),
}

/// 이름과 순서가 정해진 인자를 가진 프로시저 호출
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcedureCall {
    procedure: &'static str,
    args: Vec<ProcedureArg>,
}

impl ProcedureCall {
    /// place_bid(auction_id, user_id, bid_value)
    pub fn place_bid(auction_id: i64, user_id: i64, bid_value: Decimal) -> Self {
        Self {
            procedure: PLACE_BID,
            args: vec![
                ProcedureArg::Id(auction_id),
                ProcedureArg::Id(user_id),
                ProcedureArg::Money(bid_value),
            ],
        }
    }

    /// move_auction_to_finished(auction_id, bid_value)
    pub fn move_auction_to_finished(auction_id: i64, bid_value: Decimal) -> Self {
        Self {
            procedure: MOVE_AUCTION_TO_FINISHED,
            args: vec![ProcedureArg::Id(auction_id), ProcedureArg::Money(bid_value)],
        }
    }

    /// buy_now(auction_id, user_id)
    pub fn buy_now(auction_id: i64, user_id: i64) -> Self {
        Self {
            procedure: BUY_NOW,
            args: vec![ProcedureArg::Id(auction_id), ProcedureArg::Id(user_id)],
        }
    }

    /// add_auction_to_watchlist(user_id, auction_id, relation)
    pub fn add_auction_to_watchlist(user_id: i64, auction_id: i64, relation: &str) -> Self {
        Self {
            procedure: ADD_AUCTION_TO_WATCHLIST,
            args: vec![
                ProcedureArg::Id(user_id),
                ProcedureArg::Id(auction_id),
                ProcedureArg::Tag(relation.to_string()),
            ],
        }
    }

    pub fn procedure(&self) -> &'static str {
        self.procedure
    }

    pub fn args(&self) -> &[ProcedureArg] {
        &self.args
    }

    /// `CALL name($1, ..., $n)`
    pub fn statement(&self) -> String {
        let placeholders: Vec<String> = (1..=self.args.len()).map(|i| format!("${}", i)).collect();
        format!("CALL {}({})", self.procedure, placeholders.join(", "))
    }
}
// endregion: --- Procedure Call

// region:    --- Procedure Gateway
/// 저장 프로시저 실행기
#[async_trait]
pub trait ProcedureGateway: Send + Sync {
    /// 프로시저를 한 번 호출한다. 오류는 가공 없이 반환한다.
    async fn call(&self, call: &ProcedureCall) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl ProcedureGateway for DatabaseManager {
    async fn call(&self, call: &ProcedureCall) -> Result<(), sqlx::Error> {
        let statement = call.statement();
        debug!("{:<12} --> {} {:?}", "Procedure", statement, call.args());

        let mut query = sqlx::query(&statement);
        for arg in call.args() {
            query = match arg {
                ProcedureArg::Id(id) => query.bind(*id),
                ProcedureArg::Money(value) => query.bind(*value),
                ProcedureArg::Tag(tag) => query.bind(tag.as_str()),
            };
        }
        query.execute(self.pool()).await?;
        Ok(())
    }
}
// endregion: --- Procedure Gateway

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_bid_keeps_auction_user_value_order() {
        let call = ProcedureCall::place_bid(5, 10, Decimal::new(9999, 2));
        assert_eq!(call.procedure(), "place_bid");
        assert_eq!(call.statement(), "CALL place_bid($1, $2, $3)");
        assert_eq!(
            call.args(),
            &[
                ProcedureArg::Id(5),
                ProcedureArg::Id(10),
                ProcedureArg::Money(Decimal::new(9999, 2)),
            ]
        );
    }

    #[test]
    fn move_auction_to_finished_takes_two_arguments() {
        let call = ProcedureCall::move_auction_to_finished(8, Decimal::new(120, 0));
        assert_eq!(call.statement(), "CALL move_auction_to_finished($1, $2)");
        assert_eq!(
            call.args(),
            &[ProcedureArg::Id(8), ProcedureArg::Money(Decimal::new(120, 0))]
        );
    }

    #[test]
    fn buy_now_takes_auction_then_user() {
        let call = ProcedureCall::buy_now(3, 4);
        assert_eq!(call.statement(), "CALL buy_now($1, $2)");
        assert_eq!(call.args(), &[ProcedureArg::Id(3), ProcedureArg::Id(4)]);
    }

    #[test]
    fn watchlist_takes_user_then_auction_then_relation() {
        let call = ProcedureCall::add_auction_to_watchlist(10, 5, "watching");
        assert_eq!(call.statement(), "CALL add_auction_to_watchlist($1, $2, $3)");
        assert_eq!(
            call.args(),
            &[
                ProcedureArg::Id(10),
                ProcedureArg::Id(5),
                ProcedureArg::Tag("watching".to_string()),
            ]
        );
    }
}
// endregion: --- Tests
