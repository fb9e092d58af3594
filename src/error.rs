// region:    --- Imports
use thiserror::Error;

// endregion: --- Imports

// region:    --- Auction Error
/// 경매 서비스 계층의 오류
#[derive(Debug, Error)]
pub enum AuctionError {
    /// 식별자 또는 고유 이름으로 조회한 레코드가 없음
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// 저장 프로시저가 발생시킨 오류 (원본 그대로)
    #[error(transparent)]
    Procedure(sqlx::Error),

    /// save_auction 트랜잭션 도중 실패 (롤백됨)
    #[error("transaction rolled back: {0}")]
    Transaction(#[source] sqlx::Error),

    #[error("invalid page: offset={offset}, limit={limit}")]
    InvalidPage { offset: i64, limit: i64 },

    #[error("invalid auction: {0}")]
    InvalidAuction(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl AuctionError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
// endregion: --- Auction Error

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_entity_and_key() {
        let err = AuctionError::not_found("item category", "Antiques");
        assert_eq!(err.to_string(), "item category not found: Antiques");
    }

    #[test]
    fn procedure_error_displays_unchanged() {
        let err = AuctionError::Procedure(sqlx::Error::Protocol("bid too low".to_string()));
        assert_eq!(
            err.to_string(),
            sqlx::Error::Protocol("bid too low".to_string()).to_string()
        );
    }
}
// endregion: --- Tests
