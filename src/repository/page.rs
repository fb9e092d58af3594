use crate::error::AuctionError;

/// 한 페이지 최대 행 수
pub const PAGE_SIZE_CAP: i64 = 100;

/// 검증된 페이지 범위
///
/// 음수 offset, 0 이하 limit 는 거부하고, limit 는 PAGE_SIZE_CAP 으로 자른다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    offset: i64,
    limit: i64,
}

impl Page {
    pub fn new(offset: i64, limit: i64) -> Result<Self, AuctionError> {
        if offset < 0 || limit <= 0 {
            return Err(AuctionError::InvalidPage { offset, limit });
        }
        Ok(Self {
            offset,
            limit: limit.min(PAGE_SIZE_CAP),
        })
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_regular_bounds() {
        let page = Page::new(20, 10).unwrap();
        assert_eq!(page.offset(), 20);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn rejects_zero_limit() {
        assert!(matches!(
            Page::new(0, 0),
            Err(AuctionError::InvalidPage { offset: 0, limit: 0 })
        ));
    }

    #[test]
    fn rejects_negative_offset() {
        assert!(matches!(
            Page::new(-1, 10),
            Err(AuctionError::InvalidPage { offset: -1, limit: 10 })
        ));
    }

    #[test]
    fn clamps_oversized_limit() {
        assert_eq!(Page::new(0, 5_000).unwrap().limit(), PAGE_SIZE_CAP);
    }
}
