/// 경매 목록 페이지 조회
use super::{queries, Page};
use crate::auction::dto::{ActiveAuctionDto, FinishedAuctionDto};
use sqlx::PgConnection;

/// 진행 중인 경매 검색
///
/// 빈 검색어는 전체와 일치하고, 카테고리가 None 이면 필터하지 않는다.
/// 검색어의 `%`, `_` 는 글자 그대로 일치한다.
pub async fn find_all_paged(
    ex: &mut PgConnection,
    search: &str,
    category: Option<&str>,
    page: Page,
) -> Result<Vec<ActiveAuctionDto>, sqlx::Error> {
    sqlx::query_as::<_, ActiveAuctionDto>(queries::FIND_ALL_PAGED)
        .bind(escape_like(search.trim()))
        .bind(category)
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(ex)
        .await
}

/// LIKE 패턴 문자(`\`, `%`, `_`) 앞에 `\` 추가
fn escape_like(search: &str) -> String {
    let mut escaped = String::with_capacity(search.len());
    for c in search.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub async fn find_archived_auctions(
    ex: &mut PgConnection,
    user_id: i64,
    page: Page,
) -> Result<Vec<FinishedAuctionDto>, sqlx::Error> {
    sqlx::query_as::<_, FinishedAuctionDto>(queries::FIND_ARCHIVED_AUCTIONS)
        .bind(user_id)
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(ex)
        .await
}

pub async fn find_my_auctions(
    ex: &mut PgConnection,
    page: Page,
    user_id: i64,
    relation_type: &str,
) -> Result<Vec<ActiveAuctionDto>, sqlx::Error> {
    sqlx::query_as::<_, ActiveAuctionDto>(queries::FIND_MY_AUCTIONS)
        .bind(user_id)
        .bind(relation_type)
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(ex)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("snake_case"), "snake\\_case");
        assert_eq!(escape_like(r"C:\dir"), r"C:\\dir");
    }

    #[test]
    fn plain_search_is_unchanged() {
        assert_eq!(escape_like("vintage camera"), "vintage camera");
        assert_eq!(escape_like(""), "");
    }
}
