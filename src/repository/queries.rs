/// 전체 카테고리 조회
pub const FIND_ALL_CATEGORIES: &str = "SELECT id, name FROM item_category ORDER BY name";

/// 이름으로 카테고리 조회
pub const FIND_CATEGORY_BY_NAME: &str = "SELECT id, name FROM item_category WHERE name = $1";

/// 식별자로 카테고리 조회
pub const FIND_CATEGORY_BY_ID: &str = "SELECT id, name FROM item_category WHERE id = $1";

/// 사용자 조회
pub const FIND_USER_BY_ID: &str = "SELECT id, username FROM users WHERE id = $1";

/// 상품 조회
pub const FIND_ITEM_BY_ID: &str =
    "SELECT id, name, description, image_url, modified_at, category_id FROM item WHERE id = $1";

/// 상품 저장
pub const INSERT_ITEM: &str = r#"
    INSERT INTO item (name, description, image_url, modified_at, category_id)
    VALUES ($1, $2, $3, $4, $5)
    RETURNING id, name, description, image_url, modified_at, category_id
"#;

/// 경매 조회
pub const FIND_AUCTION_BY_ID: &str = r#"
    SELECT id, item_quantity, starting_price, buy_now_price, expiration_date, seller_id, item_id
    FROM auction
    WHERE id = $1
"#;

/// 경매 저장
pub const INSERT_AUCTION: &str = r#"
    INSERT INTO auction (item_quantity, starting_price, buy_now_price, expiration_date, seller_id, item_id)
    VALUES ($1, $2, $3, $4, $5, $6)
    RETURNING id, item_quantity, starting_price, buy_now_price, expiration_date, seller_id, item_id
"#;

/// 진행 중인 경매 검색 (검색어, 카테고리 필터)
/// $1 은 LIKE 와일드카드가 `\` 로 이스케이프된 검색어
pub const FIND_ALL_PAGED: &str = r#"
    SELECT a.id AS auction_id, i.name AS item_name, i.image_url, c.name AS category,
           a.item_quantity, a.starting_price, a.current_price, a.buy_now_price,
           a.expiration_date, u.username AS seller
    FROM auction a
    JOIN item i ON i.id = a.item_id
    JOIN item_category c ON c.id = i.category_id
    JOIN users u ON u.id = a.seller_id
    WHERE a.expiration_date > now()
      AND ($1 = '' OR i.name ILIKE '%' || $1 || '%' ESCAPE '\'
           OR i.description ILIKE '%' || $1 || '%' ESCAPE '\')
      AND ($2::text IS NULL OR c.name = $2)
    ORDER BY a.expiration_date ASC, a.id ASC
    OFFSET $3
    LIMIT $4
"#;

/// 사용자가 판매자 또는 구매자인 종료 경매
pub const FIND_ARCHIVED_AUCTIONS: &str = r#"
    SELECT f.id AS finished_auction_id, f.auction_id, i.name AS item_name, i.image_url,
           c.name AS category, f.item_quantity, f.final_price,
           s.username AS seller, b.username AS buyer, f.finished_at,
           CASE WHEN f.seller_id = $1 THEN 'sold' ELSE 'bought' END AS relation
    FROM finished_auction f
    JOIN item i ON i.id = f.item_id
    JOIN item_category c ON c.id = i.category_id
    JOIN users s ON s.id = f.seller_id
    LEFT JOIN users b ON b.id = f.buyer_id
    WHERE f.seller_id = $1 OR f.buyer_id = $1
    ORDER BY f.finished_at DESC, f.id DESC
    OFFSET $2
    LIMIT $3
"#;

/// 사용자와 관계된 진행 중인 경매 ("selling" 또는 관심 목록 관계)
pub const FIND_MY_AUCTIONS: &str = r#"
    SELECT a.id AS auction_id, i.name AS item_name, i.image_url, c.name AS category,
           a.item_quantity, a.starting_price, a.current_price, a.buy_now_price,
           a.expiration_date, u.username AS seller
    FROM auction a
    JOIN item i ON i.id = a.item_id
    JOIN item_category c ON c.id = i.category_id
    JOIN users u ON u.id = a.seller_id
    WHERE a.expiration_date > now()
      AND (
        ($2 = 'selling' AND a.seller_id = $1)
        OR EXISTS (
            SELECT 1 FROM user_auction ua
            WHERE ua.auction_id = a.id AND ua.user_id = $1 AND ua.relation = $2
        )
      )
    ORDER BY a.expiration_date ASC, a.id ASC
    OFFSET $3
    LIMIT $4
"#;
