// region:    --- Imports
use crate::config::AppConfig;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tracing::{info, warn};

// endregion: --- Imports

// region:    --- Database Manager
pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    /// 데이터베이스 매니저 생성
    pub async fn new(config: &AppConfig) -> Result<Self, sqlx::Error> {
        let pool = Self::pool_options(config)
            .connect(&config.database_url)
            .await?;
        Ok(Self { pool })
    }

    /// 첫 쿼리 시점까지 연결을 미루는 매니저 생성
    pub fn new_lazy(config: &AppConfig) -> Result<Self, sqlx::Error> {
        let pool = Self::pool_options(config).connect_lazy(&config.database_url)?;
        Ok(Self { pool })
    }

    fn pool_options(config: &AppConfig) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
    }

    /// 트랜잭션 실행
    ///
    /// 클로저가 Ok를 반환하면 커밋, Err를 반환하면 롤백한다.
    /// 클로저가 패닉하면 sqlx::Transaction 의 Drop 이 롤백한다.
    pub async fn transaction<F, R, E>(&self, f: F) -> Result<R, E>
    where
        F: for<'c> FnOnce(
            &'c mut sqlx::Transaction<'_, sqlx::Postgres>,
        ) -> Pin<Box<dyn Future<Output = Result<R, E>> + Send + 'c>>,
        E: From<sqlx::Error>,
    {
        let mut tx = self.pool.begin().await?;
        let result = f(&mut tx).await;
        match result {
            Ok(r) => {
                tx.commit().await?;
                Ok(r)
            }
            Err(e) => {
                // 원래 오류를 우선 반환
                if let Err(rollback_err) = tx.rollback().await {
                    warn!("{:<12} --> 롤백 실패: {:?}", "Database", rollback_err);
                }
                Err(e)
            }
        }
    }

    /// 데이터베이스 초기화
    pub async fn initialize_database(&self) -> Result<(), sqlx::Error> {
        // 00-recreate-db.sql 실행
        let recreate_db_sql = include_str!("../sql/00-recreate-db.sql");
        self.execute_multi_query(recreate_db_sql).await?;

        // 01-create-schema.sql 실행
        let create_schema_sql = include_str!("../sql/01-create-schema.sql");
        self.execute_multi_query(create_schema_sql).await?;

        // 02-create-procedures.sql 실행
        let create_procedures_sql = include_str!("../sql/02-create-procedures.sql");
        self.execute_multi_query(create_procedures_sql).await?;

        // 03-seed-categories.sql 실행
        let seed_categories_sql = include_str!("../sql/03-seed-categories.sql");
        self.execute_multi_query(seed_categories_sql).await?;

        info!("{:<12} --> 스키마 및 저장 프로시저 생성 완료", "Database");
        Ok(())
    }

    /// 여러 쿼리 실행
    ///
    /// 프로시저 본문($$ ... $$)에 세미콜론이 있으므로 단순 쿼리 프로토콜로 한 번에 보낸다.
    async fn execute_multi_query(&self, sql: &str) -> Result<(), sqlx::Error> {
        sqlx::raw_sql(sql).execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
// endregion: --- Database Manager
