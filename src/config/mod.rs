/// 환경 변수(또는 명령줄 인자) 기반 애플리케이션 설정
// region:    --- Imports
use clap::Parser;
use std::net::SocketAddr;

// endregion: --- Imports

// region:    --- Config
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Parser, Debug, Clone)]
#[command(name = "auction-site")]
#[command(about = "Online auction marketplace service")]
pub struct AppConfig {
    /// PostgreSQL 접속 URL
    #[arg(long = "database-url")]
    #[arg(env = "DATABASE_URL")]
    pub database_url: String,

    /// 커넥션 풀 최대 크기
    #[arg(long = "database-max-connections")]
    #[arg(env = "DATABASE_MAX_CONNECTIONS")]
    #[arg(default_value_t = 5)]
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub max_connections: u32,

    /// 커넥션 획득 대기 시간(초)
    #[arg(long = "database-acquire-timeout")]
    #[arg(env = "DATABASE_ACQUIRE_TIMEOUT")]
    #[arg(default_value_t = 30)]
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub acquire_timeout_secs: u64,

    /// 서버 바인드 주소
    #[arg(long = "bind-addr")]
    #[arg(env = "BIND_ADDR")]
    #[arg(default_value = DEFAULT_BIND_ADDR)]
    pub bind_addr: SocketAddr,

    /// 시작 시 스키마, 프로시저, 카테고리 시드를 다시 생성
    #[arg(long = "reset-database")]
    #[arg(env = "RESET_DATABASE")]
    #[arg(default_value_t = false)]
    #[arg(action = clap::ArgAction::Set)]
    #[arg(value_parser = clap::builder::BoolishValueParser::new())]
    pub reset_database: bool,
}

impl AppConfig {
    /// 명령줄 인자 없이 환경 변수만으로 설정 읽기
    pub fn from_env() -> Result<Self, clap::Error> {
        Self::try_parse_from(["auction-site"])
    }
}
// endregion: --- Config

// endregion: --- Tests
