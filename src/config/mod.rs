//! # Configuration Module
//!
//! 토큰 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 애플리케이션 시작 시 한 번만 읽어
//! [`AppConfig`] 구조체로 만들고, 이후에는 이 구조체를 명시적으로 전달합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 토큰 저장소 관련 설정
//! - [`token_config`] - 토큰 정책(TTL), 알림 관련 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use verification_token_service::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("bind: {}", config.server.bind_address());
//! println!("ttl: {}s", config.token.ttl_seconds);
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수 (프로덕션)
//!
//! ```bash
//! export DB_NAME="verification_tokens"
//! export REDIS_URL="redis://cache.internal:6379"
//! export NOTIFIER_TARGET_ID="https://notify.example.com/hooks/otp"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"   # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export REGION="ap-northeast-2"
//! export TOKEN_TTL_SECONDS="300"
//! ```

pub mod data_config;
pub mod token_config;

use std::str::FromStr;

use thiserror::Error;

pub use data_config::*;
pub use token_config::*;

/// 설정 로딩 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// 필수 설정 누락
    #[error("missing required configuration: {0}")]
    MissingRequired(String),

    /// 잘못된 설정 값
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// 환경 변수 조회 함수 타입
///
/// 테스트에서 프로세스 환경을 건드리지 않도록 조회 방식을 주입받습니다.
pub type EnvLookup<'a> = dyn Fn(&str) -> Option<String> + 'a;

/// 애플리케이션 전체 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub notifier: NotifierConfig,
    pub token: TokenConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽어옵니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::MissingRequired` - 선택된 백엔드에 필요한 값이 없음
    /// * `ConfigError::InvalidValue` - 숫자 파싱 실패, 알 수 없는 백엔드 등
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    /// 주어진 조회 함수로 설정을 읽어옵니다.
    pub fn from_lookup(lookup: &EnvLookup<'_>) -> Result<Self, ConfigError> {
        let environment = Environment::load(lookup);

        Ok(Self {
            environment,
            server: ServerConfig::load(lookup)?,
            store: StoreConfig::load(lookup, environment)?,
            notifier: NotifierConfig::load(lookup, environment)?,
            token: TokenConfig::load(lookup)?,
        })
    }
}

/// 숫자형 선택 설정을 파싱합니다. 값이 없으면 기본값을 사용합니다.
fn optional_number<T>(lookup: &EnvLookup<'_>, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        }),
        None => Ok(default),
    }
}

/// 기간(초) 설정의 상한. 만료 시각 계산과 Redis `EXAT`(밀리초 변환)가 넘치지 않는 범위입니다.
pub const MAX_DURATION_SECONDS: u64 = 100 * 365 * 24 * 60 * 60;

/// 초 단위 기간 설정을 파싱하고 `1..=MAX_DURATION_SECONDS` 범위로 제한합니다.
fn optional_duration(lookup: &EnvLookup<'_>, key: &str, default: u64) -> Result<u64, ConfigError> {
    let seconds: u64 = optional_number(lookup, key, default)?;
    if (1..=MAX_DURATION_SECONDS).contains(&seconds) {
        Ok(seconds)
    } else {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("must be between 1 and {} seconds", MAX_DURATION_SECONDS),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_full_production_config() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("ENVIRONMENT", "production"),
            ("PORT", "9090"),
            ("DB_NAME", "verification_tokens"),
            ("REGION", "us-east-1"),
            ("REDIS_URL", "redis://cache:6379"),
            ("NOTIFIER_TARGET_ID", "https://hooks.example.com/otp"),
            ("TOKEN_TTL_SECONDS", "120"),
        ]);
        let config = AppConfig::from_lookup(&|key: &str| env.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.store.backend, StoreBackend::Redis);
        assert_eq!(config.store.region, "us-east-1");
        assert_eq!(config.store.endpoint, "redis://cache:6379");
        assert_eq!(config.notifier.backend, NotifierBackend::Webhook);
        assert_eq!(config.token.ttl_seconds, 120);
    }

    #[test]
    fn test_development_config_needs_no_infrastructure() {
        let config = AppConfig::from_lookup(&|key: &str| match key {
            "ENVIRONMENT" => Some("development".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.notifier.backend, NotifierBackend::Log);
        assert_eq!(config.token.ttl_seconds, DEFAULT_TTL_SECONDS);
    }

    #[test]
    fn test_invalid_port_is_reported_with_key() {
        let err = AppConfig::from_lookup(&|key: &str| match key {
            "ENVIRONMENT" => Some("dev".to_string()),
            "PORT" => Some("http".to_string()),
            _ => None,
        })
        .unwrap_err();

        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_duration_beyond_signed_range_is_rejected() {
        let err = AppConfig::from_lookup(&|key: &str| match key {
            "ENVIRONMENT" => Some("test".to_string()),
            "TOKEN_TTL_SECONDS" => Some("9223372036854775808".to_string()),
            _ => None,
        })
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "TOKEN_TTL_SECONDS"));
    }
}
