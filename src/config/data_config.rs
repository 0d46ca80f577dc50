//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 토큰 저장소 관련 설정을 관리합니다.

use super::{ConfigError, EnvLookup, optional_duration, optional_number};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - 인메모리 저장소와 로그 알림을 기본으로 사용
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - Redis 저장소와 웹훅 알림을 기본으로 사용
    Production,
}

impl Environment {
    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 외부 인프라 없이 동작하는 로컬 환경인지 여부
    pub fn is_local(&self) -> bool {
        matches!(self, Environment::Development | Environment::Test)
    }

    pub(super) fn load(lookup: &EnvLookup<'_>) -> Self {
        lookup("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// 바인딩할 호스트 주소. 기본값: "0.0.0.0"
    pub host: String,
    /// 바인딩할 포트. 기본값: 8080
    pub port: u16,
}

impl ServerConfig {
    pub(super) fn load(lookup: &EnvLookup<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: optional_number(lookup, "PORT", 8080)?,
        })
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 토큰 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Redis (`SET NX EXAT` 기반, 보존 기간 이후 물리 삭제)
    Redis,
    /// 프로세스 내부 HashMap (개발/테스트용)
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Redis => "redis",
            StoreBackend::Memory => "memory",
        }
    }
}

/// 토큰 저장소 설정
///
/// ## 환경 변수
///
/// ```bash
/// STORE_BACKEND=redis                  # redis | memory
/// DB_NAME=verification_tokens          # 테이블(키 네임스페이스) 이름
/// REGION=ap-northeast-2                # 저장소 리전 라벨
/// REDIS_URL=redis://localhost:6379     # 저장소 엔드포인트
/// STORE_RETENTION_SECONDS=86400        # 만료 후 레코드 보존 시간
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// 레코드가 저장될 테이블 식별자 (Redis에서는 키 접두사)
    pub table_name: String,
    pub region: String,
    pub endpoint: String,
    /// 만료 이후에도 "만료됨"으로 판정할 수 있도록 레코드를 보존하는 시간 (초)
    pub retention_seconds: u64,
}

impl StoreConfig {
    pub(super) fn load(lookup: &EnvLookup<'_>, environment: Environment) -> Result<Self, ConfigError> {
        let backend = match lookup("STORE_BACKEND") {
            Some(value) => match value.to_lowercase().as_str() {
                "redis" => StoreBackend::Redis,
                "memory" => StoreBackend::Memory,
                other => {
                    return Err(ConfigError::InvalidValue {
                        key: "STORE_BACKEND".to_string(),
                        message: format!("unknown store backend '{}'", other),
                    });
                }
            },
            None if environment.is_local() => StoreBackend::Memory,
            None => StoreBackend::Redis,
        };

        let table_name = match (lookup("DB_NAME"), backend) {
            (Some(name), _) if !name.trim().is_empty() => name,
            (_, StoreBackend::Redis) => {
                return Err(ConfigError::MissingRequired("DB_NAME".to_string()));
            }
            (_, StoreBackend::Memory) => "verification_tokens".to_string(),
        };

        Ok(Self {
            backend,
            table_name,
            region: lookup("REGION").unwrap_or_else(|| "local".to_string()),
            endpoint: lookup("REDIS_URL").unwrap_or_else(|| "redis://localhost:6379".to_string()),
            retention_seconds: optional_duration(lookup, "STORE_RETENTION_SECONDS", 86_400)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_server_config_defaults() {
        let lookup = lookup_from(&[]);
        let server = ServerConfig::load(&lookup).unwrap();

        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
        assert_eq!(server.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_store_backend_defaults_follow_environment() {
        let lookup = lookup_from(&[]);
        let local = StoreConfig::load(&lookup, Environment::Development).unwrap();
        assert_eq!(local.backend, StoreBackend::Memory);
        assert_eq!(local.table_name, "verification_tokens");

        let lookup = lookup_from(&[("DB_NAME", "tokens")]);
        let prod = StoreConfig::load(&lookup, Environment::Production).unwrap();
        assert_eq!(prod.backend, StoreBackend::Redis);
        assert_eq!(prod.table_name, "tokens");
        assert_eq!(prod.retention_seconds, 86_400);
    }

    #[test]
    fn test_oversized_retention_is_rejected() {
        let lookup = lookup_from(&[("STORE_RETENTION_SECONDS", "9223372036854775808")]);
        let err = StoreConfig::load(&lookup, Environment::Development).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "STORE_RETENTION_SECONDS"));

        let lookup = lookup_from(&[("STORE_RETENTION_SECONDS", "0")]);
        assert!(StoreConfig::load(&lookup, Environment::Development).is_err());

        let lookup = lookup_from(&[("STORE_RETENTION_SECONDS", "604800")]);
        assert_eq!(StoreConfig::load(&lookup, Environment::Development).unwrap().retention_seconds, 604_800);
    }

    #[test]
    fn test_redis_store_requires_table_name() {
        let lookup = lookup_from(&[("STORE_BACKEND", "redis")]);
        let err = StoreConfig::load(&lookup, Environment::Development).unwrap_err();

        assert_eq!(err, ConfigError::MissingRequired("DB_NAME".to_string()));
    }

    #[test]
    fn test_unknown_store_backend_is_rejected() {
        let lookup = lookup_from(&[("STORE_BACKEND", "dynamo")]);
        let err = StoreConfig::load(&lookup, Environment::Production).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "STORE_BACKEND"));
    }
}
