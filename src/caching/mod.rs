//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 키-값 저장과 JSON 기반 객체 직렬화를 제공합니다.
//!
//! # 주요 기능
//!
//! - Redis 통합 및 멀티플렉싱 연결
//! - JSON 기반 자동 직렬화/역직렬화
//! - `SET NX EXAT` 기반 조건부 저장과 만료 시각 지원
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new("redis://localhost:6379").await?;
//! let inserted = cache.set_nx_expire_at("tokens:ABC123:u1", &record, 1_700_086_700).await?;
//! let record: Option<TokenRecord> = cache.get("tokens:ABC123:u1").await?;
//! ```

pub mod redis;
