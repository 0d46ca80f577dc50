//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 토큰 레코드를 영속하는 저장소 추상화와 그 구현체들을 제공합니다.
//! 운영 환경에서는 Redis를, 개발과 테스트에서는 프로세스 내부 저장소를 사용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::tokens::{RedisTokenStore, TokenStore};
//!
//! let store = RedisTokenStore::connect(&config.store).await?;
//! let record = store.get("A1B2C3", "user-1").await?;
//! ```

pub mod tokens;
