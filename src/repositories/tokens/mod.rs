//! 인증 토큰 저장소 모듈
//!
//! 토큰 레코드의 저장과 조회를 담당합니다.
//! 발급은 `(token, user_id)` 키가 비어 있을 때만 기록하는 조건부 쓰기로 이루어지며,
//! 검증은 같은 키로 단건 조회합니다.
//!
//! # Features
//!
//! - **조건부 저장**: 동일 키가 이미 있으면 덮어쓰지 않고 `false` 반환
//! - **단건 조회**: 복합 키로 레코드 조회, 없으면 `None`
//! - **TTL 자동 관리**: Redis 구현은 만료 후 보존 기간이 지나면 물리 삭제
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::repositories::tokens::{InMemoryTokenStore, TokenStore};
//!
//! let store = InMemoryTokenStore::new();
//! let inserted = store.insert_if_absent(&record).await?;
//! let found = store.get(&record.token, &record.user_id).await?;
//! ```

pub mod memory_store;
pub mod token_repository;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::token::TokenRecord;

pub use memory_store::InMemoryTokenStore;
pub use token_repository::RedisTokenStore;

/// 저장소 계층 에러
#[derive(Error, Debug)]
pub enum StoreError {
    /// 저장소에 연결할 수 없음
    #[error("store connection failed: {0}")]
    Connection(String),

    /// 저장소 명령 실행 실패
    #[error("store operation failed: {0}")]
    Operation(String),

    /// 저장된 값을 해석할 수 없음
    #[error("stored record is malformed: {0}")]
    Corrupted(String),
}

/// 토큰 레코드 저장소
///
/// 구현체는 여러 요청 워커에서 동시에 공유되므로 `Send + Sync`여야 합니다.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// 같은 `(token, user_id)` 레코드가 없을 때만 저장합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - 저장됨
    /// * `Ok(false)` - 같은 키가 이미 존재하여 저장하지 않음
    async fn insert_if_absent(&self, record: &TokenRecord) -> Result<bool, StoreError>;

    /// `(token, user_id)` 키로 레코드를 조회합니다.
    async fn get(&self, token: &str, user_id: &str) -> Result<Option<TokenRecord>, StoreError>;

    /// 진단용 백엔드 이름
    fn backend_name(&self) -> &'static str;
}
