//! 프로세스 내부 토큰 저장소
//!
//! 외부 인프라 없이 개발 서버와 테스트를 돌리기 위한 구현입니다.
//! 레코드는 물리적으로 삭제되지 않으므로 만료 판정은 항상 `expiration_time` 비교로만 이루어집니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{StoreError, TokenStore};
use crate::domain::models::token::TokenRecord;

type RecordKey = (String, String);

/// `RwLock<HashMap>` 기반 토큰 저장소
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    records: RwLock<HashMap<RecordKey, TokenRecord>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 레코드 수
    pub fn record_count(&self) -> usize {
        self.records.read().map(|records| records.len()).unwrap_or(0)
    }
}

fn poisoned() -> StoreError {
    StoreError::Operation("in-memory store lock poisoned".to_string())
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn insert_if_absent(&self, record: &TokenRecord) -> Result<bool, StoreError> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        let key = (record.token.clone(), record.user_id.clone());

        if records.contains_key(&key) {
            return Ok(false);
        }

        records.insert(key, record.clone());
        Ok(true)
    }

    async fn get(&self, token: &str, user_id: &str) -> Result<Option<TokenRecord>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.get(&(token.to_string(), user_id.to_string())).cloned())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_insert_then_get() {
        let store = InMemoryTokenStore::new();
        let record = TokenRecord::new("A1B2C3", "u1", 1_000, 300);

        assert!(store.insert_if_absent(&record).await.unwrap());
        assert_eq!(store.get("A1B2C3", "u1").await.unwrap(), Some(record));
    }

    #[actix_web::test]
    async fn test_duplicate_key_is_not_overwritten() {
        let store = InMemoryTokenStore::new();
        let first = TokenRecord::new("A1B2C3", "u1", 1_000, 300);
        let second = TokenRecord::new("A1B2C3", "u1", 5_000, 300);

        assert!(store.insert_if_absent(&first).await.unwrap());
        assert!(!store.insert_if_absent(&second).await.unwrap());
        assert_eq!(store.get("A1B2C3", "u1").await.unwrap(), Some(first));
        assert_eq!(store.record_count(), 1);
    }

    #[actix_web::test]
    async fn test_lookup_is_scoped_to_user() {
        let store = InMemoryTokenStore::new();
        store
            .insert_if_absent(&TokenRecord::new("A1B2C3", "u1", 1_000, 300))
            .await
            .unwrap();

        assert_eq!(store.get("A1B2C3", "u2").await.unwrap(), None);
        assert_eq!(store.get("ZZZZZZ", "u1").await.unwrap(), None);

        // 같은 토큰 값이라도 사용자가 다르면 별개의 레코드
        assert!(store
            .insert_if_absent(&TokenRecord::new("A1B2C3", "u2", 1_000, 300))
            .await
            .unwrap());
    }
}
