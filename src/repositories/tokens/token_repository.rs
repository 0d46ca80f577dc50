use std::sync::Arc;

use async_trait::async_trait;

use super::{StoreError, TokenStore};
use crate::caching::redis::RedisClient;
use crate::config::StoreConfig;
use crate::domain::models::token::TokenRecord;

/// Redis 기반 토큰 저장소
///
/// 레코드는 [`record_key`]가 만드는 `"{table}:{token 길이}:{token}:{user_id}"` 키 아래 JSON으로 저장됩니다.
/// Redis 만료 시각은 `expiration_time + retention_seconds`로 잡아서
/// 만료 직후에도 레코드가 남아 "만료됨"으로 판정되고, 보존 기간이 지나면 Redis가 정리합니다.
pub struct RedisTokenStore {
    redis: Arc<RedisClient>,
    table_name: String,
    retention_seconds: u64,
}

impl RedisTokenStore {
    pub fn new(redis: Arc<RedisClient>, table_name: impl Into<String>, retention_seconds: u64) -> Self {
        Self {
            redis,
            table_name: table_name.into(),
            retention_seconds,
        }
    }

    /// 저장소 설정으로 Redis에 연결합니다.
    ///
    /// # Errors
    ///
    /// * `StoreError::Connection` - URL이 잘못되었거나 `PING`에 실패한 경우
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let redis = RedisClient::new(&config.endpoint)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        log::info!(
            "Redis 토큰 저장소 준비 완료 - table: {}, region: {}",
            config.table_name,
            config.region
        );

        Ok(Self::new(Arc::new(redis), &config.table_name, config.retention_seconds))
    }
}

/// Redis가 레코드를 물리 삭제할 Unix 시각 (`expiration_time + retention_seconds`)
fn purge_at(record: &TokenRecord, retention_seconds: u64) -> i64 {
    let retention = i64::try_from(retention_seconds).unwrap_or(i64::MAX);
    record.expiration_time.saturating_add(retention)
}

/// `(token, user_id)` 복합 키를 Redis 키로 변환합니다.
///
/// 토큰 길이를 접두사로 붙여 토큰과 사용자 ID의 경계를 고정합니다.
/// 어느 쪽에 `:`가 들어 있어도 서로 다른 쌍은 서로 다른 키가 됩니다.
pub fn record_key(table_name: &str, token: &str, user_id: &str) -> String {
    format!("{}:{}:{}:{}", table_name, token.len(), token, user_id)
}

/// 조회된 레코드가 요청한 `(token, user_id)`와 정확히 일치할 때만 돌려줍니다.
fn owned_record(record: Option<TokenRecord>, token: &str, user_id: &str) -> Option<TokenRecord> {
    record.filter(|record| record.token == token && record.user_id == user_id)
}

fn classify_redis_error(err: redis::RedisError) -> StoreError {
    if err.kind() == redis::ErrorKind::TypeError {
        StoreError::Corrupted(err.to_string())
    } else if err.is_io_error() || err.is_connection_refusal() || err.is_timeout() {
        StoreError::Connection(err.to_string())
    } else {
        StoreError::Operation(err.to_string())
    }
}

#[async_trait]
impl TokenStore for RedisTokenStore {
    async fn insert_if_absent(&self, record: &TokenRecord) -> Result<bool, StoreError> {
        let key = record_key(&self.table_name, &record.token, &record.user_id);

        let inserted = self
            .redis
            .set_nx_expire_at(&key, record, purge_at(record, self.retention_seconds))
            .await
            .map_err(classify_redis_error)?;

        if !inserted {
            log::debug!("토큰 키 충돌 - user_id: {}", record.user_id);
        }
        Ok(inserted)
    }

    async fn get(&self, token: &str, user_id: &str) -> Result<Option<TokenRecord>, StoreError> {
        let key = record_key(&self.table_name, token, user_id);
        let record = self.redis.get(&key).await.map_err(classify_redis_error)?;

        let owned = owned_record(record, token, user_id);
        if owned.is_none() {
            log::debug!("토큰 레코드 없음 또는 키 불일치 - user_id: {}", user_id);
        }
        Ok(owned)
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
