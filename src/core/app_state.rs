use std::sync::Arc;

use crate::config::{AppConfig, NotifierBackend, StoreBackend};
use crate::core::clock::{Clock, SystemClock};
use crate::errors::{AppError, AppResult};
use crate::notification::{LogNotifier, Notifier, WebhookNotifier};
use crate::repositories::tokens::{InMemoryTokenStore, RedisTokenStore, TokenStore};
use crate::services::tokens::TokenService;

/// 핸들러에 `web::Data`로 주입되는 애플리케이션 상태
///
/// 시작 시 한 번 만들어지고 모든 워커가 읽기 전용으로 공유합니다.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub token_service: Arc<TokenService>,
}

impl AppState {
    /// 설정에 따라 저장소와 알림 채널을 구성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::StoreError` - Redis 연결 실패
    /// * `AppError::InternalError` - 알림 클라이언트 구성 실패
    pub async fn new(config: AppConfig) -> AppResult<Self> {
        let store: Arc<dyn TokenStore> = match config.store.backend {
            StoreBackend::Redis => Arc::new(RedisTokenStore::connect(&config.store).await?),
            StoreBackend::Memory => {
                log::warn!("⚠️ 인메모리 토큰 저장소 사용 - 재시작 시 모든 토큰이 사라집니다");
                Arc::new(InMemoryTokenStore::new())
            }
        };

        let notifier: Arc<dyn Notifier> = match config.notifier.backend {
            NotifierBackend::Webhook => Arc::new(
                WebhookNotifier::new(&config.notifier)
                    .map_err(|e| AppError::InternalError(e.to_string()))?,
            ),
            NotifierBackend::Log => Arc::new(LogNotifier),
        };

        Ok(Self::from_parts(config, store, notifier, Arc::new(SystemClock)))
    }

    /// 이미 만들어진 협력 객체들로 상태를 조립합니다.
    pub fn from_parts(
        config: AppConfig,
        store: Arc<dyn TokenStore>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let token_service = Arc::new(TokenService::new(
            store,
            notifier,
            clock,
            &config.token,
            config.notifier.target_id.clone(),
        ));

        Self {
            config: Arc::new(config),
            token_service,
        }
    }
}
