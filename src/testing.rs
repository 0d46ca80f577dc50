//! 테스트용 협력 객체

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::models::token::TokenRecord;
use crate::notification::{Notification, Notifier, NotifierError};
use crate::repositories::tokens::{InMemoryTokenStore, StoreError, TokenStore};

/// 전달된 알림을 기록하는 notifier. `fail`이면 기록 후 거부 응답을 흉내냅니다.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), NotifierError> {
        self.sent.lock().unwrap().push(notification.clone());
        if self.fail {
            return Err(NotifierError::Rejected { status: 503 });
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "recording"
    }
}

/// 항상 실패하는 저장소
pub struct UnavailableStore;

#[async_trait]
impl TokenStore for UnavailableStore {
    async fn insert_if_absent(&self, _record: &TokenRecord) -> Result<bool, StoreError> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn get(&self, _token: &str, _user_id: &str) -> Result<Option<TokenRecord>, StoreError> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    fn backend_name(&self) -> &'static str {
        "unavailable"
    }
}

/// 처음 `collisions`번의 저장 시도를 키 충돌로 응답하는 저장소
pub struct CollidingStore {
    inner: InMemoryTokenStore,
    collisions: usize,
    attempts: AtomicUsize,
}

impl CollidingStore {
    pub fn new(collisions: usize) -> Self {
        Self {
            inner: InMemoryTokenStore::new(),
            collisions,
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenStore for CollidingStore {
    async fn insert_if_absent(&self, record: &TokenRecord) -> Result<bool, StoreError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt < self.collisions {
            return Ok(false);
        }
        self.inner.insert_if_absent(record).await
    }

    async fn get(&self, token: &str, user_id: &str) -> Result<Option<TokenRecord>, StoreError> {
        self.inner.get(token, user_id).await
    }

    fn backend_name(&self) -> &'static str {
        "colliding"
    }
}
