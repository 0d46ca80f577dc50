use async_trait::async_trait;

use super::{Notification, Notifier, NotifierError};

/// 알림을 로그로만 남기는 개발용 구현
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), NotifierError> {
        log::info!(
            "📨 [dev] 알림 전달 - to: {}, subject: {}, message: {}",
            notification.contact_address,
            notification.subject,
            notification.message
        );
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "log"
    }
}
