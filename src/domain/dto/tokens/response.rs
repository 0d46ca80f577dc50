use serde::{Deserialize, Serialize};

/// 토큰 발급 성공 메시지
pub const TOKEN_SENT_MESSAGE: &str = "Token sent successfully";

/// 토큰 검증 성공 메시지
pub const TOKEN_VALID_MESSAGE: &str = "Token is valid";

/// 토큰 발급 응답
///
/// 토큰은 별도 채널로 전달되는 것과 동시에 호출자에게도 그대로 반환됩니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct IssueTokenResponse {
    pub message: String,
    pub token: String,
}

impl IssueTokenResponse {
    pub fn sent(token: impl Into<String>) -> Self {
        Self {
            message: TOKEN_SENT_MESSAGE.to_string(),
            token: token.into(),
        }
    }
}

/// 메시지만 담는 응답
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
