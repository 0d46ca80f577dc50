//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 토큰 발급/검증 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 클라이언트 메시지 |
//! |----------|-------------|-------------------|
//! | `ValidationError` | 400 Bad Request | 누락된 필드 또는 `Invalid JSON format` |
//! | `TokenNotFound` | 400 Bad Request | `Invalid token` |
//! | `TokenExpired` | 400 Bad Request | `Token has expired` |
//! | `DeliveryError` | 502 Bad Gateway | `Failed to deliver verification token` |
//! | `StoreError` | 500 Internal Server Error | `Internal server error` |
//! | `InternalError` | 500 Internal Server Error | `Internal server error` |
//!
//! 내부 에러의 상세 내용은 로그에만 남기고 클라이언트에게는 노출하지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! fn require(value: Option<&str>) -> Result<&str, AppError> {
//!     value
//!         .filter(|v| !v.is_empty())
//!         .ok_or_else(|| AppError::ValidationError("Missing key: token".to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::notification::NotifierError;
use crate::repositories::tokens::StoreError;

/// 외부로 노출되는 서버 에러 메시지
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// 토큰 전달 실패 시 외부로 노출되는 메시지
pub const DELIVERY_ERROR_MESSAGE: &str = "Failed to deliver verification token";

/// 애플리케이션 전역 에러 타입
///
/// 토큰 생명주기에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("{0}")]
    ValidationError(String),

    /// 조회 키에 해당하는 토큰 레코드 없음 (400 Bad Request)
    #[error("Invalid token")]
    TokenNotFound,

    /// 토큰 레코드는 있으나 만료됨 (400 Bad Request)
    #[error("Token has expired")]
    TokenExpired,

    /// 저장 후 알림 전달 실패 (502 Bad Gateway)
    #[error("Delivery error: {0}")]
    DeliveryError(String),

    /// 토큰 저장소 에러 (500 Internal Server Error)
    #[error("Store error: {0}")]
    StoreError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 전달할 메시지를 반환합니다.
    ///
    /// 클라이언트 에러는 원인을 그대로, 서버 에러는 고정된 메시지를 반환합니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::ValidationError(_) | AppError::TokenNotFound | AppError::TokenExpired => {
                self.to_string()
            }
            AppError::DeliveryError(_) => DELIVERY_ERROR_MESSAGE.to_string(),
            AppError::StoreError(_) | AppError::InternalError(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::TokenNotFound | AppError::TokenExpired => {
                StatusCode::BAD_REQUEST
            }
            AppError::DeliveryError(_) => StatusCode::BAD_GATEWAY,
            AppError::StoreError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 `{"message": ...}` JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "message": self.client_message()
            }))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::StoreError(err.to_string())
    }
}

impl From<NotifierError> for AppError {
    fn from(err: NotifierError) -> Self {
        AppError::DeliveryError(err.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
