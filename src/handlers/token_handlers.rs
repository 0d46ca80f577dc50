use actix_web::{HttpResponse, post, web};

use crate::core::AppState;
use crate::domain::{
    IssueTokenRequest, IssueTokenResponse, MessageResponse, TOKEN_VALID_MESSAGE,
    ValidateTokenRequest, parse_request,
};
use crate::errors::AppError;

/// 토큰 발급 API 핸들러
///
/// 본문은 평평한 JSON 또는 `{"body": "<json>"}` 형태 모두 허용합니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/tokens/issue \
///   -H "Content-Type: application/json" \
///   -d '{"userId":"user-1","email":"user-1@example.com"}'
/// ```
///
/// Response:
/// ```json
/// {"message": "Token sent successfully", "token": "A1B2C3"}
/// ```
#[post("/issue")]
pub async fn issue_token(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request: IssueTokenRequest = parse_request(&body)?;
    log::debug!("토큰 발급 요청 본문: {:?}", request);
    let user_id = request.user_id.unwrap_or_default();
    let contact_address = request.email.unwrap_or_default();
    log::info!("토큰 발급 요청 - user_id: {}", user_id);

    let token = state
        .token_service
        .issue(&user_id, &contact_address)
        .await?;

    Ok(HttpResponse::Ok().json(IssueTokenResponse::sent(token)))
}

/// 토큰 검증 API 핸들러
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/tokens/validate \
///   -H "Content-Type: application/json" \
///   -d '{"token":"A1B2C3","userId":"user-1"}'
/// ```
///
/// | 결과 | 상태 코드 | 메시지 |
/// |------|-----------|--------|
/// | 유효 | 200 | `Token is valid` |
/// | 레코드 없음 | 400 | `Invalid token` |
/// | 만료 | 400 | `Token has expired` |
/// | 저장소 오류 | 500 | `Internal server error` |
#[post("/validate")]
pub async fn validate_token(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request: ValidateTokenRequest = parse_request(&body)?;
    let token = request.token.unwrap_or_default();
    let user_id = request.user_id.unwrap_or_default();
    log::info!("토큰 검증 요청 - user_id: {}", user_id);

    match state.token_service.validate(&token, &user_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(MessageResponse::new(TOKEN_VALID_MESSAGE))),
        Err(e @ (AppError::TokenNotFound | AppError::TokenExpired | AppError::ValidationError(_))) => {
            Err(e)
        }
        Err(e) => {
            log::error!("토큰 검증 중 내부 오류: {}", e);
            Err(AppError::InternalError(e.to_string()))
        }
    }
}

/// 토큰 관련 라우트를 등록합니다.
pub fn configure_token_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/tokens")
            .service(issue_token)
            .service(validate_token),
    );
}
