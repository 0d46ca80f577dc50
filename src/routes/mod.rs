//! API 라우트 설정 모듈
//!
//! 토큰 발급/검증 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::core::AppState;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /health` - 헬스체크
/// - `POST /api/v1/tokens/issue` - 토큰 발급
/// - `POST /api/v1/tokens/validate` - 토큰 검증
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    handlers::token_handlers::configure_token_routes(cfg);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "verification_token_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "environment": "Production",
///   "features": {
///     "store": "redis",
///     "notifier": "webhook",
///     "token_ttl_seconds": 300
///   }
/// }
/// ```
#[get("/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": format!("{:?}", state.config.environment),
        "features": {
            "store": state.token_service.store_backend(),
            "notifier": state.token_service.notifier_backend(),
            "token_ttl_seconds": state.config.token.ttl_seconds
        }
    }))
}
