//! 토큰 요청 DTO
//!
//! 요청 본문은 두 가지 형태를 모두 허용합니다.
//!
//! ```json
//! {"userId": "u1", "email": "u1@example.com"}
//! {"body": "{\"userId\": \"u1\", \"email\": \"u1@example.com\"}"}
//! ```
//!
//! `body` 필드는 직렬화된 JSON 문자열이거나 이미 구조화된 객체일 수 있습니다.
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

/// 역직렬화할 수 없는 본문에 대한 메시지
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid JSON format";

/// 토큰 발급 요청 DTO
///
/// `email`은 연락처 주소 역할이며 `contactAddress`로도 받을 수 있습니다.
#[derive(Debug, Deserialize, Validate)]
pub struct IssueTokenRequest {
    #[serde(rename = "userId")]
    #[validate(required(message = "userId"), length(min = 1, message = "userId"))]
    pub user_id: Option<String>,

    #[serde(alias = "contactAddress")]
    #[validate(required(message = "email"), length(min = 1, message = "email"))]
    pub email: Option<String>,
}

/// 토큰 검증 요청 DTO
#[derive(Debug, Deserialize, Validate)]
pub struct ValidateTokenRequest {
    #[validate(required(message = "token"), length(min = 1, message = "token"))]
    pub token: Option<String>,

    #[serde(rename = "userId")]
    #[validate(required(message = "userId"), length(min = 1, message = "userId"))]
    pub user_id: Option<String>,
}

/// 봉투(envelope) 해제와 필수 필드 검증을 거치는 요청 타입
pub trait TokenRequest: DeserializeOwned + Validate {
    /// 에러 메시지에 나열할 필드의 외부 이름 (순서 유지)
    const FIELDS: &'static [&'static str];
}

impl TokenRequest for IssueTokenRequest {
    const FIELDS: &'static [&'static str] = &["userId", "email"];
}

impl TokenRequest for ValidateTokenRequest {
    const FIELDS: &'static [&'static str] = &["token", "userId"];
}

/// 원시 요청 본문을 파싱하고 필수 필드를 검증합니다.
///
/// # Errors
///
/// * `AppError::ValidationError("Invalid JSON format")` - JSON이 아니거나 객체가 아닌 경우
/// * `AppError::ValidationError("Missing key: ...")` - 필수 필드가 없거나 빈 문자열인 경우
pub fn parse_request<T: TokenRequest>(raw: &[u8]) -> Result<T, AppError> {
    let payload = unwrap_envelope(raw)?;
    let request: T = serde_json::from_value(payload).map_err(|e| {
        log::debug!("요청 역직렬화 실패: {}", e);
        invalid_format()
    })?;

    request
        .validate()
        .map_err(|errors| missing_keys(&errors, T::FIELDS))?;

    Ok(request)
}

/// `body` 래핑 여부와 상관없이 실제 요청 객체를 꺼냅니다.
fn unwrap_envelope(raw: &[u8]) -> Result<Value, AppError> {
    let value: Value = serde_json::from_slice(raw).map_err(|_| invalid_format())?;

    let payload = match value {
        Value::Object(mut map) if map.contains_key("body") => match map.remove("body") {
            Some(Value::String(inner)) => {
                serde_json::from_str::<Value>(&inner).map_err(|_| invalid_format())?
            }
            Some(inner @ Value::Object(_)) => inner,
            _ => return Err(invalid_format()),
        },
        other => other,
    };

    if payload.is_object() {
        Ok(payload)
    } else {
        Err(invalid_format())
    }
}

fn invalid_format() -> AppError {
    AppError::ValidationError(INVALID_FORMAT_MESSAGE.to_string())
}

/// 검증 에러를 `Missing key: a, b` 형식의 메시지로 변환합니다.
fn missing_keys(errors: &ValidationErrors, fields: &[&str]) -> AppError {
    let reported: Vec<&str> = errors
        .field_errors()
        .into_values()
        .flat_map(|field_errors| field_errors.iter())
        .filter_map(|error| error.message.as_deref())
        .collect();

    let missing: Vec<&str> = fields
        .iter()
        .copied()
        .filter(|field| reported.contains(field))
        .collect();

    AppError::ValidationError(format!("Missing key: {}", missing.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of(err: AppError) -> String {
        match err {
            AppError::ValidationError(msg) => msg,
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_flat_issue_request() {
        let request: IssueTokenRequest =
            parse_request(br#"{"userId": "u1", "email": "u1@x.com"}"#).unwrap();

        assert_eq!(request.user_id.as_deref(), Some("u1"));
        assert_eq!(request.email.as_deref(), Some("u1@x.com"));
    }

    #[test]
    fn test_body_wrapped_as_string() {
        let raw = serde_json::json!({
            "body": "{\"userId\": \"u1\", \"email\": \"u1@x.com\"}",
            "headers": {"content-type": "application/json"}
        })
        .to_string();
        let request: IssueTokenRequest = parse_request(raw.as_bytes()).unwrap();

        assert_eq!(request.user_id.as_deref(), Some("u1"));
    }

    #[test]
    fn test_body_wrapped_as_object() {
        let request: ValidateTokenRequest =
            parse_request(br#"{"body": {"token": "ABC123", "userId": "u1"}}"#).unwrap();

        assert_eq!(request.token.as_deref(), Some("ABC123"));
        assert_eq!(request.user_id.as_deref(), Some("u1"));
    }

    #[test]
    fn test_contact_address_alias() {
        let request: IssueTokenRequest =
            parse_request(br#"{"userId": "u1", "contactAddress": "+821012345678"}"#).unwrap();

        assert_eq!(request.email.as_deref(), Some("+821012345678"));
    }

    #[test]
    fn test_missing_fields_are_named_in_order() {
        let err = parse_request::<IssueTokenRequest>(br#"{}"#).unwrap_err();
        assert_eq!(message_of(err), "Missing key: userId, email");

        let err = parse_request::<IssueTokenRequest>(br#"{"userId": "u1"}"#).unwrap_err();
        assert_eq!(message_of(err), "Missing key: email");

        let err = parse_request::<ValidateTokenRequest>(br#"{"userId": "u1"}"#).unwrap_err();
        assert_eq!(message_of(err), "Missing key: token");
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let err = parse_request::<IssueTokenRequest>(br#"{"userId": "", "email": "a@b.c"}"#)
            .unwrap_err();
        assert_eq!(message_of(err), "Missing key: userId");

        let err = parse_request::<ValidateTokenRequest>(br#"{"token": "ABC123", "userId": ""}"#)
            .unwrap_err();
        assert_eq!(message_of(err), "Missing key: userId");
    }

    #[test]
    fn test_invalid_payloads() {
        let cases: [&[u8]; 5] = [
            b"not json",
            b"",
            br#"["userId", "email"]"#,
            br#"{"body": "{broken"}"#,
            br#"{"body": null}"#,
        ];

        for raw in cases {
            let err = parse_request::<IssueTokenRequest>(raw).unwrap_err();
            assert_eq!(message_of(err), INVALID_FORMAT_MESSAGE);
        }
    }
}
