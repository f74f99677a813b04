//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 에러 분류 → HTTP 상태 코드 매핑은 이 모듈에서만 정의됩니다.
//! 핸들러는 `AppError`를 반환하기만 하면 되고, 경계(boundary)에서
//! 단 한 번 상태 코드와 메시지로 변환됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn register(req: RegisterRequest) -> Result<Credential, AppError> {
//!     if store.find_by_email(&req.email).await?.is_some() {
//!         return Err(AppError::DuplicateIdentity);
//!     }
//!     // ...
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 인증 코어의 고정 에러 분류(중복 가입, 잘못된 자격증명, 서명/만료/형식
/// 오류, 소유권 거부)와 인프라 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 이미 등록된 식별자로 재가입 시도 (400 Bad Request)
    #[error("Identity already registered")]
    DuplicateIdentity,

    /// 로그인 실패 - 계정 없음과 비밀번호 불일치를 구분하지 않음 (401 Unauthorized)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// 토큰 서명 검증 실패 (401 Unauthorized)
    #[error("Invalid token signature")]
    InvalidSignature,

    /// 토큰 유효 기간 경과 (401 Unauthorized)
    #[error("Token has expired")]
    Expired,

    /// 토큰 파싱 불가 또는 subject 클레임 누락 (401 Unauthorized)
    #[error("Malformed token")]
    MalformedToken,

    /// 리소스 찾을 수 없음 (404 Not Found)
    #[error("{0} not found")]
    NotFound(&'static str),

    /// 소유자가 아닌 주체의 변경/삭제 시도 (403 Forbidden)
    #[error("Not the owner of this resource")]
    Forbidden,

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `error` 필드에 들어가는 기계 판독용 에러 코드
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::DuplicateIdentity => "duplicate_identity",
            AppError::InvalidCredentials => "invalid_credentials",
            AppError::InvalidSignature => "invalid_signature",
            AppError::Expired => "token_expired",
            AppError::MalformedToken => "malformed_token",
            AppError::NotFound(_) => "not_found",
            AppError::Forbidden => "forbidden",
            AppError::ValidationError(_) => "validation_error",
            AppError::DatabaseError(_) => "database_error",
            AppError::InternalError(_) => "internal_error",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::DuplicateIdentity => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials
            | AppError::InvalidSignature
            | AppError::Expired
            | AppError::MalformedToken => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 내부 정보(쿼리, 해시값 등)를 절대 노출하지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let message = if status.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "error": self.kind(),
            "message": message,
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_duplicate_identity_maps_to_bad_request() {
        let error = AppError::DuplicateIdentity;
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_credential_and_token_errors_map_to_unauthorized() {
        for error in [
            AppError::InvalidCredentials,
            AppError::InvalidSignature,
            AppError::Expired,
            AppError::MalformedToken,
        ] {
            assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_forbidden_maps_to_forbidden() {
        let error = AppError::Forbidden;
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_not_found_maps_to_not_found() {
        let error = AppError::NotFound("destination");
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_error_maps_to_bad_request() {
        let error = AppError::ValidationError("email is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_server_errors_hide_internal_detail() {
        let error = AppError::DatabaseError("connection pool exhausted at 10.0.0.3".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_kind_tags_are_stable() {
        assert_eq!(AppError::DuplicateIdentity.kind(), "duplicate_identity");
        assert_eq!(AppError::InvalidCredentials.kind(), "invalid_credentials");
        assert_eq!(AppError::Expired.kind(), "token_expired");
        assert_eq!(AppError::Forbidden.kind(), "forbidden");
    }
}
