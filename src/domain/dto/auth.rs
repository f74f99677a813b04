//! 인증 요청/응답 DTO
//!
//! 회원가입과 로그인 요청 본문, 토큰 응답 구조를 정의합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 회원가입 요청 구조체
///
/// 비밀번호는 불투명한 문자열로 취급하며 길이 외의 정책을 강제하지
/// 않습니다. 해싱 전 평문은 로그에 남기지 않습니다.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 로그인 요청 구조체
///
/// 회원가입과 같은 본문 형태를 받지만 인증에는 이메일과 비밀번호만
/// 사용합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 회원가입 성공 응답
#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    pub username: String,
    pub email: String,
}

/// 로그인 성공 시 발급되는 토큰 응답
///
/// OAuth 2.0 bearer 토큰 응답 형태를 따릅니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// 서명된 액세스 토큰
    pub access_token: String,
    /// 토큰 타입 태그 (항상 "bearer")
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_rejects_invalid_email() {
        let request = RegisterRequest {
            username: "alice".to_string(),
            email: "not-an-email".to_string(),
            password: "pw1".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_accepts_short_password() {
        // 비밀번호는 불투명 문자열 - 길이 정책 없음
        let request = RegisterRequest {
            username: "alice".to_string(),
            email: "alice@x.com".to_string(),
            password: "pw1".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_token_response_carries_bearer_tag() {
        let response = TokenResponse::bearer("token".to_string());

        assert_eq!(response.token_type, "bearer");
    }
}
