//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 상태 없는 인증을 제공합니다.
//! 토큰은 서버에 저장되지 않으며, 만료에 의해서만 무효화됩니다
//! (폐기 목록 없음). 검증은 서명과 만료만 확인하고 계정의 현재 존재
//! 여부는 확인하지 않습니다.

use crate::{config::AuthConfig, errors::AppError};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// RFC 7519 표준 클레임 중 최소한의 세 가지만 포함합니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (사용자 이메일)
    pub sub: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// JWT 토큰 관리 서비스
///
/// 대칭키 서명(기본 HS256)으로 토큰을 생성하고 검증합니다.
/// 서명 키, 알고리즘, 수명은 생성자에 주입된 [`AuthConfig`] 하나에서
/// 나오므로 발급과 검증이 서로 다른 키를 볼 수 없습니다.
pub struct TokenService {
    config: AuthConfig,
}

impl TokenService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// 주체에 대한 액세스 토큰 발급
    ///
    /// # Arguments
    ///
    /// * `subject` - 토큰에 내장될 주체 식별자 (이메일)
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 인코딩된 토큰 문자열
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 인코딩 실패
    pub fn issue(&self, subject: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.token_lifetime_minutes);

        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let header = Header::new(self.config.algorithm);
        let encoding_key = EncodingKey::from_secret(self.config.secret_key.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("토큰 생성 실패: {}", e)))
    }

    /// 토큰 검증 및 주체 추출
    ///
    /// 서명과 만료를 확인하고 subject 클레임을 반환합니다. 부작용이
    /// 없으며, 실패는 해당 요청에 대해 종결적입니다(재시도 없음).
    ///
    /// # Errors
    ///
    /// * `AppError::Expired` - 만료 시간 경과
    /// * `AppError::InvalidSignature` - 서명 불일치 (다른 키로 서명됨)
    /// * `AppError::MalformedToken` - 파싱 불가 또는 subject 클레임 누락
    pub fn verify(&self, token: &str) -> Result<String, AppError> {
        let decoding_key = DecodingKey::from_secret(self.config.secret_key.as_ref());
        let mut validation = Validation::new(self.config.algorithm);
        // 만료는 exp 시점부터 정확히 적용한다 (기본 60초 유예 제거)
        validation.leeway = 0;

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims.sub)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AppError::InvalidSignature,
                _ => AppError::MalformedToken,
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을
    /// 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MalformedToken` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::MalformedToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::Algorithm;

    fn test_service(secret: &str, lifetime_minutes: i64) -> TokenService {
        TokenService::new(AuthConfig::new(secret, Algorithm::HS256, lifetime_minutes))
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let service = test_service("test-secret-key-12345", 60);

        let token = service.issue("alice@x.com").unwrap();
        assert!(!token.is_empty());

        let subject = service.verify(&token).unwrap();
        assert_eq!(subject, "alice@x.com");
    }

    #[test]
    fn test_token_signed_with_different_key_rejected() {
        let issuer = test_service("secret-one", 60);
        let verifier = test_service("secret-two", 60);

        let token = issuer.issue("alice@x.com").unwrap();
        let result = verifier.verify(&token);

        assert!(matches!(result, Err(AppError::InvalidSignature)));
    }

    #[test]
    fn test_elapsed_lifetime_rejected_as_expired() {
        // 수명이 음수면 발급 시점에 이미 만료되어 있다
        let service = test_service("test-secret-key-12345", -1);

        let token = service.issue("alice@x.com").unwrap();
        let result = service.verify(&token);

        assert!(matches!(result, Err(AppError::Expired)));
    }

    #[test]
    fn test_garbage_token_rejected_as_malformed() {
        let service = test_service("test-secret-key-12345", 60);

        let result = service.verify("not.a.token");

        assert!(matches!(result, Err(AppError::MalformedToken)));
    }

    #[test]
    fn test_missing_subject_claim_rejected_as_malformed() {
        #[derive(serde::Serialize)]
        struct SubjectlessClaims {
            iat: i64,
            exp: i64,
        }

        let service = test_service("test-secret-key-12345", 60);

        let now = Utc::now();
        let claims = SubjectlessClaims {
            iat: now.timestamp(),
            exp: (now + Duration::minutes(60)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret("test-secret-key-12345".as_ref()),
        )
        .unwrap();

        let result = service.verify(&token);

        assert!(matches!(result, Err(AppError::MalformedToken)));
    }

    #[test]
    fn test_bearer_token_extraction() {
        let service = test_service("test-secret-key-12345", 60);

        assert_eq!(
            service.extract_bearer_token("Bearer abc.def.ghi").unwrap(),
            "abc.def.ghi"
        );
        assert!(matches!(
            service.extract_bearer_token("Token abc.def.ghi"),
            Err(AppError::MalformedToken)
        ));
    }
}
