//! # 자격증명 관리 서비스 구현
//!
//! 회원가입과 로그인의 핵심 비즈니스 로직을 구현합니다.
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 적응형 해시 함수로 무차별 대입 공격 방지,
//!   솔트는 bcrypt가 자동 생성
//! - **환경별 Cost**: 개발/테스트(4) vs 운영(12) 환경별 보안 강도
//! - **에러 메시지 통합**: 존재하지 않는 이메일과 틀린 비밀번호를
//!   구분하지 않고 모두 `InvalidCredentials`로 응답
//! - **상수 시간 비교**: 최종 해시 일치 검사는 `bcrypt::verify` 내부의
//!   상수 시간 비교를 사용하며, 바이트 동등 비교를 직접 구현하지 않음

use crate::{
    domain::{
        dto::auth::{RegisterRequest, RegisteredUser, TokenResponse},
        entities::Credential,
    },
    errors::AppError,
    repositories::CredentialStore,
    services::auth::TokenService,
};
use std::sync::Arc;

/// 자격증명 관리 비즈니스 로직 서비스
///
/// 저장소 인터페이스와 토큰 서비스를 생성자에서 주입받습니다.
/// 전역 상태나 싱글톤 레지스트리에 의존하지 않습니다.
pub struct CredentialService {
    /// 자격증명 저장소 (주입)
    store: Arc<dyn CredentialStore>,
    /// bcrypt cost factor (환경별 설정)
    bcrypt_cost: u32,
    /// 토큰 발급 서비스 (주입)
    tokens: Arc<TokenService>,
}

impl CredentialService {
    pub fn new(store: Arc<dyn CredentialStore>, bcrypt_cost: u32, tokens: Arc<TokenService>) -> Self {
        Self {
            store,
            bcrypt_cost,
            tokens,
        }
    }

    /// 새 자격증명 등록
    ///
    /// # 처리 과정
    ///
    /// 1. 이메일 중복 확인 (바이트 단위 정확 비교)
    /// 2. bcrypt 해싱 (CPU 바운드 - actix 워커 스레드에서 수행됨)
    /// 3. 저장소에 영구 저장
    ///
    /// # Returns
    ///
    /// * `Ok(RegisteredUser)` - 비밀번호 해시를 제외한 공개 필드
    ///
    /// # Errors
    ///
    /// * `AppError::DuplicateIdentity` - 이미 등록된 이메일
    /// * `AppError::InternalError` - 해싱 실패
    pub async fn register(&self, request: RegisterRequest) -> Result<RegisteredUser, AppError> {
        if self.store.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::DuplicateIdentity);
        }

        let hash_start = std::time::Instant::now();
        let password_hash = bcrypt::hash(&request.password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let credential = Credential::new(request.username, request.email, password_hash);
        let created = self.store.insert(credential).await?;

        log::info!("새 자격증명 등록: {}", created.email);

        Ok(RegisteredUser {
            username: created.username,
            email: created.email,
        })
    }

    /// 로그인 및 토큰 발급
    ///
    /// 이메일로 자격증명을 조회하고 비밀번호를 검증한 뒤, 성공 시
    /// 이메일을 subject로 하는 토큰을 발급합니다.
    ///
    /// 계정이 없는 경우와 비밀번호가 틀린 경우를 구분하지 않습니다 -
    /// 어느 쪽도 `InvalidCredentials`입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidCredentials` - 계정 없음 또는 비밀번호 불일치
    /// * `AppError::InternalError` - 해시 검증/토큰 생성 시스템 오류
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, AppError> {
        let credential = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(password, &credential.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            return Err(AppError::InvalidCredentials);
        }

        let access_token = self.tokens.issue(&credential.email)?;

        log::info!("로그인 성공: {}", credential.email);

        Ok(TokenResponse::bearer(access_token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthConfig;
    use crate::repositories::credentials::memory::InMemoryCredentialStore;
    use jsonwebtoken::Algorithm;

    // 테스트는 빠른 해싱을 위해 최저 cost 사용
    const TEST_COST: u32 = 4;

    fn test_service() -> CredentialService {
        let tokens = Arc::new(TokenService::new(AuthConfig::new(
            "test-secret-key-12345",
            Algorithm::HS256,
            60,
        )));
        CredentialService::new(Arc::new(InMemoryCredentialStore::new()), TEST_COST, tokens)
    }

    fn register_request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: "alice".to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_password_hash_roundtrip() {
        let hash = bcrypt::hash("pw1", TEST_COST).unwrap();

        assert!(bcrypt::verify("pw1", &hash).unwrap());
        assert!(!bcrypt::verify("pw2", &hash).unwrap());
    }

    #[actix_web::test]
    async fn test_register_then_login_succeeds() {
        let service = test_service();

        let registered = service
            .register(register_request("alice@x.com", "pw1"))
            .await
            .unwrap();
        assert_eq!(registered.email, "alice@x.com");
        assert_eq!(registered.username, "alice");

        let token = service.login("alice@x.com", "pw1").await.unwrap();
        assert_eq!(token.token_type, "bearer");
        assert!(!token.access_token.is_empty());
    }

    #[actix_web::test]
    async fn test_login_with_wrong_password_fails() {
        let service = test_service();
        service
            .register(register_request("alice@x.com", "pw1"))
            .await
            .unwrap();

        let result = service.login("alice@x.com", "wrong").await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[actix_web::test]
    async fn test_login_with_unknown_email_fails() {
        let service = test_service();

        let result = service.login("nobody@x.com", "pw1").await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[actix_web::test]
    async fn test_duplicate_registration_fails() {
        let service = test_service();
        service
            .register(register_request("alice@x.com", "pw1"))
            .await
            .unwrap();

        let result = service.register(register_request("alice@x.com", "pw2")).await;

        assert!(matches!(result, Err(AppError::DuplicateIdentity)));
    }

    #[actix_web::test]
    async fn test_email_comparison_is_case_sensitive() {
        let service = test_service();
        service
            .register(register_request("alice@x.com", "pw1"))
            .await
            .unwrap();

        // 다른 대소문자는 다른 식별자 - 등록은 가능하고 로그인은 실패
        let result = service.login("Alice@x.com", "pw1").await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[actix_web::test]
    async fn test_issued_token_verifies_back_to_subject() {
        let tokens = Arc::new(TokenService::new(AuthConfig::new(
            "test-secret-key-12345",
            Algorithm::HS256,
            60,
        )));
        let service = CredentialService::new(
            Arc::new(InMemoryCredentialStore::new()),
            TEST_COST,
            tokens.clone(),
        );

        service
            .register(register_request("alice@x.com", "pw1"))
            .await
            .unwrap();
        let response = service.login("alice@x.com", "pw1").await.unwrap();

        let subject = tokens.verify(&response.access_token).unwrap();
        assert_eq!(subject, "alice@x.com");
    }
}
