//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 토큰 검증 엔드포인트를 처리하는 핸들러 함수들입니다.
//! JWT 토큰 기반의 상태 없는 인증을 구현합니다.
//!
//! # Endpoints
//!
//! - `POST /register` - 회원가입 (201 또는 400 DuplicateIdentity)
//! - `POST /login` - 로그인, bearer 토큰 발급 (200 또는 401)
//! - `GET /verify-token` - 토큰 검증, subject 반환 (인증 필요)

use actix_web::{HttpResponse, get, post, web};
use serde_json::json;
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::auth::{LoginRequest, RegisterRequest};
use crate::errors::AppError;
use crate::services::auth::CredentialService;

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /register`
#[post("/register")]
pub async fn register(
    payload: web::Json<RegisterRequest>,
    credentials: web::Data<CredentialService>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let registered = credentials.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(registered))
}

/// 로그인 핸들러
///
/// 이메일과 비밀번호를 검증하고 bearer 토큰을 발급합니다.
///
/// # Endpoint
/// `POST /login`
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
    credentials: web::Data<CredentialService>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    log::info!("로그인 시도 - 사용자: {} ({})", payload.username, payload.email);

    let token = credentials.login(&payload.email, &payload.password).await?;

    Ok(HttpResponse::Ok().json(token))
}

/// 토큰 검증 엔드포인트
///
/// 인증 미들웨어가 서명/만료 검증을 마친 주체를 그대로 돌려줍니다.
/// 계정의 현재 존재 여부는 확인하지 않습니다.
///
/// # Endpoint
/// `GET /verify-token`
#[get("")]
pub async fn verify_token(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(json!({ "email": user.email })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthConfig;
    use crate::repositories::credentials::memory::InMemoryCredentialStore;
    use crate::routes::configure_all_routes;
    use crate::services::auth::TokenService;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use jsonwebtoken::Algorithm;
    use std::sync::Arc;

    /// 인메모리 저장소로 구성한 테스트용 앱 상태
    fn test_state() -> (web::Data<TokenService>, web::Data<CredentialService>) {
        let tokens = Arc::new(TokenService::new(AuthConfig::new(
            "test-secret-key-12345",
            Algorithm::HS256,
            60,
        )));
        let credentials = CredentialService::new(
            Arc::new(InMemoryCredentialStore::new()),
            4,
            tokens.clone(),
        );

        (web::Data::from(tokens), web::Data::new(credentials))
    }

    macro_rules! test_app {
        () => {{
            let (tokens, credentials) = test_state();
            test::init_service(
                App::new()
                    .app_data(tokens)
                    .app_data(credentials)
                    .configure(configure_all_routes),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_register_login_verify_flow() {
        let app = test_app!();

        // 회원가입
        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(json!({
                "username": "alice",
                "email": "alice@x.com",
                "password": "pw1"
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["username"], "alice");
        assert_eq!(body["email"], "alice@x.com");

        // 로그인
        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({
                "username": "alice",
                "email": "alice@x.com",
                "password": "pw1"
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["token_type"], "bearer");
        let token = body["access_token"].as_str().unwrap().to_string();

        // 발급된 토큰으로 보호된 엔드포인트 접근
        let req = test::TestRequest::get()
            .uri("/verify-token")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["email"], "alice@x.com");
    }

    #[actix_web::test]
    async fn test_duplicate_registration_returns_400() {
        let app = test_app!();

        let payload = json!({
            "username": "alice",
            "email": "alice@x.com",
            "password": "pw1"
        });

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(payload.clone())
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(payload)
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_login_with_wrong_password_returns_401() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(json!({
                "username": "alice",
                "email": "alice@x.com",
                "password": "pw1"
            }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({
                "username": "alice",
                "email": "alice@x.com",
                "password": "wrong"
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_garbage_token_returns_401() {
        let app = test_app!();

        let req = test::TestRequest::get()
            .uri("/verify-token")
            .insert_header(("Authorization", "Bearer garbage"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_missing_authorization_header_returns_401() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/verify-token").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
