//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 원본 서비스 단위로 그룹화하여 제공합니다.
//! 인증, 여행지, 게시물, 댓글, 포럼 라우트와 헬스체크 엔드포인트를
//! 포함합니다.
//!
//! # Auth Middleware Usage
//!
//! 조회 라우트는 공개이고, 생성/수정/삭제 라우트만 인증 미들웨어로
//! 보호합니다. 같은 경로 접두사 안에서 보호 대상만 감싸기 위해 빈
//! 접두사의 내부 스코프를 사용합니다:
//!
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/destinations")
//!         .service(handlers::destinations::list_destinations)  // 공개
//!         .service(
//!             web::scope("")
//!                 .wrap(AuthMiddleware::required())
//!                 .service(handlers::destinations::create_destination),
//!         ),
//! );
//! ```

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(root);
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_destination_routes(cfg);
    configure_post_routes(cfg);
    configure_comment_routes(cfg);
    configure_forum_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /register` - 회원가입 (공개)
/// - `POST /login` - 로그인, bearer 토큰 발급 (공개)
/// - `GET /verify-token` - 토큰 검증 (인증 필요)
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::register);
    cfg.service(handlers::auth::login);

    cfg.service(
        web::scope("/verify-token")
            .wrap(AuthMiddleware::required())
            .service(handlers::auth::verify_token),
    );
}

/// 여행지 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /destinations` - 목록 조회 (공개)
/// - `GET /destinations/{id}` - 단건 조회 (공개)
/// - `POST /destinations` - 생성 (인증 필요)
/// - `PATCH /destinations/{id}` - 수정 (인증 + 소유자)
/// - `DELETE /destinations/{id}` - 삭제 (인증 + 소유자)
fn configure_destination_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/destinations")
            // Public routes
            .service(handlers::destinations::list_destinations)
            .service(handlers::destinations::get_destination)
            // Protected routes
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::destinations::create_destination)
                    .service(handlers::destinations::update_destination)
                    .service(handlers::destinations::delete_destination),
            ),
    );
}

/// 게시물 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /posts` - 목록 조회 (공개)
/// - `GET /posts/{id}` - 단건 조회 (공개)
/// - `POST /posts` - 생성 (인증 필요)
/// - `PATCH /posts/{id}` - 수정 (인증 + 소유자)
/// - `DELETE /posts/{id}` - 삭제 (인증 + 소유자)
fn configure_post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            // Public routes
            .service(handlers::posts::list_posts)
            .service(handlers::posts::get_post)
            // Protected routes
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::posts::create_post)
                    .service(handlers::posts::update_post)
                    .service(handlers::posts::delete_post),
            ),
    );
}

/// 댓글 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /comments?post_id=` - 게시물별 목록 조회 (공개)
/// - `POST /comments` - 작성 (인증 필요)
/// - `PATCH /comments/{id}` - 수정 (인증 + 소유자)
/// - `DELETE /comments/{id}` - 삭제 (인증 + 소유자)
fn configure_comment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/comments")
            // Public routes
            .service(handlers::comments::list_comments)
            // Protected routes
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::comments::create_comment)
                    .service(handlers::comments::update_comment)
                    .service(handlers::comments::delete_comment),
            ),
    );
}

/// 포럼 주제/메시지 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /topics`, `GET /topics/{id}` - 주제 조회 (공개)
/// - `POST /topics`, `PATCH|DELETE /topics/{id}` - 주제 변경 (인증/소유자)
/// - `GET /messages?topic_id=` - 메시지 목록 조회 (공개)
/// - `POST /messages`, `PATCH|DELETE /messages/{id}` - 메시지 변경 (인증/소유자)
fn configure_forum_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/topics")
            // Public routes
            .service(handlers::forum::list_topics)
            .service(handlers::forum::get_topic)
            // Protected routes
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::forum::create_topic)
                    .service(handlers::forum::update_topic)
                    .service(handlers::forum::delete_topic),
            ),
    );

    cfg.service(
        web::scope("/messages")
            // Public routes
            .service(handlers::forum::list_messages)
            // Protected routes
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::forum::create_message)
                    .service(handlers::forum::update_message)
                    .service(handlers::forum::delete_message),
            ),
    );
}

/// 루트 엔드포인트
///
/// 배포 인스턴스 식별용 인사말을 반환합니다.
#[actix_web::get("/")]
async fn root() -> actix_web::HttpResponse {
    let instance = std::env::var("INSTANCE").unwrap_or_else(|_| "unknown".to_string());

    actix_web::HttpResponse::Ok().json(json!({
        "message": format!("Hello from voyageconnect instance {}", instance)
    }))
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "voyageconnect_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
