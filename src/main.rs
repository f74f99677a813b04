//! VoyageConnect 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB 연결을 설정하고 JWT 인증 기반의 REST API를 제공합니다.

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use std::sync::Arc;

use voyageconnect_backend::config::{AuthConfig, PasswordConfig, ServerConfig};
use voyageconnect_backend::db::Database;
use voyageconnect_backend::domain::entities::{
    Comment, Destination, ForumMessage, ForumTopic, Post,
};
use voyageconnect_backend::repositories::{MongoCredentialStore, RecordRepository};
use voyageconnect_backend::routes::configure_all_routes;
use voyageconnect_backend::services::auth::{CredentialService, TokenService};
use voyageconnect_backend::services::records::RecordService;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

/// 공유 애플리케이션 상태
///
/// HttpServer 워커마다 복제되어 `web::Data`로 주입됩니다.
#[derive(Clone)]
struct AppState {
    tokens: web::Data<TokenService>,
    credentials: web::Data<CredentialService>,
    destinations: web::Data<RecordService<Destination>>,
    posts: web::Data<RecordService<Post>>,
    comments: web::Data<RecordService<Comment>>,
    topics: web::Data<RecordService<ForumTopic>>,
    messages: web::Data<RecordService<ForumMessage>>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 VoyageConnect 백엔드 시작중...");

    // 데이터 스토어 초기화
    let database = initialize_database().await;

    // 서비스 구성 (명시적 주입 - 전역 레지스트리 없음)
    let state = build_app_state(database).await;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(state).await
}

/// 저장소와 서비스를 구성합니다
///
/// 서명 설정은 환경에서 한 번 읽어 TokenService에 주입되고, 자격증명
/// 저장소는 트레이트 객체로 CredentialService에 주입됩니다. 다섯 가지
/// 레코드 서비스는 같은 데이터베이스 연결을 공유합니다.
async fn build_app_state(database: Arc<Database>) -> AppState {
    let tokens = Arc::new(TokenService::new(AuthConfig::from_env()));

    let credential_store = Arc::new(MongoCredentialStore::new(database.clone()));

    // 이메일 유니크 인덱스 - 실패해도 서비스는 시작한다 (중복 검사는
    // 서비스 레벨에서도 수행됨)
    if let Err(e) = credential_store.create_indexes().await {
        error!("자격증명 인덱스 생성 실패: {}", e);
    }

    let credentials = CredentialService::new(
        credential_store,
        PasswordConfig::bcrypt_cost(),
        tokens.clone(),
    );

    AppState {
        tokens: web::Data::from(tokens),
        credentials: web::Data::new(credentials),
        destinations: web::Data::new(RecordService::new(RecordRepository::<Destination>::new(
            database.clone(),
        ))),
        posts: web::Data::new(RecordService::new(RecordRepository::<Post>::new(
            database.clone(),
        ))),
        comments: web::Data::new(RecordService::new(RecordRepository::<Comment>::new(
            database.clone(),
        ))),
        topics: web::Data::new(RecordService::new(RecordRepository::<ForumTopic>::new(
            database.clone(),
        ))),
        messages: web::Data::new(RecordService::new(RecordRepository::<ForumMessage>::new(
            database,
        ))),
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: AppState) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .unwrap();

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let cors = configure_cors();
        let state = state.clone();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 공유 상태 주입
            .app_data(state.tokens)
            .app_data(state.credentials)
            .app_data(state.destinations)
            .app_data(state.posts)
            .app_data(state.comments)
            .app_data(state.topics)
            .app_data(state.messages)
            // 라우트 설정
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB 연결을 초기화합니다
///
/// # Panics
///
/// * MongoDB 연결 실패 시
async fn initialize_database() -> Arc<Database> {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(Database::new().await.expect("데이터베이스 연결 실패"));

    info!("✅ MongoDB 연결 성공");

    database
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드와의 통신을 위한 CORS 설정입니다.
/// 개발환경에서 로컬호스트 간 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// # Environment Variables
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
