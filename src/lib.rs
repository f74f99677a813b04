//! VoyageConnect 백엔드
//!
//! 여행 커뮤니티 서비스(인증, 여행지, 게시물, 댓글, 포럼)를 하나의
//! 바이너리로 통합한 Rust 백엔드입니다. JWT 토큰 기반 상태 없는 인증과
//! 레코드 소유권 검사를 제공하며, MongoDB를 단일 문서 저장소로
//! 사용합니다.
//!
//! # Features
//!
//! - **자격증명 관리**: bcrypt 해싱 기반 회원가입/로그인
//! - **JWT 인증**: 대칭키 서명, 시간 제한 액세스 토큰 (폐기 목록 없음)
//! - **소유권 규약**: 모든 변경/삭제는 토큰 subject == 레코드 소유자일 때만
//! - **명시적 주입**: 설정과 저장소는 생성자로 주입, 전역 상태 없음
//! - **MongoDB**: 문서 단위 원자성에 의존하는 단일 저장소
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 입력 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 인증 코어, 소유권 검사
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use voyageconnect_backend::config::AuthConfig;
//! use voyageconnect_backend::services::auth::{CredentialService, TokenService};
//!
//! let tokens = Arc::new(TokenService::new(AuthConfig::from_env()));
//! let credentials = CredentialService::new(store, bcrypt_cost, tokens.clone());
//!
//! let token = credentials.login("alice@x.com", "password").await?;
//! let subject = tokens.verify(&token.access_token)?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
