//! 인증 서비스 모듈
//!
//! - [`token_service`] - 토큰 발급 및 검증
//! - [`credential_service`] - 자격증명 등록 및 로그인
//! - [`ownership`] - 소유권 검사 규약

pub mod credential_service;
pub mod ownership;
pub mod token_service;

pub use credential_service::CredentialService;
pub use ownership::authorize_owner_action;
pub use token_service::{TokenClaims, TokenService};
