//! 토큰 검증을 통과한 요청 주체 모델

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use std::future::{Ready, ready};

/// 토큰에서 추출된 인증 주체
///
/// 인증 미들웨어가 서명/만료 검증을 마친 뒤 Request Extensions에 저장하며,
/// 핸들러는 이 구조체를 추출자로 받아 사용합니다. `email`은 토큰의
/// subject 클레임이고, 소유권 검사 시 레코드의 `created_by`와 비교됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 토큰 subject (사용자 이메일)
    pub email: String,
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다",
            ))),
        }
    }
}
