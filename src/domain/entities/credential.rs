//! Credential Entity Implementation
//!
//! 인증 자격증명 엔티티의 핵심 구현체입니다.
//! 이메일(식별자)과 bcrypt 해시된 비밀번호를 보관하며,
//! 회원가입 시 생성되고 이후 변경되지 않습니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 자격증명 엔티티
///
/// `users` 컬렉션에 저장됩니다. 이메일은 시스템 전체에서 유니크하며
/// 바이트 단위로 정확히(대소문자 구분) 비교됩니다. 비밀번호는 평문이
/// 아닌 bcrypt 해시(솔트 내장)만 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름
    pub username: String,
    /// 사용자 이메일 (unique, 토큰 subject로 사용)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 생성 시간
    pub created_at: DateTime,
}

impl Credential {
    /// 새 자격증명 생성
    ///
    /// 비밀번호 해싱은 호출자(CredentialService)의 책임입니다.
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: None,
            username,
            email,
            password_hash,
            created_at: DateTime::now(),
        }
    }
}
