//! # 자격증명 리포지토리 구현
//!
//! 자격증명 엔티티의 데이터 액세스 계층입니다. 저장소 인터페이스를
//! 트레이트로 분리하여 CredentialService 생성자에 주입하며,
//! 프로덕션에서는 MongoDB 구현체를 사용합니다.

use crate::{db::Database, domain::entities::Credential, errors::AppError};
use async_trait::async_trait;
use mongodb::{
    IndexModel,
    bson::doc,
    options::IndexOptions,
};
use std::sync::Arc;

/// 자격증명 저장소 인터페이스
///
/// 인증 코어가 저장소에 요구하는 두 가지 연산만 노출합니다.
/// 호출 단위 원자성은 구현체(문서 저장소)가 보장합니다.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// 이메일로 자격증명 조회
    ///
    /// 이메일은 바이트 단위로 정확히(대소문자 구분) 비교됩니다.
    /// "없음"(`Ok(None)`)과 저장소 오류(`Err`)는 구분됩니다.
    async fn find_by_email(&self, email: &str) -> Result<Option<Credential>, AppError>;

    /// 새 자격증명 저장
    ///
    /// 저장된 자격증명을 ID가 채워진 상태로 반환합니다.
    async fn insert(&self, credential: Credential) -> Result<Credential, AppError>;
}

/// MongoDB 기반 자격증명 저장소
///
/// `users` 컬렉션을 사용하며, 이메일 유니크 인덱스로 중복 가입을
/// 저장소 레벨에서도 차단합니다.
pub struct MongoCredentialStore {
    db: Arc<Database>,
}

impl MongoCredentialStore {
    /// 컬렉션 이름
    const COLLECTION: &'static str = "users";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<Credential> {
        self.db
            .get_database()
            .collection::<Credential>(Self::COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 이메일 유니크 인덱스를 생성합니다. 애플리케이션 초기화 시점에
    /// 한 번 실행합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([email_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl CredentialStore for MongoCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Credential>, AppError> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut credential: Credential) -> Result<Credential, AppError> {
        let result = self
            .collection()
            .insert_one(&credential)
            .await
            .map_err(|e| {
                // 사전 중복 검사와 쓰기 사이의 경쟁은 유니크 인덱스가 잡는다
                if is_duplicate_key_error(&e) {
                    AppError::DuplicateIdentity
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        credential.id = result.inserted_id.as_object_id();

        Ok(credential)
    }
}

/// MongoDB duplicate key 오류 (코드 11000) 여부 확인
fn is_duplicate_key_error(error: &mongodb::error::Error) -> bool {
    matches!(
        *error.kind,
        mongodb::error::ErrorKind::Write(mongodb::error::WriteFailure::WriteError(ref write_error))
            if write_error.code == 11000
    )
}

/// 테스트용 인메모리 자격증명 저장소
///
/// 프로덕션 코드 경로에는 포함되지 않으며, 서비스 계층 테스트에서
/// MongoDB 없이 등록/로그인 흐름을 검증하는 데 사용됩니다.
#[cfg(test)]
pub mod memory {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryCredentialStore {
        items: Mutex<Vec<Credential>>,
    }

    impl InMemoryCredentialStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl CredentialStore for InMemoryCredentialStore {
        async fn find_by_email(&self, email: &str) -> Result<Option<Credential>, AppError> {
            let items = self.items.lock().unwrap();
            Ok(items.iter().find(|c| c.email == email).cloned())
        }

        async fn insert(&self, mut credential: Credential) -> Result<Credential, AppError> {
            let mut items = self.items.lock().unwrap();
            if items.iter().any(|c| c.email == credential.email) {
                return Err(AppError::DuplicateIdentity);
            }
            credential.id = Some(ObjectId::new());
            items.push(credential.clone());
            Ok(credential)
        }
    }
}
