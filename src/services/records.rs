//! # 소유 레코드 서비스 구현
//!
//! 다섯 가지 레코드 타입의 생성/조회/변경/삭제 비즈니스 로직입니다.
//! 변경과 삭제는 인증 주체가 레코드의 소유자일 때만 허용되며,
//! 이 검사는 [`authorize_owner_action`] 하나로 통일되어 있습니다.

use crate::{
    domain::entities::OwnedDocument,
    errors::AppError,
    repositories::RecordRepository,
    services::auth::authorize_owner_action,
};
use mongodb::bson::Document;

/// 소유 레코드 비즈니스 로직 서비스
///
/// 타입 파라미터별로 하나씩 생성되어 `web::Data`로 주입됩니다.
pub struct RecordService<T> {
    repo: RecordRepository<T>,
}

impl<T: OwnedDocument> RecordService<T> {
    pub fn new(repo: RecordRepository<T>) -> Self {
        Self { repo }
    }

    /// 새 레코드 생성
    ///
    /// `created_by`는 핸들러가 검증된 토큰 subject로 채워서 전달합니다.
    /// 클라이언트 입력에서 소유자를 받지 않습니다.
    pub async fn create(&self, record: T) -> Result<T, AppError> {
        self.repo.insert(record).await
    }

    /// ID로 레코드 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 레코드가 없음
    /// * `AppError::ValidationError` - 잘못된 ID 형식
    pub async fn get(&self, id: &str) -> Result<T, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(T::RESOURCE))
    }

    /// 필터에 맞는 레코드 목록 조회
    pub async fn list(&self, filter: Document) -> Result<Vec<T>, AppError> {
        self.repo.list(filter).await
    }

    /// 소유자 검사 후 레코드 부분 수정
    ///
    /// 레코드를 읽어 소유자를 확인한 뒤 `$set` 업데이트를 수행합니다.
    /// 두 저장소 호출 사이에 트랜잭션은 없다. 그 사이에 문서가 삭제되면
    /// 두 번째 호출이 NotFound로 끝난다. 소유자 필드는 업데이트 대상이
    /// 될 수 없으므로 확인 후 소유자가 바뀌는 경우는 없다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 변경할 필드가 없거나 잘못된 ID 형식
    /// * `AppError::NotFound` - 해당 ID의 레코드가 없음
    /// * `AppError::Forbidden` - 주체가 소유자가 아님
    pub async fn update_owned(
        &self,
        subject: &str,
        id: &str,
        update_doc: Document,
    ) -> Result<T, AppError> {
        if update_doc.is_empty() {
            return Err(AppError::ValidationError(
                "변경할 필드가 없습니다".to_string(),
            ));
        }

        let record = self.get(id).await?;
        authorize_owner_action(subject, record.owner())?;

        self.repo
            .update_by_id(id, update_doc)
            .await?
            .ok_or(AppError::NotFound(T::RESOURCE))
    }

    /// 소유자 검사 후 레코드 삭제
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 레코드가 없음
    /// * `AppError::Forbidden` - 주체가 소유자가 아님
    pub async fn delete_owned(&self, subject: &str, id: &str) -> Result<(), AppError> {
        let record = self.get(id).await?;
        authorize_owner_action(subject, record.owner())?;

        if !self.repo.delete_by_id(id).await? {
            return Err(AppError::NotFound(T::RESOURCE));
        }

        log::info!("{} 삭제됨: {} (소유자: {})", T::RESOURCE, id, subject);

        Ok(())
    }
}
