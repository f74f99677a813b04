//! # 소유 레코드 제네릭 리포지토리
//!
//! 여행지/게시물/댓글/포럼 주제/포럼 메시지 컬렉션이 모두 같은 CRUD
//! 패턴을 따르므로, 컬렉션별 리포지토리를 복제하는 대신
//! [`OwnedDocument`] 트레이트 위에서 제네릭으로 구현합니다.

use crate::{db::Database, domain::entities::OwnedDocument, errors::AppError};
use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc, oid::ObjectId};
use std::marker::PhantomData;
use std::sync::Arc;

/// 소유 레코드 데이터 액세스 리포지토리
///
/// 타입 파라미터가 컬렉션 이름과 역직렬화 대상을 결정합니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo: RecordRepository<Destination> = RecordRepository::new(db.clone());
/// let found = repo.find_by_id("665f1a...").await?;
/// ```
pub struct RecordRepository<T> {
    db: Arc<Database>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: OwnedDocument> RecordRepository<T> {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            _marker: PhantomData,
        }
    }

    fn collection(&self) -> mongodb::Collection<T> {
        self.db.get_database().collection::<T>(T::COLLECTION)
    }

    /// ObjectId 문자열 파싱
    ///
    /// 잘못된 형식은 저장소까지 가지 않고 400으로 매핑됩니다.
    fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
    }

    /// 새 레코드 저장
    ///
    /// 저장된 레코드를 ID가 채워진 상태로 반환합니다.
    pub async fn insert(&self, mut record: T) -> Result<T, AppError> {
        let result = self
            .collection()
            .insert_one(&record)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(id) = result.inserted_id.as_object_id() {
            record.set_id(id);
        }

        Ok(record)
    }

    /// ID로 레코드 조회
    pub async fn find_by_id(&self, id: &str) -> Result<Option<T>, AppError> {
        let object_id = Self::parse_object_id(id)?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 필터에 맞는 레코드 목록 조회
    pub async fn list(&self, filter: Document) -> Result<Vec<T>, AppError> {
        let cursor = self
            .collection()
            .find(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 레코드 부분 업데이트
    ///
    /// `$set` 연산으로 지정된 필드만 변경하고 변경 후 문서를 반환합니다.
    /// 해당 ID의 문서가 없으면 `Ok(None)`입니다.
    pub async fn update_by_id(
        &self,
        id: &str,
        update_doc: Document,
    ) -> Result<Option<T>, AppError> {
        let object_id = Self::parse_object_id(id)?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 레코드 삭제
    ///
    /// 삭제된 문서가 있으면 `true`, 없으면 `false`를 반환합니다.
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let object_id = Self::parse_object_id(id)?;

        let result = self
            .collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
