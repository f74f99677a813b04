//! 여행지 엔티티

use super::OwnedDocument;
use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 여행지 문서
///
/// `destinations` 컬렉션에 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 여행지 이름
    pub name: String,
    /// 여행지 설명
    pub description: String,
    /// 대표 이미지 URL (선택사항)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// 생성 주체 (토큰 subject) - 생성 이후 불변
    pub created_by: String,
    /// 생성 시간
    pub created_at: DateTime,
}

impl Destination {
    pub fn new(
        name: String,
        description: String,
        image_url: Option<String>,
        created_by: String,
    ) -> Self {
        Self {
            id: None,
            name,
            description,
            image_url,
            created_by,
            created_at: DateTime::now(),
        }
    }
}

impl OwnedDocument for Destination {
    const COLLECTION: &'static str = "destinations";
    const RESOURCE: &'static str = "Destination";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn owner(&self) -> &str {
        &self.created_by
    }
}
