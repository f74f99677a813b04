//! 게시물 엔티티

use super::OwnedDocument;
use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 게시물 문서
///
/// `posts` 컬렉션에 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 게시물 제목
    pub title: String,
    /// 게시물 본문
    pub content: String,
    /// 생성 주체 (토큰 subject) - 생성 이후 불변
    pub created_by: String,
    /// 생성 시간
    pub created_at: DateTime,
}

impl Post {
    pub fn new(title: String, content: String, created_by: String) -> Self {
        Self {
            id: None,
            title,
            content,
            created_by,
            created_at: DateTime::now(),
        }
    }
}

impl OwnedDocument for Post {
    const COLLECTION: &'static str = "posts";
    const RESOURCE: &'static str = "Post";

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
