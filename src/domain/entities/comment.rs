//! 댓글 엔티티

use super::OwnedDocument;
use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 댓글 문서
///
/// `comments` 컬렉션에 저장됩니다. `parent_id`가 있으면 다른 댓글에 대한
/// 답글입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 댓글이 달린 게시물 ID
    pub post_id: String,
    /// 댓글 내용
    pub content: String,
    /// 답글인 경우 부모 댓글 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// 생성 주체 (토큰 subject) - 생성 이후 불변
    pub created_by: String,
    /// 생성 시간
    pub created_at: DateTime,
}

impl Comment {
    pub fn new(
        post_id: String,
        content: String,
        parent_id: Option<String>,
        created_by: String,
    ) -> Self {
        Self {
            id: None,
            post_id,
            content,
            parent_id,
            created_by,
            created_at: DateTime::now(),
        }
    }
}

impl OwnedDocument for Comment {
    const COLLECTION: &'static str = "comments";
    const RESOURCE: &'static str = "Comment";

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
