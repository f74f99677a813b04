//! 포럼 주제/메시지 엔티티

use super::OwnedDocument;
use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 포럼 주제 문서
///
/// `forum_topics` 컬렉션에 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumTopic {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 주제 제목
    pub title: String,
    /// 주제 설명
    pub description: String,
    /// 생성 주체 (토큰 subject) - 생성 이후 불변
    pub created_by: String,
    /// 생성 시간
    pub created_at: DateTime,
}

impl ForumTopic {
    pub fn new(title: String, description: String, created_by: String) -> Self {
        Self {
            id: None,
            title,
            description,
            created_by,
            created_at: DateTime::now(),
        }
    }
}

impl OwnedDocument for ForumTopic {
    const COLLECTION: &'static str = "forum_topics";
    const RESOURCE: &'static str = "Topic";

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

/// 포럼 메시지 문서
///
/// `forum_messages` 컬렉션에 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumMessage {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 메시지가 속한 주제 ID
    pub topic_id: String,
    /// 메시지 내용
    pub content: String,
    /// 생성 주체 (토큰 subject) - 생성 이후 불변
    pub created_by: String,
    /// 생성 시간
    pub created_at: DateTime,
}

impl ForumMessage {
    pub fn new(topic_id: String, content: String, created_by: String) -> Self {
        Self {
            id: None,
            topic_id,
            content,
            created_by,
            created_at: DateTime::now(),
        }
    }
}

impl OwnedDocument for ForumMessage {
    const COLLECTION: &'static str = "forum_messages";
    const RESOURCE: &'static str = "Message";

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
