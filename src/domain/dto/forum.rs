//! 포럼 주제/메시지 요청/응답 DTO

use crate::domain::entities::{ForumMessage, ForumTopic};
use chrono::{DateTime, Utc};
use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 포럼 주제 생성 요청
#[derive(Debug, Deserialize, Validate)]
pub struct TopicIn {
    #[validate(length(min = 1, message = "제목을 입력해주세요"))]
    pub title: String,

    #[validate(length(min = 1, message = "설명을 입력해주세요"))]
    pub description: String,
}

/// 포럼 주제 부분 수정 요청
#[derive(Debug, Deserialize, Validate)]
pub struct TopicUpdate {
    #[validate(length(min = 1, message = "제목을 입력해주세요"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "설명을 입력해주세요"))]
    pub description: Option<String>,
}

impl TopicUpdate {
    /// 존재하는 필드만 담은 `$set` 문서를 생성합니다.
    pub fn into_update_doc(self) -> Document {
        let mut update = doc! {};
        if let Some(title) = self.title {
            update.insert("title", title);
        }
        if let Some(description) = self.description {
            update.insert("description", description);
        }
        update
    }
}

/// 포럼 주제 응답
#[derive(Debug, Serialize)]
pub struct TopicOut {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<ForumTopic> for TopicOut {
    fn from(topic: ForumTopic) -> Self {
        Self {
            id: topic.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: topic.title,
            description: topic.description,
            created_by: topic.created_by,
            created_at: topic.created_at.to_chrono(),
        }
    }
}

/// 포럼 메시지 생성 요청
#[derive(Debug, Deserialize, Validate)]
pub struct MessageIn {
    #[validate(length(min = 1, message = "주제 ID가 필요합니다"))]
    pub topic_id: String,

    #[validate(length(min = 1, message = "내용을 입력해주세요"))]
    pub content: String,
}

/// 포럼 메시지 부분 수정 요청
#[derive(Debug, Deserialize, Validate)]
pub struct MessageUpdate {
    #[validate(length(min = 1, message = "내용을 입력해주세요"))]
    pub content: Option<String>,
}

impl MessageUpdate {
    /// 존재하는 필드만 담은 `$set` 문서를 생성합니다.
    pub fn into_update_doc(self) -> Document {
        let mut update = doc! {};
        if let Some(content) = self.content {
            update.insert("content", content);
        }
        update
    }
}

/// 포럼 메시지 목록 조회 쿼리
#[derive(Debug, Deserialize)]
pub struct MessageListQuery {
    /// 조회할 주제 ID (필수)
    pub topic_id: String,
}

/// 포럼 메시지 응답
#[derive(Debug, Serialize)]
pub struct MessageOut {
    pub id: String,
    pub topic_id: String,
    pub content: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<ForumMessage> for MessageOut {
    fn from(message: ForumMessage) -> Self {
        Self {
            id: message.id.map(|id| id.to_hex()).unwrap_or_default(),
            topic_id: message.topic_id,
            content: message.content,
            created_by: message.created_by,
            created_at: message.created_at.to_chrono(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_update_doc_contains_only_present_fields() {
        let update = TopicUpdate {
            title: Some("새 제목".to_string()),
            description: None,
        };

        let doc = update.into_update_doc();

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get_str("title").unwrap(), "새 제목");
    }

    #[test]
    fn test_message_update_doc_empty_when_no_fields() {
        let update = MessageUpdate { content: None };

        assert!(update.into_update_doc().is_empty());
    }
}
