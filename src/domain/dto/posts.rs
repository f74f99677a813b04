//! 게시물 요청/응답 DTO

use crate::domain::entities::Post;
use chrono::{DateTime, Utc};
use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 게시물 생성 요청
#[derive(Debug, Deserialize, Validate)]
pub struct PostIn {
    #[validate(length(min = 1, message = "제목을 입력해주세요"))]
    pub title: String,

    #[validate(length(min = 1, message = "내용을 입력해주세요"))]
    pub content: String,
}

/// 게시물 부분 수정 요청
#[derive(Debug, Deserialize, Validate)]
pub struct PostUpdate {
    #[validate(length(min = 1, message = "제목을 입력해주세요"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "내용을 입력해주세요"))]
    pub content: Option<String>,
}

impl PostUpdate {
    /// 존재하는 필드만 담은 `$set` 문서를 생성합니다.
    pub fn into_update_doc(self) -> Document {
        let mut update = doc! {};
        if let Some(title) = self.title {
            update.insert("title", title);
        }
        if let Some(content) = self.content {
            update.insert("content", content);
        }
        update
    }
}

/// 게시물 응답
#[derive(Debug, Serialize)]
pub struct PostOut {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostOut {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: post.title,
            content: post.content,
            created_by: post.created_by,
            created_at: post.created_at.to_chrono(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_doc_skips_missing_fields() {
        let update = PostUpdate {
            title: None,
            content: Some("updated body".to_string()),
        };

        let doc = update.into_update_doc();

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get_str("content").unwrap(), "updated body");
    }
}
