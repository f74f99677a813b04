//! 댓글 요청/응답 DTO

use crate::domain::entities::Comment;
use chrono::{DateTime, Utc};
use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 댓글 생성 요청
#[derive(Debug, Deserialize, Validate)]
pub struct CommentIn {
    #[validate(length(min = 1, message = "게시물 ID가 필요합니다"))]
    pub post_id: String,

    #[validate(length(min = 1, message = "내용을 입력해주세요"))]
    pub content: String,

    /// 답글인 경우 부모 댓글 ID
    pub parent_id: Option<String>,
}

/// 댓글 부분 수정 요청
///
/// 수정 가능한 필드는 내용뿐입니다. 댓글을 다른 게시물로 옮기는 것은
/// 허용하지 않습니다.
#[derive(Debug, Deserialize, Validate)]
pub struct CommentUpdate {
    #[validate(length(min = 1, message = "내용을 입력해주세요"))]
    pub content: Option<String>,
}

impl CommentUpdate {
    /// 존재하는 필드만 담은 `$set` 문서를 생성합니다.
    pub fn into_update_doc(self) -> Document {
        let mut update = doc! {};
        if let Some(content) = self.content {
            update.insert("content", content);
        }
        update
    }
}

/// 댓글 목록 조회 쿼리
#[derive(Debug, Deserialize)]
pub struct CommentListQuery {
    /// 조회할 게시물 ID (필수)
    pub post_id: String,
}

/// 댓글 응답
#[derive(Debug, Serialize)]
pub struct CommentOut {
    pub id: String,
    pub post_id: String,
    pub content: String,
    pub parent_id: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentOut {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.map(|id| id.to_hex()).unwrap_or_default(),
            post_id: comment.post_id,
            content: comment.content,
            parent_id: comment.parent_id,
            created_by: comment.created_by,
            created_at: comment.created_at.to_chrono(),
        }
    }
}
