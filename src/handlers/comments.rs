//! Comment HTTP Handlers
//!
//! 댓글 엔드포인트입니다. 목록 조회는 게시물 ID를 기준으로 하며 공개,
//! 작성은 인증, 수정/삭제는 인증과 소유권이 필요합니다.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use mongodb::bson::doc;
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::comments::{CommentIn, CommentListQuery, CommentOut, CommentUpdate};
use crate::domain::entities::Comment;
use crate::errors::AppError;
use crate::services::RecordService;

/// 게시물별 댓글 목록 조회
///
/// # Endpoint
/// `GET /comments?post_id={post_id}`
#[get("")]
pub async fn list_comments(
    query: web::Query<CommentListQuery>,
    comments: web::Data<RecordService<Comment>>,
) -> Result<HttpResponse, AppError> {
    let found = comments
        .list(doc! { "post_id": query.post_id.as_str() })
        .await?;
    let out: Vec<CommentOut> = found.into_iter().map(CommentOut::from).collect();

    Ok(HttpResponse::Ok().json(out))
}

/// 댓글 작성
///
/// # Endpoint
/// `POST /comments`
#[post("")]
pub async fn create_comment(
    payload: web::Json<CommentIn>,
    user: AuthenticatedUser,
    comments: web::Data<RecordService<Comment>>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let data = payload.into_inner();
    let comment = Comment::new(data.post_id, data.content, data.parent_id, user.email);
    let created = comments.create(comment).await?;

    Ok(HttpResponse::Created().json(CommentOut::from(created)))
}

/// 댓글 수정 (소유자 전용)
///
/// # Endpoint
/// `PATCH /comments/{id}`
#[patch("/{id}")]
pub async fn update_comment(
    path: web::Path<String>,
    payload: web::Json<CommentUpdate>,
    user: AuthenticatedUser,
    comments: web::Data<RecordService<Comment>>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let updated = comments
        .update_owned(&user.email, &path, payload.into_inner().into_update_doc())
        .await?;

    Ok(HttpResponse::Ok().json(CommentOut::from(updated)))
}

/// 댓글 삭제 (소유자 전용)
///
/// # Endpoint
/// `DELETE /comments/{id}`
#[delete("/{id}")]
pub async fn delete_comment(
    path: web::Path<String>,
    user: AuthenticatedUser,
    comments: web::Data<RecordService<Comment>>,
) -> Result<HttpResponse, AppError> {
    comments.delete_owned(&user.email, &path).await?;

    Ok(HttpResponse::NoContent().finish())
}
