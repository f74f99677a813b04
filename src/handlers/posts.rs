//! Post HTTP Handlers
//!
//! 게시물 CRUD 엔드포인트입니다.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use mongodb::bson::doc;
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::posts::{PostIn, PostOut, PostUpdate};
use crate::domain::entities::Post;
use crate::errors::AppError;
use crate::services::RecordService;

/// 게시물 목록 조회
///
/// # Endpoint
/// `GET /posts`
#[get("")]
pub async fn list_posts(
    posts: web::Data<RecordService<Post>>,
) -> Result<HttpResponse, AppError> {
    let all = posts.list(doc! {}).await?;
    let out: Vec<PostOut> = all.into_iter().map(PostOut::from).collect();

    Ok(HttpResponse::Ok().json(out))
}

/// 게시물 단건 조회
///
/// # Endpoint
/// `GET /posts/{id}`
#[get("/{id}")]
pub async fn get_post(
    path: web::Path<String>,
    posts: web::Data<RecordService<Post>>,
) -> Result<HttpResponse, AppError> {
    let post = posts.get(&path).await?;

    Ok(HttpResponse::Ok().json(PostOut::from(post)))
}

/// 게시물 생성
///
/// # Endpoint
/// `POST /posts`
#[post("")]
pub async fn create_post(
    payload: web::Json<PostIn>,
    user: AuthenticatedUser,
    posts: web::Data<RecordService<Post>>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let data = payload.into_inner();
    let post = Post::new(data.title, data.content, user.email);
    let created = posts.create(post).await?;

    Ok(HttpResponse::Created().json(PostOut::from(created)))
}

/// 게시물 부분 수정 (소유자 전용)
///
/// # Endpoint
/// `PATCH /posts/{id}`
#[patch("/{id}")]
pub async fn update_post(
    path: web::Path<String>,
    payload: web::Json<PostUpdate>,
    user: AuthenticatedUser,
    posts: web::Data<RecordService<Post>>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let updated = posts
        .update_owned(&user.email, &path, payload.into_inner().into_update_doc())
        .await?;

    Ok(HttpResponse::Ok().json(PostOut::from(updated)))
}

/// 게시물 삭제 (소유자 전용)
///
/// # Endpoint
/// `DELETE /posts/{id}`
#[delete("/{id}")]
pub async fn delete_post(
    path: web::Path<String>,
    user: AuthenticatedUser,
    posts: web::Data<RecordService<Post>>,
) -> Result<HttpResponse, AppError> {
    posts.delete_owned(&user.email, &path).await?;

    Ok(HttpResponse::NoContent().finish())
}
