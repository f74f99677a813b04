//! Forum HTTP Handlers
//!
//! 포럼 주제와 메시지 엔드포인트입니다. 주제 목록/단건 조회와
//! 메시지 목록 조회는 공개이고, 작성은 인증, 수정/삭제는 인증과
//! 소유권이 필요합니다.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use mongodb::bson::doc;
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::forum::{
    MessageIn, MessageListQuery, MessageOut, MessageUpdate, TopicIn, TopicOut, TopicUpdate,
};
use crate::domain::entities::{ForumMessage, ForumTopic};
use crate::errors::AppError;
use crate::services::RecordService;

/// 포럼 주제 목록 조회
///
/// # Endpoint
/// `GET /topics`
#[get("")]
pub async fn list_topics(
    topics: web::Data<RecordService<ForumTopic>>,
) -> Result<HttpResponse, AppError> {
    let all = topics.list(doc! {}).await?;
    let out: Vec<TopicOut> = all.into_iter().map(TopicOut::from).collect();

    Ok(HttpResponse::Ok().json(out))
}

/// 포럼 주제 단건 조회
///
/// # Endpoint
/// `GET /topics/{id}`
#[get("/{id}")]
pub async fn get_topic(
    path: web::Path<String>,
    topics: web::Data<RecordService<ForumTopic>>,
) -> Result<HttpResponse, AppError> {
    let topic = topics.get(&path).await?;

    Ok(HttpResponse::Ok().json(TopicOut::from(topic)))
}

/// 포럼 주제 생성
///
/// # Endpoint
/// `POST /topics`
#[post("")]
pub async fn create_topic(
    payload: web::Json<TopicIn>,
    user: AuthenticatedUser,
    topics: web::Data<RecordService<ForumTopic>>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let data = payload.into_inner();
    let topic = ForumTopic::new(data.title, data.description, user.email);
    let created = topics.create(topic).await?;

    Ok(HttpResponse::Created().json(TopicOut::from(created)))
}

/// 포럼 주제 부분 수정 (소유자 전용)
///
/// # Endpoint
/// `PATCH /topics/{id}`
#[patch("/{id}")]
pub async fn update_topic(
    path: web::Path<String>,
    payload: web::Json<TopicUpdate>,
    user: AuthenticatedUser,
    topics: web::Data<RecordService<ForumTopic>>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let updated = topics
        .update_owned(&user.email, &path, payload.into_inner().into_update_doc())
        .await?;

    Ok(HttpResponse::Ok().json(TopicOut::from(updated)))
}

/// 포럼 주제 삭제 (소유자 전용)
///
/// # Endpoint
/// `DELETE /topics/{id}`
#[delete("/{id}")]
pub async fn delete_topic(
    path: web::Path<String>,
    user: AuthenticatedUser,
    topics: web::Data<RecordService<ForumTopic>>,
) -> Result<HttpResponse, AppError> {
    topics.delete_owned(&user.email, &path).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 주제별 메시지 목록 조회
///
/// # Endpoint
/// `GET /messages?topic_id={topic_id}`
#[get("")]
pub async fn list_messages(
    query: web::Query<MessageListQuery>,
    messages: web::Data<RecordService<ForumMessage>>,
) -> Result<HttpResponse, AppError> {
    let found = messages
        .list(doc! { "topic_id": query.topic_id.as_str() })
        .await?;
    let out: Vec<MessageOut> = found.into_iter().map(MessageOut::from).collect();

    Ok(HttpResponse::Ok().json(out))
}

/// 포럼 메시지 작성
///
/// # Endpoint
/// `POST /messages`
#[post("")]
pub async fn create_message(
    payload: web::Json<MessageIn>,
    user: AuthenticatedUser,
    messages: web::Data<RecordService<ForumMessage>>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let data = payload.into_inner();
    let message = ForumMessage::new(data.topic_id, data.content, user.email);
    let created = messages.create(message).await?;

    Ok(HttpResponse::Created().json(MessageOut::from(created)))
}

/// 포럼 메시지 수정 (소유자 전용)
///
/// # Endpoint
/// `PATCH /messages/{id}`
#[patch("/{id}")]
pub async fn update_message(
    path: web::Path<String>,
    payload: web::Json<MessageUpdate>,
    user: AuthenticatedUser,
    messages: web::Data<RecordService<ForumMessage>>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let updated = messages
        .update_owned(&user.email, &path, payload.into_inner().into_update_doc())
        .await?;

    Ok(HttpResponse::Ok().json(MessageOut::from(updated)))
}

/// 포럼 메시지 삭제 (소유자 전용)
///
/// # Endpoint
/// `DELETE /messages/{id}`
#[delete("/{id}")]
pub async fn delete_message(
    path: web::Path<String>,
    user: AuthenticatedUser,
    messages: web::Data<RecordService<ForumMessage>>,
) -> Result<HttpResponse, AppError> {
    messages.delete_owned(&user.email, &path).await?;

    Ok(HttpResponse::NoContent().finish())
}
