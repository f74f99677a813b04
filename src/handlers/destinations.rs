//! Destination HTTP Handlers
//!
//! 여행지 CRUD 엔드포인트입니다. 조회는 공개이고, 생성은 인증이,
//! 수정/삭제는 인증과 소유권이 필요합니다.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use mongodb::bson::doc;
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::destinations::{DestinationIn, DestinationOut, DestinationUpdate};
use crate::domain::entities::Destination;
use crate::errors::AppError;
use crate::services::RecordService;

/// 여행지 목록 조회
///
/// # Endpoint
/// `GET /destinations`
#[get("")]
pub async fn list_destinations(
    destinations: web::Data<RecordService<Destination>>,
) -> Result<HttpResponse, AppError> {
    let all = destinations.list(doc! {}).await?;
    let out: Vec<DestinationOut> = all.into_iter().map(DestinationOut::from).collect();

    Ok(HttpResponse::Ok().json(out))
}

/// 여행지 단건 조회
///
/// # Endpoint
/// `GET /destinations/{id}`
#[get("/{id}")]
pub async fn get_destination(
    path: web::Path<String>,
    destinations: web::Data<RecordService<Destination>>,
) -> Result<HttpResponse, AppError> {
    let destination = destinations.get(&path).await?;

    Ok(HttpResponse::Ok().json(DestinationOut::from(destination)))
}

/// 여행지 생성
///
/// 소유자는 클라이언트 입력이 아니라 검증된 토큰 subject로 기록됩니다.
///
/// # Endpoint
/// `POST /destinations`
#[post("")]
pub async fn create_destination(
    payload: web::Json<DestinationIn>,
    user: AuthenticatedUser,
    destinations: web::Data<RecordService<Destination>>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let data = payload.into_inner();
    let destination = Destination::new(data.name, data.description, data.image_url, user.email);
    let created = destinations.create(destination).await?;

    Ok(HttpResponse::Created().json(DestinationOut::from(created)))
}

/// 여행지 부분 수정 (소유자 전용)
///
/// # Endpoint
/// `PATCH /destinations/{id}`
#[patch("/{id}")]
pub async fn update_destination(
    path: web::Path<String>,
    payload: web::Json<DestinationUpdate>,
    user: AuthenticatedUser,
    destinations: web::Data<RecordService<Destination>>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let updated = destinations
        .update_owned(&user.email, &path, payload.into_inner().into_update_doc())
        .await?;

    Ok(HttpResponse::Ok().json(DestinationOut::from(updated)))
}

/// 여행지 삭제 (소유자 전용)
///
/// # Endpoint
/// `DELETE /destinations/{id}`
#[delete("/{id}")]
pub async fn delete_destination(
    path: web::Path<String>,
    user: AuthenticatedUser,
    destinations: web::Data<RecordService<Destination>>,
) -> Result<HttpResponse, AppError> {
    destinations.delete_owned(&user.email, &path).await?;

    Ok(HttpResponse::NoContent().finish())
}
