//! 여행지 요청/응답 DTO

use crate::domain::entities::Destination;
use chrono::{DateTime, Utc};
use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 여행지 생성 요청
#[derive(Debug, Deserialize, Validate)]
pub struct DestinationIn {
    #[validate(length(min = 1, message = "이름을 입력해주세요"))]
    pub name: String,

    #[validate(length(min = 1, message = "설명을 입력해주세요"))]
    pub description: String,

    pub image_url: Option<String>,
}

/// 여행지 부분 수정 요청
///
/// 포함된 필드만 변경됩니다. `created_by`와 `created_at`은 수정 대상이
/// 될 수 없습니다.
#[derive(Debug, Deserialize, Validate)]
pub struct DestinationUpdate {
    #[validate(length(min = 1, message = "이름을 입력해주세요"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "설명을 입력해주세요"))]
    pub description: Option<String>,

    pub image_url: Option<String>,
}

impl DestinationUpdate {
    /// 존재하는 필드만 담은 `$set` 문서를 생성합니다.
    pub fn into_update_doc(self) -> Document {
        let mut update = doc! {};
        if let Some(name) = self.name {
            update.insert("name", name);
        }
        if let Some(description) = self.description {
            update.insert("description", description);
        }
        if let Some(image_url) = self.image_url {
            update.insert("image_url", image_url);
        }
        update
    }
}

/// 여행지 응답
#[derive(Debug, Serialize)]
pub struct DestinationOut {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<Destination> for DestinationOut {
    fn from(destination: Destination) -> Self {
        Self {
            id: destination
                .id
                .map(|id| id.to_hex())
                .unwrap_or_default(),
            name: destination.name,
            description: destination.description,
            image_url: destination.image_url,
            created_by: destination.created_by,
            created_at: destination.created_at.to_chrono(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_doc_contains_only_present_fields() {
        let update = DestinationUpdate {
            name: Some("Plitvice".to_string()),
            description: None,
            image_url: None,
        };

        let doc = update.into_update_doc();

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get_str("name").unwrap(), "Plitvice");
    }

    #[test]
    fn test_empty_update_produces_empty_doc() {
        let update = DestinationUpdate {
            name: None,
            description: None,
            image_url: None,
        };

        assert!(update.into_update_doc().is_empty());
    }
}
