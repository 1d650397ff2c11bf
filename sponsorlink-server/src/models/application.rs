//! Sponsorship application documents

use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use bson::{doc, Document};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::brand::{Brand, BrandResponse};
use super::validation::{required, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

/// An influencer's submission for a brand deal, as stored in the
/// `applications` collection.
///
/// `brand_name` is a snapshot of the brand's name at submission time and is
/// intentionally never synced with later brand edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Opaque identity from the verified session, not a local user reference.
    pub user_id: String,
    pub brand_id: ObjectId,
    pub brand_name: String,
    pub message: String,
    pub status: ApplicationStatus,
    pub name: String,
    pub mobile: String,
    pub social_count: i64,
    pub social_link: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// Create request. The applicant's identity comes from the session, and the
/// brand name snapshot is resolved server-side, so neither appears here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplication {
    /// Hex id of the brand being applied to.
    pub brand_id: String,
    pub message: String,
    pub name: String,
    pub mobile: String,
    pub social_count: i64,
    pub social_link: String,
}

impl CreateApplication {
    pub fn validate(&self) -> Result<ObjectId, ValidationError> {
        let brand_id =
            ObjectId::parse_str(&self.brand_id).map_err(|_| ValidationError::InvalidFormat {
                field: "brandId",
                reason: "not a valid object id",
            })?;
        required("message", &self.message)?;
        required("name", &self.name)?;
        required("mobile", &self.mobile)?;
        required("socialLink", &self.social_link)?;
        if self.social_count < 0 {
            return Err(ValidationError::Negative {
                field: "socialCount",
            });
        }
        Ok(brand_id)
    }

    /// Build the storable document. `brand_name` is the server-resolved
    /// snapshot of the referenced brand's name.
    pub fn into_application(self, user_id: &str, brand: &Brand) -> Application {
        Application {
            id: ObjectId::new(),
            user_id: user_id.to_string(),
            brand_id: brand.id,
            brand_name: brand.name.clone(),
            message: self.message,
            status: ApplicationStatus::default(),
            name: self.name,
            mobile: self.mobile,
            social_count: self.social_count,
            social_link: self.social_link,
            created_at: Utc::now(),
        }
    }
}

/// Partial update: merge semantics, absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplication {
    pub status: Option<ApplicationStatus>,
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub social_count: Option<i64>,
    pub social_link: Option<String>,
}

impl UpdateApplication {
    /// Build a `$set` document containing only the fields present in the
    /// request. Errors when nothing would change.
    pub fn to_update_document(&self) -> Result<Document, ValidationError> {
        let mut set = Document::new();
        if let Some(status) = self.status {
            // lowercase wire form via serde
            set.insert(
                "status",
                bson::to_bson(&status).unwrap_or_else(|_| bson::Bson::Null),
            );
        }
        if let Some(name) = &self.name {
            required("name", name)?;
            set.insert("name", name.as_str());
        }
        if let Some(mobile) = &self.mobile {
            required("mobile", mobile)?;
            set.insert("mobile", mobile.as_str());
        }
        if let Some(count) = self.social_count {
            if count < 0 {
                return Err(ValidationError::Negative {
                    field: "socialCount",
                });
            }
            set.insert("socialCount", count);
        }
        if let Some(link) = &self.social_link {
            required("socialLink", link)?;
            set.insert("socialLink", link.as_str());
        }

        if set.is_empty() {
            return Err(ValidationError::Empty { field: "update" });
        }
        Ok(doc! { "$set": set })
    }
}

/// Application as rendered in API responses, with the brand reference
/// resolved inline. A dangling reference yields `brand: null`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    pub id: String,
    pub user_id: String,
    pub brand_id: String,
    pub brand_name: String,
    pub message: String,
    pub status: ApplicationStatus,
    pub name: String,
    pub mobile: String,
    pub social_count: i64,
    pub social_link: String,
    pub created_at: String,
    pub brand: Option<BrandResponse>,
}

impl ApplicationResponse {
    pub fn resolved(application: Application, brand: Option<Brand>) -> Self {
        Self {
            id: application.id.to_hex(),
            user_id: application.user_id,
            brand_id: application.brand_id.to_hex(),
            brand_name: application.brand_name,
            message: application.message,
            status: application.status,
            name: application.name,
            mobile: application.mobile,
            social_count: application.social_count,
            social_link: application.social_link,
            created_at: application.created_at.to_rfc3339(),
            brand: brand.map(BrandResponse::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BrandStatus;

    fn create_input() -> CreateApplication {
        CreateApplication {
            brand_id: ObjectId::new().to_hex(),
            message: "Love the product".into(),
            name: "Ada".into(),
            mobile: "+1-555-0100".into(),
            social_count: 12_000,
            social_link: "https://social.example/ada".into(),
        }
    }

    fn brand() -> Brand {
        Brand {
            id: ObjectId::new(),
            name: "Nike".into(),
            description: "Sportswear".into(),
            money_offered: "$5k".into(),
            sponsorship_available: true,
            image_url: "https://example.com/nike.png".into(),
            status: BrandStatus::Waiting,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn create_snapshots_brand_name() {
        let brand = brand();
        let app = create_input().into_application("user-1", &brand);
        assert_eq!(app.brand_name, "Nike");
        assert_eq!(app.brand_id, brand.id);
        assert_eq!(app.user_id, "user-1");
        assert_eq!(app.status, ApplicationStatus::Pending);
    }

    #[test]
    fn invalid_brand_id_rejected() {
        let input = CreateApplication {
            brand_id: "not-an-id".into(),
            ..create_input()
        };
        assert!(matches!(
            input.validate(),
            Err(ValidationError::InvalidFormat { field: "brandId", .. })
        ));
    }

    #[test]
    fn negative_social_count_rejected() {
        let input = CreateApplication {
            social_count: -1,
            ..create_input()
        };
        assert!(matches!(
            input.validate(),
            Err(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn status_only_update_touches_only_status() {
        let update = UpdateApplication {
            status: Some(ApplicationStatus::Accepted),
            ..Default::default()
        };
        let doc = update.to_update_document().unwrap();
        let set = doc.get_document("$set").unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get_str("status").unwrap(), "accepted");
    }

    #[test]
    fn full_update_sets_every_field() {
        let update = UpdateApplication {
            status: Some(ApplicationStatus::Rejected),
            name: Some("Grace".into()),
            mobile: Some("+1-555-0101".into()),
            social_count: Some(500),
            social_link: Some("https://social.example/grace".into()),
        };
        let doc = update.to_update_document().unwrap();
        let set = doc.get_document("$set").unwrap();
        assert_eq!(set.len(), 5);
        assert_eq!(set.get_i64("socialCount").unwrap(), 500);
    }

    #[test]
    fn empty_update_rejected() {
        let err = UpdateApplication::default().to_update_document().unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "update" }));
    }

    #[test]
    fn response_renders_hex_ids_and_null_brand() {
        let app = create_input().into_application("user-1", &brand());
        let json = serde_json::to_value(ApplicationResponse::resolved(app, None)).unwrap();
        assert_eq!(json["brand"], serde_json::Value::Null);
        assert_eq!(json["status"], "pending");
        assert_eq!(json["id"].as_str().unwrap().len(), 24);
        assert_eq!(json["brandId"].as_str().unwrap().len(), 24);
    }
}
