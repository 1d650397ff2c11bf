//! Brand deal documents

use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{required, ValidationError};

/// Moderation state of a brand listing.
///
/// No transition endpoint exists yet; listings keep their default until a
/// moderation surface is specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandStatus {
    Accepted,
    #[default]
    Waiting,
    Rejected,
}

/// A sponsorship opportunity listed by a brand, as stored in the `brands`
/// collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub description: String,
    /// Free-text compensation range, e.g. "$5,000-$10,000".
    pub money_offered: String,
    pub sponsorship_available: bool,
    pub image_url: String,
    pub status: BrandStatus,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrand {
    pub name: String,
    pub description: String,
    pub money_offered: String,
    pub image_url: String,
    /// Defaults to true when omitted.
    pub sponsorship_available: Option<bool>,
}

impl CreateBrand {
    /// Validate and convert into a storable document with defaults applied.
    pub fn into_brand(self) -> Result<Brand, ValidationError> {
        required("name", &self.name)?;
        required("description", &self.description)?;
        required("moneyOffered", &self.money_offered)?;
        required("imageUrl", &self.image_url)?;

        Ok(Brand {
            id: ObjectId::new(),
            name: self.name,
            description: self.description,
            money_offered: self.money_offered,
            sponsorship_available: self.sponsorship_available.unwrap_or(true),
            image_url: self.image_url,
            status: BrandStatus::default(),
            created_at: Utc::now(),
        })
    }
}

/// Brand as rendered in API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub money_offered: String,
    pub sponsorship_available: bool,
    pub image_url: String,
    pub status: BrandStatus,
    pub created_at: String,
}

impl From<Brand> for BrandResponse {
    fn from(brand: Brand) -> Self {
        Self {
            id: brand.id.to_hex(),
            name: brand.name,
            description: brand.description,
            money_offered: brand.money_offered,
            sponsorship_available: brand.sponsorship_available,
            image_url: brand.image_url,
            status: brand.status,
            created_at: brand.created_at.to_rfc3339(),
        }
    }
}
