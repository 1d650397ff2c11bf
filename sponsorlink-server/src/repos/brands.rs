//! Brand repository

use bson::doc;
use bson::oid::ObjectId;
use futures::TryStreamExt;
use mongodb::{Collection, Database};

use super::DbError;
use crate::db;
use crate::models::Brand;

pub struct BrandRepo<'a> {
    db: &'a Database,
}

impl<'a> BrandRepo<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Brand> {
        self.db.collection(db::BRANDS)
    }

    /// Insert a validated brand document. The caller applied defaults via
    /// `CreateBrand::into_brand`; the stored document is returned as-is.
    pub async fn create(&self, brand: Brand) -> Result<Brand, DbError> {
        self.collection().insert_one(&brand).await?;
        tracing::info!(brand_id = %brand.id, name = %brand.name, "brand created");
        Ok(brand)
    }

    /// Every brand, unordered. Fresh query per call, no pagination.
    pub async fn list_all(&self) -> Result<Vec<Brand>, DbError> {
        let brands = self.collection().find(doc! {}).await?.try_collect().await?;
        Ok(brands)
    }

    pub async fn get(&self, id: ObjectId) -> Result<Option<Brand>, DbError> {
        Ok(self.collection().find_one(doc! { "_id": id }).await?)
    }

    /// Brand lookup that treats absence as an error, for paths where the
    /// reference must exist (application submission).
    pub async fn get_required(&self, id: ObjectId) -> Result<Brand, DbError> {
        self.get(id).await?.ok_or(DbError::NotFound {
            resource: "brand",
            id: id.to_hex(),
        })
    }
}
