//! Application repository
//!
//! Reads resolve the `brandId` reference inline (the document-store analog
//! of a join). There is no referential integrity between the collections, so
//! a dangling reference resolves to `None` rather than failing the read.

use std::collections::HashMap;

use bson::oid::ObjectId;
use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use super::{BrandRepo, DbError};
use crate::db;
use crate::models::{Application, Brand, CreateApplication};

/// An application paired with its resolved brand, if the brand still exists.
pub type Resolved = (Application, Option<Brand>);

pub struct ApplicationRepo<'a> {
    db: &'a Database,
}

impl<'a> ApplicationRepo<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Application> {
        self.db.collection(db::APPLICATIONS)
    }

    /// Submit an application. The brand must exist at submission time; its
    /// name is snapshotted onto the document and never synced afterwards.
    pub async fn create(
        &self,
        user_id: &str,
        brand_id: ObjectId,
        input: CreateApplication,
    ) -> Result<Resolved, DbError> {
        let brand = BrandRepo::new(self.db).get_required(brand_id).await?;
        let application = input.into_application(user_id, &brand);
        self.collection().insert_one(&application).await?;
        tracing::info!(
            application_id = %application.id,
            brand_id = %brand.id,
            "application submitted"
        );
        Ok((application, Some(brand)))
    }

    /// All applications for one user, brand references resolved. No matches
    /// is an empty list, not an error.
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Resolved>, DbError> {
        let applications = self
            .collection()
            .find(doc! { "userId": user_id })
            .await?
            .try_collect()
            .await?;
        self.resolve(applications).await
    }

    /// Every application across all users, references resolved. Callers must
    /// hold an admin session; the route layer enforces that.
    pub async fn list_all(&self) -> Result<Vec<Resolved>, DbError> {
        let applications = self.collection().find(doc! {}).await?.try_collect().await?;
        self.resolve(applications).await
    }

    /// Merge-semantics partial update built by
    /// `UpdateApplication::to_update_document`. Returns the post-update
    /// document, resolved; an unknown id mutates nothing.
    pub async fn update(&self, id: ObjectId, update: Document) -> Result<Resolved, DbError> {
        let updated = self
            .collection()
            .find_one_and_update(doc! { "_id": id }, update)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or(DbError::NotFound {
                resource: "application",
                id: id.to_hex(),
            })?;

        let brand = BrandRepo::new(self.db).get(updated.brand_id).await?;
        Ok((updated, brand))
    }

    pub async fn get(&self, id: ObjectId) -> Result<Application, DbError> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await?
            .ok_or(DbError::NotFound {
                resource: "application",
                id: id.to_hex(),
            })
    }

    /// Resolve brand references with a single `$in` query.
    async fn resolve(&self, applications: Vec<Application>) -> Result<Vec<Resolved>, DbError> {
        if applications.is_empty() {
            return Ok(Vec::new());
        }

        let brand_ids: Vec<ObjectId> = applications.iter().map(|app| app.brand_id).collect();
        let brands: Vec<Brand> = self
            .db
            .collection::<Brand>(db::BRANDS)
            .find(doc! { "_id": { "$in": brand_ids } })
            .await?
            .try_collect()
            .await?;

        let by_id: HashMap<ObjectId, Brand> =
            brands.into_iter().map(|brand| (brand.id, brand)).collect();

        Ok(applications
            .into_iter()
            .map(|app| {
                let brand = by_id.get(&app.brand_id).cloned();
                (app, brand)
            })
            .collect())
    }
}
