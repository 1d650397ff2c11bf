//! Repository integration tests
//!
//! Run against a live MongoDB:
//!   MONGODB_URI=mongodb://localhost:27017 cargo test -p sponsorlink-server -- --ignored

use bson::oid::ObjectId;
use mongodb::{Client, Database};

use sponsorlink_server::models::{
    ApplicationStatus, BrandStatus, CreateApplication, CreateBrand, UpdateApplication,
};
use sponsorlink_server::repos::{ApplicationRepo, BrandRepo, DbError};

async fn test_db() -> Database {
    let uri = std::env::var("MONGODB_URI").expect("MONGODB_URI required");
    let client = Client::with_uri_str(&uri).await.expect("connect failed");
    // Fresh database per test run; dropped by the caller.
    client.database(&format!("sponsorlink_test_{}", ObjectId::new().to_hex()))
}

fn brand_input(name: &str) -> CreateBrand {
    CreateBrand {
        name: name.into(),
        description: "Sportswear campaign".into(),
        money_offered: "$5,000-$10,000".into(),
        image_url: "https://example.com/logo.png".into(),
        sponsorship_available: None,
    }
}

fn application_input(brand_id: ObjectId) -> CreateApplication {
    CreateApplication {
        brand_id: brand_id.to_hex(),
        message: "Love the product".into(),
        name: "Ada".into(),
        mobile: "+1-555-0100".into(),
        social_count: 12_000,
        social_link: "https://social.example/ada".into(),
    }
}

#[tokio::test]
#[ignore = "requires MongoDB"]
async fn brand_create_then_list_applies_defaults() {
    let db = test_db().await;
    let repo = BrandRepo::new(&db);

    let created = repo
        .create(brand_input("Nike").into_brand().unwrap())
        .await
        .unwrap();

    let listed = repo.list_all().await.unwrap();
    let found = listed
        .iter()
        .find(|brand| brand.id == created.id)
        .expect("created brand missing from list");

    assert!(found.sponsorship_available);
    assert_eq!(found.status, BrandStatus::Waiting);
    assert_eq!(found.name, "Nike");

    db.drop().await.unwrap();
}

#[tokio::test]
#[ignore = "requires MongoDB"]
async fn application_create_resolves_brand_for_user() {
    let db = test_db().await;
    let brand = BrandRepo::new(&db)
        .create(brand_input("Nike").into_brand().unwrap())
        .await
        .unwrap();

    let repo = ApplicationRepo::new(&db);
    let (created, _) = repo
        .create("user-1", brand.id, application_input(brand.id))
        .await
        .unwrap();
    assert_eq!(created.brand_name, "Nike");

    let mine = repo.list_by_user("user-1").await.unwrap();
    assert_eq!(mine.len(), 1);
    let (app, resolved_brand) = &mine[0];
    assert_eq!(app.id, created.id);
    assert_eq!(resolved_brand.as_ref().unwrap().id, brand.id);

    // Other users see nothing, and that is not an error.
    assert!(repo.list_by_user("user-2").await.unwrap().is_empty());

    db.drop().await.unwrap();
}

#[tokio::test]
#[ignore = "requires MongoDB"]
async fn create_against_missing_brand_is_not_found() {
    let db = test_db().await;
    let repo = ApplicationRepo::new(&db);
    let missing = ObjectId::new();

    let err = repo
        .create("user-1", missing, application_input(missing))
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::NotFound { resource: "brand", .. }));

    db.drop().await.unwrap();
}

#[tokio::test]
#[ignore = "requires MongoDB"]
async fn status_only_update_preserves_contact_fields() {
    let db = test_db().await;
    let brand = BrandRepo::new(&db)
        .create(brand_input("Nike").into_brand().unwrap())
        .await
        .unwrap();

    let repo = ApplicationRepo::new(&db);
    let (created, _) = repo
        .create("user-1", brand.id, application_input(brand.id))
        .await
        .unwrap();

    let update = UpdateApplication {
        status: Some(ApplicationStatus::Accepted),
        ..Default::default()
    }
    .to_update_document()
    .unwrap();

    let (updated, _) = repo.update(created.id, update).await.unwrap();
    assert_eq!(updated.status, ApplicationStatus::Accepted);
    assert_eq!(updated.name, "Ada");
    assert_eq!(updated.mobile, "+1-555-0100");
    assert_eq!(updated.social_count, 12_000);
    assert_eq!(updated.social_link, "https://social.example/ada");

    db.drop().await.unwrap();
}

#[tokio::test]
#[ignore = "requires MongoDB"]
async fn update_on_unknown_id_mutates_nothing() {
    let db = test_db().await;
    let brand = BrandRepo::new(&db)
        .create(brand_input("Nike").into_brand().unwrap())
        .await
        .unwrap();

    let repo = ApplicationRepo::new(&db);
    let (created, _) = repo
        .create("user-1", brand.id, application_input(brand.id))
        .await
        .unwrap();

    let update = UpdateApplication {
        status: Some(ApplicationStatus::Rejected),
        ..Default::default()
    }
    .to_update_document()
    .unwrap();

    let err = repo.update(ObjectId::new(), update).await.unwrap_err();
    assert!(matches!(
        err,
        DbError::NotFound { resource: "application", .. }
    ));

    let untouched = repo.get(created.id).await.unwrap();
    assert_eq!(untouched.status, ApplicationStatus::Pending);

    db.drop().await.unwrap();
}

#[tokio::test]
#[ignore = "requires MongoDB"]
async fn dangling_brand_reference_resolves_to_none() {
    let db = test_db().await;
    let brand = BrandRepo::new(&db)
        .create(brand_input("Nike").into_brand().unwrap())
        .await
        .unwrap();

    let repo = ApplicationRepo::new(&db);
    repo.create("user-1", brand.id, application_input(brand.id))
        .await
        .unwrap();

    // Remove the brand out from under the application; reads tolerate it.
    db.collection::<bson::Document>("brands")
        .delete_one(bson::doc! { "_id": brand.id })
        .await
        .unwrap();

    let mine = repo.list_by_user("user-1").await.unwrap();
    assert_eq!(mine.len(), 1);
    assert!(mine[0].1.is_none());
    assert_eq!(mine[0].0.brand_name, "Nike");

    db.drop().await.unwrap();
}
