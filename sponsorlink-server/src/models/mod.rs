//! Data models for the marketplace
//!
//! Stored documents keep their wire-level camelCase field names so the BSON
//! in MongoDB matches the JSON the API speaks. Response DTOs are separate
//! types that render ObjectIds as hex strings and timestamps as RFC 3339.

pub mod application;
pub mod brand;
pub mod validation;

pub use application::{
    Application, ApplicationResponse, ApplicationStatus, CreateApplication, UpdateApplication,
};
pub use brand::{Brand, BrandResponse, BrandStatus, CreateBrand};
pub use validation::ValidationError;
