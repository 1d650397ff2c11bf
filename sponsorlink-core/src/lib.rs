//! sponsorlink-core: domain logic for the brand-influencer marketplace
//!
//! Everything here is HTTP-framework-free:
//! - Configuration loaded from the environment
//! - Generative-model client (listing copy, contract text)
//! - Business email verification via DNS MX lookup
//! - Signed session tokens

pub mod config;
pub mod email;
pub mod genai;
pub mod session;

pub use config::AppConfig;
pub use email::EmailVerifier;
pub use genai::GeminiClient;
pub use session::{Role, Session, SessionKey};
