//! Application state shared across handlers
//!
//! Everything in here is constructed once by the composition root and
//! read-only afterwards, so concurrent reuse across requests needs no
//! locking.

use std::sync::Arc;

use mongodb::Database;
use sponsorlink_core::{EmailVerifier, GeminiClient, SessionKey};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    db: Database,
    genai: GeminiClient,
    verifier: EmailVerifier,
    sessions: SessionKey,
}

impl AppState {
    pub fn new(
        db: Database,
        genai: GeminiClient,
        verifier: EmailVerifier,
        sessions: SessionKey,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                db,
                genai,
                verifier,
                sessions,
            }),
        }
    }

    pub fn db(&self) -> &Database {
        &self.inner.db
    }

    pub fn genai(&self) -> &GeminiClient {
        &self.inner.genai
    }

    pub fn verifier(&self) -> &EmailVerifier {
        &self.inner.verifier
    }

    pub fn sessions(&self) -> &SessionKey {
        &self.inner.sessions
    }
}
