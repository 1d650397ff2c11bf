//! Business email verification
//!
//! A yes/no gate: the domain after `@` must publish at least one MX record.
//! Input validation happens before any DNS I/O, and nothing about the
//! verification result is persisted here.

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::TokioAsyncResolver;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("email is required")]
    MissingEmail,

    #[error("'{0}' is not a valid email address")]
    InvalidAddress(String),

    #[error("domain '{0}' has no MX records")]
    NoMxRecords(String),

    #[error("DNS lookup failed: {0}")]
    Resolver(ResolveError),
}

/// MX-record verifier backed by the system resolver configuration.
#[derive(Clone)]
pub struct EmailVerifier {
    resolver: TokioAsyncResolver,
}

impl EmailVerifier {
    /// Construct with default upstream resolvers. Built once at startup and
    /// shared; lookups are independent per call.
    pub fn new() -> Self {
        Self {
            resolver: TokioAsyncResolver::tokio(
                ResolverConfig::default(),
                ResolverOpts::default(),
            ),
        }
    }

    /// Verify that the address's domain can receive mail.
    pub async fn verify(&self, email: &str) -> Result<(), VerifyError> {
        let domain = domain_of(email)?;

        match self.resolver.mx_lookup(domain).await {
            Ok(lookup) if lookup.iter().next().is_some() => {
                tracing::debug!(domain, "MX records found");
                Ok(())
            }
            Ok(_) => Err(VerifyError::NoMxRecords(domain.to_string())),
            Err(err) => match err.kind() {
                ResolveErrorKind::NoRecordsFound { .. } => {
                    Err(VerifyError::NoMxRecords(domain.to_string()))
                }
                _ => Err(VerifyError::Resolver(err)),
            },
        }
    }
}

impl Default for EmailVerifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the domain part of an email address.
///
/// Rejects empty input and addresses without a non-empty local part and
/// domain around a single trailing `@` split.
pub fn domain_of(email: &str) -> Result<&str, VerifyError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(VerifyError::MissingEmail);
    }

    match email.rsplit_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') && !domain.ends_with('.') => {
            Ok(domain)
        }
        _ => Err(VerifyError::InvalidAddress(email.to_string())),
    }
}
