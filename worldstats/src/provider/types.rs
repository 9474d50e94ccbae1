//! Core types for the country data provider.

use std::future::Future;

use thiserror::Error;

use crate::country::{CountryCollection, CountryRecord};

/// Errors raised while fetching country data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Transport failure or non-success HTTP status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Response body was not the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The requested country does not exist upstream.
    #[error("country not found: {0}")]
    NotFound(String),

    /// A country code was rejected before any request was made.
    #[error("invalid country code '{0}': expected 2 or 3 letters or digits")]
    InvalidCode(String),
}

/// Source of country records.
///
/// Implementations perform blocking I/O; all fetching happens before any
/// report is computed.
pub trait CountryProvider: Send + Sync {
    /// Fetch every known country.
    fn fetch_all(&self) -> Result<CountryCollection, ProviderError>;

    /// Fetch one country by its alpha-2 or alpha-3 code.
    fn fetch_by_code(&self, code: &str) -> Result<CountryRecord, ProviderError>;

    /// Fetch several countries in one request.
    ///
    /// An empty `codes` slice returns an empty collection without a request.
    fn fetch_by_codes(&self, codes: &[String]) -> Result<CountryCollection, ProviderError>;

    /// Human-readable provider name for logs.
    fn name(&self) -> &str;
}

/// Non-blocking counterpart of [`CountryProvider`] for hosts running a
/// tokio runtime.
pub trait AsyncCountryProvider: Send + Sync {
    fn fetch_all(&self) -> impl Future<Output = Result<CountryCollection, ProviderError>> + Send;

    fn fetch_by_code(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<CountryRecord, ProviderError>> + Send;

    fn fetch_by_codes(
        &self,
        codes: &[String],
    ) -> impl Future<Output = Result<CountryCollection, ProviderError>> + Send;

    fn name(&self) -> &str;
}

/// Check that `code` looks like an ISO alpha-2 or alpha-3 code.
pub fn validate_code(code: &str) -> Result<(), ProviderError> {
    let valid = (2..=3).contains(&code.len()) && code.chars().all(|c| c.is_ascii_alphanumeric());
    if valid {
        Ok(())
    } else {
        Err(ProviderError::InvalidCode(code.to_string()))
    }
}
