//! Country data provider abstraction
//!
//! This module provides traits and implementations for fetching country
//! records from a REST service.
//!
//! ```ignore
//! use worldstats::provider::{CountryProvider, ReqwestClient, RestCountriesProvider};
//!
//! let http_client = ReqwestClient::with_timeout(10)?;
//! let provider = RestCountriesProvider::new(http_client);
//! let countries = provider.fetch_all()?;
//! ```

mod http;
mod restcountries;
mod types;

pub use http::{AsyncHttpClient, AsyncReqwestClient, HttpClient, ReqwestClient, DEFAULT_TIMEOUT_SECS};
pub use restcountries::{AsyncRestCountriesProvider, RestCountriesProvider, DEFAULT_BASE_URL};
pub use types::{validate_code, AsyncCountryProvider, CountryProvider, ProviderError};

#[cfg(test)]
pub use http::tests::{MockAsyncHttpClient, MockHttpClient};
