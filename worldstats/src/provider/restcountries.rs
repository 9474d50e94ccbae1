//! REST Countries provider.
//!
//! # URL Pattern
//!
//! - All countries: `{base}/all?fields=...`
//! - One country: `{base}/alpha/{code}`
//! - Several countries: `{base}/alpha?codes={a},{b},{c}`
//!
//! Lookups by code return a JSON array (occasionally a bare object); the full
//! listing returns an array. Records are decoded one by one so a single
//! malformed entry never fails the whole response.

use serde_json::Value;

use crate::country::{decode_record, decode_records, CountryCollection, CountryRecord};
use crate::provider::{
    validate_code, AsyncCountryProvider, AsyncHttpClient, CountryProvider, HttpClient,
    ProviderError,
};

/// Public REST Countries v3.1 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Fields requested for the full listing.
const LIST_FIELDS: &str = "name,cca3,continents,region,subregion,area,population,flags,borders";

const PROVIDER_NAME: &str = "REST Countries";

/// URL construction shared by the blocking and async providers.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Endpoints {
    base_url: String,
}

impl Endpoints {
    fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn all(&self) -> String {
        format!("{}/all?fields={}", self.base_url, LIST_FIELDS)
    }

    fn by_code(&self, code: &str) -> Result<String, ProviderError> {
        validate_code(code)?;
        Ok(format!("{}/alpha/{}", self.base_url, code))
    }

    fn by_codes(&self, codes: &[String]) -> Result<String, ProviderError> {
        for code in codes {
            validate_code(code)?;
        }
        Ok(format!("{}/alpha?codes={}", self.base_url, codes.join(",")))
    }
}

fn parse_json(body: &[u8]) -> Result<Value, ProviderError> {
    serde_json::from_slice(body).map_err(|e| ProviderError::Decode(e.to_string()))
}

/// Decode a body that must be a JSON array of country objects.
fn decode_list(body: &[u8]) -> Result<CountryCollection, ProviderError> {
    match parse_json(body)? {
        Value::Array(values) => Ok(CountryCollection::new(decode_records(values))),
        other => Err(ProviderError::Decode(format!(
            "expected a JSON array, got {}",
            json_kind(&other)
        ))),
    }
}

/// Decode a single-country lookup: the first decodable record of an array,
/// or a bare object.
fn decode_single(body: &[u8], code: &str) -> Result<CountryRecord, ProviderError> {
    let values = match parse_json(body)? {
        Value::Array(values) => values,
        object @ Value::Object(_) => vec![object],
        other => {
            return Err(ProviderError::Decode(format!(
                "expected a JSON array or object, got {}",
                json_kind(&other)
            )))
        }
    };

    values
        .into_iter()
        .find_map(decode_record)
        .ok_or_else(|| ProviderError::NotFound(code.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Blocking REST Countries provider.
///
/// # Example
///
/// ```ignore
/// use worldstats::provider::{CountryProvider, ReqwestClient, RestCountriesProvider};
///
/// let provider = RestCountriesProvider::new(ReqwestClient::new()?);
/// let countries = provider.fetch_all()?;
/// ```
pub struct RestCountriesProvider<C: HttpClient> {
    http_client: C,
    endpoints: Endpoints,
}

impl<C: HttpClient> RestCountriesProvider<C> {
    /// Creates a provider against the public endpoint.
    pub fn new(http_client: C) -> Self {
        Self::with_base_url(http_client, DEFAULT_BASE_URL)
    }

    /// Creates a provider against a custom endpoint (mirrors, test servers).
    pub fn with_base_url(http_client: C, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            endpoints: Endpoints::new(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.endpoints.base_url
    }
}

impl<C: HttpClient> CountryProvider for RestCountriesProvider<C> {
    fn fetch_all(&self) -> Result<CountryCollection, ProviderError> {
        let url = self.endpoints.all();
        tracing::debug!(url = %url, "Fetching all countries");

        let collection = decode_list(&self.http_client.get(&url)?)?;
        tracing::info!(count = collection.len(), provider = PROVIDER_NAME, "Fetched countries");
        Ok(collection)
    }

    fn fetch_by_code(&self, code: &str) -> Result<CountryRecord, ProviderError> {
        let url = self.endpoints.by_code(code)?;
        tracing::debug!(url = %url, "Fetching country");

        decode_single(&self.http_client.get(&url)?, code)
    }

    fn fetch_by_codes(&self, codes: &[String]) -> Result<CountryCollection, ProviderError> {
        if codes.is_empty() {
            return Ok(CountryCollection::default());
        }
        let url = self.endpoints.by_codes(codes)?;
        tracing::debug!(url = %url, count = codes.len(), "Fetching countries by code");

        decode_list(&self.http_client.get(&url)?)
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }
}

/// Async REST Countries provider.
pub struct AsyncRestCountriesProvider<C: AsyncHttpClient> {
    http_client: C,
    endpoints: Endpoints,
}

impl<C: AsyncHttpClient> AsyncRestCountriesProvider<C> {
    pub fn new(http_client: C) -> Self {
        Self::with_base_url(http_client, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(http_client: C, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            endpoints: Endpoints::new(base_url),
        }
    }
}

impl<C: AsyncHttpClient> AsyncCountryProvider for AsyncRestCountriesProvider<C> {
    async fn fetch_all(&self) -> Result<CountryCollection, ProviderError> {
        let url = self.endpoints.all();
        let collection = decode_list(&self.http_client.get(&url).await?)?;
        tracing::info!(count = collection.len(), provider = PROVIDER_NAME, "Fetched countries");
        Ok(collection)
    }

    async fn fetch_by_code(&self, code: &str) -> Result<CountryRecord, ProviderError> {
        let url = self.endpoints.by_code(code)?;
        decode_single(&self.http_client.get(&url).await?, code)
    }

    async fn fetch_by_codes(&self, codes: &[String]) -> Result<CountryCollection, ProviderError> {
        if codes.is_empty() {
            return Ok(CountryCollection::default());
        }
        let url = self.endpoints.by_codes(codes)?;
        decode_list(&self.http_client.get(&url).await?)
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{MockAsyncHttpClient, MockHttpClient};

    const TWO_COUNTRIES: &str = r#"[
        {
            "name": {"common": "Germany", "official": "Federal Republic of Germany"},
            "cca3": "DEU",
            "continents": ["Europe"],
            "region": "Europe",
            "area": 357114.0,
            "population": 83240525,
            "borders": ["AUT", "FRA"]
        },
        {
            "name": {"common": "Japan"},
            "cca3": "JPN",
            "continents": ["Asia"],
            "area": 377930.0,
            "population": 125836021
        }
    ]"#;

    fn provider(body: &str) -> RestCountriesProvider<MockHttpClient> {
        RestCountriesProvider::with_base_url(MockHttpClient::with_body(body), "http://test/v3.1/")
    }

    #[test]
    fn test_endpoint_urls() {
        let endpoints = Endpoints::new("https://restcountries.com/v3.1");
        assert_eq!(
            endpoints.all(),
            "https://restcountries.com/v3.1/all?fields=name,cca3,continents,region,subregion,area,population,flags,borders"
        );
        assert_eq!(
            endpoints.by_code("DEU").unwrap(),
            "https://restcountries.com/v3.1/alpha/DEU"
        );
        assert_eq!(
            endpoints
                .by_codes(&["AUT".to_string(), "FRA".to_string()])
                .unwrap(),
            "https://restcountries.com/v3.1/alpha?codes=AUT,FRA"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        assert_eq!(provider("[]").base_url(), "http://test/v3.1");
    }

    #[test]
    fn test_fetch_all() {
        let provider = provider(TWO_COUNTRIES);
        let countries = provider.fetch_all().unwrap();

        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].name(), Some("Germany"));
        assert_eq!(countries[1].population, Some(125_836_021));
        assert!(provider.http_client.requested_urls()[0].starts_with("http://test/v3.1/all?fields="));
    }

    #[test]
    fn test_fetch_all_skips_malformed_records() {
        let body = r#"[{"name": {"common": "Good"}, "continents": ["Asia"]}, {"name": 42}]"#;
        let countries = provider(body).fetch_all().unwrap();
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].name(), Some("Good"));
    }

    #[test]
    fn test_fetch_all_rejects_non_array() {
        let result = provider(r#"{"status": 500}"#).fetch_all();
        assert!(matches!(result, Err(ProviderError::Decode(msg)) if msg.contains("object")));

        let result = provider("not json").fetch_all();
        assert!(matches!(result, Err(ProviderError::Decode(_))));
    }

    #[test]
    fn test_fetch_by_code() {
        let provider = provider(TWO_COUNTRIES);
        let record = provider.fetch_by_code("DEU").unwrap();
        assert_eq!(record.code.as_deref(), Some("DEU"));
        assert_eq!(provider.http_client.requested_urls(), vec!["http://test/v3.1/alpha/DEU"]);
    }

    #[test]
    fn test_fetch_by_code_accepts_object() {
        let record = provider(r#"{"name": {"common": "Chile"}}"#)
            .fetch_by_code("CL")
            .unwrap();
        assert_eq!(record.name(), Some("Chile"));
    }

    #[test]
    fn test_fetch_by_code_empty_array_is_not_found() {
        let result = provider("[]").fetch_by_code("ZZZ");
        assert_eq!(result, Err(ProviderError::NotFound("ZZZ".to_string())));
    }

    #[test]
    fn test_invalid_code_makes_no_request() {
        let provider = provider(TWO_COUNTRIES);
        assert!(matches!(
            provider.fetch_by_code("../all"),
            Err(ProviderError::InvalidCode(_))
        ));
        assert!(matches!(
            provider.fetch_by_codes(&["AUT".to_string(), "toolong".to_string()]),
            Err(ProviderError::InvalidCode(code)) if code == "toolong"
        ));
        assert!(provider.http_client.requested_urls().is_empty());
    }

    #[test]
    fn test_fetch_by_codes_empty_makes_no_request() {
        let provider = provider(TWO_COUNTRIES);
        let countries = provider.fetch_by_codes(&[]).unwrap();
        assert!(countries.is_empty());
        assert!(provider.http_client.requested_urls().is_empty());
    }

    #[test]
    fn test_http_error_propagates() {
        let provider = RestCountriesProvider::new(MockHttpClient::new(Err(ProviderError::Http(
            "Connection refused".to_string(),
        ))));
        match provider.fetch_all() {
            Err(ProviderError::Http(msg)) => assert!(msg.contains("Connection refused")),
            other => panic!("Expected Http error, got {:?}", other),
        }
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(provider("[]").name(), "REST Countries");
    }

    // Async provider tests

    #[tokio::test]
    async fn test_async_fetch_all() {
        let provider = AsyncRestCountriesProvider::new(MockAsyncHttpClient {
            response: Ok(TWO_COUNTRIES.as_bytes().to_vec()),
        });
        let countries = provider.fetch_all().await.unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(provider.name(), "REST Countries");
    }

    #[tokio::test]
    async fn test_async_fetch_by_codes_empty() {
        let provider = AsyncRestCountriesProvider::new(MockAsyncHttpClient {
            response: Err(ProviderError::Http("unreachable".to_string())),
        });
        assert!(provider.fetch_by_codes(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_async_invalid_code() {
        let provider = AsyncRestCountriesProvider::new(MockAsyncHttpClient {
            response: Ok(b"[]".to_vec()),
        });
        assert!(matches!(
            provider.fetch_by_code("x").await,
            Err(ProviderError::InvalidCode(_))
        ));
    }
}
