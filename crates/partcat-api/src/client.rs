//! HTTP client wrapper for the catalog REST service.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, Error, Result};
use crate::models::{ProductKind, ProductRecord};
use crate::retry::{execute_with_retry, RetryConfig};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the catalog REST service.
///
/// The service exposes a read-only product listing backed by its key-value
/// store: `GET /products` (optionally `?product_type=<kind>`) and
/// `GET /products/{id}`.
///
/// # Example
///
/// ```no_run
/// use partcat_api::client::CatalogClient;
/// use partcat_api::models::ProductKind;
///
/// # async fn example() -> partcat_api::error::Result<()> {
/// let client = CatalogClient::new("https://catalog.example.com")?;
/// let motors = client.list_products(Some(ProductKind::Motor)).await?;
/// println!("{} motors", motors.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http_client: reqwest::Client,
    base_url: String,
    retry: RetryConfig,
}

/// Query parameters for the product listing endpoint.
#[derive(Serialize)]
struct ListQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    product_type: Option<&'a str>,
}

impl CatalogClient {
    /// Creates a new client for the service at `base_url`.
    ///
    /// A trailing slash on the URL is tolerated and stripped.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self {
            http_client,
            base_url,
            retry: RetryConfig::default(),
        })
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Overrides the maximum number of retry attempts for rate-limited
    /// requests.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.retry.max_retries = max_retries;
        self
    }

    /// Lists products, optionally restricted to one kind.
    pub async fn list_products(&self, kind: Option<ProductKind>) -> Result<Vec<ProductRecord>> {
        let query = ListQuery {
            product_type: kind.map(|k| k.as_str()),
        };
        let query_string = serde_urlencoded::to_string(&query)?;

        let endpoint = if query_string.is_empty() {
            "/products".to_string()
        } else {
            format!("/products?{}", query_string)
        };
        self.get(&endpoint).await
    }

    /// Fetches a single product by identifier.
    pub async fn get_product(&self, id: &str) -> Result<ProductRecord> {
        match self.get(&format!("/products/{}", id)).await {
            Err(Error::Api(ApiError::NotFound { .. })) => Err(Error::Api(ApiError::NotFound {
                resource: "product".to_string(),
                id: id.to_string(),
            })),
            other => other,
        }
    }

    /// Performs a GET request to the given endpoint with retry.
    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let http_client = self.http_client.clone();

        execute_with_retry(&self.retry, move || {
            let http_client = http_client.clone();
            let url = url.clone();
            async move { Ok(http_client.get(&url).send().await?) }
        })
        .await
    }
}
