//! Squarespace Commerce API client implementation.
//!
//! Uses `reqwest` for HTTP with JSON bodies. Credentials, base URL and site
//! scope are fixed at construction, so one client is shared by every handler.

use std::sync::Arc;
use std::time::Duration;

use reqwest::RequestBuilder;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use commerce_bridge_core::{
    Address, CustomerId, Order, OrderId, Page, Pagination, Product, ProductId, ProductStock,
    ProductVariant,
};

use super::{OrderQuery, ProductQuery, SquarespaceError};
use crate::config::SquarespaceConfig;

/// Upper bound on every upstream request, connect through body.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Versioned path prefix shared by every commerce endpoint.
const API_PREFIX: [&str; 2] = ["1.0", "commerce"];

const USER_AGENT: &str = concat!("commerce-bridge/", env!("CARGO_PKG_VERSION"));

/// Maximum characters of an upstream body copied into logs.
const LOG_BODY_LIMIT: usize = 500;

// =============================================================================
// SquarespaceClient
// =============================================================================

/// Client for the Squarespace Commerce API.
///
/// Cheaply cloneable; holds no mutable state after construction.
#[derive(Clone)]
pub struct SquarespaceClient {
    inner: Arc<SquarespaceClientInner>,
}

struct SquarespaceClientInner {
    client: reqwest::Client,
    base_url: Url,
    site_id: Option<String>,
}

/// List envelope used by Squarespace for collection endpoints.
#[derive(serde::Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    result: Vec<T>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

impl<T> From<ListResponse<T>> for Page<T> {
    fn from(response: ListResponse<T>) -> Self {
        Self {
            items: response.result,
            pagination: response.pagination,
        }
    }
}

#[derive(Serialize)]
struct InventoryUpdate {
    quantity: i64,
}

impl SquarespaceClient {
    /// Create a new Squarespace API client.
    ///
    /// The access token is sent as the bearer credential when present,
    /// otherwise the API key. With neither, requests go out unauthenticated.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential is not a valid header value, the
    /// base URL cannot carry a path, or the HTTP client fails to build.
    pub fn new(config: &SquarespaceConfig) -> Result<Self, SquarespaceError> {
        if config.base_url.cannot_be_a_base() {
            return Err(SquarespaceError::Config(format!(
                "base URL {} cannot carry a path",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(credential) = config.credential() {
            let mut value =
                HeaderValue::from_str(&format!("Bearer {}", credential.expose_secret()))
                    .map_err(|e| {
                        SquarespaceError::Config(format!("invalid credential format: {e}"))
                    })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            inner: Arc::new(SquarespaceClientInner {
                client,
                base_url: config.base_url.clone(),
                site_id: config.site_id.clone(),
            }),
        })
    }

    /// The site the client scopes requests to by default.
    #[must_use]
    pub fn site_id(&self) -> Option<&str> {
        self.inner.site_id.as_deref()
    }

    /// Build an endpoint URL, site-scoped when a site is given or configured.
    ///
    /// Segments are percent-encoded, so caller IDs cannot alter the path.
    fn endpoint(
        &self,
        site_override: Option<&str>,
        segments: &[&str],
    ) -> Result<Url, SquarespaceError> {
        let site = site_override.or(self.inner.site_id.as_deref());
        let mut url = self.inner.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                SquarespaceError::Config("base URL cannot carry a path".to_string())
            })?;
            path.pop_if_empty().extend(API_PREFIX);
            if let Some(site) = site {
                path.extend(["sites", site]);
            }
            path.extend(segments);
        }
        Ok(url)
    }

    /// Send a request and fail on any status >= 400.
    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, SquarespaceError> {
        let response = request.send().await?;
        let status = response.status();

        if status.as_u16() >= 400 {
            let body = response.bytes().await.unwrap_or_default();
            tracing::warn!(
                status = %status,
                body = %String::from_utf8_lossy(&body).chars().take(LOG_BODY_LIMIT).collect::<String>(),
                "Squarespace API returned error status"
            );
            return Err(SquarespaceError::from_error_response(status.as_u16(), &body));
        }

        Ok(response)
    }

    /// Send a request and decode a JSON success body.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, SquarespaceError> {
        let response = self.send(request).await?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %String::from_utf8_lossy(&body).chars().take(LOG_BODY_LIMIT).collect::<String>(),
                "Failed to parse Squarespace response"
            );
            SquarespaceError::Decode(e)
        })
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// List products, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        query: &ProductQuery,
    ) -> Result<Page<Product>, SquarespaceError> {
        let url = self.endpoint(query.site_id.as_deref(), &["products"])?;
        let response: ListResponse<Product> =
            self.execute(self.inner.client.get(url).query(query)).await?;

        debug!(count = response.result.len(), "Fetched products");
        Ok(response.into())
    }

    /// Get a single product.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist (4xx), or the request
    /// or decoding fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, SquarespaceError> {
        let url = self.endpoint(None, &["products", id.as_str()])?;
        self.execute(self.inner.client.get(url)).await
    }

    /// Get the variants of a product.
    ///
    /// There is no dedicated endpoint; this fetches the product and returns
    /// its variant list.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_product`].
    pub async fn get_product_variants(
        &self,
        id: &ProductId,
    ) -> Result<Vec<ProductVariant>, SquarespaceError> {
        Ok(self.get_product(id).await?.variants)
    }

    // =========================================================================
    // Order Methods
    // =========================================================================

    /// List orders, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, query: &OrderQuery) -> Result<Page<Order>, SquarespaceError> {
        let url = self.endpoint(query.site_id.as_deref(), &["orders"])?;
        let response: ListResponse<Order> =
            self.execute(self.inner.client.get(url).query(query)).await?;

        debug!(count = response.result.len(), "Fetched orders");
        Ok(response.into())
    }

    /// Get a single order.
    ///
    /// # Errors
    ///
    /// Returns an error if the order does not exist (4xx), or the request or
    /// decoding fails.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn get_order(&self, id: &OrderId) -> Result<Order, SquarespaceError> {
        let url = self.endpoint(None, &["orders", id.as_str()])?;
        self.execute(self.inner.client.get(url)).await
    }

    /// Create an order and return it as stored upstream.
    ///
    /// Sent exactly once. A transport failure after the request left may
    /// still have created the order.
    ///
    /// # Errors
    ///
    /// Returns an error if upstream rejects the order or the request fails.
    #[instrument(skip(self, order), fields(line_items = order.line_items.len()))]
    pub async fn create_order(&self, order: &Order) -> Result<Order, SquarespaceError> {
        let url = self.endpoint(None, &["orders"])?;
        let created: Order = self
            .execute(self.inner.client.post(url).json(order))
            .await?;

        tracing::info!(
            order_id = created.id.as_ref().map_or("", |id| id.as_str()),
            "Order created"
        );
        Ok(created)
    }

    // =========================================================================
    // Inventory Methods
    // =========================================================================

    /// Get the stock level of a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist (4xx), or the request
    /// or decoding fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_inventory(&self, id: &ProductId) -> Result<ProductStock, SquarespaceError> {
        let url = self.endpoint(None, &["inventory", id.as_str()])?;
        self.execute(self.inner.client.get(url)).await
    }

    /// Set the stock quantity of a product.
    ///
    /// The success body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if upstream rejects the update or the request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn update_inventory(
        &self,
        id: &ProductId,
        quantity: i64,
    ) -> Result<(), SquarespaceError> {
        let url = self.endpoint(None, &["inventory", id.as_str()])?;
        self.send(
            self.inner
                .client
                .patch(url)
                .json(&InventoryUpdate { quantity }),
        )
        .await?;

        tracing::info!(quantity, "Inventory updated");
        Ok(())
    }

    // =========================================================================
    // Profile Methods
    // =========================================================================

    /// Get a customer profile's address.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile does not exist (4xx), or the request
    /// or decoding fails.
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn get_customer_profile(&self, id: &CustomerId) -> Result<Address, SquarespaceError> {
        let url = self.endpoint(None, &["profiles", id.as_str()])?;
        self.execute(self.inner.client.get(url)).await
    }

    // =========================================================================
    // Health
    // =========================================================================

    /// Check connectivity with a minimal product listing.
    ///
    /// Only the status matters; the body is not decoded.
    ///
    /// # Errors
    ///
    /// Returns an error if upstream is unreachable or answers with >= 400.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<(), SquarespaceError> {
        let url = self.endpoint(None, &["products"])?;
        self.send(self.inner.client.get(url).query(&[("limit", 1)]))
            .await?;
        Ok(())
    }
}
