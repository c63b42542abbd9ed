//! Integration test support for the commerce bridge.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p commerce-bridge-integration-tests
//! ```
//!
//! No network access or credentials are needed. Each test starts a
//! [`StubUpstream`] on `127.0.0.1:0` that stands in for the Squarespace
//! Commerce API and records every request it receives. The bridge router is
//! then driven in-process with `tower::ServiceExt::oneshot`.
//!
//! # Example
//!
//! ```rust,ignore
//! let stub = StubUpstream::start().await;
//! stub.on(Method::GET, "/1.0/commerce/sites/site-1/orders/o1", 200, json!({"id": "o1"}));
//!
//! let app = bridge_app(&stub, Some("token"), Some("site-1"));
//! let (status, body) = send(app, get("/api/v1/orders/o1")).await;
//! assert_eq!(status, StatusCode::OK);
//! assert_eq!(stub.requests().len(), 1);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};

use axum::{
    Router,
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, Method, Request, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use commerce_bridge::{AppState, BridgeConfig, SquarespaceClient, router};

/// One request as seen by the stub upstream.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub user_agent: Option<String>,
    pub body: Option<Value>,
}

type EchoFn = dyn Fn(Value) -> Value + Send + Sync;

#[derive(Clone)]
enum Responder {
    Fixed { status: StatusCode, body: String },
    Echo { status: StatusCode, transform: Arc<EchoFn> },
}

#[derive(Default)]
struct StubState {
    routes: Mutex<HashMap<(Method, String), Responder>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// In-process stand-in for the Squarespace Commerce API.
///
/// Unregistered routes answer 404 with a Squarespace-style error body.
#[derive(Clone)]
pub struct StubUpstream {
    addr: SocketAddr,
    state: Arc<StubState>,
}

impl StubUpstream {
    /// Bind to an ephemeral local port and start serving.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    #[allow(clippy::unwrap_used)]
    pub async fn start() -> Self {
        let state = Arc::new(StubState::default());
        let app = Router::new().fallback(handle).with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, state }
    }

    /// Base URL to configure the bridge with.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Answer `method path` with a fixed JSON body.
    pub fn on(&self, method: Method, path: &str, status: u16, body: Value) {
        self.on_raw(method, path, status, &body.to_string());
    }

    /// Answer `method path` with a fixed raw body.
    ///
    /// # Panics
    ///
    /// Panics if `status` is not a valid HTTP status code.
    #[allow(clippy::unwrap_used)]
    pub fn on_raw(&self, method: Method, path: &str, status: u16, body: &str) {
        self.register(
            method,
            path,
            Responder::Fixed {
                status: StatusCode::from_u16(status).unwrap(),
                body: body.to_string(),
            },
        );
    }

    /// Answer `method path` with the request body passed through `transform`.
    ///
    /// # Panics
    ///
    /// Panics if `status` is not a valid HTTP status code.
    #[allow(clippy::unwrap_used)]
    pub fn echo(
        &self,
        method: Method,
        path: &str,
        status: u16,
        transform: impl Fn(Value) -> Value + Send + Sync + 'static,
    ) {
        self.register(
            method,
            path,
            Responder::Echo {
                status: StatusCode::from_u16(status).unwrap(),
                transform: Arc::new(transform),
            },
        );
    }

    fn register(&self, method: Method, path: &str, responder: Responder) {
        self.state
            .routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((method, path.to_string()), responder);
    }

    /// Every request received so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

async fn handle(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };
    let request_body = serde_json::from_slice::<Value>(&body).ok();

    state
        .requests
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(RecordedRequest {
            method: method.clone(),
            path: uri.path().to_string(),
            query: uri.query().map(String::from),
            authorization: header_value(header::AUTHORIZATION),
            user_agent: header_value(header::USER_AGENT),
            body: request_body.clone(),
        });

    let responder = state
        .routes
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&(method.clone(), uri.path().to_string()))
        .cloned();

    match responder {
        Some(Responder::Fixed { status, body }) => {
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        Some(Responder::Echo { status, transform }) => {
            let echoed = transform(request_body.unwrap_or(Value::Null));
            (status, axum::Json(echoed)).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({
                "type": "NOT_FOUND",
                "message": format!("no stub for {method} {}", uri.path()),
            })),
        )
            .into_response(),
    }
}

/// Squarespace-shaped product with two variants.
#[must_use]
pub fn sample_product(id: &str) -> Value {
    json!({
        "id": id,
        "type": "PHYSICAL",
        "variantId": "var-1",
        "categories": ["prints"],
        "tags": ["limited"],
        "products": [
            {
                "id": "var-1",
                "sku": "PRINT-A4",
                "name": "A4 print",
                "pricing": {"basePrice": {"value": "25.00", "currency": "USD"}, "onSale": false},
                "stock": {"trackInventory": true, "quantity": 7, "allowBackorder": false, "unlimited": false},
                "visibility": "VISIBLE",
                "variants": [{"name": "Size", "option": "A4"}]
            },
            {
                "id": "var-2",
                "sku": "PRINT-A3",
                "name": "A3 print",
                "pricing": {"basePrice": {"value": "40.00", "currency": "USD"}, "onSale": false},
                "stock": {"trackInventory": true, "quantity": 0, "allowBackorder": true, "unlimited": false},
                "visibility": "VISIBLE",
                "variants": [{"name": "Size", "option": "A3"}]
            }
        ],
        "systemData": {"createdOn": 1_700_000_000_000_i64, "modifiedOn": 1_700_000_500_000_i64, "publishedOn": 1_700_000_100_000_i64}
    })
}

/// Order payload as a checkout client would submit it.
#[must_use]
pub fn sample_order_submission() -> Value {
    json!({
        "email": "buyer@example.com",
        "billingAddress": {
            "firstName": "Ada",
            "lastName": "Lovelace",
            "addressLine1": "12 Analytical Row",
            "city": "London",
            "postalCode": "N1 9GU",
            "country": "GB"
        },
        "lineItems": [
            {
                "productId": "prod-1",
                "variantId": "var-1",
                "sku": "PRINT-A4",
                "productName": "A4 print",
                "quantity": 2,
                "unitPrice": {"value": "25.00", "currency": "USD"},
                "totalPrice": {"value": "50.00", "currency": "USD"}
            }
        ],
        "status": "PENDING",
        "fulfillments": []
    })
}

/// Bridge configuration pointing at the stub.
///
/// # Panics
///
/// Panics if the stub URL is rejected by the configuration loader.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn bridge_config(stub: &StubUpstream, token: Option<&str>, site: Option<&str>) -> BridgeConfig {
    let base_url = stub.base_url();
    let token = token.map(String::from);
    let site = site.map(String::from);
    BridgeConfig::from_lookup(|key| match key {
        "SQUARESPACE_BASE_URL" => Some(base_url.clone()),
        "SQUARESPACE_ACCESS_TOKEN" => token.clone(),
        "SQUARESPACE_SITE_ID" => site.clone(),
        _ => None,
    })
    .unwrap()
}

/// Full bridge router wired to the stub.
///
/// # Panics
///
/// Panics if the application state cannot be built.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn bridge_app(stub: &StubUpstream, token: Option<&str>, site: Option<&str>) -> Router {
    router(AppState::new(bridge_config(stub, token, site)).unwrap())
}

/// Upstream client wired to the stub.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn stub_client(stub: &StubUpstream, token: Option<&str>, site: Option<&str>) -> SquarespaceClient {
    SquarespaceClient::new(&bridge_config(stub, token, site).squarespace).unwrap()
}

/// Build a GET request.
///
/// # Panics
///
/// Panics if `uri` is not a valid request target.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

/// Build a request with a raw JSON body.
///
/// # Panics
///
/// Panics if `uri` is not a valid request target.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send a request through the router and decode the JSON response.
///
/// # Panics
///
/// Panics if the router fails or the response body is not JSON.
#[allow(clippy::unwrap_used)]
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}
