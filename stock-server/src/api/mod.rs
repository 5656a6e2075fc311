//! HTTP API for stock-server

pub mod extract;
pub mod health;
pub mod history;
pub mod params;
pub mod products;
pub mod stocks;

use axum::Router;
use axum::middleware as axum_middleware;
use axum::routing::{get, post, put};
use http::{HeaderName, HeaderValue};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::middleware;
use crate::state::AppState;

const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Request ID generator (UUID v4)
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Create the router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_check))
        .route("/health", get(health::health_check))
        // Products
        .route("/create-product", post(products::create_product))
        .route("/get-products-by-filter", get(products::list_by_filter))
        // Stock
        .route("/create-stock", post(stocks::create_stock))
        .route("/increase-stock", put(stocks::increase_stock))
        .route("/decrease-stock", put(stocks::decrease_stock))
        .route("/get-stock-by-filter", get(stocks::list_by_filter))
        // Audit trail
        .route("/history", get(history::list))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(X_REQUEST_ID, XRequestId))
                .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(middleware::logging_middleware))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
