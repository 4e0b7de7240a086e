//! Customer collection subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP request (method, /customer/{id}, body)
//!     → extract.rs (parse id, parse JSON body)
//!     → handlers.rs (one handler per method/path)
//!     → store.rs (locked read or read-modify-write)
//!     → JSON response, or error.rs mapping to a status
//! ```
//!
//! # Routes
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/customers` | 200, all customers |
//! | GET | `/customer/{id}` | 200, one customer |
//! | POST | `/customer` | 201, updated collection |
//! | PATCH | `/customer/{id}` | 200, updated customer |
//! | DELETE | `/customer/{id}` | 200, remaining collection |

pub mod error;
pub mod extract;
pub mod handlers;
pub mod model;
pub mod store;

pub use error::ApiError;
pub use model::{Customer, CustomerUpdate};
pub use store::{CustomerStore, StoreError};

use axum::{
    http::{header, HeaderValue},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::observability::metrics;
use self::handlers::*;

/// Build the customer API router over `store`.
pub fn customer_router(store: CustomerStore) -> Router {
    Router::new()
        .route("/customers", get(list_customers))
        .route("/customer", post(create_customer))
        .route(
            "/customer/",
            get(missing_id).patch(missing_id).delete(missing_id),
        )
        .route(
            "/customer/{id}",
            get(get_customer).patch(update_customer).delete(delete_customer),
        )
        .route_layer(middleware::from_fn(metrics::track_requests))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .with_state(store)
}
