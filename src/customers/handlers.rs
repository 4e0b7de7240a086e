//! Handlers bound to the customer routes.
//!
//! Create and delete answer with the whole collection, not the affected
//! record. Clients depend on that shape.

use axum::{extract::State, http::StatusCode, Json};

use crate::customers::error::ApiError;
use crate::customers::extract::{JsonBody, PathId};
use crate::customers::model::{Customer, CustomerUpdate};
use crate::customers::store::CustomerStore;

/// `GET /customers`
pub async fn list_customers(State(store): State<CustomerStore>) -> Json<Vec<Customer>> {
    Json(store.list().await)
}

/// `GET /customer/{id}`
pub async fn get_customer(
    State(store): State<CustomerStore>,
    PathId(id): PathId,
) -> Result<Json<Customer>, ApiError> {
    let customer = store.get(id).await?;
    Ok(Json(customer))
}

/// `POST /customer`
pub async fn create_customer(
    State(store): State<CustomerStore>,
    JsonBody(customer): JsonBody<Customer>,
) -> Result<(StatusCode, Json<Vec<Customer>>), ApiError> {
    let customers = store.create(customer).await?;
    Ok((StatusCode::CREATED, Json(customers)))
}

/// `PATCH /customer/{id}`
pub async fn update_customer(
    State(store): State<CustomerStore>,
    PathId(id): PathId,
    JsonBody(update): JsonBody<CustomerUpdate>,
) -> Result<Json<Customer>, ApiError> {
    let customer = store.update(id, update).await?;
    Ok(Json(customer))
}

/// `DELETE /customer/{id}`
pub async fn delete_customer(
    State(store): State<CustomerStore>,
    PathId(id): PathId,
) -> Result<Json<Vec<Customer>>, ApiError> {
    let customers = store.delete(id).await?;
    Ok(Json(customers))
}

/// Any id-taking method on `/customer/` with the segment left empty.
pub async fn missing_id() -> ApiError {
    ApiError::MissingId
}
