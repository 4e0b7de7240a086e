//! Customer Collection Service library.
//!
//! An in-memory customer collection exposed over a small REST API, plus the
//! static asset fallback, configuration and observability around it.

pub mod config;
pub mod customers;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::schema::ServiceConfig;
pub use customers::{Customer, CustomerStore, CustomerUpdate};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
