//! HTTP controller endpoints for the Ponte web API.
//!
//! Controllers handle HTTP requests, delegate to the dictionary service, and
//! shape responses. Every endpoint carries a utoipa path specification that
//! doubles as its route registration.

pub mod dictionary;
pub mod integrated_order;
pub mod lookup;
pub mod marketplace_account;
pub mod platform;
pub mod product_account;
pub mod shipping_program;
pub mod util;

/// Tag grouping the per-alias CRUD and aggregation endpoints.
pub static INTEGRATION_TAG: &str = "integration";
