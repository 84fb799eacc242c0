//! Ponte server application core.
//!
//! Ponte is the backend API gateway of an ERP to marketplace integration
//! product. Its centerpiece is the data dictionary: a metadata-driven layer
//! that lets UI clients discover field metadata for dynamically-named alias
//! tables and browse their rows through one uniform protocol, degrading to
//! an in-memory mock dataset when the backing tables are not provisioned.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
