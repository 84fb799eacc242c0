//! Service layer for business logic and orchestration.
//!
//! Services coordinate repositories and the fallback store behind uniform
//! contracts so controllers stay thin.

pub mod dictionary;
