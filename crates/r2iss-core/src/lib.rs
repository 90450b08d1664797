//! r2iss-core
//!
//! Pure domain types for R2-ISS staging of multiple myeloma.
//! No scoring rules and no I/O — this is the shared vocabulary of the
//! calculator and the API.

pub mod error;
pub mod models;
