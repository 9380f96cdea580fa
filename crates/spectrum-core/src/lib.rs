//! spectrum-core
//!
//! Pure domain types shared by every Spectrum crate: answer sets, feature
//! vectors, diagnostic labels, and prediction results. No model or I/O
//! dependency — this is the shared vocabulary of the screening pipeline.

pub mod error;
pub mod models;
