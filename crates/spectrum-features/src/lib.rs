//! spectrum-features
//!
//! Turns a screening answer set into the numeric vector the classifier was
//! trained on: one one-hot segment per categorical question, followed by the
//! standardized age and risk score.

pub mod encoder;
pub mod error;
pub mod layout;
pub mod scaling;
