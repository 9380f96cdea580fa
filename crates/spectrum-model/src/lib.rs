//! spectrum-model
//!
//! Loads the pre-trained screening classifier and runs it. The artifact is
//! a safetensors file of dense layers; its declared input and output widths
//! are read at load time rather than assumed.
//!
//! [`diagnose::Diagnoser`] ties the encoder and the classifier together for
//! callers that start from an answer set.

pub mod artifact;
pub mod classifier;
pub mod diagnose;
pub mod error;
