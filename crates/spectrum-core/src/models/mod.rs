pub mod answers;
pub mod features;
pub mod label;
pub mod prediction;
