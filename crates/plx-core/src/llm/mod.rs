//! Inference client abstraction.
//!
//! - `InferenceClient`: RPITIT trait for concrete endpoint implementations

pub mod client;
