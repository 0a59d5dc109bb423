//! Shared domain types for llm-plx.
//!
//! This crate contains the core domain types used across the workspace:
//! workspace slots, turns and transcripts, the context document, inference
//! request/reply shapes, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod context;
pub mod error;
pub mod llm;
pub mod session;
pub mod slot;
