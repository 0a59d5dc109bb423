//! Session logic and port trait definitions for llm-plx.
//!
//! This crate defines the "ports" (editor, workspace, inference client,
//! filesystem, reporter) that the infrastructure layer implements, plus the
//! pure pieces built on them: context assembly and the session state
//! machine. It depends only on `plx-types` -- never on `plx-infra` or any
//! process/HTTP/filesystem crate.

pub mod context;
pub mod editor;
pub mod llm;
pub mod service;
pub mod session;
pub mod workspace;

#[cfg(test)]
pub(crate) mod testing;
