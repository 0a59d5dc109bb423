//! Infrastructure layer for llm-plx.
//!
//! Contains implementations of the ports defined in `plx-core`: the
//! temp-directory workspace, the Neovim launcher, the Ollama inference
//! client, the local filesystem adapter, and the settings file store.

pub mod config;
pub mod editor;
pub mod filesystem;
pub mod llm;
pub mod workspace;
