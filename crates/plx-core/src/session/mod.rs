//! The session controller: the editor-driven turn loop.
//!
//! Entry point: `controller::Session::run`.

pub mod controller;
pub mod reporter;
