//! Service-level abstractions shared by the session components.

pub mod fs;
