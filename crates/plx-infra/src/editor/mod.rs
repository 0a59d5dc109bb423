//! Editor launchers.

pub mod neovim;

pub use neovim::NeovimEditor;
