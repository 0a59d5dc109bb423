//! Context document assembly.
//!
//! - `assembler`: builds the three-section document from files, transcript
//!   and prompt
//! - `selection`: parses the file-selection slot written by the picker

pub mod assembler;
pub mod selection;
