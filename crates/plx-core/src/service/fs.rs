//! FileSystem trait for abstracting reads of user-selected files.
//!
//! Defined in plx-core so the context assembler can embed files without
//! depending on any specific filesystem implementation. The `LocalFileSystem`
//! adapter lives in plx-infra.

use std::path::Path;

/// Abstraction over the read-only filesystem operations the assembler needs.
///
/// This trait allows the assembler to be tested with in-memory file sets.
pub trait FileSystem: Send + Sync {
    /// Read a file's content as a string.
    fn read_file(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<String, std::io::Error>> + Send;

    /// Check whether a path exists.
    fn exists(&self, path: &Path) -> impl std::future::Future<Output = bool> + Send;
}
