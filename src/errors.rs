use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// The materialization step that hit the filesystem and failed.
#[derive(Debug, Error, Diagnostic)]
pub enum FsOperation {
    #[error("creating a directory")]
    CreateDir,
    #[error("writing file content")]
    WriteFile,
    #[error("reading the tree manifest")]
    ReadManifest,
}

/// The single error kind a build can produce: some directory could not be
/// created or some file could not be written. Entries materialized before
/// the failing one stay on disk.
#[derive(Debug, Error, Diagnostic)]
#[error("filesystem error: {operation} at '{path}'")]
#[diagnostic(
    code(armature::fs),
    help("Check permissions and disk space, and that nothing else occupies the path — a plain file where a directory must go makes the build fail.")
)]
pub struct FsError {
    pub operation: FsOperation,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
impl FsError {
    pub fn new(operation: FsOperation, path: PathBuf, error: std::io::Error) -> Self {
        Self {
            operation,
            path,
            source: error,
        }
    }
}
