use crate::{
    builder::{self, BuildError, Report},
    preview::preview_as_tree,
    skeleton,
    tree::{Tree, TreeError},
};
use std::path::Path;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ArmatureError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Build(#[from] BuildError),
}

/// Materializes the built-in skeleton under `destination`.
///
/// # Errors
///
/// Returns an [`ArmatureError`] if a directory cannot be created or a file
/// cannot be written.
pub fn build_skeleton(destination: &str) -> Result<Report, ArmatureError> {
    log::debug!("materializing {} under: {}", skeleton::NAME, destination);

    let report = builder::apply_tree(&skeleton::frontend(), Path::new(destination))?;

    Ok(report)
}

/// Loads a TOML tree manifest and materializes it under `destination`.
///
/// # Errors
///
/// Returns an [`ArmatureError`] if:
///
/// - The manifest cannot be read or parsed.
/// - A directory or file cannot be created or written to.
pub fn build_manifest(manifest: &Path, destination: &str) -> Result<Report, ArmatureError> {
    let tree = Tree::from_file(manifest)?;

    log::debug!(
        "materializing manifest {} under: {}",
        manifest.display(),
        destination
    );

    let report = builder::apply_tree(&tree, Path::new(destination))?;

    Ok(report)
}

/// Prints the tree the built-in skeleton would create, touching nothing.
pub fn preview_skeleton(destination: &str) {
    preview_as_tree(&skeleton::frontend(), Path::new(destination));
}

/// Prints the tree a manifest would create, touching nothing.
///
/// # Errors
///
/// Returns an [`ArmatureError`] if the manifest cannot be read or parsed.
pub fn preview_manifest(manifest: &Path, destination: &str) -> Result<(), ArmatureError> {
    let tree = Tree::from_file(manifest)?;

    preview_as_tree(&tree, Path::new(destination));

    Ok(())
}
