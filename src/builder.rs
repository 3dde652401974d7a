use crate::{
    errors::{FsError, FsOperation},
    tree::{Entry, Tree},
};
use miette::Diagnostic;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum BuildError {
    #[error("materialization stopped at the first filesystem failure")]
    #[diagnostic(code(armature::builder::fs))]
    Io(#[from] FsError),
}

/// Counts of entries materialized by a build.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub directories: usize,
    pub files: usize,
}

/// Materializes `tree` on disk under `destination`.
///
/// Directories are created with any missing intermediates and are left alone
/// if already present. Files are created or truncated and their described
/// content written as UTF-8. The traversal is a single synchronous pass; the
/// only ordering guarantee is that a directory exists before its children
/// are created.
///
/// # Errors
///
/// Returns a [`BuildError`] on the first filesystem failure (permissions, a
/// file sitting where a directory must go, disk full). Entries created
/// before the failure remain on disk.
pub fn apply_tree(tree: &Tree, destination: &Path) -> Result<Report, BuildError> {
    let mut report = Report::default();

    apply_into(tree, destination, &mut report)?;

    Ok(report)
}

fn apply_into(tree: &Tree, base: &Path, report: &mut Report) -> Result<(), BuildError> {
    for (name, entry) in &tree.0 {
        let child = base.join(name);

        match entry {
            Entry::Dir(children) => {
                create_directory(&child)?;

                report.directories += 1;

                apply_into(children, &child, report)?;
            }
            Entry::File(content) => {
                // the base itself may not exist yet when the description
                // opens with file entries
                if !base.as_os_str().is_empty() {
                    create_directory(base)?;
                }

                write_file(&child, content)?;

                report.files += 1;
            }
        }
    }

    Ok(())
}

/// Creates all directories in the specified path if they do not exist.
fn create_directory(path: &Path) -> Result<(), BuildError> {
    std::fs::create_dir_all(path)
        .map_err(|error| FsError::new(FsOperation::CreateDir, path.into(), error))?;

    log::debug!("ensured directory: {}", path.display());

    Ok(())
}

/// Writes a file with the provided contents to the specified path, creating
/// or truncating it. The per-file create trace only shows at debug level, so
/// a default run's stdout stays a single confirmation line.
fn write_file(path: &Path, contents: &str) -> Result<(), BuildError> {
    std::fs::write(path, contents)
        .map_err(|error| FsError::new(FsOperation::WriteFile, path.into(), error))?;

    log::debug!("create: {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn creates_directory_and_file_with_content() {
        let dest = tempfile::tempdir().unwrap();
        let tree = Tree::new().with_dir("a", Tree::new().with_file("b.txt", "hello"));

        let report = apply_tree(&tree, dest.path()).unwrap();

        assert!(dest.path().join("a").is_dir());
        assert_eq!(fs::read_to_string(dest.path().join("a/b.txt")).unwrap(), "hello");
        assert_eq!(
            report,
            Report {
                directories: 1,
                files: 1
            }
        );
    }

    #[test]
    fn empty_content_yields_zero_byte_file() {
        let dest = tempfile::tempdir().unwrap();
        let tree = Tree::new().with_file("empty.txt", "");

        apply_tree(&tree, dest.path()).unwrap();

        let metadata = fs::metadata(dest.path().join("empty.txt")).unwrap();
        assert!(metadata.is_file());
        assert_eq!(metadata.len(), 0);
    }

    #[test]
    fn creates_a_missing_base_path() {
        let root = tempfile::tempdir().unwrap();
        let dest = root.path().join("deeply/nested/base");
        let tree = Tree::new()
            .with_file("top.txt", "")
            .with_dir("d", Tree::new().with_file("leaf.txt", "x"));

        apply_tree(&tree, &dest).unwrap();

        assert!(dest.join("top.txt").is_file());
        assert_eq!(fs::read_to_string(dest.join("d/leaf.txt")).unwrap(), "x");
    }

    #[test]
    fn rerun_truncates_files_back_to_described_content() {
        let dest = tempfile::tempdir().unwrap();
        let tree = Tree::new().with_dir("a", Tree::new().with_file("b.txt", "hello"));

        let first = apply_tree(&tree, dest.path()).unwrap();

        // tamper with the file between runs
        fs::write(dest.path().join("a/b.txt"), "hello and then some").unwrap();

        let second = apply_tree(&tree, dest.path()).unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(dest.path().join("a/b.txt")).unwrap(), "hello");
    }

    #[test]
    fn fails_when_a_file_occupies_a_directory_path() {
        let dest = tempfile::tempdir().unwrap();
        fs::write(dest.path().join("a"), "not a directory").unwrap();

        let tree = Tree::new().with_dir("a", Tree::new().with_file("b.txt", ""));

        let result = apply_tree(&tree, dest.path());

        assert!(matches!(result, Err(BuildError::Io(_))));
    }

    #[test]
    fn partial_progress_survives_a_failure() {
        let dest = tempfile::tempdir().unwrap();
        fs::write(dest.path().join("conflict"), "").unwrap();

        let tree = Tree::new()
            .with_dir("kept", Tree::new())
            .with_dir("conflict", Tree::new());

        assert!(apply_tree(&tree, dest.path()).is_err());
        assert!(dest.path().join("kept").is_dir());
    }
}
