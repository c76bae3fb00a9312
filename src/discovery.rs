use crate::error::SeedError;
use std::fs;
use std::path::{Path, PathBuf};

const CSV_EXTENSION: &str = "csv";

/// List the `*.csv` files directly inside `dir`, sorted by path.
///
/// Hidden files (names starting with `.`) and subdirectories, including ones
/// named `*.csv`, are skipped. An empty
/// directory yields an empty list; a missing or unreadable directory is an
/// error.
pub fn discover_csv_files(dir: &Path) -> Result<Vec<PathBuf>, SeedError> {
    let read_dir_err = |source| SeedError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();

        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some(CSV_EXTENSION) {
            continue;
        }
        // Dangling symlinks are kept, like a shell glob; reading them fails later.
        if path.is_dir() {
            continue;
        }
        files.push(path);
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn lists_only_top_level_csv_files() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("b.csv")).unwrap();
        File::create(dir.path().join("a.csv")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        File::create(dir.path().join("upper.CSV")).unwrap();
        File::create(dir.path().join(".hidden.csv")).unwrap();
        File::create(dir.path().join("._a.csv")).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        File::create(dir.path().join("nested").join("c.csv")).unwrap();
        fs::create_dir(dir.path().join("folder.csv")).unwrap();

        let files = discover_csv_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.csv"), dir.path().join("b.csv")]
        );
    }

    #[test]
    fn empty_directory_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_csv_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_csv_files(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, SeedError::ReadDir { .. }));
        assert!(!err.is_per_file());
    }
}
