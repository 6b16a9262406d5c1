//! Recursive template bundle copying

use anyhow::{Context, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Copy every file and subdirectory under `bundle_dir` into `target_dir`,
/// creating intermediate directories as needed and overwriting any existing
/// file at the same relative path. Content is copied byte-for-byte; there is
/// no filtering or substitution. Returns the number of files copied.
pub fn copy_template(bundle_dir: &Path, target_dir: &Path) -> Result<usize> {
    if !bundle_dir.is_dir() {
        anyhow::bail!("Template bundle not found: {}", bundle_dir.display());
    }

    std::fs::create_dir_all(target_dir)
        .with_context(|| format!("Failed to create {}", target_dir.display()))?;

    let mut copied = 0;
    for entry in WalkDir::new(bundle_dir) {
        let entry =
            entry.with_context(|| format!("Failed to walk {}", bundle_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(bundle_dir)?;
        let target_path = target_dir.join(relative);
        if let Some(parent) = target_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::copy(entry.path(), &target_path)
            .with_context(|| format!("Failed to copy {}", relative.display()))?;
        copied += 1;
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_copies_all_files_at_matching_paths() {
        let bundle = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();

        write_file(&bundle.path().join("tailwind.config.cjs"), "module.exports = {};\n");
        write_file(&bundle.path().join("src/app.css"), "@tailwind base;\n");
        write_file(&bundle.path().join("src/lib/deep.css"), ".deep {}\n");

        let copied = copy_template(bundle.path(), target.path()).unwrap();
        assert_eq!(copied, 3);

        let content = std::fs::read_to_string(target.path().join("src/app.css")).unwrap();
        assert_eq!(content, "@tailwind base;\n");
        assert!(target.path().join("src/lib/deep.css").exists());
    }

    #[test]
    fn test_overwrites_colliding_files() {
        let bundle = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();

        write_file(&bundle.path().join("jsconfig.json"), "{\"new\": true}\n");
        write_file(&target.path().join("jsconfig.json"), "{\"old\": true}\n");

        copy_template(bundle.path(), target.path()).unwrap();

        let content = std::fs::read_to_string(target.path().join("jsconfig.json")).unwrap();
        assert_eq!(content, "{\"new\": true}\n");
    }

    #[test]
    fn test_missing_bundle_is_an_error() {
        let target = tempfile::tempdir().unwrap();
        let result = copy_template(Path::new("/no/such/bundle"), target.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_creates_target_directory() {
        let bundle = tempfile::tempdir().unwrap();
        let parent = tempfile::tempdir().unwrap();
        write_file(&bundle.path().join("file.txt"), "content");

        let target = parent.path().join("fresh");
        let copied = copy_template(bundle.path(), &target).unwrap();
        assert_eq!(copied, 1);
        assert!(target.join("file.txt").exists());
    }
}
