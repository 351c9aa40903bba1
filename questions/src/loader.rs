use anyhow::{Context, Result};
use questions_core::DocId;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Read every regular file directly inside `dir` as UTF-8 text, keyed by file name.
/// Symlinks are followed; any unreadable entry (including a dangling link) aborts the load.
pub fn load_files(dir: &Path, extension: Option<&str>) -> Result<Vec<(DocId, String)>> {
    if !dir.is_dir() {
        anyhow::bail!("corpus {} is not a directory", dir.display());
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true).sort_by_file_name() {
        let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
        let p = entry.path();
        if !entry.file_type().is_file() { continue; }
        if let Some(want) = extension {
            if p.extension().and_then(|s| s.to_str()) != Some(want) { continue; }
        }
        files.push(p.to_path_buf());
    }

    let mut loaded = Vec::with_capacity(files.len());
    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("no file name in {}", path.display()))?;
        let text = fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        loaded.push((name, text));
    }
    tracing::info!(dir = %dir.display(), num_files = loaded.len(), "loaded corpus");
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_top_level_files_in_name_order() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "beta").unwrap();
        fs::write(dir.path().join("a.txt"), "alpha").unwrap();
        fs::write(dir.path().join("notes.md"), "gamma").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/c.txt"), "hidden").unwrap();

        let all = load_files(dir.path(), None).unwrap();
        let names: Vec<&str> = all.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "notes.md"]);

        let txt = load_files(dir.path(), Some("txt")).unwrap();
        assert_eq!(txt, vec![("a.txt".to_string(), "alpha".to_string()), ("b.txt".to_string(), "beta".to_string())]);
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinked_files() {
        let dir = tempdir().unwrap();
        let other = tempdir().unwrap();
        fs::write(other.path().join("real.txt"), "alpha").unwrap();
        std::os::unix::fs::symlink(other.path().join("real.txt"), dir.path().join("link.txt")).unwrap();

        let all = load_files(dir.path(), Some("txt")).unwrap();
        assert_eq!(all, vec![("link.txt".to_string(), "alpha".to_string())]);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_fatal() {
        let dir = tempdir().unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.txt"), dir.path().join("link.txt")).unwrap();
        assert!(load_files(dir.path(), None).is_err());
    }

    #[test]
    fn invalid_utf8_is_fatal() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0x00]).unwrap();
        assert!(load_files(dir.path(), None).is_err());
    }

    #[test]
    fn missing_directory_is_fatal() {
        let dir = tempdir().unwrap();
        assert!(load_files(&dir.path().join("nope"), None).is_err());
    }
}
