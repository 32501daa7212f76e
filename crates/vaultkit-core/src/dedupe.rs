use crate::config::VaultConfig;
use crate::frontmatter;
use crate::vfs::FileSystem;
use log::{debug, error};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Notes sharing one `source_url`: the oldest is kept, the rest are
/// removal candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    pub source_url: String,
    pub keep: PathBuf,
    pub remove: Vec<PathBuf>,
}

/// Extract the capture timestamp prefix (`YYYY-MM-DD-HHMMSS`) from a
/// note filename, if present.
fn timestamp_prefix(filename: &str) -> Option<&str> {
    let prefix = filename.get(..17)?;
    let bytes = prefix.as_bytes();
    let well_formed = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 | 10 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    well_formed.then_some(prefix)
}

/// Find notes that share a frontmatter `source_url`.
///
/// Notes without a parsable header or without the key are ignored. Each
/// group is ordered oldest-first by the filename timestamp prefix
/// (notes without one sort first) and the oldest note is the keeper.
/// Groups come back in first-seen URL order.
pub fn find_duplicates(
    fs: &dyn FileSystem,
    root: &Path,
    config: &VaultConfig,
) -> std::io::Result<Vec<DuplicateGroup>> {
    let mut by_url: HashMap<String, Vec<PathBuf>> = HashMap::new();
    let mut url_order: Vec<String> = Vec::new();

    for folder in &config.folders {
        let folder_path = root.join(folder);
        if !fs.dir_exists(&folder_path) {
            continue;
        }

        for path in fs.list_files(&folder_path, &config.note_extension) {
            let content = fs.read_to_string(&path)?;
            let Some(doc) = frontmatter::parse(&content) else {
                debug!("skip {}: no parsable metadata header", path.display());
                continue;
            };
            let Some(url) = doc.header.get("source_url").and_then(|v| v.as_str()) else {
                continue;
            };

            let entry = by_url.entry(url.to_string()).or_default();
            if entry.is_empty() {
                url_order.push(url.to_string());
            }
            entry.push(path);
        }
    }

    let mut groups = Vec::new();
    for url in url_order {
        let mut paths = by_url.remove(&url).unwrap_or_default();
        if paths.len() < 2 {
            continue;
        }

        paths.sort_by_key(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .and_then(timestamp_prefix)
                .unwrap_or("")
                .to_string()
        });

        let keep = paths.remove(0);
        groups.push(DuplicateGroup {
            source_url: url,
            keep,
            remove: paths,
        });
    }

    Ok(groups)
}

/// Delete the removal candidates of every group. In dry-run mode
/// nothing is touched and the count is zero. Per-file deletion failures
/// are logged and the run continues.
pub fn remove_duplicates(fs: &dyn FileSystem, groups: &[DuplicateGroup], dry_run: bool) -> usize {
    if dry_run {
        return 0;
    }

    let mut deleted = 0;
    for group in groups {
        for path in &group.remove {
            match fs.remove_file(path) {
                Ok(()) => deleted += 1,
                Err(err) => error!("failed to delete {}: {err}", path.display()),
            }
        }
    }
    deleted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::PhysicalFileSystem;
    use std::fs;
    use tempfile::TempDir;

    fn note_with_url(url: &str) -> String {
        format!("---\ntitle: t\nsource_url: {url}\n---\nbody\n")
    }

    fn vault_with_tech(dir: &TempDir) -> PathBuf {
        let tech = dir.path().join("Tech");
        fs::create_dir(&tech).unwrap();
        tech
    }

    #[test]
    fn test_timestamp_prefix() {
        assert_eq!(
            timestamp_prefix("2025-01-07-093015-post.md"),
            Some("2025-01-07-093015")
        );
        assert_eq!(timestamp_prefix("untimed-note.md"), None);
        assert_eq!(timestamp_prefix("2025-01-07.md"), None);
        assert_eq!(timestamp_prefix("日付なしのノート.md"), None);
    }

    #[test]
    fn test_groups_by_source_url_keeping_oldest() {
        let dir = TempDir::new().unwrap();
        let tech = vault_with_tech(&dir);
        let url = "https://example.com/post/1";
        fs::write(tech.join("2025-01-08-120000-b.md"), note_with_url(url)).unwrap();
        fs::write(tech.join("2025-01-07-093015-a.md"), note_with_url(url)).unwrap();
        fs::write(
            tech.join("2025-01-09-000000-other.md"),
            note_with_url("https://example.com/post/2"),
        )
        .unwrap();

        let groups =
            find_duplicates(&PhysicalFileSystem, dir.path(), &VaultConfig::default()).unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].source_url, url);
        assert_eq!(
            groups[0].keep.file_name().unwrap(),
            "2025-01-07-093015-a.md"
        );
        assert_eq!(groups[0].remove.len(), 1);
        assert_eq!(
            groups[0].remove[0].file_name().unwrap(),
            "2025-01-08-120000-b.md"
        );
    }

    #[test]
    fn test_untimed_note_sorts_first() {
        let dir = TempDir::new().unwrap();
        let tech = vault_with_tech(&dir);
        let url = "https://example.com/post/1";
        fs::write(tech.join("2025-01-07-093015-a.md"), note_with_url(url)).unwrap();
        fs::write(tech.join("untimed.md"), note_with_url(url)).unwrap();

        let groups =
            find_duplicates(&PhysicalFileSystem, dir.path(), &VaultConfig::default()).unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].keep.file_name().unwrap(), "untimed.md");
    }

    #[test]
    fn test_notes_without_url_or_header_are_ignored() {
        let dir = TempDir::new().unwrap();
        let tech = vault_with_tech(&dir);
        fs::write(tech.join("a.md"), "---\ntitle: no url\n---\nbody\n").unwrap();
        fs::write(tech.join("b.md"), "no header at all\n").unwrap();
        fs::write(
            tech.join("c.md"),
            note_with_url("https://example.com/solo"),
        )
        .unwrap();

        let groups =
            find_duplicates(&PhysicalFileSystem, dir.path(), &VaultConfig::default()).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_dry_run_deletes_nothing() {
        let dir = TempDir::new().unwrap();
        let tech = vault_with_tech(&dir);
        let url = "https://example.com/post/1";
        fs::write(tech.join("2025-01-07-093015-a.md"), note_with_url(url)).unwrap();
        fs::write(tech.join("2025-01-08-120000-b.md"), note_with_url(url)).unwrap();

        let fs_impl = PhysicalFileSystem;
        let groups = find_duplicates(&fs_impl, dir.path(), &VaultConfig::default()).unwrap();
        assert_eq!(remove_duplicates(&fs_impl, &groups, true), 0);
        assert!(tech.join("2025-01-08-120000-b.md").exists());
    }

    #[test]
    fn test_execute_deletes_duplicates_only() {
        let dir = TempDir::new().unwrap();
        let tech = vault_with_tech(&dir);
        let url = "https://example.com/post/1";
        fs::write(tech.join("2025-01-07-093015-a.md"), note_with_url(url)).unwrap();
        fs::write(tech.join("2025-01-08-120000-b.md"), note_with_url(url)).unwrap();
        fs::write(tech.join("2025-01-09-150000-c.md"), note_with_url(url)).unwrap();

        let fs_impl = PhysicalFileSystem;
        let groups = find_duplicates(&fs_impl, dir.path(), &VaultConfig::default()).unwrap();
        assert_eq!(remove_duplicates(&fs_impl, &groups, false), 2);

        assert!(tech.join("2025-01-07-093015-a.md").exists());
        assert!(!tech.join("2025-01-08-120000-b.md").exists());
        assert!(!tech.join("2025-01-09-150000-c.md").exists());
    }
}
