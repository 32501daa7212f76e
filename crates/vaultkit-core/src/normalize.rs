use crate::config::VaultConfig;
use crate::frontmatter;
use crate::tags::NormalizationTable;
use crate::vfs::FileSystem;
use log::debug;
use serde_yaml::Value;
use std::path::{Path, PathBuf};

/// One changed note: where it lives and its tag list before and after
/// normalization. Reporting artifact only, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub path: PathBuf,
    pub before: Vec<String>,
    pub after: Vec<String>,
}

/// Normalize the tag list of a single note.
///
/// Returns `Ok(None)` when there is nothing to do: no parsable metadata
/// header, no `tags` key, `tags` not a sequence of strings, or a tag
/// list the table leaves unchanged. In all those cases the file is left
/// byte-identical. IO errors propagate.
///
/// When the normalized list differs and `dry_run` is false, the header
/// is re-serialized with the new list and the note rewritten in place,
/// body bytes untouched. No backup copy is made.
pub fn process_note(
    fs: &dyn FileSystem,
    path: &Path,
    table: &NormalizationTable,
    dry_run: bool,
) -> std::io::Result<Option<ChangeRecord>> {
    let content = fs.read_to_string(path)?;

    let Some(mut doc) = frontmatter::parse(&content) else {
        debug!("skip {}: no parsable metadata header", path.display());
        return Ok(None);
    };

    let Some(tags_value) = doc.header.get("tags") else {
        debug!("skip {}: no tags key", path.display());
        return Ok(None);
    };
    let Some(sequence) = tags_value.as_sequence() else {
        debug!("skip {}: tags is not a sequence", path.display());
        return Ok(None);
    };

    let mut before = Vec::with_capacity(sequence.len());
    for item in sequence {
        match item.as_str() {
            Some(tag) => before.push(tag.to_string()),
            None => {
                debug!("skip {}: non-string tag entry", path.display());
                return Ok(None);
            }
        }
    }

    let after = table.normalize_list(&before);
    if after == before {
        return Ok(None);
    }

    if !dry_run {
        doc.header.insert(
            Value::from("tags"),
            Value::Sequence(after.iter().cloned().map(Value::String).collect()),
        );
        match frontmatter::assemble(&doc.header, doc.body) {
            Ok(new_content) => fs.write_string(path, &new_content)?,
            Err(err) => {
                log::warn!("skip {}: header re-serialization failed: {err}", path.display());
                return Ok(None);
            }
        }
    }

    Ok(Some(ChangeRecord {
        path: path.to_path_buf(),
        before,
        after,
    }))
}

/// Run tag normalization over every note in the configured folders.
///
/// Folders are visited in configuration order; within a folder the
/// listing order is whatever the filesystem yields. Missing folders are
/// skipped. Collects a record per changed note.
pub fn normalize_vault(
    fs: &dyn FileSystem,
    root: &Path,
    config: &VaultConfig,
    table: &NormalizationTable,
    dry_run: bool,
) -> std::io::Result<Vec<ChangeRecord>> {
    let mut changes = Vec::new();

    for folder in &config.folders {
        let folder_path = root.join(folder);
        if !fs.dir_exists(&folder_path) {
            continue;
        }

        for path in fs.list_files(&folder_path, &config.note_extension) {
            if let Some(record) = process_note(fs, &path, table, dry_run)? {
                changes.push(record);
            }
        }
    }

    Ok(changes)
}
