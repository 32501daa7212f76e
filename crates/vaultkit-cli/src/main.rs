//! Vaultkit binary entry point.
//!
//! `vaultkit [tags|dedupe] [--execute]` — dry-run by default, the
//! `--execute` flag applies changes to disk.

use std::path::Path;
use vaultkit_core::{
    find_duplicates, normalize_vault, remove_duplicates, FileSystem, NormalizationTable,
    PhysicalFileSystem, VaultConfig,
};

const CONFIG_FILE: &str = "vaultkit.yml";

fn main() -> std::io::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, execute) = parse_invocation(&args);

    match command {
        "tags" => run_tags(execute),
        "dedupe" => run_dedupe(execute),
        other => {
            eprintln!("unknown command: {other}");
            eprintln!("usage: vaultkit [tags|dedupe] [--execute]");
            Ok(())
        }
    }
}

/// First non-flag argument is the command (default `tags`); the only
/// recognized flag is `--execute`, everything else is ignored.
fn parse_invocation(args: &[String]) -> (&str, bool) {
    let execute = args.iter().any(|a| a == "--execute");
    let command = args
        .iter()
        .find(|a| !a.starts_with('-'))
        .map(String::as_str)
        .unwrap_or("tags");
    (command, execute)
}

/// Read `vaultkit.yml` from the vault root if present; a malformed file
/// is logged and the built-in folder set is used instead.
fn load_config(fs: &dyn FileSystem, root: &Path) -> VaultConfig {
    let path = root.join(CONFIG_FILE);
    match fs.read_to_string(&path) {
        Ok(text) => match VaultConfig::from_yaml(&text) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring malformed {}: {err}", path.display());
                VaultConfig::default()
            }
        },
        Err(_) => VaultConfig::default(),
    }
}

fn print_mode(root: &Path, dry_run: bool, apply_hint: &str) {
    println!("Base directory: {}", root.display());
    if dry_run {
        println!("Mode: DRY RUN (use --execute to {apply_hint})");
    } else {
        println!("Mode: EXECUTE");
    }
    println!();
}

fn run_tags(execute: bool) -> std::io::Result<()> {
    let dry_run = !execute;
    let root = std::env::current_dir()?;
    let fs = PhysicalFileSystem;
    let config = load_config(&fs, &root);
    let table = NormalizationTable::builtin();

    print_mode(&root, dry_run, "apply changes");

    let changes = normalize_vault(&fs, &root, &config, &table, dry_run)?;

    println!("=== Tag normalization report ===");
    println!("Files to change: {}", changes.len());
    println!();

    for change in &changes {
        println!("File: {}", change.path.display());
        println!("  Before: {:?}", change.before);
        println!("  After:  {:?}", change.after);
        println!();
    }

    if !dry_run && !changes.is_empty() {
        println!("Updated {} files in total", changes.len());
    }

    Ok(())
}

fn run_dedupe(execute: bool) -> std::io::Result<()> {
    let dry_run = !execute;
    let root = std::env::current_dir()?;
    let fs = PhysicalFileSystem;
    let config = load_config(&fs, &root);

    print_mode(&root, dry_run, "actually delete");

    let groups = find_duplicates(&fs, &root, &config)?;
    let candidates: usize = groups.iter().map(|g| g.remove.len()).sum();

    println!("=== Duplicate note report ===");
    println!("Duplicate groups: {}", groups.len());
    println!("Files to delete: {candidates}");
    println!();

    for group in &groups {
        println!("URL: {}", group.source_url);
        println!("  Keep:   {}", group.keep.display());
        for path in &group.remove {
            println!("  Delete: {}", path.display());
        }
        println!();
    }

    if dry_run {
        for group in &groups {
            for path in &group.remove {
                println!("[DRY RUN] Would delete: {}", path.display());
            }
        }
    } else if !groups.is_empty() {
        let deleted = remove_duplicates(&fs, &groups, false);
        println!("Deleted {deleted} files in total");
    }

    Ok(())
}
