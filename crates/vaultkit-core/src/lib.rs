//! Vaultkit Core Library
//!
//! Maintenance logic for a markdown note vault: frontmatter round-trip,
//! tag normalization, duplicate-note detection. No console IO; the
//! filesystem sits behind the `FileSystem` trait.
//!

pub mod config;
pub mod dedupe;
pub mod frontmatter;
pub mod normalize;
pub mod tags;
pub mod vfs;

pub use config::VaultConfig;
pub use dedupe::{find_duplicates, remove_duplicates, DuplicateGroup};
pub use normalize::{normalize_vault, process_note, ChangeRecord};
pub use tags::NormalizationTable;
pub use vfs::{FileSystem, PhysicalFileSystem};
