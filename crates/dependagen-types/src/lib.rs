//! Plain data types shared across the dependagen workspace.
//!
//! This crate is intentionally boring:
//! - the manifest kinds we recognise (by file extension)
//! - the per-project scan result and its ignore mappings
//! - canonical scan-root-relative directory handling
//! - where the ignore list comes from

#![forbid(unsafe_code)]

pub mod manifest;
pub mod path;
pub mod source;

pub use manifest::{ManifestKind, PackageIgnoreMapping, ProjectManifest};
pub use path::RepoDir;
pub use source::IgnoreSource;
