//! Package ignore list: download, parse, and exact lookup.
//!
//! The list says, per package and per target framework, which version patterns Dependabot
//! should not propose. This crate turns it into an [`IgnoreIndex`]; the patterns themselves
//! are never interpreted.

#![forbid(unsafe_code)]

mod error;
mod fetch;
mod index;
pub mod model;

pub use error::IgnoreListError;
pub use fetch::{fetch_index, load_index, read_index};
pub use index::IgnoreIndex;
pub use model::{FrameworkIgnoreMapping, PackageInfo, PackageInfoSet};
