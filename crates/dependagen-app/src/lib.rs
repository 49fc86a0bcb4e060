//! Use case orchestration for dependagen.
//!
//! This crate provides the application layer: use cases that coordinate the settings, ignore,
//! scan, and render layers. It is intentionally thin and delegates heavy lifting to them.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod config;
mod generate;

pub use config::{config_dir, load_config_text, resolve_settings};
pub use generate::{GenerateInput, GenerateOutput, load_ignore_index, run_generate, to_renderable};
