//! Rendering of the generated `dependabot.yml`.
//!
//! Output is plain string templating in a fixed layout; nothing here touches the filesystem.

#![forbid(unsafe_code)]

mod dependabot;
mod model;

pub use dependabot::{render_dependabot_yaml, render_header, render_string_array, render_update};
pub use model::{
    RenderableConfig, RenderableHeader, RenderableIgnore, RenderableSchedule, RenderableUpdate,
};
