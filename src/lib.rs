//! Procedurally drawn placeholder artwork for a web app's `public/` assets:
//! an app icon, a splash screen, a favicon and four screenshot mockups.

pub mod bitmap_font;
pub mod canvas;
pub mod config;
pub mod manifest;
pub mod output;
pub mod placeholders;
pub mod typeface;

pub use config::{Args, FontPaths};
pub use placeholders::generate_placeholders;
