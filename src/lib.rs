//! Photo Points asset generator
//!
//! Procedurally draws the app icon and launch screens with 2D raster
//! primitives and encodes them as PNG files. The composers are pure; the
//! driver in [`generator`] handles directories, persistence, and progress
//! output.

pub mod config;
pub mod draw;
pub mod font;
pub mod generator;
pub mod icon;
pub mod launch;
pub mod palette;

// Re-export commonly used types for convenience
pub use config::{GeneratorConfig, LaunchSpec};
pub use font::{FontSource, SYSTEM_FONT_PATHS, default_sources, load_font, resolve_font, text_width};
pub use generator::{generate_all, verify_png_support};
pub use icon::compose_app_icon;
pub use launch::{compose_launch_screen, compose_launch_screen_with_font};
