// File: crates/regrid-plot/src/lib.rs
// Summary: Plot cosmetics entry point; exports themes, colors, and footer helpers.

pub mod color;
pub mod footer;
pub mod theme;

pub use color::Rgba;
pub use footer::{Footer, SubtitleParams, TitleParams};
pub use theme::{FontWeight, PlotTheme, TitlePlacement};
