// File: crates/regrid-plot/src/footer.rs
// Summary: Footer/subtitle text assembly from process environment.

use std::path::PathBuf;

use chrono::Local;

use crate::color::{Rgba, GRAY};
use crate::theme::FontWeight;

/// Settings for attaching footer text as a plot title block.
#[derive(Clone, Debug)]
pub struct TitleParams {
    pub text: String,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub color: Rgba,
    /// Vertical offset below the plot, in pixels.
    pub dy: f32,
}

/// Settings for attaching footer text as a subtitle under the real title.
#[derive(Clone, Debug)]
pub struct SubtitleParams {
    pub subtitle: String,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub color: Rgba,
}

/// Builds the provenance line stamped under plots: timestamp, user, and
/// working directory. Attach via [`Footer::title`] (replaces the plot
/// title) or [`Footer::subtitle`] (keeps it).
#[derive(Clone, Debug)]
pub struct Footer {
    path: PathBuf,
}

impl Footer {
    /// Footer for the current working directory.
    pub fn new() -> Self {
        Self {
            path: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Footer for an explicit directory.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Current local time, `YYYY-MM-DD HH:MM:SS`.
    pub fn timestamp(&self) -> String {
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// OS user name from the environment, or "unknown".
    pub fn username(&self) -> String {
        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string())
    }

    /// The directory this footer describes.
    pub fn path(&self) -> String {
        self.path.display().to_string()
    }

    /// The footer content as individual parts.
    pub fn parts(&self) -> Vec<String> {
        vec![self.timestamp(), self.username(), self.path()]
    }

    /// The footer content as one comma-joined line.
    pub fn joined(&self) -> String {
        self.parts().join(", ")
    }

    /// Title-block attachment: bottom-anchored small light-gray text.
    pub fn title(&self) -> TitleParams {
        TitleParams {
            text: self.joined(),
            font_size: 10.0,
            font_weight: FontWeight::Lighter,
            color: GRAY,
            dy: 20.0,
        }
    }

    /// Subtitle attachment, for keeping the actual plot title intact.
    pub fn subtitle(&self) -> SubtitleParams {
        SubtitleParams {
            subtitle: self.joined(),
            font_size: 8.0,
            font_weight: FontWeight::Lighter,
            color: GRAY,
        }
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}
