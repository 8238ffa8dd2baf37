// File: crates/regrid-plot/src/theme.rs
// Summary: Built-in plot theme presets (fonts, colors, view size, axis styling).

use crate::color::{Rgba, GRAY, WHITE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontWeight {
    Lighter,
    Normal,
    Bold,
}

/// Where an axis title sits relative to the plot area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitlePlacement {
    /// Anchored at the end of the axis, outside the plot.
    AxisEnd,
    /// Pulled inside the plot corner next to its axis.
    InPlot,
}

/// Flat bundle of cosmetic settings applied to every chart drawn with it.
#[derive(Clone, Copy, Debug)]
pub struct PlotTheme {
    pub name: &'static str,
    pub label_color: Rgba,
    pub background: Rgba,
    pub font_weight: FontWeight,
    pub small_font: f32,
    pub medium_font: f32,
    pub large_font: f32,
    pub view_width: u32,
    pub view_height: u32,
    pub grid_dash: [f32; 2],
    pub tick_size: f32,
    pub domain_width: f32,
    pub label_angle: f32,
    pub facet_spacing: f32,
    pub axis_title: TitlePlacement,
}

impl PlotTheme {
    /// Wide gray theme with axis titles anchored at the axis ends.
    pub fn gray() -> Self {
        Self {
            name: "gray",
            label_color: GRAY,
            background: WHITE,
            font_weight: FontWeight::Normal,
            small_font: 14.0,
            medium_font: 16.0,
            large_font: 30.0,
            view_width: 1400,
            view_height: 350,
            grid_dash: [2.0, 4.0],
            tick_size: 5.0,
            domain_width: 1.0,
            label_angle: 0.0,
            facet_spacing: 50.0,
            axis_title: TitlePlacement::AxisEnd,
        }
    }

    /// Square variant with axis titles pulled into the plot corners.
    pub fn gray_label_in_plot() -> Self {
        Self {
            name: "gray-label-in-plot",
            view_width: 800,
            view_height: 800,
            axis_title: TitlePlacement::InPlot,
            ..Self::gray()
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<PlotTheme> {
    vec![PlotTheme::gray(), PlotTheme::gray_label_in_plot()]
}

/// Find a theme by its `name`, falling back to gray.
pub fn find(name: &str) -> PlotTheme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    PlotTheme::gray()
}
