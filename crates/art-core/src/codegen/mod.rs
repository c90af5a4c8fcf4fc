//! Code generators: Scene → CSS, SVG, and HTML text.
//!
//! All three are total over any scene, including the empty one. Shape `i` in
//! scene order is always addressed as `.shape-{i}` so the HTML wrapper and the
//! stylesheet line up.

mod css;
mod html;
mod svg;

pub use css::{emit_css, to_css};
pub use html::{emit_html, to_html};
pub use svg::{emit_svg, to_svg};

use crate::color::Color;
use crate::config::CanvasConfig;
use crate::model::Scene;
use std::fmt;
use std::str::FromStr;

/// Banner written at the top of every generated document.
pub const GENERATOR_BANNER: &str = "Generated by Code Art Studio";

/// Fixed star outline used by the CSS generator. It does not follow the
/// star's inner/outer radius ratio.
pub const STAR_CLIP_PATH: &str = "polygon(50% 0%, 61% 35%, 98% 35%, 68% 57%, 79% 91%, 50% 70%, 21% 91%, 32% 57%, 2% 35%, 39% 35%)";

/// Target grammar for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeFormat {
    #[default]
    Css,
    Svg,
    Html,
}

impl CodeFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            CodeFormat::Css => "css",
            CodeFormat::Svg => "svg",
            CodeFormat::Html => "html",
        }
    }
}

impl fmt::Display for CodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "css" => Ok(CodeFormat::Css),
            "svg" => Ok(CodeFormat::Svg),
            "html" => Ok(CodeFormat::Html),
            other => Err(format!("Unknown code format: {other}")),
        }
    }
}

/// The drawing area the generated code describes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    pub width: u32,
    pub height: u32,
    pub background: Color,
}

impl Board {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Color::WHITE,
        }
    }
}

impl From<&CanvasConfig> for Board {
    fn from(config: &CanvasConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            background: config.background,
        }
    }
}

/// Generate `scene` in the requested format.
#[must_use]
pub fn generate(scene: &Scene, board: &Board, format: CodeFormat) -> String {
    match format {
        CodeFormat::Css => emit_css(scene, board),
        CodeFormat::Svg => emit_svg(scene, board),
        CodeFormat::Html => emit_html(scene, board),
    }
}

/// Format a coordinate in its shortest round-trip form, so generated code
/// carries the exact shape values. Negative zero and non-finite values print
/// as `0`.
pub(crate) fn format_num(n: f64) -> String {
    if !n.is_finite() || n == 0.0 {
        return "0".to_string();
    }
    format!("{n}")
}
