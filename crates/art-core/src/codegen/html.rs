//! Scene → standalone HTML page wrapping the generated CSS.

use super::{Board, GENERATOR_BANNER, emit_css};
use crate::model::Scene;
use std::fmt::Write;

/// Generate a complete HTML page for a `width` × `height` white canvas.
#[must_use]
pub fn to_html(scene: &Scene, width: u32, height: u32) -> String {
    emit_html(scene, &Board::new(width, height))
}

/// Generate a complete HTML page for `board`. The page embeds
/// [`emit_css`] and holds one empty `div` per shape.
#[must_use]
pub fn emit_html(scene: &Scene, board: &Board) -> String {
    let css = emit_css(scene, board);
    let mut out = String::with_capacity(css.len() + 320 + scene.len() * 40);

    out.push_str("<!DOCTYPE html>\n");
    let _ = writeln!(out, "<!-- {GENERATOR_BANNER} -->");
    out.push_str("<html lang=\"en\">\n<head>\n");
    out.push_str("  <meta charset=\"UTF-8\">\n");
    out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str("  <title>My Code Art</title>\n");
    out.push_str("  <style>\n");
    for line in css.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            let _ = writeln!(out, "    {line}");
        }
    }
    out.push_str("  </style>\n</head>\n<body>\n");
    out.push_str("  <div class=\"art-container\">\n");
    for index in 0..scene.len() {
        let _ = writeln!(out, "    <div class=\"shape-{index}\"></div>");
    }
    out.push_str("  </div>\n</body>\n</html>\n");
    out
}
