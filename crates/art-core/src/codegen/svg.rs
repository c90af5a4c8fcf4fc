//! Scene → SVG: each shape becomes its native SVG primitive.

use super::{Board, GENERATOR_BANNER, format_num};
use crate::model::{Point, Scene, Shape, ShapeKind, star_vertices, triangle_vertices};
use std::fmt::Write;

/// Generate an SVG document for a `width` × `height` white canvas.
#[must_use]
pub fn to_svg(scene: &Scene, width: u32, height: u32) -> String {
    emit_svg(scene, &Board::new(width, height))
}

/// Generate an SVG document for `board`.
#[must_use]
pub fn emit_svg(scene: &Scene, board: &Board) -> String {
    let mut out = String::with_capacity(256 + scene.len() * 160);

    let _ = writeln!(out, "<!-- {GENERATOR_BANNER} -->");
    let _ = writeln!(
        out,
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\" style=\"background-color: {}\">",
        board.width,
        board.height,
        board.background.to_hex()
    );

    for (index, shape) in scene.iter().enumerate() {
        emit_shape(&mut out, index, shape);
    }

    out.push_str("</svg>\n");
    out
}

fn emit_shape(out: &mut String, index: usize, shape: &Shape) {
    let paint = stroke_attrs(shape);

    match &shape.kind {
        ShapeKind::Rectangle {
            origin,
            width,
            height,
        } => {
            let _ = writeln!(
                out,
                "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {paint}/>",
                format_num(origin.x.min(origin.x + width)),
                format_num(origin.y.min(origin.y + height)),
                format_num(width.abs()),
                format_num(height.abs()),
            );
        }
        ShapeKind::Circle { center, radius } => {
            let _ = writeln!(
                out,
                "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" {paint}/>",
                format_num(center.x),
                format_num(center.y),
                format_num(*radius),
            );
        }
        ShapeKind::Ellipse {
            center,
            radius_x,
            radius_y,
        } => {
            let _ = writeln!(
                out,
                "  <ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" {paint}/>",
                format_num(center.x),
                format_num(center.y),
                format_num(*radius_x),
                format_num(*radius_y),
            );
        }
        ShapeKind::Line { from, to } => {
            let _ = writeln!(
                out,
                "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {paint}/>",
                format_num(from.x),
                format_num(from.y),
                format_num(to.x),
                format_num(to.y),
            );
        }
        ShapeKind::Triangle { from, to } => {
            let points = polygon_points(&triangle_vertices(*from, *to));
            let _ = writeln!(out, "  <polygon points=\"{points}\" {paint}/>");
        }
        ShapeKind::Star {
            center,
            inner_radius,
            outer_radius,
            points,
        } => {
            let vertices = star_vertices(*center, *inner_radius, *outer_radius, *points);
            let points = polygon_points(&vertices);
            let _ = writeln!(out, "  <polygon points=\"{points}\" {paint}/>");
        }
        ShapeKind::Path { points, .. } => {
            let _ = writeln!(
                out,
                "  <path d=\"{}\" {paint} stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
                path_data(points),
            );
        }
        ShapeKind::Fill { x, y } => {
            let _ = writeln!(
                out,
                "  <!-- shape-{index}: bucket fill at ({x}, {y}) in {} is raster-only -->",
                shape.color.to_hex()
            );
        }
    }
}

fn stroke_attrs(shape: &Shape) -> String {
    let mut attrs = format!(
        "fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"",
        shape.color.to_hex(),
        format_num(shape.stroke_width)
    );
    let opacity = shape.opacity();
    if opacity < 1.0 {
        let _ = write!(attrs, " stroke-opacity=\"{opacity}\"");
    }
    attrs
}

fn polygon_points(vertices: &[Point]) -> String {
    vertices
        .iter()
        .map(|p| format!("{},{}", format_num(p.x), format_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `M x y L x y L x y …` through the freehand points.
fn path_data(points: &[Point]) -> String {
    let body = points
        .iter()
        .map(|p| format!("{} {}", format_num(p.x), format_num(p.y)))
        .collect::<Vec<_>>()
        .join(" L ");
    format!("M {body}")
}
