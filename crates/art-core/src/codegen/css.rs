//! Scene → CSS: one absolutely positioned box per shape.

use super::{Board, GENERATOR_BANNER, STAR_CLIP_PATH, format_num};
use crate::model::{Scene, Shape, ShapeKind};
use std::fmt::Write;

/// Generate the stylesheet for a `width` × `height` white canvas.
#[must_use]
pub fn to_css(scene: &Scene, width: u32, height: u32) -> String {
    emit_css(scene, &Board::new(width, height))
}

/// Generate the stylesheet for `board`.
#[must_use]
pub fn emit_css(scene: &Scene, board: &Board) -> String {
    let mut out = String::with_capacity(256 + scene.len() * 192);

    let _ = writeln!(out, "/* {GENERATOR_BANNER} */");
    out.push_str(".art-container {\n  position: relative;\n");
    let _ = writeln!(out, "  width: {}px;", board.width);
    let _ = writeln!(out, "  height: {}px;", board.height);
    let _ = writeln!(out, "  background: {};", board.background.to_hex());
    out.push_str("}\n\n");

    for (index, shape) in scene.iter().enumerate() {
        emit_rule(&mut out, index, shape);
    }

    out
}

fn emit_rule(out: &mut String, index: usize, shape: &Shape) {
    let _ = writeln!(out, ".shape-{index} {{");
    out.push_str("  position: absolute;\n");

    let color = shape.color.to_hex();
    let sw = shape.stroke_width;

    match &shape.kind {
        ShapeKind::Rectangle {
            origin,
            width,
            height,
        } => {
            let left = origin.x.min(origin.x + width);
            let top = origin.y.min(origin.y + height);
            emit_box(out, left, top, width.abs(), height.abs());
            emit_prop(out, "border", &format!("{}px solid {color}", format_num(sw)));
            emit_prop(out, "background", "transparent");
        }
        ShapeKind::Circle { center, radius } => {
            emit_box(
                out,
                center.x - radius,
                center.y - radius,
                radius * 2.0,
                radius * 2.0,
            );
            emit_prop(out, "border", &format!("{}px solid {color}", format_num(sw)));
            emit_prop(out, "border-radius", "50%");
            emit_prop(out, "background", "transparent");
        }
        ShapeKind::Ellipse {
            center,
            radius_x,
            radius_y,
        } => {
            emit_box(
                out,
                center.x - radius_x,
                center.y - radius_y,
                radius_x * 2.0,
                radius_y * 2.0,
            );
            emit_prop(out, "border", &format!("{}px solid {color}", format_num(sw)));
            emit_prop(out, "border-radius", "50%");
            emit_prop(out, "background", "transparent");
        }
        ShapeKind::Line { from, to } => {
            let length = from.distance(*to);
            let angle = (to.y - from.y).atan2(to.x - from.x).to_degrees();
            emit_box(out, from.x, from.y - sw / 2.0, length, sw);
            emit_prop(out, "background", &color);
            emit_prop(out, "transform-origin", "0 50%");
            emit_prop(out, "transform", &format!("rotate({}deg)", format_num(angle)));
        }
        ShapeKind::Triangle { from, to } => {
            // Border trick: only upright, filled triangles are expressible.
            let half_width = (to.x - from.x).abs() / 2.0;
            let half_height = (to.y - from.y).abs() / 2.0;
            emit_prop(out, "left", &format!("{}px", format_num(from.x.min(to.x))));
            emit_prop(out, "top", &format!("{}px", format_num(from.y)));
            emit_prop(out, "width", "0");
            emit_prop(out, "height", "0");
            let side = format!("{}px solid transparent", format_num(half_width));
            emit_prop(out, "border-left", &side);
            emit_prop(out, "border-right", &side);
            emit_prop(
                out,
                "border-bottom",
                &format!("{}px solid {color}", format_num(half_height)),
            );
        }
        ShapeKind::Star {
            center,
            outer_radius,
            ..
        } => {
            let size = outer_radius * 2.0;
            emit_box(out, center.x - size / 2.0, center.y - size / 2.0, size, size);
            emit_prop(out, "background-color", &color);
            emit_prop(out, "clip-path", STAR_CLIP_PATH);
        }
        ShapeKind::Path { .. } => {}
        ShapeKind::Fill { x, y } => {
            let _ = writeln!(out, "  /* bucket fill at ({x}, {y}) is raster-only */");
        }
    }

    out.push_str("}\n\n");
}

fn emit_box(out: &mut String, left: f64, top: f64, width: f64, height: f64) {
    emit_prop(out, "left", &format!("{}px", format_num(left)));
    emit_prop(out, "top", &format!("{}px", format_num(top)));
    emit_prop(out, "width", &format!("{}px", format_num(width)));
    emit_prop(out, "height", &format!("{}px", format_num(height)));
}

fn emit_prop(out: &mut String, name: &str, value: &str) {
    let _ = writeln!(out, "  {name}: {value};");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::id::ShapeId;
    use crate::model::Point;
    use pretty_assertions::assert_eq;

    fn scene_of(kind: ShapeKind) -> Scene {
        std::iter::once(Shape::new(ShapeId::new(0), kind, Color::rgb(255, 0, 0), 3.0)).collect()
    }

    #[test]
    fn empty_scene_has_only_container() {
        let css = to_css(&Scene::new(), 800, 600);
        assert_eq!(
            css,
            "/* Generated by Code Art Studio */\n.art-container {\n  position: relative;\n  width: 800px;\n  height: 600px;\n  background: #ffffff;\n}\n\n"
        );
        assert!(!css.contains(".shape-"));
    }

    #[test]
    fn rectangle_dragged_backwards_is_normalized() {
        let css = to_css(
            &scene_of(ShapeKind::rectangle_between(
                Point::new(7.0, 9.0),
                Point::new(2.0, 2.0),
            )),
            800,
            600,
        );
        assert!(css.contains(
            ".shape-0 {\n  position: absolute;\n  left: 2px;\n  top: 2px;\n  width: 5px;\n  height: 7px;\n  border: 3px solid #ff0000;\n  background: transparent;\n}\n"
        ));
    }

    #[test]
    fn circle_uses_rounded_box() {
        let css = to_css(
            &scene_of(ShapeKind::circle_between(
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
            )),
            100,
            100,
        );
        assert!(css.contains("  left: 0px;\n  top: -5px;\n  width: 10px;\n  height: 10px;\n"));
        assert!(css.contains("border-radius: 50%;"));
    }

    #[test]
    fn line_is_a_rotated_bar() {
        let css = to_css(
            &scene_of(ShapeKind::line_between(
                Point::new(10.0, 10.0),
                Point::new(10.0, 30.0),
            )),
            100,
            100,
        );
        assert!(css.contains("  left: 10px;\n  top: 8.5px;\n  width: 20px;\n  height: 3px;\n"));
        assert!(css.contains("  background: #ff0000;\n"));
        assert!(css.contains("  transform-origin: 0 50%;\n  transform: rotate(90deg);\n"));
        assert!(!css.contains("border"));
    }

    #[test]
    fn triangle_uses_border_trick() {
        let css = to_css(
            &scene_of(ShapeKind::triangle_between(
                Point::new(20.0, 0.0),
                Point::new(0.0, 10.0),
            )),
            100,
            100,
        );
        assert!(css.contains("  left: 0px;\n  top: 0px;\n  width: 0;\n  height: 0;\n"));
        assert!(css.contains("  border-left: 10px solid transparent;\n"));
        assert!(css.contains("  border-right: 10px solid transparent;\n"));
        assert!(css.contains("  border-bottom: 5px solid #ff0000;\n"));
    }

    #[test]
    fn star_clip_path_is_fixed() {
        let small = to_css(
            &scene_of(ShapeKind::star_between(
                Point::new(0.0, 0.0),
                Point::new(10.0, 10.0),
            )),
            100,
            100,
        );
        let large = to_css(
            &scene_of(ShapeKind::star_between(
                Point::new(0.0, 0.0),
                Point::new(90.0, 10.0),
            )),
            100,
            100,
        );
        let clip = format!("  clip-path: {STAR_CLIP_PATH};\n");
        assert!(small.contains(&clip));
        assert!(large.contains(&clip));
        assert!(large.contains("  left: 0px;\n  top: -40px;\n  width: 90px;\n  height: 90px;\n"));
        assert!(large.contains("  background-color: #ff0000;\n"));
    }

    #[test]
    fn freehand_path_is_positioned_only() {
        let css = to_css(
            &scene_of(ShapeKind::Path {
                points: vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)],
                composite: crate::model::CompositeMode::Normal,
                opacity: 1.0,
            }),
            100,
            100,
        );
        assert!(css.ends_with(".shape-0 {\n  position: absolute;\n}\n\n"));
    }
}
