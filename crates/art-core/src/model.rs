//! Shape model and scene.
//!
//! A [`Scene`] is an ordered list of committed [`Shape`]s: insertion order is
//! paint order, so later shapes are drawn on top. Every shape keeps its own
//! style, which lets the scene be replayed after the active tool, color, or
//! size has changed.
//!
//! Geometric shapes are derived from the two corner points of a drag. The
//! derivations live on [`ShapeKind`] so that previews and commits agree.

use crate::color::Color;
use crate::id::ShapeId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ─── Points ──────────────────────────────────────────────────────────────

/// A canvas-space position. Coordinates outside the canvas are valid and
/// simply clip when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

// ─── Style ───────────────────────────────────────────────────────────────

/// How a freehand stroke combines with the pixels under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompositeMode {
    /// Blend over what is already there.
    #[default]
    Normal,
    /// Clear covered pixels back to the background color.
    Erase,
}

/// Number of points on a star.
pub const STAR_POINTS: usize = 5;

// ─── Shapes ──────────────────────────────────────────────────────────────

/// Geometry of a committed shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeKind {
    /// Freehand stroke from pencil, brush, or eraser. Holds at least one point.
    Path {
        points: Vec<Point>,
        composite: CompositeMode,
        /// Stroke opacity in `0.0..=1.0` (the brush paints at 0.8).
        opacity: f32,
    },

    Line { from: Point, to: Point },

    /// `width`/`height` are signed: a drag up or to the left gives negative
    /// sizes. Consumers position from `min(x1, x2)` and use absolute sizes.
    Rectangle { origin: Point, width: f64, height: f64 },

    Circle { center: Point, radius: f64 },

    Ellipse { center: Point, radius_x: f64, radius_y: f64 },

    /// Apex at `(mid_x, from.y)`, base corners at `(from.x, to.y)` and
    /// `(to.x, to.y)`.
    Triangle { from: Point, to: Point },

    Star {
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        points: u8,
    },

    /// Bucket fill seeded at an integer pixel. Replayed by re-running the
    /// flood fill at this position in paint order.
    Fill { x: u32, y: u32 },
}

impl ShapeKind {
    pub fn rectangle_between(p1: Point, p2: Point) -> Self {
        ShapeKind::Rectangle {
            origin: p1,
            width: p2.x - p1.x,
            height: p2.y - p1.y,
        }
    }

    pub fn circle_between(p1: Point, p2: Point) -> Self {
        ShapeKind::Circle {
            center: p1.midpoint(p2),
            radius: p1.distance(p2) / 2.0,
        }
    }

    pub fn ellipse_between(p1: Point, p2: Point) -> Self {
        ShapeKind::Ellipse {
            center: p1.midpoint(p2),
            radius_x: (p2.x - p1.x).abs() / 2.0,
            radius_y: (p2.y - p1.y).abs() / 2.0,
        }
    }

    pub fn triangle_between(p1: Point, p2: Point) -> Self {
        ShapeKind::Triangle { from: p1, to: p2 }
    }

    /// Outer radius comes from the horizontal extent only; the inner radius
    /// is always half of it.
    pub fn star_between(p1: Point, p2: Point) -> Self {
        let outer_radius = (p2.x - p1.x).abs() / 2.0;
        ShapeKind::Star {
            center: p1.midpoint(p2),
            inner_radius: outer_radius / 2.0,
            outer_radius,
            points: STAR_POINTS as u8,
        }
    }

    pub fn line_between(p1: Point, p2: Point) -> Self {
        ShapeKind::Line { from: p1, to: p2 }
    }

    /// Lowercase variant name, as used in tool names and JSON.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Path { .. } => "path",
            ShapeKind::Line { .. } => "line",
            ShapeKind::Rectangle { .. } => "rectangle",
            ShapeKind::Circle { .. } => "circle",
            ShapeKind::Ellipse { .. } => "ellipse",
            ShapeKind::Triangle { .. } => "triangle",
            ShapeKind::Star { .. } => "star",
            ShapeKind::Fill { .. } => "fill",
        }
    }
}

/// Vertices of a triangle: apex, base-left, base-right.
pub fn triangle_vertices(from: Point, to: Point) -> [Point; 3] {
    [
        Point::new((from.x + to.x) / 2.0, from.y),
        Point::new(from.x, to.y),
        Point::new(to.x, to.y),
    ]
}

/// Vertices of a star, starting straight up from the center and alternating
/// outer and inner radius every `π / points` radians.
pub fn star_vertices(
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    points: u8,
) -> SmallVec<[Point; 2 * STAR_POINTS]> {
    let step = std::f64::consts::PI / f64::from(points.max(1));
    (0..2 * usize::from(points))
        .map(|i| {
            let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
            let angle = i as f64 * step - std::f64::consts::FRAC_PI_2;
            Point::new(
                center.x + angle.cos() * radius,
                center.y + angle.sin() * radius,
            )
        })
        .collect()
}

/// A committed shape: identity, geometry, and its own style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    #[serde(flatten)]
    pub kind: ShapeKind,
    pub color: Color,
    pub stroke_width: f64,
}

impl Shape {
    pub fn new(id: ShapeId, kind: ShapeKind, color: Color, stroke_width: f64) -> Self {
        Self {
            id,
            kind,
            color,
            stroke_width,
        }
    }

    /// Opacity this shape paints with.
    pub fn opacity(&self) -> f32 {
        match &self.kind {
            ShapeKind::Path { opacity, .. } => *opacity,
            _ => 1.0,
        }
    }

    pub fn composite(&self) -> CompositeMode {
        match &self.kind {
            ShapeKind::Path { composite, .. } => *composite,
            _ => CompositeMode::Normal,
        }
    }
}

// ─── Scene ───────────────────────────────────────────────────────────────

/// Ordered list of committed shapes. Cloning a scene is a full value copy,
/// which is what history snapshots rely on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn last(&self) -> Option<&Shape> {
        self.shapes.last()
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

impl FromIterator<Shape> for Scene {
    fn from_iter<T: IntoIterator<Item = Shape>>(iter: T) -> Self {
        Self {
            shapes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn circle_from_corners() {
        match ShapeKind::circle_between(Point::new(0.0, 0.0), Point::new(10.0, 0.0)) {
            ShapeKind::Circle { center, radius } => {
                assert_eq!(center, Point::new(5.0, 0.0));
                assert_eq!(radius, 5.0);
            }
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn rectangle_sizes_are_signed() {
        match ShapeKind::rectangle_between(Point::new(2.0, 2.0), Point::new(7.0, 9.0)) {
            ShapeKind::Rectangle { width, height, .. } => {
                assert_eq!(width, 5.0);
                assert_eq!(height, 7.0);
            }
            other => panic!("expected rectangle, got {other:?}"),
        }
        match ShapeKind::rectangle_between(Point::new(7.0, 9.0), Point::new(2.0, 2.0)) {
            ShapeKind::Rectangle { width, height, .. } => {
                assert_eq!(width, -5.0);
                assert_eq!(height, -7.0);
            }
            other => panic!("expected rectangle, got {other:?}"),
        }
    }

    #[test]
    fn ellipse_radii_are_absolute_half_extents() {
        match ShapeKind::ellipse_between(Point::new(10.0, 20.0), Point::new(0.0, 0.0)) {
            ShapeKind::Ellipse {
                center,
                radius_x,
                radius_y,
            } => {
                assert_eq!(center, Point::new(5.0, 10.0));
                assert_eq!(radius_x, 5.0);
                assert_eq!(radius_y, 10.0);
            }
            other => panic!("expected ellipse, got {other:?}"),
        }
    }

    #[test]
    fn star_uses_horizontal_extent() {
        match ShapeKind::star_between(Point::new(0.0, 0.0), Point::new(20.0, 100.0)) {
            ShapeKind::Star {
                center,
                inner_radius,
                outer_radius,
                points,
            } => {
                assert_eq!(center, Point::new(10.0, 50.0));
                assert_eq!(outer_radius, 10.0);
                assert_eq!(inner_radius, 5.0);
                assert_eq!(points, 5);
            }
            other => panic!("expected star, got {other:?}"),
        }
    }

    #[test]
    fn star_first_vertex_points_up() {
        let v = star_vertices(Point::new(50.0, 50.0), 10.0, 20.0, 5);
        assert_eq!(v.len(), 10);
        assert!(approx(v[0].x, 50.0));
        assert!(approx(v[0].y, 30.0));
        // second vertex is on the inner radius
        assert!(approx(v[1].distance(Point::new(50.0, 50.0)), 10.0));
    }

    #[test]
    fn triangle_apex_is_mid_x_at_first_y() {
        let [apex, left, right] = triangle_vertices(Point::new(0.0, 0.0), Point::new(10.0, 8.0));
        assert_eq!(apex, Point::new(5.0, 0.0));
        assert_eq!(left, Point::new(0.0, 8.0));
        assert_eq!(right, Point::new(10.0, 8.0));
    }

    #[test]
    fn scene_clone_is_independent() {
        let mut scene = Scene::new();
        scene.push(Shape::new(
            ShapeId::new(0),
            ShapeKind::line_between(Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
            Color::BLACK,
            2.0,
        ));
        let snapshot = scene.clone();
        scene.clear();
        assert_eq!(snapshot.len(), 1);
        assert!(scene.is_empty());
    }

    #[test]
    fn shape_json_is_tagged_by_type() {
        let shape = Shape::new(
            ShapeId::new(3),
            ShapeKind::circle_between(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
            Color::rgb(255, 0, 0),
            4.0,
        );
        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(json["type"], "circle");
        assert_eq!(json["id"], 3);
        assert_eq!(json["color"], "#ff0000");
        assert_eq!(json["radius"], 5.0);
    }
}
