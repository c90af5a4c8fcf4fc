//! CPU stroker: shape outlines → round-capped strokes on the surface.
//!
//! Outlines are built as kurbo paths, flattened to polylines, and stroked by
//! testing pixel centers against the distance to each segment (a capsule per
//! segment). Coverage is collected into a per-shape mask first and then
//! composited once, so overlapping segments of one stroke never blend twice.
//! Coverage is binary, which keeps replay byte-for-byte deterministic.

use crate::surface::Surface;
use art_core::model::{Point, Shape, ShapeKind, star_vertices, triangle_vertices};
use kurbo::{BezPath, PathEl, Shape as _};

/// Flattening tolerance in pixels.
const TOLERANCE: f64 = 0.1;

/// Strokes thinner than this still cover the pixel they pass through.
const MIN_RADIUS: f64 = 0.5;

// ─── Outlines ────────────────────────────────────────────────────────────

/// The outline of `shape` as a kurbo path. Fills have no outline.
pub fn outline(shape: &Shape) -> Option<BezPath> {
    let path = match &shape.kind {
        ShapeKind::Path { points, .. } => polyline_path(points, false)?,
        ShapeKind::Line { from, to } => polyline_path(&[*from, *to], false)?,
        ShapeKind::Rectangle {
            origin,
            width,
            height,
        } => kurbo::Rect::from_points(
            to_kurbo(*origin),
            kurbo::Point::new(origin.x + width, origin.y + height),
        )
        .to_path(TOLERANCE),
        ShapeKind::Circle { center, radius } => {
            kurbo::Circle::new(to_kurbo(*center), radius.abs()).to_path(TOLERANCE)
        }
        ShapeKind::Ellipse {
            center,
            radius_x,
            radius_y,
        } => kurbo::Ellipse::new(to_kurbo(*center), (radius_x.abs(), radius_y.abs()), 0.0)
            .to_path(TOLERANCE),
        ShapeKind::Triangle { from, to } => polyline_path(&triangle_vertices(*from, *to), true)?,
        ShapeKind::Star {
            center,
            inner_radius,
            outer_radius,
            points,
        } => polyline_path(
            &star_vertices(*center, *inner_radius, *outer_radius, *points),
            true,
        )?,
        ShapeKind::Fill { .. } => return None,
    };
    Some(path)
}

fn to_kurbo(p: Point) -> kurbo::Point {
    kurbo::Point::new(p.x, p.y)
}

fn polyline_path(points: &[Point], closed: bool) -> Option<BezPath> {
    let (first, rest) = points.split_first()?;
    let mut path = BezPath::new();
    path.move_to(to_kurbo(*first));
    for p in rest {
        path.line_to(to_kurbo(*p));
    }
    if closed {
        path.close_path();
    }
    Some(path)
}

/// Flatten `path` into polylines, one per subpath. A closed subpath repeats
/// its first point at the end.
pub fn polylines(path: &BezPath) -> Vec<Vec<kurbo::Point>> {
    let mut lines: Vec<Vec<kurbo::Point>> = Vec::new();
    kurbo::flatten(path.iter(), TOLERANCE, |el| match el {
        PathEl::MoveTo(p) => lines.push(vec![p]),
        PathEl::LineTo(p) => match lines.last_mut() {
            Some(line) => line.push(p),
            None => lines.push(vec![p]),
        },
        PathEl::ClosePath => {
            if let Some(line) = lines.last_mut()
                && let Some(&start) = line.first()
            {
                line.push(start);
            }
        }
        // flatten only emits lines
        PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
    });
    lines
}

// ─── Coverage ────────────────────────────────────────────────────────────

/// Pixels covered by one shape, clipped to the surface.
#[derive(Debug, Clone)]
pub struct Coverage {
    x0: u32,
    y0: u32,
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Coverage {
    /// Mask for stroking `lines` at `stroke_width` on a `surface_w` ×
    /// `surface_h` surface. `None` when nothing lands on the surface.
    pub fn stroke(
        lines: &[Vec<kurbo::Point>],
        stroke_width: f64,
        surface_w: u32,
        surface_h: u32,
    ) -> Option<Self> {
        let radius = (stroke_width / 2.0).max(MIN_RADIUS);

        let bounds = lines
            .iter()
            .flatten()
            .fold(None::<kurbo::Rect>, |acc, p| {
                let r = kurbo::Rect::from_points(*p, *p);
                Some(acc.map_or(r, |a| a.union(r)))
            })?
            .inflate(radius, radius);

        let x0 = bounds.x0.floor().max(0.0);
        let y0 = bounds.y0.floor().max(0.0);
        let x1 = bounds.x1.ceil().min(f64::from(surface_w));
        let y1 = bounds.y1.ceil().min(f64::from(surface_h));
        if !(x1 > x0 && y1 > y0) {
            return None;
        }

        let mut mask = Self {
            x0: x0 as u32,
            y0: y0 as u32,
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
            bits: Vec::new(),
        };
        mask.bits = vec![false; mask.width as usize * mask.height as usize];

        for line in lines {
            match line.as_slice() {
                [] => {}
                [dot] => mask.capsule(*dot, *dot, radius),
                _ => {
                    for seg in line.windows(2) {
                        mask.capsule(seg[0], seg[1], radius);
                    }
                }
            }
        }
        Some(mask)
    }

    fn capsule(&mut self, a: kurbo::Point, b: kurbo::Point, radius: f64) {
        let seg = kurbo::Rect::from_points(a, b).inflate(radius, radius);
        let left = (seg.x0.floor().max(f64::from(self.x0))) as u32;
        let top = (seg.y0.floor().max(f64::from(self.y0))) as u32;
        let right = (seg.x1.ceil().min(f64::from(self.x0 + self.width))).max(0.0) as u32;
        let bottom = (seg.y1.ceil().min(f64::from(self.y0 + self.height))).max(0.0) as u32;
        let radius_sq = radius * radius;

        for y in top..bottom {
            for x in left..right {
                let center = kurbo::Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if distance_sq_to_segment(center, a, b) <= radius_sq {
                    let idx = (y - self.y0) as usize * self.width as usize + (x - self.x0) as usize;
                    self.bits[idx] = true;
                }
            }
        }
    }

    /// Covered pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.bits.iter().enumerate().filter(|(_, hit)| **hit).map(|(i, _)| {
            let i = i as u32;
            (self.x0 + i % self.width, self.y0 + i / self.width)
        })
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|hit| **hit).count()
    }
}

fn distance_sq_to_segment(p: kurbo::Point, a: kurbo::Point, b: kurbo::Point) -> f64 {
    let v = b - a;
    let w = p - a;
    let len_sq = v.hypot2();
    if len_sq <= f64::EPSILON {
        return w.hypot2();
    }
    let t = (w.dot(v) / len_sq).clamp(0.0, 1.0);
    (p - (a + v * t)).hypot2()
}

/// Stroke coverage of `shape` on `surface`, or `None` when it draws nothing.
pub fn coverage(shape: &Shape, surface: &Surface) -> Option<Coverage> {
    let path = outline(shape)?;
    let lines = polylines(&path);
    Coverage::stroke(&lines, shape.stroke_width, surface.width(), surface.height())
}
