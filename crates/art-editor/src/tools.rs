//! Tool system for canvas interactions.
//!
//! Each tool turns pointer events into at most one committed drawing per
//! gesture. The session owns one instance of every tool and routes events to
//! the active one.
//!
//! ## Per-tool style
//!
//! | Tool | Width | Opacity | Compositing | Color |
//! |------|-------|---------|-------------|-------|
//! | pencil | size | 1.0 | normal | current |
//! | brush | 2 × size | 0.8 | normal | current |
//! | eraser | 3 × size | 1.0 | erase | background |
//! | shapes | size | 1.0 | normal | current |

use crate::input::InputEvent;
use art_core::model::*;
use art_core::{Color, ShapeId};
use std::fmt;
use std::str::FromStr;

/// The active tool determines how input events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolKind {
    #[default]
    Pencil,
    Brush,
    Eraser,
    Bucket,
    Line,
    Rectangle,
    Circle,
    Triangle,
    Star,
    Ellipse,
}

impl ToolKind {
    pub const ALL: [ToolKind; 10] = [
        ToolKind::Pencil,
        ToolKind::Brush,
        ToolKind::Eraser,
        ToolKind::Bucket,
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Circle,
        ToolKind::Triangle,
        ToolKind::Star,
        ToolKind::Ellipse,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Pencil => "pencil",
            ToolKind::Brush => "brush",
            ToolKind::Eraser => "eraser",
            ToolKind::Bucket => "bucket",
            ToolKind::Line => "line",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Circle => "circle",
            ToolKind::Triangle => "triangle",
            ToolKind::Star => "star",
            ToolKind::Ellipse => "ellipse",
        }
    }

    /// Pencil, brush, and eraser draw with a point-accumulating stroke.
    pub fn is_freehand(self) -> bool {
        matches!(self, ToolKind::Pencil | ToolKind::Brush | ToolKind::Eraser)
    }

    /// Tools that build a shape from the two corners of a drag.
    pub fn is_geometric(self) -> bool {
        !self.is_freehand() && self != ToolKind::Bucket
    }

    /// Stroke style of a freehand tool at `size`; `None` for other tools.
    pub fn stroke_style(self, size: u32) -> Option<StrokeStyle> {
        let size = f64::from(size);
        let style = match self {
            ToolKind::Pencil => StrokeStyle {
                width: size,
                opacity: 1.0,
                composite: CompositeMode::Normal,
            },
            ToolKind::Brush => StrokeStyle {
                width: size * 2.0,
                opacity: 0.8,
                composite: CompositeMode::Normal,
            },
            ToolKind::Eraser => StrokeStyle {
                width: size * 3.0,
                opacity: 1.0,
                composite: CompositeMode::Erase,
            },
            _ => return None,
        };
        Some(style)
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown tool: {s}"))
    }
}

/// Width, opacity, and compositing of a freehand stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub opacity: f32,
    pub composite: CompositeMode,
}

/// The session's current drawing settings, handed to tools on every event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub color: Color,
    pub size: u32,
    /// What the eraser paints with.
    pub background: Color,
}

// ─── Drafts ──────────────────────────────────────────────────────────────

/// A shape that has not been given an id yet: either the preview of an
/// in-progress gesture or the result of finishing one.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub kind: ShapeKind,
    pub color: Color,
    pub stroke_width: f64,
}

impl Draft {
    pub fn into_shape(self, id: ShapeId) -> Shape {
        Shape::new(id, self.kind, self.color, self.stroke_width)
    }

    /// View as a shape for painting. Previews never reach the scene, so the
    /// placeholder id is never observed.
    pub fn to_preview_shape(&self) -> Shape {
        Shape::new(
            ShapeId::new(u64::MAX),
            self.kind.clone(),
            self.color,
            self.stroke_width,
        )
    }
}

/// Build the geometric shape `tool` draws between two drag corners.
/// Returns `None` for freehand tools and the bucket.
pub fn commit_shape(tool: ToolKind, p1: Point, p2: Point, brush: &Brush) -> Option<Draft> {
    let kind = match tool {
        ToolKind::Line => ShapeKind::line_between(p1, p2),
        ToolKind::Rectangle => ShapeKind::rectangle_between(p1, p2),
        ToolKind::Circle => ShapeKind::circle_between(p1, p2),
        ToolKind::Triangle => ShapeKind::triangle_between(p1, p2),
        ToolKind::Star => ShapeKind::star_between(p1, p2),
        ToolKind::Ellipse => ShapeKind::ellipse_between(p1, p2),
        ToolKind::Pencil | ToolKind::Brush | ToolKind::Eraser | ToolKind::Bucket => return None,
    };
    Some(Draft {
        kind,
        color: brush.color,
        stroke_width: f64::from(brush.size),
    })
}

// ─── Strokes ─────────────────────────────────────────────────────────────

/// Points of an in-progress freehand stroke, with the style fixed at the
/// moment it began.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    color: Color,
    style: StrokeStyle,
}

impl Stroke {
    /// Start a stroke at `point`. `None` when `tool` is not freehand.
    pub fn begin(tool: ToolKind, point: Point, brush: &Brush) -> Option<Self> {
        let style = tool.stroke_style(brush.size)?;
        let color = match style.composite {
            CompositeMode::Erase => brush.background,
            CompositeMode::Normal => brush.color,
        };
        Some(Self {
            points: vec![point],
            color,
            style,
        })
    }

    pub fn extend(&mut self, point: Point) {
        self.points.push(point);
    }

    /// The stroke so far, as a `path` draft.
    pub fn draft(&self) -> Draft {
        self.clone().commit()
    }

    /// Finish the stroke as a `path` draft.
    pub fn commit(self) -> Draft {
        Draft {
            kind: ShapeKind::Path {
                points: self.points,
                composite: self.style.composite,
                opacity: self.style.opacity,
            },
            color: self.color,
            stroke_width: self.style.width,
        }
    }
}

// ─── Tools ───────────────────────────────────────────────────────────────

/// What handling one event produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// Nothing to commit (gesture in progress, or no gesture at all).
    Idle,
    /// A finished shape, ready for an id.
    Commit(Draft),
    /// Bucket click at an integer pixel.
    Fill { x: u32, y: u32, color: Color },
}

/// Trait for tools that handle input and produce drawings.
pub trait Tool {
    fn kind(&self) -> ToolKind;

    /// Handle an input event under the current brush settings.
    fn handle(&mut self, event: &InputEvent, brush: &Brush) -> ToolOutput;

    /// The in-progress drawing, if a gesture is active.
    fn preview(&self, brush: &Brush) -> Option<Draft>;

    /// Drop any in-progress gesture without committing it.
    fn cancel(&mut self);
}

// ─── Freehand Tool ───────────────────────────────────────────────────────

/// Pencil, brush, and eraser.
pub struct FreehandTool {
    kind: ToolKind,
    stroke: Option<Stroke>,
}

impl FreehandTool {
    pub fn new(kind: ToolKind) -> Self {
        Self { kind, stroke: None }
    }

    /// Switch between freehand tools. An active stroke keeps its style.
    pub fn set_kind(&mut self, kind: ToolKind) {
        if kind.is_freehand() {
            self.kind = kind;
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.stroke.is_some()
    }
}

impl Tool for FreehandTool {
    fn kind(&self) -> ToolKind {
        self.kind
    }

    fn handle(&mut self, event: &InputEvent, brush: &Brush) -> ToolOutput {
        match event {
            InputEvent::PointerDown { .. } => {
                self.stroke = Stroke::begin(self.kind, event.point(), brush);
                ToolOutput::Idle
            }
            InputEvent::PointerMove { .. } => {
                if let Some(stroke) = &mut self.stroke {
                    stroke.extend(event.point());
                }
                ToolOutput::Idle
            }
            InputEvent::PointerUp { .. } => match self.stroke.take() {
                Some(stroke) => ToolOutput::Commit(stroke.commit()),
                None => ToolOutput::Idle,
            },
        }
    }

    fn preview(&self, _brush: &Brush) -> Option<Draft> {
        self.stroke.as_ref().map(Stroke::draft)
    }

    fn cancel(&mut self) {
        self.stroke = None;
    }
}

// ─── Shape Tool ──────────────────────────────────────────────────────────

/// Line, rectangle, circle, triangle, star, and ellipse.
pub struct ShapeTool {
    kind: ToolKind,
    start: Option<Point>,
    current: Point,
}

impl ShapeTool {
    pub fn new(kind: ToolKind) -> Self {
        Self {
            kind,
            start: None,
            current: Point::default(),
        }
    }

    pub fn set_kind(&mut self, kind: ToolKind) {
        if kind.is_geometric() {
            self.kind = kind;
        }
    }
}

impl Tool for ShapeTool {
    fn kind(&self) -> ToolKind {
        self.kind
    }

    fn handle(&mut self, event: &InputEvent, brush: &Brush) -> ToolOutput {
        match event {
            InputEvent::PointerDown { .. } => {
                self.start = Some(event.point());
                self.current = event.point();
                ToolOutput::Idle
            }
            InputEvent::PointerMove { .. } => {
                if self.start.is_some() {
                    self.current = event.point();
                }
                ToolOutput::Idle
            }
            InputEvent::PointerUp { .. } => {
                let Some(start) = self.start.take() else {
                    return ToolOutput::Idle;
                };
                self.current = event.point();
                commit_shape(self.kind, start, self.current, brush)
                    .map_or(ToolOutput::Idle, ToolOutput::Commit)
            }
        }
    }

    fn preview(&self, brush: &Brush) -> Option<Draft> {
        commit_shape(self.kind, self.start?, self.current, brush)
    }

    fn cancel(&mut self) {
        self.start = None;
    }
}

// ─── Bucket Tool ─────────────────────────────────────────────────────────

/// Flood fill on pointer down. Moves and releases do nothing.
#[derive(Default)]
pub struct BucketTool;

impl BucketTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for BucketTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Bucket
    }

    fn handle(&mut self, event: &InputEvent, brush: &Brush) -> ToolOutput {
        match event {
            InputEvent::PointerDown { x, y } => {
                // pixel under the pointer; negative positions are off-canvas
                if *x < 0.0 || *y < 0.0 || !x.is_finite() || !y.is_finite() {
                    return ToolOutput::Idle;
                }
                ToolOutput::Fill {
                    x: x.floor().min(f64::from(u32::MAX)) as u32,
                    y: y.floor().min(f64::from(u32::MAX)) as u32,
                    color: brush.color,
                }
            }
            InputEvent::PointerMove { .. } | InputEvent::PointerUp { .. } => ToolOutput::Idle,
        }
    }

    fn preview(&self, _brush: &Brush) -> Option<Draft> {
        None
    }

    fn cancel(&mut self) {}
}
