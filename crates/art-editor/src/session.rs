//! Drawing session: the single owner of scene, history, tools, and surface.
//!
//! All host interaction goes through [`Session`]. Pointer events are routed
//! to the active tool; whatever the tool commits is appended to the scene,
//! painted onto the committed surface, and recorded in history exactly once.
//! Undo and redo replace the scene wholesale and replay it.
//!
//! The committed surface always equals a fresh replay of the scene. Previews
//! are composed on a copy ([`Session::compose_frame`]) and never touch it.

use crate::history::History;
use crate::input::InputEvent;
use crate::tools::{BucketTool, Brush, Draft, FreehandTool, ShapeTool, Tool, ToolKind, ToolOutput};
use art_core::codegen::{Board, CodeFormat, generate};
use art_core::{CanvasConfig, Color, IdAllocator, Point, Scene, Shape, ShapeKind};
use art_render::{
    ExportError, Surface, fill_changes, fill_surface, paint_faded, paint_shape, render,
};

/// Opacity geometric previews are drawn with.
pub const PREVIEW_OPACITY: f32 = 0.5;

pub struct Session {
    config: CanvasConfig,
    scene: Scene,
    history: History,
    ids: IdAllocator,
    active_tool: ToolKind,
    freehand_tool: FreehandTool,
    shape_tool: ShapeTool,
    bucket_tool: BucketTool,
    color: Color,
    size: u32,
    /// Raster of the committed scene.
    surface: Surface,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl Session {
    pub fn new(config: CanvasConfig) -> Self {
        let surface = Surface::from_config(&config);
        Self {
            scene: Scene::new(),
            history: History::new(config.history_limit),
            ids: IdAllocator::new(),
            active_tool: ToolKind::default(),
            freehand_tool: FreehandTool::new(ToolKind::Pencil),
            shape_tool: ShapeTool::new(ToolKind::Line),
            bucket_tool: BucketTool::new(),
            color: config.default_color,
            size: config.default_size.max(1),
            surface,
            config,
        }
    }

    // ─── Input ───────────────────────────────────────────────────────────

    /// Returns `true` when the scene changed.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        self.handle_event(InputEvent::from_pointer_down(point.x, point.y))
    }

    /// Returns `true` when the scene changed (never, for a move).
    pub fn pointer_move(&mut self, point: Point) -> bool {
        self.handle_event(InputEvent::from_pointer_move(point.x, point.y))
    }

    /// Finish the active gesture. Release outside the canvas behaves the
    /// same as inside. Returns `true` when a shape was committed.
    pub fn pointer_release(&mut self, point: Point) -> bool {
        self.handle_event(InputEvent::from_pointer_up(point.x, point.y))
    }

    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        let brush = self.brush();
        let output = match self.active_tool {
            ToolKind::Pencil | ToolKind::Brush | ToolKind::Eraser => {
                self.freehand_tool.handle(&event, &brush)
            }
            ToolKind::Bucket => self.bucket_tool.handle(&event, &brush),
            ToolKind::Line
            | ToolKind::Rectangle
            | ToolKind::Circle
            | ToolKind::Triangle
            | ToolKind::Star
            | ToolKind::Ellipse => self.shape_tool.handle(&event, &brush),
        };
        self.apply_output(output)
    }

    fn apply_output(&mut self, output: ToolOutput) -> bool {
        match output {
            ToolOutput::Idle => false,
            ToolOutput::Commit(draft) => {
                self.commit(draft);
                true
            }
            ToolOutput::Fill { x, y, color } => {
                if !fill_changes(&self.surface, (x, y), color) {
                    log::debug!("bucket fill at ({x}, {y}) would change nothing");
                    return false;
                }
                let shape = Shape::new(self.ids.next_id(), ShapeKind::Fill { x, y }, color, 1.0);
                fill_surface(&mut self.surface, (x, y), color);
                self.push_and_record(shape);
                true
            }
        }
    }

    fn commit(&mut self, draft: Draft) {
        let shape = draft.into_shape(self.ids.next_id());
        paint_shape(&mut self.surface, &shape);
        self.push_and_record(shape);
    }

    fn push_and_record(&mut self, shape: Shape) {
        log::debug!("commit {} {}", shape.kind.name(), shape.id);
        self.scene.push(shape);
        self.history.record(&self.scene);
    }

    // ─── Tool settings ───────────────────────────────────────────────────

    /// Switch tools. An unfinished gesture of the previous tool is dropped.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if tool == self.active_tool {
            return;
        }
        self.cancel_gestures();
        self.active_tool = tool;
        if tool.is_freehand() {
            self.freehand_tool.set_kind(tool);
        } else if tool.is_geometric() {
            self.shape_tool.set_kind(tool);
        }
        log::debug!("tool → {tool}");
    }

    /// Switch tools by name.
    ///
    /// # Errors
    /// Returns an error for an unknown tool name; the active tool is kept.
    pub fn set_tool_name(&mut self, name: &str) -> Result<(), String> {
        self.set_tool(name.parse()?);
        Ok(())
    }

    pub fn tool(&self) -> ToolKind {
        self.active_tool
    }

    /// Set the drawing color from a picker value. Malformed input degrades
    /// (see [`Color::from_hex`]); it is never rejected.
    pub fn set_color(&mut self, hex: &str) {
        self.color = Color::from_hex(hex);
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the tool size in pixels. Sizes below 1 are raised to 1.
    pub fn set_size(&mut self, size: u32) {
        if size == 0 {
            log::warn!("tool size 0 raised to 1");
        }
        self.size = size.max(1);
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    fn brush(&self) -> Brush {
        Brush {
            color: self.color,
            size: self.size,
            background: self.config.background,
        }
    }

    fn cancel_gestures(&mut self) {
        self.freehand_tool.cancel();
        self.shape_tool.cancel();
        self.bucket_tool.cancel();
    }

    // ─── Scene commands ──────────────────────────────────────────────────

    /// Remove every shape. Recorded like any other drawing, so it can be
    /// undone.
    pub fn clear(&mut self) {
        self.cancel_gestures();
        self.scene.clear();
        self.surface.clear();
        log::debug!("clear");
        self.history.record(&self.scene);
    }

    /// Returns `true` when the scene changed.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(scene) => {
                self.restore(scene);
                true
            }
            None => false,
        }
    }

    /// Returns `true` when the scene changed.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(scene) => {
                self.restore(scene);
                true
            }
            None => false,
        }
    }

    fn restore(&mut self, scene: Scene) {
        self.cancel_gestures();
        self.scene = scene;
        render(&mut self.surface, &self.scene);
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ─── Outputs ─────────────────────────────────────────────────────────

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// The committed raster, without any preview.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The in-progress drawing of the active tool, if any.
    pub fn preview(&self) -> Option<Shape> {
        let brush = self.brush();
        let draft = match self.active_tool {
            ToolKind::Pencil | ToolKind::Brush | ToolKind::Eraser => {
                self.freehand_tool.preview(&brush)
            }
            ToolKind::Bucket => self.bucket_tool.preview(&brush),
            _ => self.shape_tool.preview(&brush),
        }?;
        Some(draft.to_preview_shape())
    }

    /// The committed raster with the current preview on top: freehand
    /// strokes at their own style, geometric shapes at half opacity.
    pub fn compose_frame(&self) -> Surface {
        let mut frame = self.surface.clone();
        if let Some(preview) = self.preview() {
            let fade = if self.active_tool.is_freehand() {
                1.0
            } else {
                PREVIEW_OPACITY
            };
            paint_faded(&mut frame, &preview, fade);
        }
        frame
    }

    /// Current scene as CSS, SVG, or HTML text.
    pub fn generated_code(&self, format: CodeFormat) -> String {
        generate(&self.scene, &Board::from(&self.config), format)
    }

    /// The committed raster as PNG bytes.
    ///
    /// # Errors
    /// See [`Surface::encode_png`].
    pub fn export_png(&self) -> Result<Vec<u8>, ExportError> {
        self.surface.encode_png()
    }

    pub fn export_filename(&self) -> &str {
        &self.config.export_filename
    }
}
