//! WASM bridge for Code Art Studio: exposes the drawing session to the page.
//!
//! Compiled via `wasm-pack build --target web`. The page owns DOM wiring,
//! the toolbar, downloads, and the clipboard; everything else goes through
//! [`ArtCanvas`].

use art_core::codegen::CodeFormat;
use art_core::{CanvasConfig, Point};
use art_editor::shortcuts::{ShortcutAction, ShortcutMap};
use art_editor::{Session, ToolKind};
use wasm_bindgen::Clamped;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, ImageData};

/// The WASM-facing canvas controller. All interaction from the page goes
/// through this struct.
#[wasm_bindgen]
pub struct ArtCanvas {
    session: Session,
}

#[wasm_bindgen]
impl ArtCanvas {
    /// Create a canvas controller from a JSON configuration object. An empty
    /// string means the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<ArtCanvas, JsValue> {
        console_error_panic_hook_setup();

        let config = if config_json.trim().is_empty() {
            CanvasConfig::default()
        } else {
            CanvasConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e))?
        };
        Ok(Self::with_config(config))
    }

    pub fn width(&self) -> u32 {
        self.session.config().width
    }

    pub fn height(&self) -> u32 {
        self.session.config().height
    }

    // ─── Pointer input ───────────────────────────────────────────────────

    /// Handle pointer down. Returns true if the scene changed (bucket fill).
    pub fn handle_pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.session.pointer_down(Point::new(x, y))
    }

    /// Handle pointer move. The page should redraw afterwards to show the
    /// preview.
    pub fn handle_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.session.pointer_move(Point::new(x, y))
    }

    /// Handle pointer up, or the pointer leaving the canvas. Returns a JSON
    /// string: `{"changed":bool,"canUndo":bool,"canRedo":bool}`
    pub fn handle_pointer_up(&mut self, x: f64, y: f64) -> String {
        let changed = self.session.pointer_release(Point::new(x, y));
        self.status_json(changed)
    }

    // ─── Tool settings ───────────────────────────────────────────────────

    /// Switch the active tool by name. Unknown names keep the current tool
    /// and return false.
    pub fn set_tool(&mut self, name: &str) -> bool {
        match self.session.set_tool_name(name) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    pub fn get_tool_name(&self) -> String {
        self.session.tool().name().to_string()
    }

    /// Set the drawing color from an `<input type="color">` value.
    pub fn set_color(&mut self, hex: &str) {
        self.session.set_color(hex);
    }

    pub fn get_color(&self) -> String {
        self.session.color().to_hex()
    }

    pub fn set_size(&mut self, size: u32) {
        self.session.set_size(size);
    }

    pub fn get_size(&self) -> u32 {
        self.session.size()
    }

    // ─── Scene commands ──────────────────────────────────────────────────

    pub fn clear(&mut self) {
        self.session.clear();
    }

    pub fn undo(&mut self) -> bool {
        self.session.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.session.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.session.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.session.can_redo()
    }

    // ─── Outputs ─────────────────────────────────────────────────────────

    /// Generated code for `format` (`css`, `svg`, or `html`). Unknown
    /// formats fall back to CSS.
    pub fn get_code(&self, format: &str) -> String {
        let format = format.parse().unwrap_or_else(|e: String| {
            log::warn!("{e}, using css");
            CodeFormat::Css
        });
        self.session.generated_code(format)
    }

    /// The committed scene as a JSON array of shapes.
    pub fn get_scene_json(&self) -> String {
        serde_json::to_string(self.session.scene()).unwrap_or_else(|_| "[]".to_string())
    }

    /// PNG bytes of the committed drawing.
    pub fn export_png(&self) -> Result<js_sys::Uint8Array, JsValue> {
        let bytes = self
            .session
            .export_png()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(js_sys::Uint8Array::from(bytes.as_slice()))
    }

    /// Filename the page should use when downloading [`export_png`](Self::export_png).
    pub fn export_filename(&self) -> String {
        self.session.export_filename().to_string()
    }

    /// Blit the committed drawing plus any in-progress preview into `ctx`.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let frame = self.session.compose_frame();
        let data = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(frame.as_raw()),
            frame.width(),
            frame.height(),
        )?;
        ctx.put_image_data(&data, 0.0, 0.0)
    }

    // ─── Keyboard Shortcut API ───────────────────────────────────────────

    /// Handle a keyboard event. Returns a JSON string:
    /// `{"handled":bool,"changed":bool,"action":"<name>","tool":"<tool_name>"}`
    ///
    /// `save` and `copy` are reported but not acted on: downloading and
    /// clipboard writes belong to the page.
    pub fn handle_key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        let Some(action) = ShortcutMap::resolve(key, ctrl, shift, alt, meta) else {
            return key_json(false, false, "none", self.session.tool());
        };
        let changed = self.dispatch_action(action);
        key_json(true, changed, action.name(), self.session.tool())
    }
}

impl ArtCanvas {
    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            session: Session::new(config),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn status_json(&self, changed: bool) -> String {
        serde_json::json!({
            "changed": changed,
            "canUndo": self.session.can_undo(),
            "canRedo": self.session.can_redo(),
        })
        .to_string()
    }

    /// Dispatch a shortcut action. Returns whether the scene changed.
    fn dispatch_action(&mut self, action: ShortcutAction) -> bool {
        match action {
            ShortcutAction::Tool(tool) => {
                self.session.set_tool(tool);
                false
            }
            ShortcutAction::Undo => self.session.undo(),
            ShortcutAction::Redo => self.session.redo(),
            // Handled by the page
            ShortcutAction::Save | ShortcutAction::Copy => false,
        }
    }
}

fn key_json(handled: bool, changed: bool, action: &str, tool: ToolKind) -> String {
    serde_json::json!({
        "handled": handled,
        "changed": changed,
        "action": action,
        "tool": tool.name(),
    })
    .to_string()
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Code Art Studio panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
