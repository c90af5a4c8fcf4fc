//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s. The map lives
//! in Rust so the bridge and native hosts agree on bindings; acting on the
//! result (and anything touching the clipboard) is the host's job.

use crate::tools::ToolKind;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Switch to a tool.
    Tool(ToolKind),
    Undo,
    Redo,
    /// Export the surface as PNG.
    Save,
    /// Copy the generated code.
    Copy,
}

impl ShortcutAction {
    /// Stable name reported to the host.
    pub fn name(self) -> &'static str {
        match self {
            ShortcutAction::Tool(_) => "tool",
            ShortcutAction::Undo => "undo",
            ShortcutAction::Redo => "redo",
            ShortcutAction::Save => "save",
            ShortcutAction::Copy => "copy",
        }
    }
}

/// Resolves key events into shortcut actions.
///
/// On macOS `meta` is ⌘; elsewhere `ctrl` plays the same role, so either
/// counts as the command modifier.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `"Z"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        _alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        let cmd = ctrl || meta;
        let key = key.to_ascii_lowercase();

        if cmd {
            return match key.as_str() {
                "z" if shift => Some(ShortcutAction::Redo),
                "z" => Some(ShortcutAction::Undo),
                "s" => Some(ShortcutAction::Save),
                "c" => Some(ShortcutAction::Copy),
                _ => None,
            };
        }

        // ── Single keys (no command modifier) ──
        let tool = match key.as_str() {
            "p" => ToolKind::Pencil,
            "b" => ToolKind::Brush,
            "e" => ToolKind::Eraser,
            "l" => ToolKind::Line,
            "r" => ToolKind::Rectangle,
            "o" => ToolKind::Circle,
            _ => return None,
        };
        Some(ShortcutAction::Tool(tool))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_tool_shortcuts() {
        for (key, tool) in [
            ("p", ToolKind::Pencil),
            ("b", ToolKind::Brush),
            ("e", ToolKind::Eraser),
            ("l", ToolKind::Line),
            ("r", ToolKind::Rectangle),
            ("o", ToolKind::Circle),
        ] {
            assert_eq!(
                ShortcutMap::resolve(key, false, false, false, false),
                Some(ShortcutAction::Tool(tool))
            );
        }
        // Shift alone does not block tool keys
        assert_eq!(
            ShortcutMap::resolve("R", false, true, false, false),
            Some(ShortcutAction::Tool(ToolKind::Rectangle))
        );
    }

    #[test]
    fn resolve_undo_redo() {
        // Cmd+Z → Undo
        assert_eq!(
            ShortcutMap::resolve("z", false, false, false, true),
            Some(ShortcutAction::Undo)
        );
        // Ctrl+Z → Undo
        assert_eq!(
            ShortcutMap::resolve("z", true, false, false, false),
            Some(ShortcutAction::Undo)
        );
        // Cmd+Shift+Z → Redo (browsers report an uppercase key)
        assert_eq!(
            ShortcutMap::resolve("Z", false, true, false, true),
            Some(ShortcutAction::Redo)
        );
    }

    #[test]
    fn resolve_save_and_copy() {
        assert_eq!(
            ShortcutMap::resolve("s", true, false, false, false),
            Some(ShortcutAction::Save)
        );
        assert_eq!(
            ShortcutMap::resolve("c", false, false, false, true),
            Some(ShortcutAction::Copy)
        );
    }

    #[test]
    fn command_modifier_blocks_tool_keys() {
        assert_eq!(ShortcutMap::resolve("p", true, false, false, false), None);
        assert_eq!(ShortcutMap::resolve("b", false, false, false, true), None);
    }

    #[test]
    fn unbound_keys_resolve_to_none() {
        assert_eq!(ShortcutMap::resolve("q", false, false, false, false), None);
        assert_eq!(ShortcutMap::resolve("Escape", false, false, false, false), None);
    }
}
