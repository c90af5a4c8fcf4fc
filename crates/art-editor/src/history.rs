//! Undo/Redo history.
//!
//! History is a list of whole-scene snapshots plus a cursor marking the
//! active one. Recording truncates everything after the cursor, so a new
//! drawing after an undo discards the redo branch. Undo and redo only move
//! the cursor and hand back a copy of the snapshot there; the caller replaces
//! its live scene with it.
//!
//! The list is capped. When it is full the oldest snapshot is dropped and the
//! cursor shifts down with the remaining ones.

use art_core::Scene;

/// Default number of snapshots kept, the initial empty scene included.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Scene>,
    cursor: usize,
    /// Maximum number of retained snapshots (at least 1).
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    /// History holding a single empty scene.
    pub fn new(limit: usize) -> Self {
        Self::with_initial(Scene::new(), limit)
    }

    pub fn with_initial(initial: Scene, limit: usize) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            limit: limit.max(1),
        }
    }

    /// Snapshot `scene` as the newest state, discarding any redo branch.
    pub fn record(&mut self, scene: &Scene) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(scene.clone());
        if self.snapshots.len() > self.limit {
            let excess = self.snapshots.len() - self.limit;
            self.snapshots.drain(..excess);
            log::debug!("history full, dropped {excess} oldest snapshot(s)");
        }
        self.cursor = self.snapshots.len() - 1;
        log::debug!(
            "recorded snapshot {} ({} shapes)",
            self.cursor,
            scene.len()
        );
    }

    /// Step back one snapshot. `None` when already at the oldest.
    pub fn undo(&mut self) -> Option<Scene> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        log::debug!("undo to snapshot {}", self.cursor);
        Some(self.snapshots[self.cursor].clone())
    }

    /// Step forward one snapshot. `None` when already at the newest.
    pub fn redo(&mut self) -> Option<Scene> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        log::debug!("redo to snapshot {}", self.cursor);
        Some(self.snapshots[self.cursor].clone())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &Scene {
        &self.snapshots[self.cursor]
    }
}
