use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a committed shape.
///
/// Ids increase monotonically in creation order and are never handed out
/// twice by the same [`IdAllocator`], even after the shape that owned one was
/// undone away. Snapshots carry the ids of the shapes they contain, so a redo
/// brings back exactly the ids that were there before.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(u64);

impl ShapeId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out [`ShapeId`]s. Owned by a drawing session rather than kept in a
/// process-wide counter, so two sessions never share a sequence.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn next_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to [`next_id`](Self::next_id) will return.
    pub fn peek(&self) -> ShapeId {
        ShapeId(self.next)
    }
}
