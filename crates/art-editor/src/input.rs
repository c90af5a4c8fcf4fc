//! Pointer input in canvas coordinates.
//!
//! The host translates mouse and touch events into these; a release outside
//! the canvas arrives as an ordinary `PointerUp` at the last position.

use art_core::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
}

impl InputEvent {
    pub fn from_pointer_down(x: f64, y: f64) -> Self {
        Self::PointerDown { x, y }
    }

    pub fn from_pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up(x: f64, y: f64) -> Self {
        Self::PointerUp { x, y }
    }

    pub fn point(&self) -> Point {
        match *self {
            Self::PointerDown { x, y } | Self::PointerMove { x, y } | Self::PointerUp { x, y } => {
                Point::new(x, y)
            }
        }
    }
}
