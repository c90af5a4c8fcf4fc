//! Scene → pixels.
//!
//! [`render`] replays a whole scene onto a cleared surface. [`paint_shape`]
//! draws one shape on top of what is already there, which is how a freshly
//! committed shape reaches the surface without a full replay. Both use each
//! shape's own style, never the session's current tool settings.

use crate::flood::fill_surface;
use crate::raster::coverage;
use crate::surface::Surface;
use art_core::model::{CompositeMode, Scene, Shape, ShapeKind};

/// Clear `surface` to its background and draw every shape in paint order.
///
/// Idempotent for a fixed scene: calling it twice leaves identical pixels.
pub fn render(surface: &mut Surface, scene: &Scene) {
    surface.clear();
    for shape in scene {
        paint_shape(surface, shape);
    }
}

/// Draw one committed shape on top of the current pixels.
pub fn paint_shape(surface: &mut Surface, shape: &Shape) {
    paint_faded(surface, shape, 1.0);
}

/// Draw `shape` with its opacity scaled by `fade`. Used for previews.
pub fn paint_faded(surface: &mut Surface, shape: &Shape, fade: f32) {
    log::trace!("paint {} {} ({})", shape.kind.name(), shape.id, shape.color);

    if let ShapeKind::Fill { x, y } = shape.kind {
        fill_surface(surface, (x, y), shape.color);
        return;
    }

    let Some(mask) = coverage(shape, surface) else {
        return;
    };

    match shape.composite() {
        CompositeMode::Normal => {
            let opacity = shape.opacity() * fade;
            for (x, y) in mask.pixels() {
                surface.blend(x, y, shape.color, opacity);
            }
        }
        CompositeMode::Erase => {
            let background = surface.background();
            for (x, y) in mask.pixels() {
                surface.put(x, y, background);
            }
        }
    }
}
