//! 4-connected flood fill over an RGBA buffer.
//!
//! Traversal uses an explicit stack and a visited map, so region size is
//! bounded only by the buffer and every pixel is examined at most once.
//! Filled pixels always come out fully opaque, whatever the fill color's own
//! alpha.

use crate::surface::Surface;
use art_core::Color;

/// Fill the region of `seed`'s color that is 4-connected to `seed`.
///
/// `buffer` holds `width * height` row-major RGBA pixels. Returns the number
/// of pixels written; 0 when the seed is outside the buffer or its color
/// already equals `fill` on all four channels.
pub fn flood_fill(
    buffer: &mut [u8],
    width: u32,
    height: u32,
    seed: (u32, u32),
    fill: Color,
) -> usize {
    let (w, h) = (width as usize, height as usize);
    let (sx, sy) = (seed.0 as usize, seed.1 as usize);
    if sx >= w || sy >= h {
        return 0;
    }
    if buffer.len() < w * h * 4 {
        log::warn!(
            "flood fill buffer holds {} bytes, {width}x{height} needs {}",
            buffer.len(),
            w * h * 4
        );
        return 0;
    }

    let at = |x: usize, y: usize| (y * w + x) * 4;
    let target: [u8; 4] = {
        let i = at(sx, sy);
        [buffer[i], buffer[i + 1], buffer[i + 2], buffer[i + 3]]
    };
    if fill.same_rgba(target) {
        return 0;
    }

    let paint = fill.opaque().to_rgba();
    let mut visited = vec![false; w * h];
    let mut stack = vec![(sx, sy)];
    let mut filled = 0;

    while let Some((x, y)) = stack.pop() {
        let cell = y * w + x;
        if visited[cell] {
            continue;
        }
        visited[cell] = true;

        let i = at(x, y);
        if buffer[i..i + 4] != target {
            continue;
        }
        buffer[i..i + 4].copy_from_slice(&paint);
        filled += 1;

        if x > 0 {
            stack.push((x - 1, y));
        }
        if x + 1 < w {
            stack.push((x + 1, y));
        }
        if y > 0 {
            stack.push((x, y - 1));
        }
        if y + 1 < h {
            stack.push((x, y + 1));
        }
    }

    log::trace!("flood fill from ({sx}, {sy}) wrote {filled} pixels");
    filled
}

/// Whether filling at `seed` with `fill` would change `surface`.
pub fn fill_changes(surface: &Surface, seed: (u32, u32), fill: Color) -> bool {
    surface
        .pixel(seed.0, seed.1)
        .is_some_and(|target| target != fill)
}

/// [`flood_fill`] on a surface's pixels.
pub fn fill_surface(surface: &mut Surface, seed: (u32, u32), fill: Color) -> usize {
    let (width, height) = (surface.width(), surface.height());
    flood_fill(surface.raw_mut(), width, height, seed, fill)
}
