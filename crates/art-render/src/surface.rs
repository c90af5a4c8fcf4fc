//! The raster surface: an RGBA pixel buffer with a background color.
//!
//! The surface is a derived view of a scene. It is cleared to its background
//! and repainted on replay, and updated in place when a single shape is
//! committed.

use crate::error::ExportError;
use art_core::{CanvasConfig, Color};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};

#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    image: RgbaImage,
    background: Color,
}

impl Surface {
    /// A `width` × `height` surface filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(background.to_rgba())),
            background,
        }
    }

    pub fn from_config(config: &CanvasConfig) -> Self {
        Self::new(config.width, config.height, config.background)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Reset every pixel to the background color.
    pub fn clear(&mut self) {
        let px = Rgba(self.background.to_rgba());
        for pixel in self.image.pixels_mut() {
            *pixel = px;
        }
    }

    /// Pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image
            .get_pixel_checked(x, y)
            .map(|&Rgba([r, g, b, a])| Color::rgba(r, g, b, a))
    }

    /// Row-major RGBA bytes, 4 per pixel.
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub(crate) fn raw_mut(&mut self) -> &mut [u8] {
        &mut self.image
    }

    /// Overwrite one pixel. Out-of-bounds writes are dropped.
    pub(crate) fn put(&mut self, x: u32, y: u32, color: Color) {
        if let Some(pixel) = self.image.get_pixel_mut_checked(x, y) {
            *pixel = Rgba(color.to_rgba());
        }
    }

    /// Source-over blend of `color` scaled by `opacity` onto one pixel.
    pub(crate) fn blend(&mut self, x: u32, y: u32, color: Color, opacity: f32) {
        let Some(pixel) = self.image.get_pixel_mut_checked(x, y) else {
            return;
        };
        let src_a = f32::from(color.a) / 255.0 * opacity.clamp(0.0, 1.0);
        if src_a >= 1.0 {
            *pixel = Rgba(color.opaque().to_rgba());
            return;
        }
        if src_a <= 0.0 {
            return;
        }

        let Rgba([dr, dg, db, da]) = *pixel;
        let dst_a = f32::from(da) / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        let mix = |s: u8, d: u8| -> u8 {
            let s = f32::from(s);
            let d = f32::from(d);
            let c = (s * src_a + d * dst_a * (1.0 - src_a)) / out_a;
            c.round().clamp(0.0, 255.0) as u8
        };
        *pixel = Rgba([
            mix(color.r, dr),
            mix(color.g, dg),
            mix(color.b, db),
            (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
        ]);
    }

    /// Encode the current pixels as a PNG file.
    ///
    /// # Errors
    /// Fails on a zero-sized surface or when the encoder rejects the buffer.
    pub fn encode_png(&self) -> Result<Vec<u8>, ExportError> {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 {
            return Err(ExportError::EmptySurface { width, height });
        }
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes).write_image(
            self.image.as_raw(),
            width,
            height,
            ExtendedColorType::Rgba8,
        )?;
        log::debug!("encoded {width}x{height} surface as {} PNG bytes", bytes.len());
        Ok(bytes)
    }
}
