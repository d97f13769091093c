//! Headless rendering: font lookup and PNG screenshots.

use std::path::Path;

use image::RgbaImage;
use rusttype::Font;

use crate::config::FALLBACK_FONTS;
use crate::error::Error;
use crate::geometry::RectF;
use crate::meter::Widget;
use crate::raster::Canvas;
use crate::scene::Scene;

/// Loads the font used for text.
///
/// An explicit `path` must exist and parse. Without one, the first readable
/// entry of [`FALLBACK_FONTS`] is used, and `None` means text is skipped.
pub fn load_font(path: Option<&Path>) -> Result<Option<Font<'static>>, Error> {
    if let Some(path) = path {
        let data = std::fs::read(path)?;
        let font = Font::try_from_vec(data).ok_or_else(|| Error::InvalidFont(path.to_path_buf()))?;
        tracing::info!(path = %path.display(), "loaded font");
        return Ok(Some(font));
    }

    for candidate in FALLBACK_FONTS {
        let Ok(data) = std::fs::read(candidate) else {
            continue;
        };
        if let Some(font) = Font::try_from_vec(data) {
            tracing::info!(path = candidate, "loaded system font");
            return Ok(Some(font));
        }
    }

    tracing::warn!("no usable font found, the unit label will not be drawn");
    Ok(None)
}

/// Paints `widget` into a fresh RGBA8 buffer of `width` x `height` pixels.
///
/// Fails with [`Error::EmptyFrame`] when the buffer size does not fit in
/// memory addressing.
pub fn render_frame(
    widget: &dyn Widget,
    width: u32,
    height: u32,
    font: Option<&Font<'static>>,
) -> Result<Vec<u8>, Error> {
    let (w, h) = (width as usize, height as usize);
    let len = w
        .checked_mul(h)
        .and_then(|pixels| pixels.checked_mul(4))
        .ok_or(Error::EmptyFrame { width, height })?;
    let mut frame = vec![0u8; len];

    let mut scene = Scene::new();
    widget.paint(&mut scene, RectF::new(0.0, 0.0, f64::from(width), f64::from(height)));
    {
        let mut canvas = Canvas::new(&mut frame, w, h).with_font(font);
        scene.render(&mut canvas);
    }
    Ok(frame)
}

/// Renders one frame and writes it to `path`; the format follows the
/// file extension.
pub fn render_to_image(
    widget: &dyn Widget,
    width: u32,
    height: u32,
    font: Option<&Font<'static>>,
    path: &Path,
) -> Result<(), Error> {
    if width == 0 || height == 0 {
        return Err(Error::EmptyFrame { width, height });
    }
    let frame = render_frame(widget, width, height, font)?;
    let image = RgbaImage::from_raw(width, height, frame).ok_or(Error::EmptyFrame { width, height })?;
    image.save(path)?;
    tracing::info!(path = %path.display(), width, height, "saved screenshot");
    Ok(())
}
