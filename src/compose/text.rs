//! Glyph rasterization onto RGBA buffers.
//!
//! Coverage values from the rasterizer are alpha-blended per pixel, with
//! bounds guards so overlong strings clip at the raster edge instead of
//! panicking.

use image::{ImageBuffer, Rgba};
use rusttype::{point, Font, Scale};

/// The working raster type for composition.
pub type Raster = ImageBuffer<Rgba<u8>, Vec<u8>>;

/// Advance width of `text` at `px` pixels.
pub fn text_width(font: &Font<'_>, px: f32, text: &str) -> f32 {
    let scale = Scale::uniform(px);
    text.chars().map(|ch| font.glyph(ch).scaled(scale).h_metrics().advance_width).sum()
}

/// Vertical distance between consecutive baselines at `px` pixels.
pub fn line_height(font: &Font<'_>, px: f32) -> f32 {
    let v_metrics = font.v_metrics(Scale::uniform(px));
    v_metrics.ascent - v_metrics.descent + v_metrics.line_gap
}

/// Draw `text` top-anchored at `(x, y)`.
pub fn draw_text(img: &mut Raster, font: &Font<'_>, px: f32, x: f32, y: f32, color: Rgba<u8>, text: &str) {
    let v_metrics = font.v_metrics(Scale::uniform(px));
    blit_line(img, font, px, x, y + v_metrics.ascent, color, text);
}

/// Draw `text` with its horizontal center at `cx` and vertical center at `cy`.
pub fn draw_text_centered(
    img: &mut Raster,
    font: &Font<'_>,
    px: f32,
    cx: f32,
    cy: f32,
    color: Rgba<u8>,
    text: &str,
) {
    let width = text_width(font, px, text);
    let v_metrics = font.v_metrics(Scale::uniform(px));
    let baseline_y = cy + (v_metrics.ascent + v_metrics.descent) / 2.0;
    blit_line(img, font, px, cx - width / 2.0, baseline_y, color, text);
}

fn blit_line(
    img: &mut Raster,
    font: &Font<'_>,
    px: f32,
    origin_x: f32,
    baseline_y: f32,
    color: Rgba<u8>,
    text: &str,
) {
    let scale = Scale::uniform(px);
    let mut caret_x = origin_x;

    for ch in text.chars() {
        let glyph = font.glyph(ch).scaled(scale).positioned(point(caret_x, baseline_y));
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, v| {
                let px_x = gx as i32 + bb.min.x;
                let px_y = gy as i32 + bb.min.y;
                if px_x < 0 || px_y < 0 {
                    return;
                }
                let (px_x, px_y) = (px_x as u32, px_y as u32);
                if px_x >= img.width() || px_y >= img.height() {
                    return;
                }
                let a = (v * 255.0) as u32;
                if a == 0 {
                    return;
                }
                let dst = img.get_pixel_mut(px_x, px_y);
                let inv = 255 - a;
                dst.0[0] = ((u32::from(color.0[0]) * a + u32::from(dst.0[0]) * inv + 127) / 255) as u8;
                dst.0[1] = ((u32::from(color.0[1]) * a + u32::from(dst.0[1]) * inv + 127) / 255) as u8;
                dst.0[2] = ((u32::from(color.0[2]) * a + u32::from(dst.0[2]) * inv + 127) / 255) as u8;
                dst.0[3] = 255;
            });
        }
        caret_x += glyph.unpositioned().h_metrics().advance_width;
    }
}
