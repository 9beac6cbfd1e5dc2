//! The image compositor: background photo in, finished poster PNG out.
//!
//! Layers apply in a fixed order (background, tint, title panel, text,
//! footer) so the text stays legible. The pipeline is a pure
//! transformation: given the same bytes, fields, and configuration, the
//! output PNG is byte-identical. All assets load once in
//! [`Compositor::new`]; `compose` itself performs no I/O.

mod layout;
mod text;

use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, Rgba, RgbaImage};
use rusttype::Font;

use crate::config::{FooterConfig, StyleConfig};
use crate::error::PosterError;
use layout::Layout;
use text::{draw_text, draw_text_centered, line_height, text_width};

/// The five user-supplied text values rendered onto the poster.
///
/// All fields are free-form; empty strings render as blank lines, never
/// as errors.
#[derive(Debug, Clone, Default)]
pub struct EventFields {
    /// Event time (e.g., `"18:00"`).
    pub time: String,
    /// Event date (e.g., `"2024-05-01"`).
    pub date: String,
    /// Event name; `\n` splits it into multiple title lines.
    pub event_name: String,
    /// Venue name.
    pub place: String,
    /// Venue address.
    pub address: String,
}

/// Footer assets resolved at startup.
struct Footer {
    cta: String,
    link: String,
    logo: Option<RgbaImage>,
}

/// Composes square branded posters from background photos and text fields.
pub struct Compositor {
    tint: [u8; 3],
    tint_alpha: u8,
    panel: Option<[u8; 3]>,
    text_color: Rgba<u8>,
    title_font: Font<'static>,
    body_font: Font<'static>,
    layout: Layout,
    footer: Option<Footer>,
}

impl Compositor {
    /// Build a compositor from style configuration, loading fonts and the
    /// optional footer logo.
    ///
    /// # Errors
    ///
    /// Returns [`PosterError::Config`] for invalid sizes or colors and
    /// [`PosterError::AssetLoad`] when a font or logo cannot be loaded.
    /// Asset failures are fatal here so that `compose` never touches the
    /// filesystem.
    pub fn new(style: &StyleConfig, footer: Option<&FooterConfig>) -> Result<Self, PosterError> {
        if style.size == 0 {
            return Err(PosterError::Config("style.size must be non-zero".into()));
        }

        let tint = parse_hex_color(&style.tint)?;
        let panel = style.panel.as_deref().map(parse_hex_color).transpose()?;
        let text_color = parse_hex_color(&style.text)?;

        let title_font = load_font(&style.title_font)?;
        let body_font = load_font(&style.body_font)?;

        let layout = Layout::new(style.size, style.title_size, style.body_size);

        let footer = footer
            .map(|cfg| -> Result<Footer, PosterError> {
                let logo = cfg
                    .logo
                    .as_deref()
                    .map(|path| load_logo(path, layout.logo_height))
                    .transpose()?;
                Ok(Footer { cta: cfg.cta.clone(), link: cfg.link.clone(), logo })
            })
            .transpose()?;

        Ok(Self {
            tint,
            tint_alpha: style.tint_alpha,
            panel,
            text_color: Rgba([text_color[0], text_color[1], text_color[2], 255]),
            title_font,
            body_font,
            layout,
            footer,
        })
    }

    /// Compose a poster from raw background bytes and the event fields,
    /// returning PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PosterError::Decode`] when the background is not a
    /// recognized raster image and [`PosterError::Encode`] when the final
    /// raster cannot be written as PNG.
    pub fn compose(&self, background: &[u8], fields: &EventFields) -> Result<Vec<u8>, PosterError> {
        let decoded = image::load_from_memory(background)
            .map_err(|e| PosterError::Decode(format!("not a recognized image: {e}")))?;
        let (w, h) = decoded.dimensions();
        if w == 0 || h == 0 {
            return Err(PosterError::Decode("zero-dimension image".into()));
        }

        let mut img = square_fit(&decoded, self.layout.size);
        self.apply_tint(&mut img);
        self.draw_panel(&mut img);
        self.draw_fields(&mut img, fields);
        self.draw_footer(&mut img);

        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .map_err(|e| PosterError::Encode(e.to_string()))?;
        Ok(buf.into_inner())
    }

    /// Blend the uniform tint over every pixel: `out = bg*(1-a) + tint*a`.
    fn apply_tint(&self, img: &mut RgbaImage) {
        let a = u32::from(self.tint_alpha);
        if a == 0 {
            return;
        }
        let inv = 255 - a;
        for pixel in img.pixels_mut() {
            for ch in 0..3 {
                pixel.0[ch] =
                    ((u32::from(pixel.0[ch]) * inv + u32::from(self.tint[ch]) * a + 127) / 255)
                        as u8;
            }
            pixel.0[3] = 255;
        }
    }

    fn draw_panel(&self, img: &mut RgbaImage) {
        let Some(color) = self.panel else { return };
        let l = &self.layout;
        for y in l.panel_top..l.panel_top + l.panel_height {
            for x in l.panel_left..l.panel_left + l.panel_width {
                img.put_pixel(x, y, Rgba([color[0], color[1], color[2], 255]));
            }
        }
    }

    fn draw_fields(&self, img: &mut RgbaImage, fields: &EventFields) {
        let l = &self.layout;

        // Time and date share one line; the separator only appears between
        // two non-empty values so all-empty fields leave a blank layer.
        let time_date = [fields.time.as_str(), fields.date.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" | ");
        if !time_date.is_empty() {
            draw_text_centered(
                img,
                &self.body_font,
                l.body_px,
                l.center_x,
                l.time_date_y,
                self.text_color,
                &time_date,
            );
        }

        // Event name, uppercased, one centered line per `\n` segment.
        let title = fields.event_name.to_uppercase();
        let lines: Vec<&str> = title.split('\n').map(str::trim).collect();
        let step = line_height(&self.title_font, l.title_px);
        let total = step * lines.len() as f32;
        let mut cy = l.title_y - total / 2.0 + step / 2.0;
        for line in lines {
            if !line.is_empty() {
                draw_text_centered(
                    img,
                    &self.title_font,
                    l.title_px,
                    l.center_x,
                    cy,
                    self.text_color,
                    line,
                );
            }
            cy += step;
        }

        if !fields.place.is_empty() {
            draw_text_centered(
                img,
                &self.body_font,
                l.body_px,
                l.center_x,
                l.place_y,
                self.text_color,
                &fields.place,
            );
        }
        if !fields.address.is_empty() {
            draw_text_centered(
                img,
                &self.body_font,
                l.body_px,
                l.center_x,
                l.address_y,
                self.text_color,
                &fields.address,
            );
        }
    }

    fn draw_footer(&self, img: &mut RgbaImage) {
        let Some(footer) = &self.footer else { return };
        let l = &self.layout;
        let top = l.size - l.footer_height;

        for y in top..l.size {
            for x in 0..l.size {
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }

        if let Some(logo) = &footer.logo {
            let y = top + (l.footer_height - logo.height().min(l.footer_height)) / 2;
            overlay_alpha(img, logo, l.footer_padding.round() as u32, y);
        }

        let right = l.size as f32 - l.footer_padding;
        if !footer.cta.is_empty() {
            let x = right - text_width(&self.body_font, l.footer_px, &footer.cta);
            draw_text(
                img,
                &self.body_font,
                l.footer_px,
                x,
                l.footer_cta_y,
                Rgba([0, 0, 0, 255]),
                &footer.cta,
            );
        }
        if !footer.link.is_empty() {
            let x = right - text_width(&self.body_font, l.footer_px, &footer.link);
            draw_text(
                img,
                &self.body_font,
                l.footer_px,
                x,
                l.footer_link_y,
                Rgba([self.tint[0], self.tint[1], self.tint[2], 255]),
                &footer.link,
            );
        }
    }
}

/// Center-crop the longer dimension symmetrically, then scale to a
/// `size`×`size` square. Never stretches.
fn square_fit(img: &DynamicImage, size: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    let edge = w.min(h);
    let x = (w - edge) / 2;
    let y = (h - edge) / 2;
    img.crop_imm(x, y, edge, edge).resize_exact(size, size, FilterType::Lanczos3).to_rgba8()
}

/// Alpha-over blend `over` onto `base` at `(x, y)`, clipping at the edges.
fn overlay_alpha(base: &mut RgbaImage, over: &RgbaImage, x: u32, y: u32) {
    for oy in 0..over.height() {
        for ox in 0..over.width() {
            let p = over.get_pixel(ox, oy);
            let a = u32::from(p.0[3]);
            if a == 0 {
                continue;
            }
            let bx = x + ox;
            let by = y + oy;
            if bx >= base.width() || by >= base.height() {
                continue;
            }
            let dst = base.get_pixel_mut(bx, by);
            let inv = 255 - a;
            for ch in 0..3 {
                dst.0[ch] =
                    ((u32::from(p.0[ch]) * a + u32::from(dst.0[ch]) * inv + 127) / 255) as u8;
            }
            dst.0[3] = 255;
        }
    }
}

/// Parse `#rrggbb` into RGB channels.
fn parse_hex_color(s: &str) -> Result<[u8; 3], PosterError> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PosterError::Config(format!("invalid color '{s}', expected #rrggbb")));
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
    Ok([channel(0), channel(2), channel(4)])
}

fn load_font(path: &std::path::Path) -> Result<Font<'static>, PosterError> {
    let bytes = std::fs::read(path)
        .map_err(|e| PosterError::AssetLoad(format!("failed to read font {}: {e}", path.display())))?;
    Font::try_from_vec(bytes)
        .ok_or_else(|| PosterError::AssetLoad(format!("failed to parse font {}", path.display())))
}

/// Load the footer logo and scale it to `height`, preserving aspect ratio.
fn load_logo(path: &std::path::Path, height: u32) -> Result<RgbaImage, PosterError> {
    let bytes = std::fs::read(path)
        .map_err(|e| PosterError::AssetLoad(format!("failed to read logo {}: {e}", path.display())))?;
    let img = image::load_from_memory(&bytes)
        .map_err(|e| PosterError::AssetLoad(format!("failed to decode logo {}: {e}", path.display())))?;
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(PosterError::AssetLoad(format!("logo {} has zero dimensions", path.display())));
    }
    let width = ((f64::from(height) * f64::from(w) / f64::from(h)).round() as u32).max(1);
    Ok(img.resize_exact(width, height, FilterType::Lanczos3).to_rgba8())
}
