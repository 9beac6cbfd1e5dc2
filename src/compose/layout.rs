//! Pixel geometry of the poster, derived from the configured edge length.
//!
//! Positions are fractions of a 1080-pixel reference edge so that any
//! configured size keeps the same composition.

/// Reference edge length the fractions below were designed against.
const REFERENCE_EDGE: f32 = 1080.0;

/// Resolved pixel geometry for one poster size.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Output edge length.
    pub size: u32,
    /// Horizontal center of the poster.
    pub center_x: f32,
    /// Title panel left edge.
    pub panel_left: u32,
    /// Title panel top edge.
    pub panel_top: u32,
    /// Title panel width.
    pub panel_width: u32,
    /// Title panel height.
    pub panel_height: u32,
    /// Vertical center of the `time | date` line.
    pub time_date_y: f32,
    /// Vertical center of the event name block.
    pub title_y: f32,
    /// Vertical center of the place line.
    pub place_y: f32,
    /// Vertical center of the address line.
    pub address_y: f32,
    /// Event name size in pixels.
    pub title_px: f32,
    /// Body text size in pixels.
    pub body_px: f32,
    /// Footer bar height.
    pub footer_height: u32,
    /// Logo height inside the footer.
    pub logo_height: u32,
    /// Footer text size in pixels.
    pub footer_px: f32,
    /// Horizontal padding inside the footer.
    pub footer_padding: f32,
    /// Top anchor of the call-to-action line.
    pub footer_cta_y: f32,
    /// Top anchor of the link line.
    pub footer_link_y: f32,
}

impl Layout {
    /// Compute the geometry for a square poster of edge `size`.
    ///
    /// The panel covers 80% of the width and 50% of the height, starting
    /// 20% from the top. Text anchors sit relative to the panel: the
    /// time/date line near its top, the event name at its center, and the
    /// place/address lines near its bottom.
    #[must_use]
    pub fn new(size: u32, title_size: f32, body_size: f32) -> Self {
        let edge = size as f32;
        let f = edge / REFERENCE_EDGE;

        let panel_width = (edge * 0.8).round() as u32;
        let panel_height = (edge * 0.5).round() as u32;
        let panel_left = (size - panel_width) / 2;
        let panel_top = (edge * 0.2).round() as u32;

        let top = panel_top as f32;
        let height = panel_height as f32;
        let place_y = top + height - 120.0 * f;

        let footer_height = (150.0 * f).round() as u32;
        let footer_mid = (size - footer_height) as f32 + footer_height as f32 / 2.0;

        Self {
            size,
            center_x: edge / 2.0,
            panel_left,
            panel_top,
            panel_width,
            panel_height,
            time_date_y: top + 80.0 * f,
            title_y: top + height / 2.0,
            place_y,
            address_y: place_y + 60.0 * f,
            title_px: title_size * f,
            body_px: body_size * f,
            footer_height,
            logo_height: (120.0 * f).round() as u32,
            footer_px: 24.0 * f,
            footer_padding: 30.0 * f,
            footer_cta_y: footer_mid - 20.0 * f,
            footer_link_y: footer_mid + 5.0 * f,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_size_geometry() {
        let layout = Layout::new(1080, 72.0, 48.0);
        assert_eq!(layout.panel_width, 864);
        assert_eq!(layout.panel_height, 540);
        assert_eq!(layout.panel_left, 108);
        assert_eq!(layout.panel_top, 216);
        assert!((layout.center_x - 540.0).abs() < f32::EPSILON);
        assert!((layout.time_date_y - 296.0).abs() < 0.01);
        assert!((layout.title_y - 486.0).abs() < 0.01);
        assert!((layout.place_y - 636.0).abs() < 0.01);
        assert!((layout.address_y - 696.0).abs() < 0.01);
        assert_eq!(layout.footer_height, 150);
        assert_eq!(layout.logo_height, 120);
        assert!((layout.footer_cta_y - 985.0).abs() < 0.01);
        assert!((layout.footer_link_y - 1010.0).abs() < 0.01);
    }

    #[test]
    fn half_size_scales_proportionally() {
        let layout = Layout::new(540, 72.0, 48.0);
        assert_eq!(layout.panel_width, 432);
        assert_eq!(layout.panel_height, 270);
        assert_eq!(layout.panel_top, 108);
        assert!((layout.title_px - 36.0).abs() < 0.01);
        assert!((layout.body_px - 24.0).abs() < 0.01);
        assert_eq!(layout.footer_height, 75);
    }

    #[test]
    fn panel_stays_inside_poster() {
        for size in [64, 320, 540, 1080, 2160] {
            let layout = Layout::new(size, 72.0, 48.0);
            assert!(layout.panel_left + layout.panel_width <= size);
            assert!(layout.panel_top + layout.panel_height <= size);
        }
    }
}
