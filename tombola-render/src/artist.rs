//! PNG ticket rendering — [`TicketArtist`] draws one card per registrant.

use std::path::{Path, PathBuf};

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use tombola_core::{DeskConfig, Registrant, TicketNumber};

use crate::error::{io_err, RenderError};
use crate::layout::{self, CANVAS_HEIGHT, CANVAS_WIDTH, TICKET_RED};

/// `ticket-<number>.png`, the name the web version downloads as.
pub fn ticket_file_name(ticket: &TicketNumber) -> String {
    format!("ticket-{ticket}.png")
}

/// Renders ticket cards from a font and an optional background template.
///
/// Load once per run and reuse; the font and template are read eagerly so a
/// bad asset fails before any card is drawn.
#[derive(Debug)]
pub struct TicketArtist {
    font: FontVec,
    template: Option<RgbImage>,
}

impl TicketArtist {
    /// Load the font (required) and background template (optional).
    ///
    /// Without a template, cards render on a plain white card with a red
    /// frame so the output is still usable at the cutting table.
    pub fn new(font_path: &Path, template_path: Option<&Path>) -> Result<Self, RenderError> {
        let font_bytes = std::fs::read(font_path).map_err(|e| io_err(font_path, e))?;
        let font = FontVec::try_from_vec(font_bytes)
            .map_err(|_| RenderError::Font { path: font_path.to_path_buf() })?;

        let template = match template_path {
            Some(path) => Some(load_template(path)?),
            None => None,
        };

        Ok(Self { font, template })
    }

    /// Draw one card. Empty slots (a field the entry does not carry) are
    /// simply left blank.
    pub fn render(&self, entry: &Registrant, config: &DeskConfig) -> RgbImage {
        let mut canvas = base_canvas(self.template.as_ref());

        for slot in layout::slots(config) {
            let value = layout::slot_value(entry, slot.field);
            if value.is_empty() {
                continue;
            }
            let px = PxScale::from(layout::scaled(slot.size) as f32);
            let (text_w, text_h) = text_size(px, &self.font, value);
            let x = layout::top_left_x(&slot, text_w) as i32;
            let y = layout::top_left_y(&slot, text_h) as i32;
            draw_text_mut(&mut canvas, Rgb(slot.color), x, y, px, &self.font, value);
        }

        canvas
    }

    /// Render and save `<dir>/ticket-<number>.png`, returning its path.
    pub fn render_to_dir(
        &self,
        dir: &Path,
        entry: &Registrant,
        config: &DeskConfig,
    ) -> Result<PathBuf, RenderError> {
        let path = dir.join(ticket_file_name(&entry.ticket_number));
        self.render(entry, config).save(&path)?;
        Ok(path)
    }
}

/// The card background in output space: the template scaled to fit, or the
/// plain framed fallback.
pub(crate) fn base_canvas(template: Option<&RgbImage>) -> RgbImage {
    let (w, h) = (layout::scaled(CANVAS_WIDTH), layout::scaled(CANVAS_HEIGHT));
    match template {
        Some(t) if t.dimensions() == (w, h) => t.clone(),
        Some(t) => image::imageops::resize(t, w, h, image::imageops::FilterType::Triangle),
        None => framed_card(w, h),
    }
}

fn framed_card(w: u32, h: u32) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(w, h, Rgb([255, 255, 255]));
    let inset = layout::scaled(6);
    // three nested 1px rects make a visible frame at print resolution
    for line in 0..3 {
        let offset = inset + line;
        let rect = Rect::at(offset as i32, offset as i32)
            .of_size(w - 2 * offset, h - 2 * offset);
        draw_hollow_rect_mut(&mut canvas, rect, Rgb(TICKET_RED));
    }
    canvas
}

fn load_template(path: &Path) -> Result<RgbImage, RenderError> {
    let bytes = std::fs::read(path).map_err(|e| io_err(path, e))?;
    Ok(image::load_from_memory(&bytes)?.to_rgb8())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
