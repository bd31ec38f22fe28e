//! Outline faces rasterized with `ab_glyph`

use ab_glyph::{point, Font, FontVec, Glyph, PxScale, ScaleFont};
use image::{Rgb, RgbImage};

use super::{Face, FaceStyle, TextBounds};

/// A TrueType/OpenType face at a fixed size
pub struct OutlineFace {
    font: FontVec,
    scale: PxScale,
    line_spacing: f32,
    label: String,
}

impl OutlineFace {
    /// Parse font data; `None` when the data is not a usable font
    pub fn from_data(data: Vec<u8>, index: u32, style: &FaceStyle, label: String) -> Option<Self> {
        let font = match FontVec::try_from_vec_and_index(data, index) {
            Ok(font) => font,
            Err(e) => {
                tracing::debug!("Rejecting face {}: {}", label, e);
                return None;
            }
        };
        let scale = em_scale(&font, style.size_px);
        Some(Self {
            font,
            scale,
            line_spacing: style.line_spacing as f32,
            label,
        })
    }

    fn line_step(&self) -> f32 {
        self.font.as_scaled(self.scale).height() + self.line_spacing
    }

    /// Position every glyph of `text` with the first baseline at `ascent`
    /// below (`x`, `y`). Also returns the widest pen advance and the line count.
    fn layout(&self, text: &str, x: f32, y: f32) -> (Vec<Glyph>, f32, usize) {
        let scaled = self.font.as_scaled(self.scale);
        let mut glyphs = Vec::new();
        let mut widest: f32 = 0.0;
        let mut lines = 0;

        for (row, line) in text.split('\n').enumerate() {
            let baseline = y + scaled.ascent() + row as f32 * self.line_step();
            let mut caret = 0.0;
            let mut previous = None;
            for c in line.chars() {
                let id = scaled.glyph_id(c);
                if let Some(previous) = previous {
                    caret += scaled.kern(previous, id);
                }
                glyphs.push(id.with_scale_and_position(self.scale, point(x + caret, baseline)));
                caret += scaled.h_advance(id);
                previous = Some(id);
            }
            widest = widest.max(caret);
            lines = row + 1;
        }
        (glyphs, widest, lines)
    }
}

impl Face for OutlineFace {
    fn describe(&self) -> String {
        format!("{} ({:.1}px)", self.label, self.scale.y)
    }

    fn measure(&self, text: &str) -> TextBounds {
        let scaled = self.font.as_scaled(self.scale);
        let (glyphs, widest, lines) = self.layout(text, 0.0, 0.0);

        // line boxes: full ascent-to-descent of every line
        let mut left: f32 = 0.0;
        let mut top: f32 = 0.0;
        let mut right = widest;
        let mut bottom = (lines.saturating_sub(1)) as f32 * self.line_step() + scaled.height();

        // ink: bearings can push outlines past the line boxes
        for glyph in glyphs {
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let ink = outlined.px_bounds();
                left = left.min(ink.min.x);
                top = top.min(ink.min.y);
                right = right.max(ink.max.x);
                bottom = bottom.max(ink.max.y);
            }
        }

        TextBounds {
            left: left.floor() as i32,
            top: top.floor() as i32,
            right: right.ceil() as i32,
            bottom: bottom.ceil() as i32,
        }
    }

    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
        let (glyphs, _, _) = self.layout(text, x as f32, y as f32);
        let (width, height) = canvas.dimensions();
        for glyph in glyphs {
            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let ink = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = ink.min.x as i32 + gx as i32;
                let py = ink.min.y as i32 + gy as i32;
                if px < 0 || py < 0 || px as u32 >= width || py as u32 >= height {
                    return;
                }
                let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                *pixel = blend(*pixel, color, coverage.clamp(0.0, 1.0));
            });
        }
    }
}

/// `PxScale` measures ascent to descent; convert so one em spans `size_px`
fn em_scale(font: &FontVec, size_px: f32) -> PxScale {
    match font.units_per_em() {
        Some(units) if units > 0.0 => PxScale::from(size_px * font.height_unscaled() / units),
        _ => PxScale::from(size_px),
    }
}

fn blend(under: Rgb<u8>, over: Rgb<u8>, alpha: f32) -> Rgb<u8> {
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * alpha).round() as u8;
    Rgb([
        mix(under[0], over[0]),
        mix(under[1], over[1]),
        mix(under[2], over[2]),
    ])
}
