//! Built-in 5x7 bitmap face
//!
//! Every character occupies a 6x8 cell (5x7 glyph plus a one pixel gutter),
//! scaled by an integer factor. Block elements fill their share of the whole
//! cell so block-letter art stays solid; anything else outside printable
//! ASCII is drawn as a hollow box.

use image::{Rgb, RgbImage};

use super::{Face, TextBounds};

const CELL_WIDTH: u32 = 6;
const CELL_HEIGHT: u32 = 8;

/// Columns of each printable ASCII glyph (32..=126), least significant bit at the top
const GLYPHS: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x14, 0x08, 0x3E, 0x08, 0x14], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x50, 0x30, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x08, 0x14, 0x22, 0x41, 0x00], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x79, 0x41, 0x3E], // @
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x09, 0x01], // F
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x07, 0x08, 0x70, 0x08, 0x07], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x7F, 0x41, 0x41, 0x00], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // \
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x01, 0x02, 0x04, 0x00], // `
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7F, 0x48, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x20], // c
    [0x38, 0x44, 0x44, 0x48, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7E, 0x09, 0x01, 0x02], // f
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x44, 0x3D, 0x00], // j
    [0x7F, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x18, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x7C, 0x14, 0x14, 0x14, 0x08], // p
    [0x08, 0x14, 0x14, 0x18, 0x7C], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x20], // s
    [0x04, 0x3F, 0x44, 0x40, 0x20], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x7F, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x08, 0x04, 0x08, 0x10, 0x08], // ~
];

const TOFU: [u8; 5] = [0x7F, 0x41, 0x41, 0x41, 0x7F];

/// How a character is painted inside its cell
enum Shape {
    Glyph([u8; 5]),
    /// Rows `from..to` of the whole cell filled
    Block { from: u32, to: u32 },
}

fn shape(c: char) -> Shape {
    match c {
        ' '..='~' => Shape::Glyph(GLYPHS[c as usize - 32]),
        '█' => Shape::Block {
            from: 0,
            to: CELL_HEIGHT,
        },
        '▀' => Shape::Block {
            from: 0,
            to: CELL_HEIGHT / 2,
        },
        '▄' => Shape::Block {
            from: CELL_HEIGHT / 2,
            to: CELL_HEIGHT,
        },
        _ => Shape::Glyph(TOFU),
    }
}

/// Fixed-cell bitmap face that needs no font files
#[derive(Debug, Clone, Copy)]
pub struct BitmapFace {
    scale: u32,
    line_spacing: u32,
}

impl BitmapFace {
    pub fn new(scale: u32, line_spacing: u32) -> Self {
        Self {
            scale: scale.max(1),
            line_spacing,
        }
    }

    fn advance(&self) -> u32 {
        CELL_WIDTH.saturating_mul(self.scale)
    }

    fn line_height(&self) -> u32 {
        CELL_HEIGHT.saturating_mul(self.scale)
    }

    fn line_step(&self) -> u32 {
        self.line_height().saturating_add(self.line_spacing)
    }

    /// Paint one scaled pixel, clipped to the canvas
    fn fill_cell(&self, canvas: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
        let (width, height) = canvas.dimensions();
        let scale = i64::from(self.scale);
        let (x0, x1) = (x.max(0), (x + scale).min(i64::from(width)));
        let (y0, y1) = (y.max(0), (y + scale).min(i64::from(height)));
        for py in y0..y1 {
            for px in x0..x1 {
                canvas.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

impl Face for BitmapFace {
    fn describe(&self) -> String {
        format!("built-in 5x7 bitmap (x{})", self.scale)
    }

    fn measure(&self, text: &str) -> TextBounds {
        let lines = text.split('\n').count() as u32;
        let columns = text
            .split('\n')
            .map(|line| line.chars().count() as u32)
            .max()
            .unwrap_or(0);
        // saturates instead of wrapping so oversized settings still read as oversized
        let right = columns.saturating_mul(self.advance());
        let bottom = lines
            .saturating_mul(self.line_height())
            .saturating_add((lines - 1).saturating_mul(self.line_spacing));
        TextBounds {
            left: 0,
            top: 0,
            right: i32::try_from(right).unwrap_or(i32::MAX),
            bottom: i32::try_from(bottom).unwrap_or(i32::MAX),
        }
    }

    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
        let scale = self.scale as i64;
        for (row, line) in text.split('\n').enumerate() {
            let cell_y = y as i64 + row as i64 * self.line_step() as i64;
            for (column, c) in line.chars().enumerate() {
                let cell_x = x as i64 + column as i64 * self.advance() as i64;
                match shape(c) {
                    Shape::Glyph(columns) => {
                        for (gx, bits) in columns.iter().enumerate() {
                            for gy in 0..7 {
                                if bits & (1 << gy) != 0 {
                                    self.fill_cell(
                                        canvas,
                                        cell_x + gx as i64 * scale,
                                        cell_y + gy as i64 * scale,
                                        color,
                                    );
                                }
                            }
                        }
                    }
                    Shape::Block { from, to } => {
                        for gy in from..to {
                            for gx in 0..CELL_WIDTH {
                                self.fill_cell(
                                    canvas,
                                    cell_x + gx as i64 * scale,
                                    cell_y + gy as i64 * scale,
                                    color,
                                );
                            }
                        }
                    }
                }
            }
        }
    }
}
