//! Raster-Hintergrundbild fuer die Zeichenflaeche.

use image::{Rgba, RgbaImage};

use super::canvas_payload::Rgb;

/// Standard-Farbe der Rasterlinien (helles Grau).
pub const GRID_LINE_COLOR: Rgb = [0xdd, 0xdd, 0xdd];

/// Rendert ein Hintergrundbild mit Rasterlinien alle `grid_size` Pixel.
///
/// Linien liegen auf x = 0, grid_size, 2*grid_size, ... (analog fuer y).
/// `grid_size == 0` liefert eine einfarbige Flaeche.
pub fn render_grid_image(
    width: u32,
    height: u32,
    grid_size: u32,
    background: Rgb,
    line: Rgb,
) -> RgbaImage {
    let bg = Rgba([background[0], background[1], background[2], 255]);
    let fg = Rgba([line[0], line[1], line[2], 255]);

    RgbaImage::from_fn(width, height, |x, y| {
        if grid_size > 0 && (x % grid_size == 0 || y % grid_size == 0) {
            fg
        } else {
            bg
        }
    })
}
