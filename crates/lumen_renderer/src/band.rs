//! Row bands, the unit of parallel work.
//!
//! A band is a run of full-width image rows. Bands never share pixels, so
//! each one is rendered straight into its own slice of the image.

use std::ops::Range;

use crate::renderer::render_pixel;
use crate::{Camera, Color, Tracer};

/// A run of full-width rows starting at row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub index: usize,
    pub y: u32,
    pub rows: u32,
}

impl Band {
    /// The `index`-th band of an image `height` rows tall, cut every
    /// `band_rows` rows. The last band may be shorter.
    pub fn nth(index: usize, band_rows: u32, height: u32) -> Self {
        let y = (index as u32).saturating_mul(band_rows).min(height);
        Self {
            index,
            y,
            rows: band_rows.min(height - y),
        }
    }

    /// Rows covered by the band.
    pub fn row_range(&self) -> Range<u32> {
        self.y..self.y + self.rows
    }
}

/// Cut an image `height` rows tall into bands of `band_rows` rows, top to
/// bottom. A zero band height yields no bands.
pub fn row_bands(height: u32, band_rows: u32) -> Vec<Band> {
    if band_rows == 0 {
        return Vec::new();
    }
    let count = height.div_ceil(band_rows) as usize;
    (0..count)
        .map(|index| Band::nth(index, band_rows, height))
        .collect()
}

/// Render every pixel of `band` into `pixels`, row-major.
///
/// `pixels` is the band's own slice of the image and must hold
/// `width * band.rows` colors.
pub fn render_band(
    band: &Band,
    camera: &dyn Camera,
    tracer: &Tracer<'_>,
    width: u32,
    height: u32,
    pixels: &mut [Color],
) {
    let mut out = pixels.iter_mut();
    for y in band.row_range() {
        for x in 0..width {
            if let Some(pixel) = out.next() {
                *pixel = render_pixel(camera, tracer, x, y, width, height);
            }
        }
    }
}
