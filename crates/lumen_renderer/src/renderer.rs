//! Parallel image renderer.
//!
//! Implements:
//! - 2×2 supersampling per pixel on a centred image plane
//! - Row bands spread over rayon's thread pool
//! - Linear output, clamped and quantized only when converted to bytes

use crate::band::{render_band, row_bands, Band};
use crate::{Camera, Color, RenderSettings, Scene, Tracer};
use lumen_math::{Interval, Vec2};
use rayon::prelude::*;

/// Sub-pixel sample positions, in doubled pixel units.
const SAMPLE_OFFSETS: [f32; 2] = [0.0, 0.5];

/// Signed offset of pixel `index` from the image centre.
///
/// For even sizes the offsets span `[-size/2, size/2)`.
#[inline]
pub fn pixel_offset(index: u32, size: u32) -> i32 {
    index as i32 - (size / 2) as i32
}

/// Row-major index of pixel `(x, y)` in an image `width` wide.
#[inline]
pub fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Convert a color to 8-bit RGBA.
///
/// Channels are clamped to `[0, 1]` with no gamma applied.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * Interval::UNIT.clamp(color.x)) as u8;
    let g = (255.0 * Interval::UNIT.clamp(color.y)) as u8;
    let b = (255.0 * Interval::UNIT.clamp(color.z)) as u8;
    [r, g, b, 255]
}

/// Render a single pixel with four samples.
///
/// Returns the unclamped average; rays that miss contribute black.
pub fn render_pixel(
    camera: &dyn Camera,
    tracer: &Tracer<'_>,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Color {
    let u = pixel_offset(x, width) as f32;
    let v = pixel_offset(y, height) as f32;

    let mut pixel_color = Color::ZERO;
    for dy in SAMPLE_OFFSETS {
        for dx in SAMPLE_OFFSETS {
            let ndc = Vec2::new((2.0 * u + dx) / width as f32, (2.0 * v + dy) / height as f32);
            pixel_color += tracer.trace(&camera.ray(ndc)).color;
        }
    }

    pixel_color / (SAMPLE_OFFSETS.len() * SAMPLE_OFFSETS.len()) as f32
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[pixel_index(self.width, x, y)]
    }

    /// Convert to an `image` crate buffer, ready to save.
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(color_to_rgba(self.get(x, y)))
        })
    }
}

/// Render the scene to an image buffer.
///
/// Each band of rows is traced in parallel straight into its own slice of
/// the image. The scene, including any attached photon map, is only read.
pub fn render(camera: &dyn Camera, scene: &Scene, settings: &RenderSettings) -> ImageBuffer {
    let (width, height) = (settings.width, settings.height);
    let band_rows = settings.band_rows;
    let tracer = Tracer::new(scene, settings);
    let mut image = ImageBuffer::new(width, height);

    let chunk = width as usize * band_rows as usize;
    if chunk == 0 {
        log::warn!("Nothing to render: {}x{} with {} rows per band", width, height, band_rows);
        return image;
    }

    log::info!(
        "Rendering {}x{} in {} bands ({} objects, {} lights)",
        width,
        height,
        row_bands(height, band_rows).len(),
        scene.objects().len(),
        scene.lights().len()
    );
    let start = std::time::Instant::now();

    image
        .pixels
        .par_chunks_mut(chunk)
        .enumerate()
        .for_each(|(index, pixels)| {
            let band = Band::nth(index, band_rows, height);
            render_band(&band, camera, &tracer, width, height, pixels);
            log::debug!("Band {} (rows {:?}) done", band.index, band.row_range());
        });

    log::info!("Render finished in {:?}", start.elapsed());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Light, Material, Plane, ProjectionCamera, Sphere, Vec3};
    use std::sync::Arc;

    fn small_settings() -> RenderSettings {
        RenderSettings {
            width: 32,
            height: 24,
            band_rows: 5,
            photon_mapping: false,
            ..Default::default()
        }
    }

    fn sphere_scene() -> Scene {
        let red = Arc::new(Material::diffuse(Color::new(1.0, 0.0, 0.0), 1.0));
        Scene::new(
            vec![Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, red).into()],
            vec![Light::new(Vec3::ZERO)],
        )
    }

    #[test]
    fn test_pixel_offsets_span_centred_range() {
        let width = 860;
        let offsets: Vec<i32> = (0..width).map(|x| pixel_offset(x, width)).collect();
        assert_eq!(offsets[0], -430);
        assert_eq!(*offsets.last().unwrap(), 429);
        assert_eq!(pixel_offset(320, 640), 0);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_pixel_index_does_not_wrap() {
        assert_eq!(pixel_index(860, 3, 2), 2 * 860 + 3);
        // 100_000 * 100_000 overflows u32.
        assert_eq!(pixel_index(100_000, 7, 99_999), 9_999_900_007);
    }

    #[test]
    fn test_zero_band_rows_renders_nothing() {
        let settings = RenderSettings {
            band_rows: 0,
            ..small_settings()
        };
        let camera = ProjectionCamera::from_settings(Vec3::ZERO, &settings);
        let image = render(&camera, &sphere_scene(), &settings);
        assert_eq!(image.pixels.len(), 32 * 24);
        assert!(image.pixels.iter().all(|c| *c == Color::ZERO));
    }

    #[test]
    fn test_color_to_rgba_clamps_without_gamma() {
        assert_eq!(color_to_rgba(Color::ZERO), [0, 0, 0, 255]);
        assert_eq!(color_to_rgba(Color::new(2.0, -1.0, 0.5)), [255, 0, 127, 255]);
    }

    #[test]
    fn test_render_pixel_averages_samples() {
        let scene = sphere_scene();
        let settings = small_settings();
        let camera = ProjectionCamera::from_settings(Vec3::ZERO, &settings);
        let tracer = Tracer::new(&scene, &settings);

        // Centre pixel sees the sphere head on.
        let centre = render_pixel(&camera, &tracer, 16, 12, 32, 24);
        assert!(centre.x > 0.9 && centre.x <= 1.0);
        assert_eq!(centre.y, 0.0);

        // Corner pixel misses everything.
        let corner = render_pixel(&camera, &tracer, 0, 0, 32, 24);
        assert_eq!(corner, Color::ZERO);
    }

    #[test]
    fn test_render_matches_per_pixel() {
        let scene = sphere_scene();
        let settings = small_settings();
        let camera = ProjectionCamera::from_settings(Vec3::ZERO, &settings);
        let image = render(&camera, &scene, &settings);

        assert_eq!(image.pixels.len(), 32 * 24);
        let tracer = Tracer::new(&scene, &settings);
        for (x, y) in [(0, 0), (16, 12), (31, 23), (10, 7)] {
            assert_eq!(image.get(x, y), render_pixel(&camera, &tracer, x, y, 32, 24));
        }
    }

    #[test]
    fn test_render_is_up_right() {
        // Lit floor below the camera fills the bottom half only.
        let floor = Arc::new(Material::diffuse(Color::ONE, 1.0));
        let scene = Scene::new(
            vec![Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, floor).into()],
            vec![Light::new(Vec3::new(0.0, 5.0, 5.0))],
        );
        let settings = small_settings();
        let camera = ProjectionCamera::from_settings(Vec3::ZERO, &settings);
        let image = render(&camera, &scene, &settings);

        assert_eq!(image.get(16, 0), Color::ZERO);
        assert!(image.get(16, 23).length() > 0.0);
    }

    #[test]
    fn test_to_image_dimensions() {
        let mut buffer = ImageBuffer::new(4, 3);
        buffer.pixels[pixel_index(4, 1, 2)] = Color::ONE;
        let img = buffer.to_image();
        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(img.get_pixel(1, 2).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }
}
