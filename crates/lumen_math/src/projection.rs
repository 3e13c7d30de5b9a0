use glam::{Mat4, Vec2, Vec3, Vec4};

/// Image-plane to view-direction projection.
///
/// Maps a normalized image-plane coordinate `(x, y)` to a direction by
/// multiplying the row vector `[x, y, 1, 1]` with
///
/// ```text
/// | s·aspect   0      0          0 |
/// | 0         -s      0          0 |
/// | 0          0      far/(f-n)  0 |
/// | 0          0      0          1 |
/// ```
///
/// where `s = 1 / tan(fov / 2)`. Image y grows downwards, so it is flipped.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    matrix: Mat4,
}

impl Projection {
    /// Create a projection. `fov_y` is in radians.
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let scale = 1.0 / (fov_y / 2.0).tan();
        let depth = far / (far - near);

        // Rows of the table are passed as glam columns, so the stored matrix
        // is its transpose and `matrix * v` equals the row-vector product.
        #[rustfmt::skip]
        let matrix = Mat4::from_cols_array(&[
            scale * aspect, 0.0, 0.0, 0.0,
            0.0, -scale, 0.0, 0.0,
            0.0, 0.0, depth, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);

        Self {
            fov_y,
            aspect,
            near,
            far,
            matrix,
        }
    }

    /// Project an image-plane coordinate to a unit view direction.
    pub fn direction(&self, ndc: Vec2) -> Vec3 {
        let v = self.matrix * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        v.truncate().normalize_or_zero()
    }
}
