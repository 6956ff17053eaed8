use crate::*;

/// Pinhole camera at the world origin looking down -z with +y up.
#[derive(Clone, Debug)]
pub struct PinHole {
    origin: P3,
    half_tan: f32,
    aspect: f32,
    width: u32,
    height: u32,
}

impl PinHole {
    pub fn new(fov_rad: f32, width: u32, height: u32) -> Self {
        PinHole {
            origin: P3::origin(),
            half_tan: (fov_rad / 2.0).tan(),
            aspect: width as f32 / height as f32,
            width,
            height,
        }
    }

    /// Ray through the center of pixel (`col`, `row`); row 0 is the top of
    /// the image.
    pub fn primary_ray(&self, col: u32, row: u32) -> Result<Ray> {
        let u = 2.0 * (col as f32 + 0.5) / self.width as f32 - 1.0;
        let v = 2.0 * (row as f32 + 0.5) / self.height as f32 - 1.0;
        let x = u * self.half_tan * self.aspect;
        let y = -v * self.half_tan;
        Ray::towards(self.origin, V3::new(x, y, -1.0))
    }
}
