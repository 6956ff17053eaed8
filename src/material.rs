use crate::*;

/// Phong surface description.
///
/// `albedo` is not a physical reflectance: its first component weights the
/// diffuse term and its second the specular highlight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub albedo: V2,
    pub diffuse_color: RGB,
    pub specular_exponent: f32,
}

impl Material {
    pub fn new(albedo: V2, diffuse_color: RGB, specular_exponent: f32) -> Self {
        Material {
            albedo,
            diffuse_color,
            specular_exponent,
        }
    }

    pub fn new_ivory() -> Self {
        Self::new(V2::new(0.6, 0.3), RGB::new(0.4, 0.4, 0.3), 50.0)
    }

    pub fn new_red_rubber() -> Self {
        Self::new(V2::new(0.9, 0.1), RGB::new(0.3, 0.1, 0.1), 10.0)
    }

    pub fn diffuse_weight(&self) -> f32 {
        self.albedo[0]
    }

    pub fn specular_weight(&self) -> f32 {
        self.albedo[1]
    }
}
