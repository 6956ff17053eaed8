use crate::*;
#[derive(Clone, Debug)]
pub struct Ray {
    pub origin: P3,
    pub dir: V3,
}

impl Ray {
    pub fn new(origin: P3, dir: V3) -> Self {
        Ray { origin, dir }
    }

    /// Builds a ray with a unit direction.
    pub fn towards(origin: P3, dir: V3) -> Result<Self> {
        Ok(Ray::new(origin, math::normalize(&dir)?))
    }

    pub fn at(&self, dist: f32) -> P3 {
        self.origin + self.dir * dist
    }
}
