use crate::*;

#[derive(Clone, Debug)]
pub struct Hit {
    pub dist: f32,
    pub pos: P3,
    pub normal: V3,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    center: P3,
    radius: f32,
}

impl Sphere {
    pub fn new(center: P3, radius: f32) -> Result<Self> {
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(Error::DegenerateGeometry(format!(
                "sphere radius must be positive, got {}",
                radius
            )));
        }
        if !center.coords.iter().all(|c| c.is_finite()) {
            return Err(Error::DegenerateGeometry(format!(
                "sphere center must be finite, got {:?}",
                center.coords.as_slice()
            )));
        }
        Ok(Sphere { center, radius })
    }

    pub fn center(&self) -> &P3 {
        &self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Distance along `ray` (unit direction) to the first surface crossing
    /// at or in front of the origin. Origins inside the sphere report the
    /// exit point.
    pub fn ray_intersect(&self, ray: &Ray) -> Option<f32> {
        let rel_c = self.center - ray.origin;
        let tca = rel_c.dot(&ray.dir);
        let d2 = rel_c.norm_squared() - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }
        let thc = (r2 - d2).sqrt();
        let t0 = tca - thc;
        let t1 = tca + thc;
        let t = if t0 < 0.0 { t1 } else { t0 };
        if t < 0.0 {
            None
        } else {
            Some(t)
        }
    }

    pub fn make_hit(&self, ray: &Ray, dist: f32) -> Result<Hit> {
        let pos = ray.at(dist);
        let normal = math::normalize(&(pos - self.center))?;
        Ok(Hit { dist, pos, normal })
    }
}
