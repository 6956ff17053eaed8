use crate::error::{Error, Result};
use nalgebra::{Point3, Vector2, Vector3};
pub type P3 = Point3<f32>;
pub type V3 = Vector3<f32>;
pub type V2 = Vector2<f32>;

/// `v / |v|`. A zero or non-finite length is a caller bug in this renderer,
/// so it is reported instead of letting NaN reach the framebuffer.
pub fn normalize(v: &V3) -> Result<V3> {
    let len = v.norm();
    if len > 0.0 && len.is_finite() {
        Ok(v / len)
    } else {
        Err(Error::DegenerateGeometry(format!(
            "cannot normalize vector {:?}",
            v.as_slice()
        )))
    }
}

//mirror i about n, n must be unit length
pub fn reflect(i: &V3, n: &V3) -> V3 {
    i - n * (2.0 * i.dot(n))
}
