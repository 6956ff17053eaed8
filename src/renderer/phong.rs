use super::*;

/// Color seen along `ray`: the scene background on a miss, otherwise
/// diffuse plus specular Phong terms summed over every light. Lights are
/// never occluded and the result is not clamped.
pub fn radiance(scene: &Scene, ray: &Ray) -> Result<RGB> {
    let hit = match scene.intersect(ray)? {
        Some(hit) => hit,
        None => return Ok(scene.background()),
    };
    let pos = hit.hit.pos;
    let normal = hit.hit.normal;
    let material = hit.material;

    let mut diffuse = 0.0;
    let mut specular = 0.0;
    for light in scene.lights() {
        let light_dir = math::normalize(&(light.position - pos))?;
        diffuse += light_dir.dot(&normal).max(0.0) * light.intensity;
        let highlight = -math::reflect(&-light_dir, &normal).dot(&ray.dir);
        specular += highlight.max(0.0).powf(material.specular_exponent) * light.intensity;
    }

    Ok(material.diffuse_color * (diffuse * material.diffuse_weight())
        + RGB::all(1.0) * (specular * material.specular_weight()))
}
