use crate::material::Material;
use crate::object::Object;
use crate::scene::{Light, Scene};
use crate::shape::Sphere;
use crate::*;

/// Four spheres (two ivory, two red rubber) lit by three point lights, in
/// front of a camera at the origin looking down -z.
pub fn make_reference_scene() -> Result<Scene> {
    let ivory = Material::new_ivory();
    let red_rubber = Material::new_red_rubber();
    let mut objects = vec![];

    objects.push(Object::new(Sphere::new(P3::new(-3.0, 0.0, -16.0), 2.0)?, ivory));
    objects.push(Object::new(
        Sphere::new(P3::new(-1.0, -1.5, -12.0), 2.0)?,
        red_rubber,
    ));
    objects.push(Object::new(
        Sphere::new(P3::new(1.5, -0.5, -18.0), 3.0)?,
        red_rubber,
    ));
    objects.push(Object::new(Sphere::new(P3::new(7.0, 5.0, -18.0), 4.0)?, ivory));

    let lights = vec![
        Light::new(P3::new(-20.0, 20.0, 20.0), 1.5),
        Light::new(P3::new(30.0, 50.0, -25.0), 1.8),
        Light::new(P3::new(30.0, 20.0, 30.0), 1.7),
    ];

    Ok(Scene::new(objects, lights))
}
