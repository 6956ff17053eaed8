use crate::*;

fn merge_options<T, F: Fn(T, T) -> T>(x: Option<T>, y: Option<T>, merge: F) -> Option<T> {
    if let Some(x) = x {
        if let Some(y) = y {
            Some(merge(x, y))
        } else {
            Some(x)
        }
    } else {
        y
    }
}

#[derive(Clone, Debug)]
pub struct ObjectHit {
    pub hit: shape::Hit,
    pub material: material::Material,
}

impl ObjectHit {
    //ties keep the earlier object
    fn nearer_option(x: Option<Self>, y: Option<Self>) -> Option<Self> {
        merge_options(x, y, |x, y| if x.hit.dist <= y.hit.dist { x } else { y })
    }
}

#[derive(Clone, Debug)]
pub struct Object {
    pub shape: shape::Sphere,
    pub material: material::Material,
}

impl Object {
    pub fn new(shape: shape::Sphere, material: material::Material) -> Self {
        Object { shape, material }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ObjectList {
    pub objects: Vec<Object>,
}

impl ObjectList {
    pub fn new(objects: Vec<Object>) -> Self {
        ObjectList { objects }
    }

    /// Nearest object hit with `dist < tfar`.
    pub fn test_hit(&self, ray: &Ray, mut tfar: f32) -> Result<Option<ObjectHit>> {
        let mut hit = None::<ObjectHit>;
        for o in self.objects.iter() {
            tfar = hit.as_ref().map_or(tfar, |h| h.hit.dist);
            let new_hit = match o.shape.ray_intersect(ray) {
                Some(dist) if dist < tfar => Some(ObjectHit {
                    hit: o.shape.make_hit(ray, dist)?,
                    material: o.material,
                }),
                _ => None,
            };
            hit = ObjectHit::nearer_option(hit, new_hit);
        }
        Ok(hit)
    }
}
