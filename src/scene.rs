use crate::*;

/// Hits at or beyond this distance are treated as background.
pub const MAX_DISTANCE: f32 = 1000.0;

pub const SKY_BLUE: RGB = RGB {
    r: 0.2,
    g: 0.7,
    b: 0.8,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    pub position: P3,
    pub intensity: f32,
}

impl Light {
    pub fn new(position: P3, intensity: f32) -> Self {
        Light {
            position,
            intensity,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    objects: object::ObjectList,
    lights: Vec<Light>,
    background: RGB,
}

impl Scene {
    pub fn new(objects: Vec<object::Object>, lights: Vec<Light>) -> Self {
        Scene {
            objects: object::ObjectList::new(objects),
            lights,
            background: SKY_BLUE,
        }
    }

    pub fn set_background(mut self, background: RGB) -> Self {
        self.background = background;
        self
    }

    pub fn background(&self) -> RGB {
        self.background
    }

    pub fn objects(&self) -> &[object::Object] {
        &self.objects.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn intersect(&self, ray: &Ray) -> Result<Option<object::ObjectHit>> {
        self.objects.test_hit(ray, MAX_DISTANCE)
    }
}
