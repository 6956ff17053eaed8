pub mod camera;
pub mod config;
pub mod error;
pub mod example_scenes;
pub mod image;
pub mod material;
pub mod math;
pub mod object;
pub mod ray;
pub mod renderer;
pub mod rgb;
pub mod scene;
pub mod shape;

pub use error::{Error, Result};
pub use math::{P3, V2, V3};
pub use ray::Ray;
pub use rgb::RGB;
