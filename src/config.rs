//! Command line options and JSON scene descriptions.

use crate::material::Material;
use crate::object::Object;
use crate::renderer::RenderConfig;
use crate::scene::{Light, Scene};
use crate::shape::Sphere;
use crate::*;

use getopts::Options;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "out.jpg";

#[derive(Clone, Debug, PartialEq)]
pub struct CliOptions {
    pub render: RenderConfig,
    pub output: PathBuf,
    pub quality: u8,
    pub scene: Option<PathBuf>,
}

pub enum Command {
    Render(CliOptions),
    Help(String),
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("w", "width", "image width in pixels (default 1024)", "PX");
    opts.optopt("H", "height", "image height in pixels (default 768)", "PX");
    opts.optopt("", "fov", "vertical field of view in degrees (default 90)", "DEG");
    opts.optopt("t", "threads", "worker threads (default: logical cpus)", "N");
    opts.optopt("o", "output", "output file, .png or jpeg (default out.jpg)", "FILE");
    opts.optopt("q", "quality", "jpeg quality 1-100 (default 100)", "Q");
    opts.optopt("s", "scene", "JSON scene file (default: built-in scene)", "FILE");
    opts.optflag("h", "help", "print this help");
    opts
}

fn parse_opt<T: std::str::FromStr>(
    matches: &getopts::Matches,
    name: &str,
    default: T,
) -> Result<T> {
    match matches.opt_str(name) {
        Some(s) => s
            .parse()
            .map_err(|_| Error::Config(format!("invalid value for --{}: {:?}", name, s))),
        None => Ok(default),
    }
}

pub fn parse_args<S: AsRef<str>>(program: &str, args: &[S]) -> Result<Command> {
    let opts = options();
    let args: Vec<&str> = args.iter().map(|a| a.as_ref()).collect();
    let matches = opts
        .parse(&args)
        .map_err(|e| Error::Config(e.to_string()))?;
    if matches.opt_present("h") {
        let brief = format!("Usage: {} [options]", program);
        return Ok(Command::Help(opts.usage(&brief)));
    }
    if let Some(extra) = matches.free.first() {
        return Err(Error::Config(format!("unexpected argument {:?}", extra)));
    }

    let defaults = RenderConfig::default();
    let fov_degree: f32 = parse_opt(&matches, "fov", defaults.fov.to_degrees())?;
    let render = RenderConfig::new(
        parse_opt(&matches, "width", defaults.width)?,
        parse_opt(&matches, "height", defaults.height)?,
        fov_degree.to_radians(),
        parse_opt(&matches, "threads", defaults.nthread)?,
    )?;
    let quality = parse_opt(&matches, "quality", crate::image::DEFAULT_JPEG_QUALITY)?;
    if quality == 0 || quality > 100 {
        return Err(Error::Config(format!(
            "jpeg quality must be in 1..=100, got {}",
            quality
        )));
    }

    Ok(Command::Render(CliOptions {
        render,
        output: PathBuf::from(parse_opt(&matches, "output", DEFAULT_OUTPUT.to_string())?),
        quality,
        scene: matches.opt_str("scene").map(PathBuf::from),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MaterialDesc {
    albedo: [f32; 2],
    diffuse_color: [f32; 3],
    specular_exponent: f32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SphereDesc {
    center: [f32; 3],
    radius: f32,
    material: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LightDesc {
    position: [f32; 3],
    intensity: f32,
}

/// On-disk scene: named materials referenced by the spheres.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDesc {
    #[serde(default)]
    materials: HashMap<String, MaterialDesc>,
    #[serde(default)]
    spheres: Vec<SphereDesc>,
    #[serde(default)]
    lights: Vec<LightDesc>,
    background: Option<[f32; 3]>,
}

impl SceneDesc {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn build(&self) -> Result<Scene> {
        let mut objects = vec![];
        for (i, s) in self.spheres.iter().enumerate() {
            let m = self.materials.get(&s.material).ok_or_else(|| {
                Error::Config(format!("sphere {} uses unknown material {:?}", i, s.material))
            })?;
            let material = Material::new(
                V2::new(m.albedo[0], m.albedo[1]),
                RGB::from(m.diffuse_color),
                m.specular_exponent,
            );
            let center = P3::new(s.center[0], s.center[1], s.center[2]);
            objects.push(Object::new(Sphere::new(center, s.radius)?, material));
        }
        let lights = self
            .lights
            .iter()
            .map(|l| Light::new(P3::new(l.position[0], l.position[1], l.position[2]), l.intensity))
            .collect();
        let scene = Scene::new(objects, lights);
        Ok(match self.background {
            Some(c) => scene.set_background(RGB::from(c)),
            None => scene,
        })
    }
}

pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let json = std::fs::read_to_string(path)?;
    SceneDesc::from_json(&json)?.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_BALLS: &str = r#"{
        "materials": {
            "chalk": { "albedo": [1.0, 0.0], "diffuse_color": [0.9, 0.9, 0.9], "specular_exponent": 1.0 },
            "gloss": { "albedo": [0.5, 0.5], "diffuse_color": [0.1, 0.2, 0.9], "specular_exponent": 80.0 }
        },
        "spheres": [
            { "center": [0.0, 0.0, -10.0], "radius": 2.0, "material": "chalk" },
            { "center": [3.0, 1.0, -14.0], "radius": 1.5, "material": "gloss" }
        ],
        "lights": [ { "position": [10.0, 10.0, 0.0], "intensity": 1.2 } ],
        "background": [0.0, 0.0, 0.0]
    }"#;

    fn render_opts(args: &[&str]) -> Result<CliOptions> {
        match parse_args("phongtrace", args)? {
            Command::Render(opts) => Ok(opts),
            Command::Help(_) => panic!("unexpected help"),
        }
    }

    #[test]
    fn defaults() {
        let opts = render_opts(&[]).unwrap();
        assert_eq!(opts.render.width, 1024);
        assert_eq!(opts.render.height, 768);
        assert!((opts.render.fov - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!(opts.render.nthread >= 1);
        assert_eq!(opts.output, PathBuf::from("out.jpg"));
        assert_eq!(opts.quality, 100);
        assert_eq!(opts.scene, None);
    }

    #[test]
    fn explicit_values() {
        let opts = render_opts(&[
            "-w", "320", "--height", "200", "--fov", "60", "-t", "3", "-o", "a.png", "-q", "70",
            "--scene", "s.json",
        ])
        .unwrap();
        assert_eq!(opts.render.width, 320);
        assert_eq!(opts.render.height, 200);
        assert!((opts.render.fov - std::f32::consts::FRAC_PI_3).abs() < 1e-6);
        assert_eq!(opts.render.nthread, 3);
        assert_eq!(opts.output, PathBuf::from("a.png"));
        assert_eq!(opts.quality, 70);
        assert_eq!(opts.scene, Some(PathBuf::from("s.json")));
    }

    #[test]
    fn rejects_bad_values() {
        for args in [
            &["-w", "0"][..],
            &["-w", "wide"][..],
            &["--fov", "200"][..],
            &["-t", "0"][..],
            &["-q", "0"][..],
            &["-q", "101"][..],
            &["--bogus"][..],
            &["stray"][..],
        ]
        .iter()
        {
            match parse_args("phongtrace", *args) {
                Err(Error::Config(_)) => {}
                Err(e) => panic!("{:?}: unexpected error {}", args, e),
                Ok(_) => panic!("{:?}: accepted", args),
            }
        }
    }

    #[test]
    fn help() {
        match parse_args("phongtrace", &["--help"]).unwrap() {
            Command::Help(usage) => assert!(usage.contains("--fov")),
            Command::Render(_) => panic!("expected help"),
        }
    }

    #[test]
    fn scene_from_json() {
        let scene = SceneDesc::from_json(TWO_BALLS).unwrap().build().unwrap();
        assert_eq!(scene.objects().len(), 2);
        assert_eq!(scene.lights().len(), 1);
        assert_eq!(scene.background(), RGB::all(0.0));
        let gloss = &scene.objects()[1];
        assert_eq!(gloss.material.specular_exponent, 80.0);
        assert_eq!(gloss.material.diffuse_color, RGB::new(0.1, 0.2, 0.9));
        assert_eq!(gloss.shape.radius(), 1.5);
        assert_eq!(scene.lights()[0], Light::new(P3::new(10.0, 10.0, 0.0), 1.2));
    }

    #[test]
    fn bundled_reference_scene_matches_builtin() {
        let json = include_str!("../scenes/reference.json");
        let loaded = SceneDesc::from_json(json).unwrap().build().unwrap();
        let builtin = crate::example_scenes::make_reference_scene().unwrap();
        assert_eq!(loaded.lights(), builtin.lights());
        assert_eq!(loaded.background(), builtin.background());
        assert_eq!(loaded.objects().len(), builtin.objects().len());
        for (a, b) in loaded.objects().iter().zip(builtin.objects()) {
            assert_eq!(a.shape, b.shape);
            assert_eq!(a.material, b.material);
        }
    }

    #[test]
    fn empty_json_is_empty_sky() {
        let scene = SceneDesc::from_json("{}").unwrap().build().unwrap();
        assert!(scene.objects().is_empty());
        assert_eq!(scene.background(), crate::scene::SKY_BLUE);
    }

    #[test]
    fn scene_errors() {
        let unknown = r#"{ "spheres": [ { "center": [0, 0, -5], "radius": 1, "material": "x" } ] }"#;
        match SceneDesc::from_json(unknown).unwrap().build() {
            Err(Error::Config(_)) => {}
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }

        let flat = TWO_BALLS.replace("\"radius\": 2.0", "\"radius\": 0.0");
        match SceneDesc::from_json(&flat).unwrap().build() {
            Err(Error::DegenerateGeometry(_)) => {}
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }

        match SceneDesc::from_json("{ \"spheres\": 3 }") {
            Err(Error::Json(_)) => {}
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn missing_scene_file_is_io_error() {
        let path = std::env::temp_dir().join("phongtrace-no-such-scene.json");
        match load_scene(&path) {
            Err(Error::Io(_)) => {}
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }
    }
}
