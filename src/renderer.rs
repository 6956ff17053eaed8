use crate::camera::PinHole;
use crate::image::Image;
use crate::scene::Scene;
use crate::*;

use log::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::thread;
use std::time::Instant;

pub mod phong;

/// Rows handed to a worker at a time.
const ROWS_PER_BAND: u32 = 8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub nthread: usize,
}

impl RenderConfig {
    pub fn new(width: u32, height: u32, fov: f32, nthread: usize) -> Result<Self> {
        let config = RenderConfig {
            width,
            height,
            fov,
            nthread,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!(
                "image size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.fov > 0.0 && self.fov < std::f32::consts::PI) {
            return Err(Error::Config(format!(
                "field of view must be in (0, pi) radians, got {}",
                self.fov
            )));
        }
        if self.nthread == 0 {
            return Err(Error::Config("at least one render thread is required".into()));
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 1024,
            height: 768,
            fov: std::f32::consts::FRAC_PI_2,
            nthread: num_cpus::get(),
        }
    }
}

pub fn render_pixel(scene: &Scene, camera: &PinHole, col: u32, row: u32) -> Result<RGB> {
    let ray = camera.primary_ray(col, row)?;
    phong::radiance(scene, &ray)
}

pub struct Renderer;

impl Renderer {
    /// Renders `scene` into a fresh framebuffer. Rows are split into bands
    /// that `config.nthread` workers pull from a shared queue; every pixel is
    /// computed the same way whatever the thread count.
    pub fn render(&self, scene: &Scene, config: &RenderConfig) -> Result<Image> {
        config.validate()?;
        let started = Instant::now();
        info!(
            "rendering {}x{} ({} objects, {} lights) on {} threads",
            config.width,
            config.height,
            scene.objects().len(),
            scene.lights().len(),
            config.nthread
        );

        let camera = PinHole::new(config.fov, config.width, config.height);
        let mut image = Image::new(config.width, config.height);
        let width = config.width;
        {
            let bands = Mutex::new(image.bands_mut(ROWS_PER_BAND));
            let abort = AtomicBool::new(false);
            let results = thread::scope(|s| {
                let mut threads = vec![];
                for i in 0..config.nthread {
                    let bands = &bands;
                    let abort = &abort;
                    let camera = &camera;
                    let thread = s.spawn(move || {
                        let result = Self::render_thread(scene, camera, width, bands, abort, i);
                        if result.is_err() {
                            abort.store(true, Ordering::Relaxed);
                        }
                        result
                    });
                    threads.push(thread);
                }
                threads
                    .into_iter()
                    .map(|thread| match thread.join() {
                        Ok(result) => result,
                        Err(panic) => std::panic::resume_unwind(panic),
                    })
                    .collect::<Vec<_>>()
            });
            for result in results {
                result?;
            }
        }

        info!("render finished in {:.3}s", started.elapsed().as_secs_f64());
        Ok(image)
    }

    fn render_thread<'a, I>(
        scene: &Scene,
        camera: &PinHole,
        width: u32,
        bands: &Mutex<I>,
        abort: &AtomicBool,
        thread_id: usize,
    ) -> Result<u32>
    where
        I: Iterator<Item = (u32, &'a mut [RGB])>,
    {
        let mut rows = 0;
        loop {
            if abort.load(Ordering::Relaxed) {
                break;
            }
            let next = match bands.lock() {
                Ok(mut bands) => bands.next(),
                Err(_) => None,
            };
            let (first_row, band) = match next {
                Some(band) => band,
                None => break,
            };

            for (i, pixel) in band.iter_mut().enumerate() {
                let col = (i % width as usize) as u32;
                let row = first_row + (i / width as usize) as u32;
                let color = render_pixel(scene, camera, col, row)?;
                if !color.is_finite() {
                    warn!("radiance is not finite at ({}, {}): {:?}", col, row, color);
                }
                *pixel = color;
            }
            rows += (band.len() / width as usize) as u32;
        }
        debug!("thread {} rendered {} rows", thread_id, rows);
        Ok(rows)
    }
}
