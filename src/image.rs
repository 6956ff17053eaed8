use crate::*;
use ::image::codecs::jpeg::JpegEncoder;
use ::image::ColorType;
use log::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const DEFAULT_JPEG_QUALITY: u8 = 100;

/// Row-major framebuffer of unclamped colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    w: u32,
    h: u32,
    buf: Vec<RGB>,
}

impl Image {
    pub fn new(w: u32, h: u32) -> Self {
        let mut buf = Vec::new();
        buf.resize((w as usize) * (h as usize), RGB::all(0.0));
        Image { w, h, buf }
    }

    pub fn at(&self, x: u32, y: u32) -> &RGB {
        &self.buf[self.index(x, y)]
    }

    pub fn at_mut(&mut self, x: u32, y: u32) -> &mut RGB {
        let i = self.index(x, y);
        &mut self.buf[i]
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.w as usize + x as usize
    }

    pub fn w(&self) -> u32 {
        self.w
    }
    pub fn h(&self) -> u32 {
        self.h
    }

    pub fn pixels(&self) -> &[RGB] {
        &self.buf
    }

    /// Whole rows of the buffer, `rows_per_band` at a time (the last band may
    /// be shorter), tagged with the index of their first row.
    pub fn bands_mut(
        &mut self,
        rows_per_band: u32,
    ) -> impl Iterator<Item = (u32, &mut [RGB])> + Send + '_ {
        let band_len = (rows_per_band.max(1) as usize) * (self.w.max(1) as usize);
        let rows_per_band = rows_per_band.max(1);
        self.buf
            .chunks_mut(band_len)
            .enumerate()
            .map(move |(i, band)| (i as u32 * rows_per_band, band))
    }

    /// Interleaved 8-bit RGB, each channel clamped to [0, 1] first.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.buf.len() * 3);
        for c in self.buf.iter() {
            data.extend_from_slice(&c.to_rgb8());
        }
        data
    }

    /// Encodes as PNG when the extension says so, otherwise as JPEG at `quality`.
    pub fn write<P: AsRef<Path>>(&self, path: P, quality: u8) -> Result<()> {
        let path = path.as_ref();
        let data = self.to_rgb8();
        let is_png = path
            .extension()
            .and_then(|e| e.to_str())
            .map_or(false, |e| e.eq_ignore_ascii_case("png"));
        if is_png {
            debug!("encoding {}x{} png to {}", self.w(), self.h(), path.display());
            ::image::save_buffer_with_format(
                path,
                &data,
                self.w,
                self.h,
                ColorType::Rgb8,
                ::image::ImageFormat::Png,
            )?;
        } else {
            debug!(
                "encoding {}x{} jpeg (quality {}) to {}",
                self.w(),
                self.h(),
                quality,
                path.display()
            );
            let mut file = BufWriter::new(File::create(path)?);
            JpegEncoder::new_with_quality(&mut file, quality).encode(
                &data,
                self.w,
                self.h,
                ColorType::Rgb8,
            )?;
            file.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("phongtrace-{}-{}", std::process::id(), name))
    }

    fn gradient(w: u32, h: u32) -> Image {
        let mut image = Image::new(w, h);
        for y in 0..h {
            for x in 0..w {
                *image.at_mut(x, y) = RGB::new(x as f32 / w as f32, y as f32 / h as f32, 1.5);
            }
        }
        image
    }

    #[test]
    fn quantized_layout() {
        let mut image = Image::new(2, 1);
        *image.at_mut(1, 0) = RGB::new(1.0, -1.0, 0.5);
        assert_eq!(image.to_rgb8(), vec![0, 0, 0, 255, 0, 128]);
        assert_eq!(image.pixels().len(), 2);
    }

    #[test]
    fn bands_cover_every_row_once() {
        let mut image = Image::new(3, 7);
        let mut rows = vec![];
        for (first_row, band) in image.bands_mut(2) {
            assert_eq!(band.len() % 3, 0);
            for r in 0..(band.len() / 3) as u32 {
                rows.push(first_row + r);
            }
        }
        assert_eq!(rows, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn writes_jpeg_and_png() {
        let image = gradient(32, 16);
        for name in ["out.jpg", "out.png"].iter() {
            let path = temp_path(name);
            image.write(&path, DEFAULT_JPEG_QUALITY).unwrap();
            let decoded = ::image::open(&path).unwrap().to_rgb8();
            assert_eq!(decoded.dimensions(), (image.w(), image.h()));
            let _ = std::fs::remove_file(&path);
        }
    }

    #[test]
    fn png_is_lossless() {
        let image = gradient(8, 4);
        let path = temp_path("lossless.png");
        image.write(&path, DEFAULT_JPEG_QUALITY).unwrap();
        let decoded = ::image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.into_raw(), image.to_rgb8());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let path = temp_path("missing-dir").join("nested").join("out.jpg");
        match Image::new(4, 4).write(&path, 90) {
            Err(Error::Io(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
