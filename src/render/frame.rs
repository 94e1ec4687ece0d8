use anyhow::Context as _;

use crate::foundation::error::{GifAnimError, GifAnimResult};

/// One animation frame: straight-alpha RGBA8, row-major, tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes of RGBA pixel data.
    pub data: Vec<u8>,
}

impl Frame {
    /// Allocate a fully transparent canvas of the given size.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; byte_len(width, height)],
        }
    }

    /// Fill a canvas with a single straight-alpha color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut data = Vec::with_capacity(byte_len(width, height));
        for _ in 0..(width as usize * height as usize) {
            data.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Take ownership of an `image` RGBA buffer.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }

    /// Convert any decoded image to RGBA8.
    pub fn from_dynamic(img: image::DynamicImage) -> Self {
        Self::from_rgba_image(img.into_rgba8())
    }

    /// Decode an image file into a frame.
    pub fn open(path: &std::path::Path) -> GifAnimResult<Self> {
        let img = image::open(path)
            .with_context(|| format!("decode input image '{}'", path.display()))?;
        Ok(Self::from_dynamic(img))
    }

    /// Copy into an `image` RGBA buffer.
    pub fn to_rgba_image(&self) -> GifAnimResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            GifAnimError::encode(format!(
                "frame buffer of {} bytes does not match {}x{} rgba8",
                self.data.len(),
                self.width,
                self.height
            ))
        })
    }

    /// Read one pixel. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// `true` when the frame has a non-zero size and a matching buffer.
    pub fn is_valid(&self) -> bool {
        self.defect().is_none()
    }

    pub(crate) fn defect(&self) -> Option<String> {
        if self.width == 0 || self.height == 0 {
            return Some(format!(
                "frame has zero size ({}x{})",
                self.width, self.height
            ));
        }
        let expected = byte_len(self.width, self.height);
        if self.data.len() != expected {
            return Some(format!(
                "frame buffer is {} bytes, expected {expected} for {}x{} rgba8",
                self.data.len(),
                self.width,
                self.height
            ));
        }
        None
    }
}

fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
