use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Row-major 8-bit pixel buffer with 1 (grayscale) or 3 (RGB) channels.
/// Zero-initialized; a pixel that never receives a dot stays black.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl Raster {
    pub fn gray(width: usize, height: usize) -> Self {
        Self::with_channels(width, height, 1)
    }

    pub fn rgb(width: usize, height: usize) -> Self {
        Self::with_channels(width, height, 3)
    }

    fn with_channels(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
            data: vec![0; width * height * channels],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Overwrites one sample; later writes win at the same position.
    pub fn set(&mut self, x: usize, y: usize, channel: usize, value: u8) {
        self.data[(y * self.width + x) * self.channels + channel] = value;
    }

    pub fn get(&self, x: usize, y: usize, channel: usize) -> u8 {
        self.data[(y * self.width + x) * self.channels + channel]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> Result<(), png::EncodingError> {
        let file = File::create(path)?;
        let file_writer = BufWriter::new(file);

        let mut encoder = png::Encoder::new(file_writer, self.width as u32, self.height as u32);

        encoder.set_color(if self.channels == 1 {
            png::ColorType::Grayscale
        } else {
            png::ColorType::Rgb
        });
        encoder.set_depth(png::BitDepth::Eight);

        let mut png_writer = encoder.write_header()?;
        png_writer.write_image_data(&self.data)?;

        Ok(())
    }
}
