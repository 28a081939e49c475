//! In-memory RGBA image buffer shared by the image labs.

/// An RGBA image, 4 bytes per pixel, rows stored top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub pixels: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

impl Image {
    /// Creates an opaque black image.
    pub fn new(width: usize, height: usize) -> Self {
        let mut pixels = vec![0; width * height * 4];
        for px in pixels.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Self { pixels, width, height }
    }

    /// Wraps an existing RGBA buffer. Panics if the buffer length does not
    /// match `width * height * 4`.
    pub fn from_pixels(pixels: Vec<u8>, width: usize, height: usize) -> Self {
        assert_eq!(pixels.len(), width * height * 4);
        Self { pixels, width, height }
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// RGBA of the pixel at flat index `i`.
    pub fn rgba(&self, i: usize) -> [u8; 4] {
        let o = i * 4;
        [
            self.pixels[o],
            self.pixels[o + 1],
            self.pixels[o + 2],
            self.pixels[o + 3],
        ]
    }
}
