//! Frame buffer types.

use lumen_math::Color;
use serde::{Deserialize, Serialize};

/// Output size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Width divided by height.
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::new(640, 640)
    }
}

/// Integer pixel position, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

/// A pixel tagged with its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    pub coordinate: Coordinate,
    pub color: Color,
}

/// Row-major frame buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Pixel>,
}

impl Image {
    /// Create a new image filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| Pixel {
                coordinate: Coordinate { x, y },
                color: Color::ZERO,
            })
            .collect();

        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a black image matching `resolution`.
    pub fn from_resolution(resolution: Resolution) -> Self {
        Self::new(resolution.width, resolution.height)
    }

    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.width, self.height)
    }

    /// Flat index of a pixel.
    #[inline]
    pub fn index_of(&self, coordinate: Coordinate) -> usize {
        coordinate.y as usize * self.width as usize + coordinate.x as usize
    }

    /// Get the color at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index_of(Coordinate { x, y })].color
    }

    /// Set the color at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index_of(Coordinate { x, y });
        self.pixels[index].color = color;
    }

    /// Iterate over the rows of the image.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        // chunks() panics on zero
        self.pixels.chunks(self.width.max(1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_creation() {
        let image = Image::new(3, 2);

        assert_eq!(image.width, 3);
        assert_eq!(image.height, 2);
        assert_eq!(image.pixels.len(), 6);
        assert!(image.pixels.iter().all(|p| p.color == Color::ZERO));
    }

    #[test]
    fn test_pixel_coordinates() {
        let image = Image::new(3, 2);

        for (index, pixel) in image.pixels.iter().enumerate() {
            assert_eq!(image.index_of(pixel.coordinate), index);
        }
        assert_eq!(image.pixels[4].coordinate, Coordinate { x: 1, y: 1 });
    }

    #[test]
    fn test_get_set() {
        let mut image = Image::new(4, 4);
        image.set(2, 3, Color::ONE);

        assert_eq!(image.get(2, 3), Color::ONE);
        assert_eq!(image.get(3, 2), Color::ZERO);
    }

    #[test]
    fn test_resolution() {
        let resolution = Resolution::new(3, 2);
        assert_eq!(resolution.pixel_count(), 6);
        assert_eq!(resolution.aspect(), 1.5);
    }
}
