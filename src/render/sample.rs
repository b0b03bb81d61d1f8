//! Nearest-neighbor sampling over an abstract pixel source.

use image::{DynamicImage, GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};

use super::color::Color;

/// Read-only access to decoded image pixels.
///
/// The renderer only ever reads through this trait, so any decoder (or a
/// test fixture) can feed it.
pub trait PixelSource {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Color at `(x, y)`. Callers guarantee the coordinate is in bounds.
    fn pixel(&self, x: u32, y: u32) -> Color;

    /// True when the source has no pixels to sample.
    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        (**self).pixel(x, y)
    }
}

impl From<Rgb<u8>> for Color {
    fn from(Rgb([r, g, b]): Rgb<u8>) -> Self {
        Color::new(r, g, b)
    }
}

impl From<Rgba<u8>> for Color {
    /// Premultiplies alpha, so transparent pixels come out black.
    fn from(Rgba([r, g, b, a]): Rgba<u8>) -> Self {
        let mul = |c: u8| (c as u16 * a as u16 / 255) as u8;
        Color::new(mul(r), mul(g), mul(b))
    }
}

impl PixelSource for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        (*self.get_pixel(x, y)).into()
    }
}

impl PixelSource for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        (*self.get_pixel(x, y)).into()
    }
}

impl PixelSource for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    // 16-bit buffers keep the high byte of each channel. Float images go
    // through the crate's own 8-bit conversion.
    fn pixel(&self, x: u32, y: u32) -> Color {
        match self {
            DynamicImage::ImageRgb16(buf) => {
                let Rgb([r, g, b]) = *buf.get_pixel(x, y);
                Color::new(high_byte(r), high_byte(g), high_byte(b))
            }
            DynamicImage::ImageRgba16(buf) => {
                let Rgba([r, g, b, a]) = *buf.get_pixel(x, y);
                let mul = |c: u16| high_byte((c as u32 * a as u32 / 0xFFFF) as u16);
                Color::new(mul(r), mul(g), mul(b))
            }
            DynamicImage::ImageLuma16(buf) => Color::gray(high_byte(buf.get_pixel(x, y)[0])),
            DynamicImage::ImageLumaA16(buf) => {
                let [v, a] = buf.get_pixel(x, y).0;
                Color::gray(high_byte((v as u32 * a as u32 / 0xFFFF) as u16))
            }
            _ => self.get_pixel(x, y).into(),
        }
    }
}

/// Narrow a 16-bit channel by truncating to its high byte.
#[inline]
fn high_byte(value: u16) -> u8 {
    (value >> 8) as u8
}

/// Map an output coordinate back onto the source axis.
///
/// Truncates `target * source_extent / out_extent` and clamps into
/// `[0, source_extent - 1]`.
#[inline]
pub fn source_coord(target: u32, source_extent: u32, out_extent: u32) -> u32 {
    if source_extent == 0 {
        return 0;
    }
    let coord = target as u64 * source_extent as u64 / out_extent.max(1) as u64;
    coord.min(source_extent as u64 - 1) as u32
}

/// Sample the source pixel under output cell `(x, y)` of an
/// `out_width` x `out_height` grid.
pub fn sample<S: PixelSource + ?Sized>(
    source: &S,
    x: u32,
    y: u32,
    out_width: u32,
    out_height: u32,
) -> Color {
    let sx = source_coord(x, source.width(), out_width);
    let sy = source_coord(y, source.height(), out_height);
    source.pixel(sx, sy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, LumaA};

    #[test]
    fn test_source_coord_scales_down() {
        // 100 source pixels onto 10 output cells
        assert_eq!(source_coord(0, 100, 10), 0);
        assert_eq!(source_coord(5, 100, 10), 50);
        assert_eq!(source_coord(9, 100, 10), 90);
    }

    #[test]
    fn test_source_coord_scales_up() {
        // 2 source pixels stretched across 5 output cells
        let coords: Vec<u32> = (0..5).map(|t| source_coord(t, 2, 5)).collect();
        assert_eq!(coords, vec![0, 0, 0, 1, 1]);
    }

    #[test]
    fn test_source_coord_clamps_overshoot() {
        assert_eq!(source_coord(10, 4, 10), 3);
        assert_eq!(source_coord(1_000, 4, 10), 3);
    }

    #[test]
    fn test_source_coord_degenerate_extents() {
        assert_eq!(source_coord(3, 0, 10), 0);
        assert_eq!(source_coord(3, 8, 0), 7);
    }

    #[test]
    fn test_sample_reads_expected_pixel() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(1, 0, Rgb([10, 20, 30]));
        img.put_pixel(0, 1, Rgb([40, 50, 60]));
        assert_eq!(sample(&img, 1, 0, 2, 2), Color::new(10, 20, 30));
        assert_eq!(sample(&img, 0, 1, 2, 2), Color::new(40, 50, 60));
        // 4x4 grid over a 2x2 image: cell (3, 0) maps to pixel (1, 0)
        assert_eq!(sample(&img, 3, 0, 4, 4), Color::new(10, 20, 30));
    }

    #[test]
    fn test_rgba_premultiplies_alpha() {
        assert_eq!(Color::from(Rgba([255, 128, 0, 0])), Color::BLACK);
        assert_eq!(Color::from(Rgba([255, 128, 0, 255])), Color::new(255, 128, 0));
        assert_eq!(Color::from(Rgba([200, 100, 50, 127])), Color::new(99, 49, 24));
    }

    #[test]
    fn test_dynamic_image_narrows_16_bit() {
        let img = image::ImageBuffer::from_pixel(1, 1, Rgb([u16::MAX, 0, 0x8080u16]));
        let dynamic = DynamicImage::ImageRgb16(img);
        assert_eq!(dynamic.pixel(0, 0), Color::new(255, 0, 128));
    }

    #[test]
    fn test_16_bit_truncates_instead_of_rounding() {
        let img = image::ImageBuffer::from_pixel(1, 1, Rgb([0x80FFu16, 0x00FF, 0xFEFF]));
        let dynamic = DynamicImage::ImageRgb16(img);
        assert_eq!(dynamic.pixel(0, 0), Color::new(0x80, 0x00, 0xFE));

        let luma = image::ImageBuffer::from_pixel(1, 1, Luma([0x80FFu16]));
        assert_eq!(DynamicImage::ImageLuma16(luma).pixel(0, 0), Color::gray(0x80));
    }

    #[test]
    fn test_16_bit_alpha_premultiplies() {
        let img = image::ImageBuffer::from_pixel(1, 1, Rgba([0xFFFFu16, 0x8000, 0, 0x8000]));
        let dynamic = DynamicImage::ImageRgba16(img);
        assert_eq!(dynamic.pixel(0, 0), Color::new(128, 64, 0));

        let clear = image::ImageBuffer::from_pixel(1, 1, Rgba([0xFFFFu16, 0xFFFF, 0xFFFF, 0]));
        assert_eq!(DynamicImage::ImageRgba16(clear).pixel(0, 0), Color::BLACK);

        let half = image::ImageBuffer::from_pixel(1, 1, LumaA([0xFFFFu16, 0x8000]));
        assert_eq!(DynamicImage::ImageLumaA16(half).pixel(0, 0), Color::gray(128));
    }

    #[test]
    fn test_empty_source() {
        let img = RgbImage::new(0, 5);
        assert!(img.is_empty());
        assert!(!RgbImage::new(1, 1).is_empty());
    }
}
