//! Point sampling of a decoded image down to a terminal character grid.

use crate::pixel::{DecodedImage, SampledGrid};

/// Sampling step on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strides {
    pub x: usize,
    pub y: usize,
}

/// Strides for fitting `width` pixels into `max_char_width` columns.
///
/// Terminal cells are roughly twice as tall as they are wide, so rows are
/// skipped at about twice the column rate. The arithmetic order matters for
/// the exact floor result and must not be simplified.
pub fn strides(width: u32, height: u32, max_char_width: f64) -> Strides {
    if width == 0 || height == 0 {
        return Strides { x: 1, y: 1 };
    }

    let (w, h) = (f64::from(width), f64::from(height));
    let x = if w <= max_char_width {
        1
    } else {
        (w / max_char_width.max(1.0)).ceil() as usize
    };
    let y = ((x as f64 / w) * h * 2.0 * (w / h)).floor() as usize;

    Strides { x: x.max(1), y: y.max(1) }
}

/// Keep every `y`-th row and every `x`-th pixel within it, unmodified.
pub fn sample(image: &DecodedImage, max_char_width: f64) -> SampledGrid {
    let (width, height) = (image.width(), image.height());
    let Strides { x: x_stride, y: y_stride } = strides(width, height, max_char_width);

    let out_w = (width as usize).div_ceil(x_stride);
    let out_h = (height as usize).div_ceil(y_stride);
    log::debug!(
        "sampling {width}x{height} with strides ({x_stride}, {y_stride}) into {out_w}x{out_h} cells"
    );

    let mut pixels = Vec::with_capacity(out_w * out_h);
    for y in (0..height).step_by(y_stride) {
        for x in (0..width).step_by(x_stride) {
            pixels.push(image.pixel(x, y));
        }
    }

    SampledGrid::new(out_w, out_h, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;

    fn gradient(width: u32, height: u32) -> DecodedImage {
        let pixels: Vec<Pixel> = (0..height)
            .flat_map(|y| (0..width).map(move |x| Pixel::rgb(x as u8, y as u8, 0)))
            .collect();
        DecodedImage::from_pixels(width, height, &pixels).unwrap()
    }

    #[test]
    fn narrow_image_keeps_every_column() {
        assert_eq!(strides(40, 40, 80.0), Strides { x: 1, y: 2 });
        assert_eq!(strides(80, 10, 80.0).x, 1);
        let grid = sample(&gradient(40, 20), 80.0);
        assert_eq!(grid.width(), 40);
        assert_eq!(grid.height(), 10);
    }

    #[test]
    fn vertical_stride_keeps_float_rounding() {
        // (1/3) * 5 * 2 * (3/5) evaluates to 1.999..., which floors to 1.
        assert_eq!(strides(3, 5, 80.0).y, 1);
        assert_eq!(strides(3, 4, 80.0).y, 2);
    }

    #[test]
    fn wide_image_strides_by_ceiling() {
        // 100 columns at 75% => 75 cells wanted, 1000 / 75 = 13.3.
        let s = strides(1000, 500, 100.0 * 0.75);
        assert_eq!(s.x, 14);
        assert_eq!(s.y, 28);
        assert_eq!(strides(1000, 500, 120.0 * 0.75).x, 12);
    }

    #[test]
    fn fractional_width_limit() {
        let image = gradient(250, 2);
        let max = 80.0 * 0.75;
        let grid = sample(&image, max);
        assert_eq!(grid.width(), 250usize.div_ceil((250.0f64 / max).ceil() as usize));
    }

    #[test]
    fn rows_and_columns_are_point_sampled() {
        let grid = sample(&gradient(10, 12), 5.0);
        // x stride 2, y stride 4
        assert_eq!((grid.width(), grid.height()), (5, 3));
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows[0][1], Pixel::rgb(2, 0, 0));
        assert_eq!(rows[2][4], Pixel::rgb(8, 8, 0));
    }

    #[test]
    fn degenerate_geometry_does_not_panic() {
        assert_eq!(strides(0, 10, 80.0), Strides { x: 1, y: 1 });
        assert_eq!(strides(10, 0, 80.0), Strides { x: 1, y: 1 });
        let empty = DecodedImage::new(0, 0, 3, Vec::new()).unwrap();
        assert!(sample(&empty, 80.0).is_empty());
    }

    #[test]
    fn tiny_or_invalid_limits_collapse_to_one_column() {
        assert_eq!(sample(&gradient(7, 1), 0.0).width(), 1);
        assert_eq!(sample(&gradient(7, 1), f64::NAN).width(), 1);
    }
}
