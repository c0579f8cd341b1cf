//! Highlight box drawing.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::bounds::Bounds;

/// Highlight color, opaque yellow.
pub const HIGHLIGHT_COLOR: Rgba<u8> = Rgba([255, 234, 0, 255]);

/// Fixed offset added around a bounds rectangle when drawing its border.
pub const OUTLINE_MARGIN: i32 = 3;

/// Draw a highlight box around every bounds in the list, in list order.
/// Later boxes overwrite earlier pixels where they overlap.
pub fn outline_all(image: &mut RgbaImage, bounds: &[Bounds]) {
    for b in bounds {
        outline_rect(image, b);
    }
}

/// Draw one closed border around `bounds`, expanded by [`OUTLINE_MARGIN`] on
/// every side, as four filled strips. The inner edge of each strip sits on
/// the original corner coordinates.
pub fn outline_rect(image: &mut RgbaImage, bounds: &Bounds) {
    let left = bounds.top_left.x;
    let top = bounds.top_left.y;
    let right = bounds.bottom_right.x;
    let bottom = bounds.bottom_right.y;

    let outer_left = left - OUTLINE_MARGIN;
    let outer_top = top - OUTLINE_MARGIN;
    let outer_right = right + OUTLINE_MARGIN;
    let outer_bottom = bottom + OUTLINE_MARGIN;

    // Top line.
    fill_strip(image, outer_left, outer_top, outer_right, top);
    // Left line.
    fill_strip(image, outer_left, outer_top, left, outer_bottom);
    // Right line.
    fill_strip(image, right, outer_top, outer_right, outer_bottom);
    // Bottom line.
    fill_strip(image, outer_left, bottom, outer_right, outer_bottom);
}

/// Fill the rectangle with inclusive corners `(x0, y0)`-`(x1, y1)`, clipped
/// to the image extent. Strips with non-positive extent (inverted bounds)
/// are skipped.
fn fill_strip(image: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32) {
    let width = x1 - x0 + 1;
    let height = y1 - y0 + 1;
    if width <= 0 || height <= 0 {
        return;
    }
    let rect = Rect::at(x0, y0).of_size(width as u32, height as u32);
    draw_filled_rect_mut(image, rect, HIGHLIGHT_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Coordinate;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn white_image(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, WHITE)
    }

    fn bounds(x1: i32, y1: i32, x2: i32, y2: i32) -> Bounds {
        Bounds {
            top_left: Coordinate { x: x1, y: y1 },
            bottom_right: Coordinate { x: x2, y: y2 },
        }
    }

    #[test]
    fn strips_sit_at_the_margin_offset() {
        let mut img = white_image(100, 100);
        outline_rect(&mut img, &bounds(10, 10, 30, 30));

        // Outer corner of the border.
        assert_eq!(*img.get_pixel(7, 7), HIGHLIGHT_COLOR);
        // Inner edge of the top strip lies on the original top row.
        assert_eq!(*img.get_pixel(20, 10), HIGHLIGHT_COLOR);
        assert_eq!(*img.get_pixel(20, 7), HIGHLIGHT_COLOR);
        // Left, right and bottom strips.
        assert_eq!(*img.get_pixel(10, 20), HIGHLIGHT_COLOR);
        assert_eq!(*img.get_pixel(30, 20), HIGHLIGHT_COLOR);
        assert_eq!(*img.get_pixel(33, 33), HIGHLIGHT_COLOR);

        // Strictly inside the original bounds stays untouched.
        assert_eq!(*img.get_pixel(20, 20), WHITE);
        assert_eq!(*img.get_pixel(11, 11), WHITE);
        // Outside the expanded rectangle stays untouched.
        assert_eq!(*img.get_pixel(6, 6), WHITE);
        assert_eq!(*img.get_pixel(34, 34), WHITE);
    }

    #[test]
    fn drawing_clips_at_the_image_edge() {
        let mut img = white_image(20, 20);
        // Expanded rectangle pokes out on every side.
        outline_rect(&mut img, &bounds(0, 0, 19, 19));
        assert_eq!(*img.get_pixel(0, 0), HIGHLIGHT_COLOR);
        assert_eq!(*img.get_pixel(19, 19), HIGHLIGHT_COLOR);
        assert_eq!(*img.get_pixel(10, 10), WHITE);
    }

    #[test]
    fn repeated_drawing_is_pixel_idempotent() {
        let list = [bounds(5, 5, 15, 15), bounds(12, 12, 25, 25)];

        let mut once = white_image(40, 40);
        outline_all(&mut once, &list);

        let mut twice = white_image(40, 40);
        outline_all(&mut twice, &list);
        outline_all(&mut twice, &list);

        assert_eq!(once.as_raw(), twice.as_raw());
    }

    #[test]
    fn inverted_bounds_draw_nothing_instead_of_panicking() {
        let mut img = white_image(40, 40);
        outline_rect(&mut img, &bounds(30, 30, 5, 5));
        // Strips with negative extent were skipped.
        assert!(img.pixels().all(|p| *p == WHITE));
    }
}
