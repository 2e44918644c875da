use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::region::Region;

/// Stroke color for detection boxes.
pub const BOX_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
/// Stroke thickness of detection boxes, in pixels.
pub const BOX_THICKNESS: i32 = 3;

/// Draw a hollow box around every region.
pub fn draw_regions(img: &mut RgbImage, regions: &[Region]) {
    for region in regions {
        draw_region(img, region);
    }
}

/// Thickness is built from concentric 1-px rectangles growing outward,
/// so the detected pixels themselves stay unobscured. Strokes falling
/// outside the image are clipped by the rasterizer.
fn draw_region(img: &mut RgbImage, region: &Region) {
    for offset in 0..BOX_THICKNESS {
        let rect = Rect::at(region.x - offset, region.y - offset).of_size(
            region.width + 2 * offset as u32,
            region.height + 2 * offset as u32,
        );
        draw_hollow_rect_mut(img, rect, BOX_COLOR);
    }
}
