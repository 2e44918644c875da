use facedet_vision::annotate::{self, BOX_COLOR, BOX_THICKNESS};
use facedet_vision::Region;
use image::{Rgb, RgbImage};

const BACKGROUND: Rgb<u8> = Rgb([10, 10, 10]);

fn annotated(width: u32, height: u32, regions: &[Region]) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);
    annotate::draw_regions(&mut img, regions);
    img
}

#[test]
fn strokes_cover_full_thickness() {
    let region = Region {
        x: 30,
        y: 30,
        width: 20,
        height: 20,
        score: 3.0,
    };
    let img = annotated(100, 100, &[region]);

    // Every stroke from the region border outward is painted.
    for offset in 0..BOX_THICKNESS {
        let edge = (30 - offset) as u32;
        assert_eq!(*img.get_pixel(edge, 40), BOX_COLOR, "offset {offset}");
        assert_eq!(*img.get_pixel(40, edge), BOX_COLOR, "offset {offset}");
    }
    // One pixel further out is background again.
    let outside = (30 - BOX_THICKNESS) as u32;
    assert_eq!(*img.get_pixel(outside, 40), BACKGROUND);
}

#[test]
fn multiple_regions_are_all_drawn() {
    let regions = [
        Region {
            x: 5,
            y: 5,
            width: 10,
            height: 10,
            score: 2.0,
        },
        Region {
            x: 60,
            y: 60,
            width: 30,
            height: 20,
            score: 4.5,
        },
    ];
    let img = annotated(100, 100, &regions);

    assert_eq!(*img.get_pixel(5, 10), BOX_COLOR);
    assert_eq!(*img.get_pixel(60, 70), BOX_COLOR);
    // Space between the two boxes stays untouched.
    assert_eq!(*img.get_pixel(40, 40), BACKGROUND);
}

#[test]
fn clamped_region_draws_within_image() {
    // A detection hanging off the image edge, as the detector can produce
    // before clamping.
    let raw = Region {
        x: -8,
        y: 90,
        width: 30,
        height: 30,
        score: 2.0,
    };
    let clamped = raw.clamp_to(100, 100).unwrap();
    let img = annotated(100, 100, &[clamped]);

    assert_eq!(clamped.top_left(), (0, 90));
    assert_eq!(clamped.bottom_right(), (22, 100));
    assert_eq!(*img.get_pixel(0, 95), BOX_COLOR);
    assert_eq!(*img.get_pixel(10, 90), BOX_COLOR);
}
