use super::*;

#[test]
fn transparent_canvas_is_all_zero() {
    let f = Frame::transparent(3, 2);
    assert_eq!(f.data.len(), 3 * 2 * 4);
    assert!(f.data.iter().all(|&b| b == 0));
    assert!(f.is_valid());
}

#[test]
fn solid_fills_every_pixel() {
    let f = Frame::solid(2, 2, [1, 2, 3, 4]);
    assert_eq!(f.pixel(0, 0), [1, 2, 3, 4]);
    assert_eq!(f.pixel(1, 1), [1, 2, 3, 4]);
}

#[test]
fn zero_size_and_short_buffers_are_defects() {
    assert!(!Frame::transparent(0, 4).is_valid());

    let mut f = Frame::transparent(2, 2);
    f.data.pop();
    assert!(f.defect().unwrap().contains("expected 16"));
    assert!(f.to_rgba_image().is_err());
}

#[test]
fn rgba_image_conversion_keeps_pixels() {
    let img = image::RgbaImage::from_raw(1, 2, vec![9, 8, 7, 6, 5, 4, 3, 2]).unwrap();
    let f = Frame::from_rgba_image(img.clone());
    assert_eq!((f.width, f.height), (1, 2));
    assert_eq!(f.pixel(0, 1), [5, 4, 3, 2]);
    assert_eq!(f.to_rgba_image().unwrap(), img);
}
