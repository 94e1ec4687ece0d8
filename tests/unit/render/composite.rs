use super::*;

#[test]
fn blend_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    assert_eq!(mask_blend(dst, [255, 255, 255, 0]), dst);
}

#[test]
fn blend_src_opaque_replaces_dst() {
    assert_eq!(mask_blend([0, 0, 0, 255], [255, 0, 0, 255]), [255, 0, 0, 255]);
}

#[test]
fn blend_onto_transparent_squares_alpha() {
    // Alpha is blended like a color band: 128 * 128 / 255 rounds to 64.
    assert_eq!(mask_blend([0, 0, 0, 0], [200, 100, 50, 128]), [100, 50, 25, 64]);
}

#[test]
fn blend_half_red_on_opaque_blue_mixes() {
    let out = mask_blend([0, 0, 255, 255], [255, 0, 0, 128]);
    assert_eq!(out, [128, 0, 127, 255]);
}

#[test]
fn paste_at_origin_keeps_opaque_and_fades_partial_pixels() {
    let mut src = Frame::transparent(3, 3);
    src.data[4..8].copy_from_slice(&[1, 2, 3, 255]);
    src.data[32..36].copy_from_slice(&[255, 255, 255, 128]);

    let mut dst = Frame::transparent(3, 3);
    paste_over(&mut dst, &src, 0, 0).unwrap();
    assert_eq!(dst.pixel(1, 0), [1, 2, 3, 255]);
    assert_eq!(dst.pixel(2, 2), [128, 128, 128, 64]);
    assert_eq!(dst.pixel(0, 0), [0, 0, 0, 0]);
}

#[test]
fn extreme_offsets_clip_without_overflow() {
    let src = Frame::solid(4, 4, [255, 0, 0, 255]);
    let mut dst = Frame::transparent(4, 4);
    for (dx, dy) in [
        (i64::MAX, 0),
        (i64::MIN, 0),
        (0, i64::MAX),
        (0, i64::MIN),
        (i64::MAX, i64::MIN),
    ] {
        paste_over(&mut dst, &src, dx, dy).unwrap();
    }
    assert!(dst.data.iter().all(|&b| b == 0));
}

#[test]
fn paste_clips_instead_of_wrapping() {
    let src = Frame::solid(4, 4, [255, 0, 0, 255]);
    let mut dst = Frame::transparent(4, 4);
    paste_over(&mut dst, &src, 2, -1).unwrap();

    // Shifted right by 2 and up by 1: columns 0..2 and the bottom row stay empty.
    assert_eq!(dst.pixel(0, 0), [0, 0, 0, 0]);
    assert_eq!(dst.pixel(1, 2), [0, 0, 0, 0]);
    assert_eq!(dst.pixel(2, 0), [255, 0, 0, 255]);
    assert_eq!(dst.pixel(3, 2), [255, 0, 0, 255]);
    assert_eq!(dst.pixel(3, 3), [0, 0, 0, 0]);
}

#[test]
fn paste_fully_outside_leaves_canvas_empty() {
    let src = Frame::solid(2, 2, [255, 255, 255, 255]);
    let mut dst = Frame::transparent(2, 2);
    paste_over(&mut dst, &src, 5, 0).unwrap();
    paste_over(&mut dst, &src, -2, -2).unwrap();
    assert!(dst.data.iter().all(|&b| b == 0));
}

#[test]
fn paste_rejects_malformed_frames() {
    let mut bad = Frame::transparent(2, 2);
    bad.data.truncate(3);
    let mut dst = Frame::transparent(2, 2);
    assert!(paste_over(&mut dst, &bad, 0, 0).is_err());
}

#[test]
fn flatten_straight_over_black_produces_expected_rgb() {
    let out = flatten_to_rgb8(&[255, 0, 0, 128], [0, 0, 0]).unwrap();
    assert_eq!(out, vec![128, 0, 0]);
}
