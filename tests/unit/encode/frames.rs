use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "gifanim_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn png_frames_are_numbered_and_keep_alpha() {
    let dir = temp_dir("png_frames");
    let out = dir.join("anim.png");
    let frames = vec![
        Frame::solid(3, 3, [255, 0, 0, 128]),
        Frame::solid(3, 3, [0, 255, 0, 255]),
    ];
    let written = save_frame_files(&out, &frames, true).unwrap();

    assert_eq!(written, vec![dir.join("anim_0.png"), dir.join("anim_1.png")]);
    let first = image::open(&written[0]).unwrap().into_rgba8();
    assert_eq!(first.get_pixel(1, 1).0, [255, 0, 0, 128]);
    assert!(!out.exists());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn jpeg_frames_are_flattened() {
    let dir = temp_dir("jpeg_frames");
    let out = dir.join("shot.jpg");
    let written = save_frame_files(&out, &[Frame::solid(8, 8, [250, 250, 250, 255])], true).unwrap();

    let img = image::open(&written[0]).unwrap();
    assert_eq!(img.color(), image::ColorType::Rgb8);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn unknown_extension_fails_before_writing() {
    let dir = temp_dir("unknown_ext");
    let out = dir.join("anim.nope");
    let err = save_frame_files(&out, &[Frame::solid(2, 2, [0, 0, 0, 255])], true).unwrap_err();
    assert!(matches!(err, GifAnimError::Encode(_)));
    assert!(!dir.exists());
}

#[test]
fn malformed_frame_fails_before_writing() {
    let dir = temp_dir("malformed");
    let out = dir.join("anim.png");
    let mut bad = Frame::solid(2, 2, [0, 0, 0, 255]);
    bad.data.truncate(4);
    let frames = vec![Frame::solid(2, 2, [0, 0, 0, 255]), bad];
    assert!(save_frame_files(&out, &frames, true).is_err());
    assert!(!dir.join("anim_0.png").exists());
}
