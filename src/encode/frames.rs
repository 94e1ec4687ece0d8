use std::path::{Path, PathBuf};

use crate::{
    encode::{ensure_parent_dir, frame_file_path, refuse_existing},
    foundation::error::{GifAnimError, GifAnimResult},
    render::{composite::flatten_to_rgb8, frame::Frame},
};

/// Background used when a target format cannot store alpha.
const FLATTEN_BG: [u8; 3] = [0, 0, 0];

/// Save each frame as its own still image, `{base}_{index}{ext}`, format chosen from `ext`.
///
/// Returns the written paths in frame order. The format and all target paths are checked before
/// the first file is written.
#[tracing::instrument(skip(frames), fields(frames = frames.len()))]
pub fn save_frame_files(
    path: &Path,
    frames: &[Frame],
    overwrite: bool,
) -> GifAnimResult<Vec<PathBuf>> {
    if frames.is_empty() {
        return Err(GifAnimError::encode("no frames to encode"));
    }
    let format = image::ImageFormat::from_path(path).map_err(|e| {
        GifAnimError::encode(format!(
            "cannot pick an image format for '{}': {e}",
            path.display()
        ))
    })?;
    if !format.writing_enabled() {
        return Err(GifAnimError::encode(format!(
            "writing {format:?} images is not supported"
        )));
    }

    let targets = (0..frames.len())
        .map(|i| frame_file_path(path, i))
        .collect::<Vec<_>>();
    for target in &targets {
        refuse_existing(target, overwrite)?;
    }
    for (idx, f) in frames.iter().enumerate() {
        if let Some(defect) = f.defect() {
            return Err(GifAnimError::encode(format!("frame {idx}: {defect}")));
        }
    }
    ensure_parent_dir(path)?;

    for (frame, target) in frames.iter().zip(&targets) {
        save_one(frame, target, format)?;
    }

    tracing::debug!(files = targets.len(), ?format, "frame files written");
    Ok(targets)
}

fn save_one(frame: &Frame, target: &Path, format: image::ImageFormat) -> GifAnimResult<()> {
    let result = if format_has_alpha(format) {
        image::save_buffer_with_format(
            target,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            format,
        )
    } else {
        let rgb = flatten_to_rgb8(&frame.data, FLATTEN_BG)?;
        image::save_buffer_with_format(
            target,
            &rgb,
            frame.width,
            frame.height,
            image::ColorType::Rgb8,
            format,
        )
    };
    result.map_err(|e| GifAnimError::encode(format!("write frame '{}': {e}", target.display())))
}

fn format_has_alpha(format: image::ImageFormat) -> bool {
    !matches!(format, image::ImageFormat::Jpeg)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/frames.rs"]
mod tests;
