pub(crate) mod frames;
pub(crate) mod gif;

use std::path::{Path, PathBuf};

use crate::foundation::error::{GifAnimError, GifAnimResult};

/// How a frame list is persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// One animated GIF holding every frame.
    AnimatedGif,
    /// One still image per frame, `{base}_{index}{ext}`.
    FrameFiles,
}

/// Pick the output mode from the file extension (`.gif`, case-insensitive, is animated).
pub fn output_mode(path: &Path) -> OutputMode {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("gif") => OutputMode::AnimatedGif,
        _ => OutputMode::FrameFiles,
    }
}

/// `out/anim.png` + 3 -> `out/anim_3.png`.
pub fn frame_file_path(path: &Path, index: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}_{index}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{index}"),
    };
    path.with_file_name(name)
}

/// Create the parent directory of `path` when missing.
pub fn ensure_parent_dir(path: &Path) -> GifAnimResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

pub(crate) fn refuse_existing(path: &Path, overwrite: bool) -> GifAnimResult<()> {
    if !overwrite && path.exists() {
        return Err(GifAnimError::config(format!(
            "output file '{}' already exists",
            path.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/encode/mod.rs"]
mod tests;
