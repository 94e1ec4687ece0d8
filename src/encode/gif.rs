use std::{fs::File, io::BufWriter, path::Path};

use anyhow::Context as _;

use crate::{
    encode::{ensure_parent_dir, refuse_existing},
    foundation::error::{GifAnimError, GifAnimResult},
    render::frame::Frame,
};

/// GIF-specific encode settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GifConfig {
    /// Display time applied to every frame, in milliseconds.
    pub delay_ms: u32,
    /// Quantizer speed passed to the `gif` crate (1 = best quality, 30 = fastest).
    pub speed: i32,
    /// Replace an existing file.
    pub overwrite: bool,
}

impl Default for GifConfig {
    fn default() -> Self {
        Self {
            delay_ms: crate::effects::effect::DEFAULT_DURATION_MS,
            speed: 10,
            overwrite: true,
        }
    }
}

impl GifConfig {
    /// Check value ranges.
    pub fn validate(&self) -> GifAnimResult<()> {
        if !(1..=30).contains(&self.speed) {
            return Err(GifAnimError::config(format!(
                "gif quantizer speed must be in 1..=30, got {}",
                self.speed
            )));
        }
        Ok(())
    }
}

/// GIF delays are centiseconds; round to the nearest and never emit a zero delay.
pub fn delay_centis(delay_ms: u32) -> u16 {
    let cs = (u64::from(delay_ms) + 5) / 10;
    cs.clamp(1, u64::from(u16::MAX)) as u16
}

/// Write every frame into one looping GIF.
///
/// Each frame replaces the previous one (disposal "restore to background"), fully transparent
/// pixels map to the palette's transparent index, and the loop count is infinite. All frames
/// must share one size; this is checked before the file is created.
#[tracing::instrument(skip(frames), fields(frames = frames.len()))]
pub fn encode_gif(path: &Path, frames: &[Frame], cfg: &GifConfig) -> GifAnimResult<()> {
    cfg.validate()?;
    let (width, height) = check_frames(frames)?;

    refuse_existing(path, cfg.overwrite)?;
    ensure_parent_dir(path)?;

    let file = File::create(path).with_context(|| format!("create gif '{}'", path.display()))?;
    let mut encoder = gif::Encoder::new(BufWriter::new(file), width, height, &[])
        .map_err(|e| GifAnimError::encode(format!("gif header: {e}")))?;
    encoder
        .set_repeat(gif::Repeat::Infinite)
        .map_err(|e| GifAnimError::encode(format!("gif loop extension: {e}")))?;

    let delay = delay_centis(cfg.delay_ms);
    let mut scratch = Vec::<u8>::with_capacity(frames[0].data.len());
    for (idx, frame) in frames.iter().enumerate() {
        scratch.clear();
        scratch.extend_from_slice(&frame.data);
        // Only one RGBA value maps to the transparent index; make every alpha-0 pixel share it.
        for px in scratch.chunks_exact_mut(4) {
            if px[3] == 0 {
                px.copy_from_slice(&[0, 0, 0, 0]);
            }
        }

        let mut out = gif::Frame::from_rgba_speed(width, height, &mut scratch, cfg.speed);
        out.delay = delay;
        out.dispose = gif::DisposalMethod::Background;
        encoder
            .write_frame(&out)
            .map_err(|e| GifAnimError::encode(format!("gif frame {idx}: {e}")))?;
    }

    let mut writer = encoder
        .into_inner()
        .map_err(|e| GifAnimError::encode(format!("gif trailer: {e}")))?;
    use std::io::Write as _;
    writer
        .flush()
        .with_context(|| format!("flush gif '{}'", path.display()))?;

    tracing::debug!(path = %path.display(), delay_cs = delay, "gif written");
    Ok(())
}

fn check_frames(frames: &[Frame]) -> GifAnimResult<(u16, u16)> {
    let Some(first) = frames.first() else {
        return Err(GifAnimError::encode("no frames to encode"));
    };
    for (idx, f) in frames.iter().enumerate() {
        if let Some(defect) = f.defect() {
            return Err(GifAnimError::encode(format!("frame {idx}: {defect}")));
        }
        if f.width != first.width || f.height != first.height {
            return Err(GifAnimError::encode(format!(
                "frame size mismatch: frame {idx} is {}x{}, expected {}x{}",
                f.width, f.height, first.width, first.height
            )));
        }
    }

    let width = u16::try_from(first.width);
    let height = u16::try_from(first.height);
    match (width, height) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(GifAnimError::encode(format!(
            "gif dimensions are limited to 65535x65535, got {}x{}",
            first.width, first.height
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
