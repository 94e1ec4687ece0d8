use std::path::{Path, PathBuf};

use rand::{SeedableRng as _, rngs::StdRng};

use crate::{
    config::GenerateOpts,
    effects::effect::{AnimationEffect, ApplyCtx, DEFAULT_DURATION_MS},
    encode::{
        OutputMode,
        frames::save_frame_files,
        gif::{GifConfig, encode_gif},
        output_mode,
    },
    foundation::error::{GifAnimError, GifAnimResult},
    render::frame::Frame,
};

/// What a successful [`generate`] call produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOutput {
    /// Container chosen from the output extension.
    pub mode: OutputMode,
    /// Number of frames after the last effect.
    pub frame_count: usize,
    /// Per-frame display time written to an animated output.
    pub delay_ms: u32,
    /// Files written, in frame order (a single path for GIF output).
    pub paths: Vec<PathBuf>,
}

/// Apply `effects` left to right starting from `[seed]`, checking the frame list after every
/// stage. Returns the final frames without writing anything.
#[tracing::instrument(skip(seed, effects), fields(stages = effects.len()))]
pub fn run_effects(
    seed: Frame,
    effects: &[Box<dyn AnimationEffect>],
    opts: &GenerateOpts,
) -> GifAnimResult<Vec<Frame>> {
    opts.validate()?;
    if let Some(defect) = seed.defect() {
        return Err(GifAnimError::config(format!("seed image: {defect}")));
    }

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let pool = if opts.parallel {
        Some(build_thread_pool(opts.threads)?)
    } else {
        None
    };

    let mut frames = vec![seed];
    for (stage, effect) in effects.iter().enumerate() {
        let mut ctx = ApplyCtx::new(&mut rng);
        if let Some(pool) = pool.as_ref() {
            ctx = ctx.with_pool(pool);
        }

        let frames_in = frames.len();
        frames = effect
            .apply(&frames, &mut ctx)
            .map_err(|e| GifAnimError::pipeline(stage, effect.name(), e.to_string()))?;
        check_stage(stage, effect.as_ref(), &frames)?;

        tracing::debug!(
            stage,
            effect = effect.name(),
            frames_in,
            frames_out = frames.len(),
            "effect applied"
        );
    }
    Ok(frames)
}

/// Run the effect pipeline over `seed` and persist the result to `out`.
///
/// `.gif` paths get one looping animation whose per-frame delay is the last effect's duration;
/// any other extension gets one still image per frame. Nothing is written when a stage fails.
#[tracing::instrument(skip(seed, effects), fields(stages = effects.len()))]
pub fn generate(
    seed: Frame,
    effects: &[Box<dyn AnimationEffect>],
    out: &Path,
    opts: &GenerateOpts,
) -> GifAnimResult<GenerateOutput> {
    let frames = run_effects(seed, effects, opts)?;

    // Only the last stage's timing survives; earlier stage durations are dropped.
    let delay_ms = effects
        .last()
        .map(|e| e.duration_ms())
        .unwrap_or(DEFAULT_DURATION_MS);

    let mode = output_mode(out);
    let paths = match mode {
        OutputMode::AnimatedGif => {
            let cfg = GifConfig {
                delay_ms,
                overwrite: opts.overwrite,
                ..GifConfig::default()
            };
            encode_gif(out, &frames, &cfg)?;
            vec![out.to_path_buf()]
        }
        OutputMode::FrameFiles => save_frame_files(out, &frames, opts.overwrite)?,
    };

    tracing::info!(
        out = %out.display(),
        ?mode,
        frames = frames.len(),
        delay_ms,
        "animation written"
    );
    Ok(GenerateOutput {
        mode,
        frame_count: frames.len(),
        delay_ms,
        paths,
    })
}

/// Like [`generate`], but decodes the seed image from `input` first.
pub fn generate_from_path(
    input: &Path,
    effects: &[Box<dyn AnimationEffect>],
    out: &Path,
    opts: &GenerateOpts,
) -> GifAnimResult<GenerateOutput> {
    if !input.exists() {
        return Err(GifAnimError::not_found(input));
    }
    let seed = Frame::open(input)?;
    generate(seed, effects, out, opts)
}

fn check_stage(stage: usize, effect: &dyn AnimationEffect, frames: &[Frame]) -> GifAnimResult<()> {
    if frames.is_empty() {
        return Err(GifAnimError::pipeline(
            stage,
            effect.name(),
            "effect produced no frames",
        ));
    }
    for (idx, f) in frames.iter().enumerate() {
        if let Some(defect) = f.defect() {
            return Err(GifAnimError::pipeline(
                stage,
                effect.name(),
                format!("frame {idx}: {defect}"),
            ));
        }
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> GifAnimResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| GifAnimError::config(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
