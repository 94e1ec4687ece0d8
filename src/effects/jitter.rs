use rand::Rng as _;
use rayon::prelude::*;

use crate::{
    effects::effect::{AnimationEffect, ApplyCtx},
    foundation::error::{GifAnimError, GifAnimResult},
    render::{composite::paste_over, frame::Frame},
};

/// Parameters accepted by the `jitter` effect.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JitterConfig {
    /// Output frames generated per input frame.
    pub frames: u32,
    /// Maximum displacement magnitude in pixels.
    pub max_shift: f64,
}

impl Default for JitterConfig {
    fn default() -> Self {
        Self {
            frames: 10,
            max_shift: 5.0,
        }
    }
}

impl JitterConfig {
    /// Largest accepted `max_shift`, in pixels. No frame is wider or taller than this.
    pub const MAX_SHIFT_LIMIT: f64 = u32::MAX as f64;

    /// Parse from an effect `params` object. `null` means all defaults.
    pub fn from_params(params: &serde_json::Value) -> GifAnimResult<Self> {
        let cfg = if params.is_null() {
            Self::default()
        } else {
            serde_json::from_value::<Self>(params.clone())
                .map_err(|e| GifAnimError::config(format!("jitter params: {e}")))?
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check value ranges.
    pub fn validate(&self) -> GifAnimResult<()> {
        if !self.max_shift.is_finite()
            || self.max_shift < 0.0
            || self.max_shift > Self::MAX_SHIFT_LIMIT
        {
            return Err(GifAnimError::config(format!(
                "jitter max_shift must be in 0..={}, got {}",
                Self::MAX_SHIFT_LIMIT,
                self.max_shift
            )));
        }
        Ok(())
    }
}

/// "Shaky camera": every input frame is redrawn `frames` times, each time displaced by a random
/// vector no longer than `max_shift` pixels.
#[derive(Clone, Debug)]
pub struct JitterEffect {
    duration_ms: u32,
    config: JitterConfig,
    params: serde_json::Map<String, serde_json::Value>,
}

impl JitterEffect {
    /// Registry name.
    pub const NAME: &'static str = "jitter";

    /// Build from an already-typed config.
    pub fn new(duration_ms: u32, config: JitterConfig) -> GifAnimResult<Self> {
        config.validate()?;
        let mut params = serde_json::Map::new();
        params.insert("frames".to_string(), config.frames.into());
        params.insert("max_shift".to_string(), config.max_shift.into());
        Ok(Self {
            duration_ms,
            config,
            params,
        })
    }

    /// Build from a raw `params` object, rejecting unknown keys.
    pub fn from_params(duration_ms: u32, params: &serde_json::Value) -> GifAnimResult<Self> {
        Self::new(duration_ms, JitterConfig::from_params(params)?)
    }

    /// Typed configuration.
    pub fn config(&self) -> JitterConfig {
        self.config
    }
}

impl AnimationEffect for JitterEffect {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    fn params(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.params
    }

    fn apply(&self, frames: &[Frame], ctx: &mut ApplyCtx<'_>) -> GifAnimResult<Vec<Frame>> {
        let per_input = self.config.frames as usize;

        // Offsets are drawn up front so the parallel path sees the same sequence.
        let mut jobs = Vec::<(usize, (i64, i64))>::with_capacity(frames.len() * per_input);
        for src_idx in 0..frames.len() {
            for _ in 0..per_input {
                jobs.push((src_idx, draw_offset(ctx.rng(), self.config.max_shift)));
            }
        }

        let render = |&(src_idx, (dx, dy)): &(usize, (i64, i64))| -> GifAnimResult<Frame> {
            let src = &frames[src_idx];
            let mut canvas = Frame::transparent(src.width, src.height);
            paste_over(&mut canvas, src, dx, dy)?;
            Ok(canvas)
        };

        match ctx.pool() {
            Some(pool) => {
                pool.install(|| jobs.par_iter().map(render).collect::<GifAnimResult<Vec<_>>>())
            }
            None => jobs.iter().map(render).collect::<GifAnimResult<Vec<_>>>(),
        }
    }
}

/// Draw one random displacement with magnitude in `[0, max_shift]`.
///
/// `max_shift` is clamped to `[0, JitterConfig::MAX_SHIFT_LIMIT]`; NaN counts as 0.
pub fn draw_offset(rng: &mut dyn rand::RngCore, max_shift: f64) -> (i64, i64) {
    let max_shift = if max_shift.is_nan() {
        0.0
    } else {
        max_shift.clamp(0.0, JitterConfig::MAX_SHIFT_LIMIT)
    };
    let angle = rng.gen_range(0.0..std::f64::consts::TAU);
    let distance = rng.gen_range(0.0..=max_shift);
    jitter_offset(angle, distance)
}

/// Polar to integer pixel offset. Components are truncated toward zero, not rounded.
pub fn jitter_offset(angle: f64, distance: f64) -> (i64, i64) {
    let dx = (distance * angle.cos()).trunc() as i64;
    let dy = (distance * angle.sin()).trunc() as i64;
    (dx, dy)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/jitter.rs"]
mod tests;
