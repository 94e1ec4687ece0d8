use crate::{foundation::error::GifAnimResult, render::frame::Frame};

/// Display time used when neither the record nor the pipeline supplies one.
pub const DEFAULT_DURATION_MS: u32 = 50;

/// Per-call context handed to [`AnimationEffect::apply`].
///
/// Randomness is injected here so a pipeline can be made reproducible with a seed. The optional
/// thread pool lets effects spread per-frame work, as long as output order is unchanged.
pub struct ApplyCtx<'a> {
    rng: &'a mut dyn rand::RngCore,
    pool: Option<&'a rayon::ThreadPool>,
}

impl<'a> ApplyCtx<'a> {
    /// Sequential context drawing from `rng`.
    pub fn new(rng: &'a mut dyn rand::RngCore) -> Self {
        Self { rng, pool: None }
    }

    /// Allow the effect to run per-frame work on `pool`.
    pub fn with_pool(mut self, pool: &'a rayon::ThreadPool) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Randomness source for this call.
    pub fn rng(&mut self) -> &mut dyn rand::RngCore {
        &mut *self.rng
    }

    /// Worker pool, when parallel application was requested.
    pub fn pool(&self) -> Option<&'a rayon::ThreadPool> {
        self.pool
    }
}

/// A configured transform from a frame sequence to a new frame sequence.
///
/// Effects are built once per pipeline stage and never mutate themselves while applying, so the
/// same instance can be applied any number of times. Input frames are borrowed; the returned
/// frames are freshly allocated and owned by the caller.
pub trait AnimationEffect: Send + Sync {
    /// Registry name, used in diagnostics.
    fn name(&self) -> &str;

    /// Display time in milliseconds for frames produced by this effect.
    fn duration_ms(&self) -> u32;

    /// Resolved effect parameters (defaults filled in).
    fn params(&self) -> &serde_json::Map<String, serde_json::Value>;

    /// Transform `frames` into a new sequence.
    fn apply(&self, frames: &[Frame], ctx: &mut ApplyCtx<'_>) -> GifAnimResult<Vec<Frame>>;
}

impl std::fmt::Debug for dyn AnimationEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationEffect")
            .field("name", &self.name())
            .field("duration_ms", &self.duration_ms())
            .field("params", self.params())
            .finish()
    }
}
