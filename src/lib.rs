//! gifanim turns a still image into a short animation by chaining pixel-level effects.
//!
//! # Pipeline overview
//!
//! 1. **Seed**: the input image is decoded into a single straight-alpha RGBA [`Frame`].
//! 2. **Effects**: each [`AnimationEffect`] maps the current frame list to a new one, left to
//!    right. After every stage the list must be non-empty and every frame well-formed.
//! 3. **Encode**: `.gif` outputs become one looping animation timed by the last effect's
//!    duration; other extensions get one still image per frame (`{base}_{index}{ext}`).
//!
//! Effects are built from JSON records (see [`EffectSpec`]) through a closed registry; `jitter`
//! is the only effect shipped.
//!
//! ```no_run
//! use gifanim::{EffectSpec, GenerateOpts, build_effects, generate_from_path};
//!
//! let specs = vec![EffectSpec::from_json_str(
//!     r#"{"effect": "jitter", "duration": 60, "params": {"frames": 12, "max_shift": 4}}"#,
//! )?];
//! let effects = build_effects(&specs)?;
//! generate_from_path(
//!     "logo.png".as_ref(),
//!     &effects,
//!     "logo.gif".as_ref(),
//!     &GenerateOpts::default(),
//! )?;
//! # Ok::<(), gifanim::GifAnimError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod effects;
mod encode;
mod foundation;
mod pipeline;
mod render;

pub use config::{EffectSpec, GenerateOpts};
pub use effects::effect::{AnimationEffect, ApplyCtx, DEFAULT_DURATION_MS};
pub use effects::jitter::{JitterConfig, JitterEffect, draw_offset, jitter_offset};
pub use effects::registry::{
    EffectCtor, build_effect, build_effects, lookup_effect, registered_effects,
};
pub use encode::frames::save_frame_files;
pub use encode::gif::{GifConfig, delay_centis, encode_gif};
pub use encode::{OutputMode, frame_file_path, output_mode};
pub use foundation::error::{GifAnimError, GifAnimResult};
pub use pipeline::{GenerateOutput, generate, generate_from_path, run_effects};
pub use render::composite::{mask_blend, paste_over};
pub use render::frame::Frame;
