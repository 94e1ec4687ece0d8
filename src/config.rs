use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{GifAnimError, GifAnimResult};

/// One pipeline stage as written by the user.
///
/// ```json
/// { "effect": "jitter", "duration": 80, "params": { "frames": 10, "max_shift": 5 } }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EffectSpec {
    /// Registry name of the effect.
    pub effect: String,
    /// Per-frame display time in milliseconds; the effect default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Effect-specific parameter object.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub params: serde_json::Value,
}

impl EffectSpec {
    /// Parse a single JSON record.
    pub fn from_json_str(s: &str) -> GifAnimResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| GifAnimError::config(format!("invalid effect record {s:?}: {e}")))
    }

    /// Read a JSON array of records from a file.
    pub fn list_from_path(path: &Path) -> GifAnimResult<Vec<Self>> {
        if !path.exists() {
            return Err(GifAnimError::not_found(path));
        }
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read effect config '{}'", path.display()))?;
        serde_json::from_str(&s).map_err(|e| {
            GifAnimError::config(format!("invalid effect config '{}': {e}", path.display()))
        })
    }
}

/// Knobs for a single `generate` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOpts {
    /// Seed for the effect RNG. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Spread per-frame work over a rayon pool.
    pub parallel: bool,
    /// Override rayon worker threads (parallel mode only).
    pub threads: Option<usize>,
    /// Replace existing output files.
    pub overwrite: bool,
}

impl Default for GenerateOpts {
    fn default() -> Self {
        Self {
            seed: None,
            parallel: false,
            threads: None,
            overwrite: true,
        }
    }
}

impl GenerateOpts {
    /// Check option ranges.
    pub fn validate(&self) -> GifAnimResult<()> {
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(GifAnimError::config("'threads' must be >= 1 when set"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
