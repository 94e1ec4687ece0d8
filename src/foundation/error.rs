use std::path::PathBuf;

/// Convenience result type used across gifanim.
pub type GifAnimResult<T> = Result<T, GifAnimError>;

/// Top-level error taxonomy used by the effect pipeline and encoders.
#[derive(thiserror::Error, Debug)]
pub enum GifAnimError {
    /// Unknown effect names, malformed parameters and invalid options.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required input resource does not exist.
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    /// An effect stage produced an empty or malformed frame sequence.
    #[error("pipeline error at stage {stage} ({effect}): {reason}")]
    Pipeline {
        /// Zero-based position of the failing effect in the pipeline.
        stage: usize,
        /// Registry name of the failing effect.
        effect: String,
        /// What was wrong with the produced frames.
        reason: String,
    },

    /// The frame set could not be written in the requested output format.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GifAnimError {
    /// Build a [`GifAnimError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`GifAnimError::NotFound`] value.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound(path.into())
    }

    /// Build a [`GifAnimError::Pipeline`] value.
    pub fn pipeline(stage: usize, effect: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Pipeline {
            stage,
            effect: effect.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`GifAnimError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
