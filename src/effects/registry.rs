use crate::{
    config::EffectSpec,
    effects::{
        effect::{AnimationEffect, DEFAULT_DURATION_MS},
        jitter::JitterEffect,
    },
    foundation::error::{GifAnimError, GifAnimResult},
};

/// Constructor signature stored in the registry: `(duration_ms, params) -> effect`.
pub type EffectCtor = fn(u32, &serde_json::Value) -> GifAnimResult<Box<dyn AnimationEffect>>;

const REGISTRY: &[(&str, EffectCtor)] = &[(JitterEffect::NAME, build_jitter)];

fn build_jitter(
    duration_ms: u32,
    params: &serde_json::Value,
) -> GifAnimResult<Box<dyn AnimationEffect>> {
    Ok(Box::new(JitterEffect::from_params(duration_ms, params)?))
}

/// Names of every known effect, in registration order.
pub fn registered_effects() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(name, _)| *name)
}

/// Find the constructor for `name` (case-insensitive, surrounding whitespace ignored).
pub fn lookup_effect(name: &str) -> Option<EffectCtor> {
    let name = name.trim().to_ascii_lowercase();
    REGISTRY
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, ctor)| *ctor)
}

/// Build one effect from a configuration record.
pub fn build_effect(spec: &EffectSpec) -> GifAnimResult<Box<dyn AnimationEffect>> {
    if spec.effect.trim().is_empty() {
        return Err(GifAnimError::config("effect name must be non-empty"));
    }
    let Some(ctor) = lookup_effect(&spec.effect) else {
        let known = registered_effects().collect::<Vec<_>>().join(", ");
        return Err(GifAnimError::config(format!(
            "unknown animation effect '{}' (known: {known})",
            spec.effect
        )));
    };
    if !(spec.params.is_null() || spec.params.is_object()) {
        return Err(GifAnimError::config(format!(
            "params for effect '{}' must be an object",
            spec.effect
        )));
    }
    ctor(spec.duration.unwrap_or(DEFAULT_DURATION_MS), &spec.params)
}

/// Build every record in order, failing on the first bad one.
pub fn build_effects(specs: &[EffectSpec]) -> GifAnimResult<Vec<Box<dyn AnimationEffect>>> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            build_effect(spec).map_err(|e| match e {
                GifAnimError::Config(msg) => GifAnimError::config(format!("effect #{i}: {msg}")),
                other => other,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/registry.rs"]
mod tests;
