use filegate_engine::rules::{ContentRule, GlobRule, Rule, RuleSet};
use filegate_types::GatePath;
use globset::Glob;

use crate::model::{ContentRuleConfig, FilegateConfigV1, GlobRuleConfig};

/// The one error kind for malformed configuration.
///
/// Raised before any per-item evaluation and never mixed with per-item
/// failures; a run that trips this never touches the filesystem.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} is mandatory")]
    Missing { field: &'static str },

    #[error("at least 1 {item} must be specified")]
    Empty { item: &'static str },

    #[error("invalid glob \"{pattern}\": {source}")]
    InvalidGlob {
        pattern: String,
        source: globset::Error,
    },
}

/// Resolve the parsed config into the engine's rule model, validating every
/// rule up front. Content rules keep their declaration order, then glob rules.
pub fn resolve_config(cfg: FilegateConfigV1) -> Result<RuleSet, ConfigError> {
    let mut rules = Vec::with_capacity(cfg.rules.content.len() + cfg.rules.glob.len());
    for rule in &cfg.rules.content {
        rules.push(Rule::Content(resolve_content(rule)?));
    }
    for rule in &cfg.rules.glob {
        rules.push(Rule::Glob(resolve_glob(rule)?));
    }
    Ok(RuleSet { rules })
}

fn resolve_content(cfg: &ContentRuleConfig) -> Result<ContentRule, ConfigError> {
    let content = cfg
        .content
        .clone()
        .ok_or(ConfigError::Missing { field: "content" })?;
    let files = cfg
        .files
        .clone()
        .ok_or(ConfigError::Missing { field: "file" })?;
    if files.is_empty() {
        return Err(ConfigError::Empty { item: "file" });
    }

    let files = files
        .into_iter()
        .map(|f| if f.is_empty() { None } else { Some(GatePath::new(f)) })
        .collect();

    Ok(ContentRule {
        files,
        content,
        allow_nulls: cfg.allow_nulls,
        message: cfg.message.clone(),
    })
}

fn resolve_glob(cfg: &GlobRuleConfig) -> Result<GlobRule, ConfigError> {
    let globs = cfg
        .globs
        .clone()
        .ok_or(ConfigError::Missing { field: "glob" })?;
    if globs.is_empty() {
        return Err(ConfigError::Empty { item: "glob" });
    }

    for pattern in &globs {
        Glob::new(pattern).map_err(|source| ConfigError::InvalidGlob {
            pattern: pattern.clone(),
            source,
        })?;
    }

    let location = cfg
        .location
        .as_deref()
        .map(GatePath::new)
        .unwrap_or_default();

    Ok(GlobRule {
        globs,
        location,
        message: cfg.message.clone(),
    })
}
