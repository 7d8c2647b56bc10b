//! Config parsing and validation.
//!
//! This crate is intentionally IO-free: it parses `filegate.toml` contents
//! provided as a string and resolves them into the engine's rule model,
//! rejecting malformed configuration before any filesystem access happens.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{ContentRuleConfig, FilegateConfigV1, GlobRuleConfig, RulesConfig};
pub use resolve::{ConfigError, resolve_config};

/// Parse `filegate.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<FilegateConfigV1> {
    let cfg: FilegateConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}
