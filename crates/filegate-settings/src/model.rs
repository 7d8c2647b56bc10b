use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `filegate.toml` schema v1.
///
/// This is a *user-facing* config model. Required-ness is enforced by
/// `resolve_config`, not by serde, so every missing field surfaces as the
/// same configuration error kind instead of a deserialization message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FilegateConfigV1 {
    /// Optional schema string for tooling (`filegate.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default)]
    pub rules: RulesConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RulesConfig {
    #[serde(default)]
    pub content: Vec<ContentRuleConfig>,

    #[serde(default)]
    pub glob: Vec<GlobRuleConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ContentRuleConfig {
    /// The substring every listed file must contain on some line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Files to be checked. TOML has no null, so an empty string marks a
    /// deliberately absent entry, tolerated only with `allow_nulls`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,

    #[serde(default)]
    pub allow_nulls: bool,

    /// Free-text override for the closing sentence of the failure body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GlobRuleConfig {
    /// Glob patterns; at least one path under `location` must match each.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub globs: Option<Vec<String>>,

    /// Root the globs are matched relative to. Defaults to the repo root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
