use filegate_types::GatePath;

/// Every listed file must contain `content` on at least one line.
#[derive(Clone, Debug)]
pub struct ContentRule {
    /// Declared files. `None` marks a deliberately absent entry, tolerated
    /// only when `allow_nulls` is set.
    pub files: Vec<Option<GatePath>>,
    pub content: String,
    pub allow_nulls: bool,
    /// Free-text override for the closing sentence of the failure body.
    pub message: Option<String>,
}

/// At least one path under `location` must match each listed glob.
#[derive(Clone, Debug)]
pub struct GlobRule {
    pub globs: Vec<String>,
    /// Root the globs are matched relative to, as declared in the config.
    pub location: GatePath,
    pub message: Option<String>,
}

#[derive(Clone, Debug)]
pub enum Rule {
    Content(ContentRule),
    Glob(GlobRule),
}

/// The declared rules of one invocation, in declaration order.
/// Built once by `filegate-settings`, never mutated during evaluation.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    pub rules: Vec<Rule>,
}

impl RuleSet {
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}
