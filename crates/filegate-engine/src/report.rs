use filegate_types::{Finding, Verdict};

/// Aggregate outcome of one rule: its failing findings, one per failing
/// item, in declaration order. Empty means the rule held.
#[derive(Clone, Debug)]
pub struct RuleReport {
    pub check_id: String,
    /// The rule's configured override for the closing sentence.
    pub message: Option<String>,
    pub findings: Vec<Finding>,
}

impl RuleReport {
    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct EngineReport {
    pub verdict: Verdict,
    pub rules: Vec<RuleReport>,
    pub items_checked: u32,
}

impl EngineReport {
    pub fn new(rules: Vec<RuleReport>, items_checked: u32) -> Self {
        let verdict = if rules.iter().all(RuleReport::passed) {
            Verdict::Pass
        } else {
            Verdict::Fail
        };
        Self {
            verdict,
            rules,
            items_checked,
        }
    }

    pub fn findings_total(&self) -> u32 {
        self.rules.iter().map(|r| r.findings.len() as u32).sum()
    }

    /// All findings across rules, declaration order preserved.
    pub fn all_findings(&self) -> impl Iterator<Item = &Finding> {
        self.rules.iter().flat_map(|r| r.findings.iter())
    }
}
