use camino::Utf8Path;
use filegate_types::ids;

use crate::checks;
use crate::report::{EngineReport, RuleReport};
use crate::rules::{Rule, RuleSet};

/// Evaluate every rule, and every item within each rule, in declaration
/// order. A failing item never prevents evaluation of the items after it.
/// Findings are kept in the order they were produced, never sorted; the
/// aggregate message depends on it.
pub fn evaluate(repo_root: &Utf8Path, rules: &RuleSet) -> EngineReport {
    let mut reports: Vec<RuleReport> = Vec::with_capacity(rules.len());
    let mut items_checked: u32 = 0;

    for rule in &rules.rules {
        let mut findings = Vec::new();
        let (check_id, message) = match rule {
            Rule::Content(rule) => {
                items_checked += rule.files.len() as u32;
                checks::content::run(repo_root, rule, &mut findings);
                (ids::CHECK_FILES_CONTENT, rule.message.clone())
            }
            Rule::Glob(rule) => {
                items_checked += rule.globs.len() as u32;
                checks::glob_match::run(repo_root, rule, &mut findings);
                (ids::CHECK_FILES_GLOB, rule.message.clone())
            }
        };
        reports.push(RuleReport {
            check_id: check_id.to_string(),
            message,
            findings,
        });
    }

    EngineReport::new(reports, items_checked)
}
