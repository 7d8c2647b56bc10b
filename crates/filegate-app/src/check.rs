//! The `check` use case: validate configuration, evaluate every rule, and
//! produce the report plus the combined failure body.

use anyhow::Context;
use camino::Utf8Path;
use filegate_engine::report::EngineReport;
use filegate_render::FailureBlock;
use filegate_types::{
    FilegateData, FilegateReport, SCHEMA_REPORT_V1, ToolMeta, Verdict,
};
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Repository root the rules are evaluated against.
    pub repo_root: &'a Utf8Path,
    /// Config file contents (empty string if the file was absent).
    pub config_text: &'a str,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: FilegateReport,
    /// The combined failure body; present only on a failing run. This is the
    /// one place individual failures become visible to the caller.
    pub failure: Option<String>,
}

/// Run the check use case: parse config, resolve rules, evaluate, report.
///
/// Configuration errors abort here, before any filesystem access; per-item
/// failures never do — they end up aggregated in the report and the failure
/// body.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Missing config is allowed: an empty rule set passes vacuously.
    let cfg = if input.config_text.trim().is_empty() {
        filegate_settings::FilegateConfigV1::default()
    } else {
        filegate_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let rules = filegate_settings::resolve_config(cfg).context("resolve config")?;

    let engine_report = filegate_engine::evaluate(input.repo_root, &rules);
    let failure = failure_message(&engine_report);
    let finished_at = OffsetDateTime::now_utc();

    let data = FilegateData {
        rules_evaluated: engine_report.rules.len() as u32,
        items_checked: engine_report.items_checked,
        findings_total: engine_report.findings_total(),
    };

    let report = FilegateReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "filegate".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: engine_report.verdict,
        findings: engine_report
            .rules
            .into_iter()
            .flat_map(|r| r.findings)
            .collect(),
        data,
    };

    Ok(CheckOutput { report, failure })
}

fn failure_message(report: &EngineReport) -> Option<String> {
    let blocks: Vec<FailureBlock> = report
        .rules
        .iter()
        .filter(|r| !r.passed())
        .map(|r| FailureBlock {
            lines: r.findings.iter().map(|f| f.message.clone()).collect(),
            message: r.message.clone(),
        })
        .collect();
    filegate_render::render_failure_message(&blocks)
}

/// Map verdict to exit code: 0 = pass, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}
