//! Report serialization and renderable conversion.

use anyhow::Context;
use filegate_render::{RenderableData, RenderableFinding, RenderableReport, RenderableVerdict};
use filegate_types::{FilegateReport, Verdict};

pub fn serialize_report(report: &FilegateReport) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(report).context("serialize report")?;
    out.push('\n');
    Ok(out)
}

pub fn parse_report_json(text: &str) -> anyhow::Result<FilegateReport> {
    serde_json::from_str(text).context("parse report json")
}

pub fn to_renderable(report: &FilegateReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdict::Pass,
            Verdict::Fail => RenderableVerdict::Fail,
        },
        findings: report
            .findings
            .iter()
            .map(|f| RenderableFinding {
                check_id: f.check_id.clone(),
                code: f.code.clone(),
                message: f.message.clone(),
                location: f.location.as_ref().map(|p| p.as_str().to_string()),
            })
            .collect(),
        data: RenderableData {
            rules_evaluated: report.data.rules_evaluated,
            items_checked: report.data.items_checked,
            findings_total: report.data.findings_total,
        },
    }
}

pub fn render_markdown(report: &RenderableReport) -> String {
    filegate_render::render_markdown(report)
}
