use crate::{RenderableReport, RenderableVerdict};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Filegate report\n\n");
    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Rules: {} evaluated, {} items checked\n- Findings: {}\n\n",
        verdict, report.data.rules_evaluated, report.data.items_checked, report.data.findings_total
    ));

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        if let Some(location) = &f.location {
            out.push_str(&format!(
                "- `{}` / `{}` — {} (`{}`)\n",
                f.check_id, f.code, f.message, location
            ));
        } else {
            out.push_str(&format!("- `{}` / `{}` — {}\n", f.check_id, f.code, f.message));
        }
    }

    out
}
