use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};

use camino::Utf8Path;
use filegate_types::{Finding, GatePath, ids};
use serde_json::json;

use crate::outcome::CheckOutcome;
use crate::rules::ContentRule;

/// Generic diagnostic for unexpected IO failures. The underlying error goes
/// to the log only, never into the aggregated report.
const IO_DIAGNOSTIC: &str = "I/O error was thrown, please check the log.";

pub fn run(repo_root: &Utf8Path, rule: &ContentRule, out: &mut Vec<Finding>) {
    for decl in &rule.files {
        let outcome = check_file(repo_root, decl.as_ref(), &rule.content, rule.allow_nulls);
        if let CheckOutcome::Fail(finding) = outcome {
            out.push(finding);
        }
    }
}

/// Check one declared file for a line containing `content`.
///
/// The scan is line-oriented and stops at the first line that contains the
/// expected substring as a contiguous span. The handle is scoped to this
/// call and closed on every exit path.
pub fn check_file(
    repo_root: &Utf8Path,
    decl: Option<&GatePath>,
    content: &str,
    allow_nulls: bool,
) -> CheckOutcome {
    let Some(decl) = decl else {
        if allow_nulls {
            return CheckOutcome::Pass;
        }
        return CheckOutcome::Fail(Finding {
            check_id: ids::CHECK_FILES_CONTENT.to_string(),
            code: ids::CODE_NULL_FILE.to_string(),
            message: "Empty file name was given and allowNulls is set to false".to_string(),
            location: None,
            data: json!({ "content": content }),
        });
    };

    let path = decl.resolve_under(repo_root);
    if !path.is_file() {
        return CheckOutcome::Fail(fail_at(decl, ids::CODE_NOT_A_FILE, "Not a file", content));
    }

    let file = match File::open(&path) {
        Ok(file) => file,
        // The is-file probe raced against a deletion.
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return CheckOutcome::Fail(fail_at(
                decl,
                ids::CODE_FILE_VANISHED,
                "File doesn't exist",
                content,
            ));
        }
        Err(err) => {
            tracing::error!("failed to open {path}: {err}");
            return CheckOutcome::Fail(fail_at(decl, ids::CODE_READ_ERROR, IO_DIAGNOSTIC, content));
        }
    };

    for line in BufReader::new(file).lines() {
        match line {
            Ok(line) if line.contains(content) => return CheckOutcome::Pass,
            Ok(_) => {}
            Err(err) => {
                tracing::error!("failed to read {path}: {err}");
                return CheckOutcome::Fail(fail_at(
                    decl,
                    ids::CODE_READ_ERROR,
                    IO_DIAGNOSTIC,
                    content,
                ));
            }
        }
    }

    CheckOutcome::Fail(fail_at(
        decl,
        ids::CODE_MISSING_CONTENT,
        &format!("Doesn't contain: \"{content}\""),
        content,
    ))
}

fn fail_at(decl: &GatePath, code: &str, diagnostic: &str, content: &str) -> Finding {
    Finding {
        check_id: ids::CHECK_FILES_CONTENT.to_string(),
        code: code.to_string(),
        message: format!("{decl} : {diagnostic}"),
        location: Some(decl.clone()),
        data: json!({ "file": decl.as_str(), "content": content }),
    }
}
