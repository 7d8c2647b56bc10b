use camino::Utf8Path;
use filegate_types::{Finding, GatePath, ids};
use globset::Glob;
use serde_json::json;
use walkdir::WalkDir;

use crate::outcome::CheckOutcome;
use crate::rules::GlobRule;

pub fn run(repo_root: &Utf8Path, rule: &GlobRule, out: &mut Vec<Finding>) {
    let root = rule.location.resolve_under(repo_root);
    for glob in &rule.globs {
        let outcome = check_glob(glob, &rule.location, &root);
        if let CheckOutcome::Fail(finding) = outcome {
            out.push(finding);
        }
    }
}

/// Walk everything under `root` until one file's relative path matches `glob`.
///
/// The walk returns as soon as a match is found; the rest of the tree is not
/// visited. An unreadable entry below the root is logged and skipped, but a
/// walk error on the root itself fails the check. Siblings are visited in
/// file-name order so early termination is deterministic.
pub fn check_glob(glob: &str, declared: &GatePath, root: &Utf8Path) -> CheckOutcome {
    let matcher = match Glob::new(glob) {
        Ok(compiled) => compiled.compile_matcher(),
        // Patterns are validated at config resolution; an invalid glob here
        // still fails the item rather than the whole run.
        Err(err) => {
            tracing::error!("invalid glob \"{glob}\": {err}");
            return CheckOutcome::Fail(fail(
                ids::CODE_WALK_FAILED,
                format!("Invalid glob: \"{glob}\""),
                glob,
                declared,
            ));
        }
    };

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                tracing::error!("cannot walk {root}: {err}");
                return CheckOutcome::Fail(fail(
                    ids::CODE_WALK_FAILED,
                    format!("I/O error while looking for: \"{glob}\" on location: {declared}"),
                    glob,
                    declared,
                ));
            }
            Err(err) => {
                tracing::warn!("skipping unreadable entry under {root}: {err}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let rel = rel.to_string_lossy().replace('\\', "/");
        tracing::info!("check file: {rel}");
        if matcher.is_match(&rel) {
            return CheckOutcome::Pass;
        }
    }

    CheckOutcome::Fail(fail(
        ids::CODE_NO_MATCH,
        format!("Could not find a match for: \"{glob}\" on location: {declared}"),
        glob,
        declared,
    ))
}

fn fail(code: &str, message: String, glob: &str, declared: &GatePath) -> Finding {
    Finding {
        check_id: ids::CHECK_FILES_GLOB.to_string(),
        code: code.to_string(),
        message,
        location: Some(declared.clone()),
        data: json!({ "glob": glob, "location": declared.as_str() }),
    }
}
