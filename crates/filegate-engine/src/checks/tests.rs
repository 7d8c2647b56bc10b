use super::{content, glob_match};
use crate::outcome::CheckOutcome;
use filegate_test_util::{fixture_tree, utf8_root, write_file};
use filegate_types::{GatePath, ids};
use tempfile::TempDir;

fn expect_fail(outcome: CheckOutcome) -> filegate_types::Finding {
    match outcome {
        CheckOutcome::Fail(finding) => finding,
        CheckOutcome::Pass => panic!("expected a failing outcome"),
    }
}

#[test]
fn content_match_on_any_line_passes() {
    let tmp = TempDir::new().expect("temp dir");
    let root = fixture_tree(&tmp, &[("a.txt", "hello\nworld\n")]);

    let decl = GatePath::new("a.txt");
    let outcome = content::check_file(&root, Some(&decl), "wor", false);
    assert!(outcome.is_pass());
}

#[test]
fn content_absent_fails_with_named_substring() {
    let tmp = TempDir::new().expect("temp dir");
    let root = fixture_tree(&tmp, &[("a.txt", "hello\nworld\n")]);

    let decl = GatePath::new("a.txt");
    let finding = expect_fail(content::check_file(&root, Some(&decl), "xyz", false));
    assert_eq!(finding.code, ids::CODE_MISSING_CONTENT);
    assert_eq!(finding.message, "a.txt : Doesn't contain: \"xyz\"");
    assert_eq!(finding.location, Some(decl));
}

#[test]
fn content_check_is_idempotent() {
    let tmp = TempDir::new().expect("temp dir");
    let root = fixture_tree(&tmp, &[("a.txt", "alpha\nbeta\n")]);

    let decl = GatePath::new("a.txt");
    let first = expect_fail(content::check_file(&root, Some(&decl), "gamma", false));
    let second = expect_fail(content::check_file(&root, Some(&decl), "gamma", false));
    assert_eq!(first, second);
}

#[test]
fn content_match_must_be_within_one_line() {
    let tmp = TempDir::new().expect("temp dir");
    let root = fixture_tree(&tmp, &[("a.txt", "hel\nlo\n")]);

    // The span straddles a line break, so ordinary containment never sees it.
    let decl = GatePath::new("a.txt");
    let finding = expect_fail(content::check_file(&root, Some(&decl), "hello", false));
    assert_eq!(finding.code, ids::CODE_MISSING_CONTENT);
}

#[test]
fn null_entry_tolerated_only_with_allow_nulls() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);

    assert!(content::check_file(&root, None, "anything", true).is_pass());

    let finding = expect_fail(content::check_file(&root, None, "anything", false));
    assert_eq!(finding.code, ids::CODE_NULL_FILE);
    assert_eq!(
        finding.message,
        "Empty file name was given and allowNulls is set to false"
    );
    assert_eq!(finding.location, None);
}

#[test]
fn directory_is_not_a_file() {
    let tmp = TempDir::new().expect("temp dir");
    let root = fixture_tree(&tmp, &[("dir/inner.txt", "x\n")]);

    let decl = GatePath::new("dir");
    let finding = expect_fail(content::check_file(&root, Some(&decl), "x", false));
    assert_eq!(finding.code, ids::CODE_NOT_A_FILE);
    assert_eq!(finding.message, "dir : Not a file");
}

#[test]
fn missing_path_is_not_a_file() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);

    let decl = GatePath::new("nowhere.txt");
    let finding = expect_fail(content::check_file(&root, Some(&decl), "x", false));
    assert_eq!(finding.code, ids::CODE_NOT_A_FILE);
}

#[test]
fn glob_match_in_subdirectory_passes() {
    let tmp = TempDir::new().expect("temp dir");
    let root = fixture_tree(&tmp, &[("sub/file.log", "entry\n"), ("other.txt", "\n")]);

    let declared = GatePath::default();
    assert!(glob_match::check_glob("**/*.log", &declared, &root).is_pass());
}

#[test]
fn glob_without_match_names_glob_and_location() {
    let tmp = TempDir::new().expect("temp dir");
    let root = fixture_tree(&tmp, &[("sub/file.log", "entry\n")]);

    let declared = GatePath::new("var/data");
    let finding = expect_fail(glob_match::check_glob("**/*.cfg", &declared, &root));
    assert_eq!(finding.code, ids::CODE_NO_MATCH);
    assert!(finding.message.contains("**/*.cfg"));
    assert!(finding.message.contains("var/data"));
}

#[test]
fn glob_missing_root_is_a_walk_error_not_a_no_match() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp).join("does-not-exist");

    let declared = GatePath::new("does-not-exist");
    let finding = expect_fail(glob_match::check_glob("**/*.log", &declared, &root));
    assert_eq!(finding.code, ids::CODE_WALK_FAILED);
    assert!(finding.message.contains("**/*.log"));
    assert!(finding.message.contains("does-not-exist"));
}

#[test]
fn glob_invalid_pattern_fails_the_item() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);

    let declared = GatePath::default();
    let finding = expect_fail(glob_match::check_glob("a[", &declared, &root));
    assert_eq!(finding.code, ids::CODE_WALK_FAILED);
}

#[cfg(unix)]
#[test]
fn glob_stops_at_first_match_before_unreadable_sibling() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().expect("temp dir");
    let root = fixture_tree(
        &tmp,
        &[("a_dir/hit.log", "x\n"), ("z_locked/secret.txt", "x\n")],
    );

    let locked = root.join("z_locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("lock dir");

    // Siblings walk in file-name order, so the match in a_dir terminates the
    // walk before z_locked is ever opened.
    let declared = GatePath::default();
    let outcome = glob_match::check_glob("**/*.log", &declared, &root);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("unlock dir");
    assert!(outcome.is_pass());
}

#[cfg(unix)]
#[test]
fn glob_tolerates_unreadable_subtree_and_reports_no_match() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().expect("temp dir");
    let root = fixture_tree(
        &tmp,
        &[("a_locked/secret.txt", "x\n"), ("z_dir/note.txt", "x\n")],
    );

    let locked = root.join("a_locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("lock dir");

    // The unreadable subtree comes first in walk order; traversal continues
    // past it instead of aborting the check.
    let declared = GatePath::default();
    let outcome = glob_match::check_glob("**/*.log", &declared, &root);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("unlock dir");
    let finding = expect_fail(outcome);
    assert_eq!(finding.code, ids::CODE_NO_MATCH);
}

#[test]
fn glob_rule_checks_every_pattern() {
    let tmp = TempDir::new().expect("temp dir");
    let root = fixture_tree(&tmp, &[("sub/file.log", "x\n")]);
    write_file(&root.join("readme.md"), "# hi\n");

    let rule = crate::rules::GlobRule {
        globs: vec![
            "**/*.log".to_string(),
            "**/*.cfg".to_string(),
            "*.md".to_string(),
        ],
        location: GatePath::default(),
        message: None,
    };

    let mut out = Vec::new();
    glob_match::run(&root, &rule, &mut out);

    // The middle pattern fails; the ones before and after still ran.
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].code, ids::CODE_NO_MATCH);
    assert!(out[0].message.contains("**/*.cfg"));
}
