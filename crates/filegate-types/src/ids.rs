//! Stable identifiers for rule kinds and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Rule kinds
pub const CHECK_FILES_CONTENT: &str = "files.require_content";
pub const CHECK_FILES_GLOB: &str = "files.require_glob";

// Codes: files.require_content
pub const CODE_NULL_FILE: &str = "null_file";
pub const CODE_NOT_A_FILE: &str = "not_a_file";
pub const CODE_MISSING_CONTENT: &str = "missing_content";
pub const CODE_FILE_VANISHED: &str = "file_vanished";
pub const CODE_READ_ERROR: &str = "read_error";

// Codes: files.require_glob
pub const CODE_NO_MATCH: &str = "no_match";
pub const CODE_WALK_FAILED: &str = "walk_failed";
