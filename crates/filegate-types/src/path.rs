use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical path as it appears in findings and reports.
///
/// Normalization is simple and deterministic: forward slashes only, leading
/// `./` segments stripped, empty input becomes `.`. Paths are usually
/// repo-relative; absolute declared paths are kept as given.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct GatePath(String);

impl Default for GatePath {
    fn default() -> Self {
        GatePath::new(".")
    }
}

impl GatePath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while let Some(rest) = v.strip_prefix("./") {
            v = rest.to_string();
        }
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve this path against a root directory. Absolute paths win.
    pub fn resolve_under(&self, root: &Utf8Path) -> Utf8PathBuf {
        let p = Utf8Path::new(self.as_str());
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            root.join(p)
        }
    }
}

impl std::fmt::Display for GatePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&Utf8Path> for GatePath {
    fn from(value: &Utf8Path) -> Self {
        GatePath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for GatePath {
    fn from(value: Utf8PathBuf) -> Self {
        GatePath::new(value.as_str())
    }
}
