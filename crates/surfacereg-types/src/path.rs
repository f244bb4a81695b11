use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical repo-relative path used in registry values and findings.
///
/// Normalization rules are simple and deterministic:
/// - always forward slashes (`/`)
/// - no leading `./`
/// - absolute inputs are preserved as-is so checks can flag them
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct RepoPath(String);

impl RepoPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn join(&self, segment: &str) -> RepoPath {
        let base = Utf8Path::new(self.as_str());
        RepoPath::new(base.join(segment).as_str())
    }

    /// Unix root or Windows drive prefix.
    pub fn is_absolute(&self) -> bool {
        let p = self.as_str();
        if p.starts_with('/') {
            return true;
        }
        let bytes = p.as_bytes();
        bytes.len() >= 2 && bytes[1] == b':'
    }

    /// True when `..` segments climb above the repo root at any point.
    pub fn escapes_root(&self) -> bool {
        let mut depth: i32 = 0;
        for seg in self.as_str().split('/') {
            match seg {
                "" | "." => {}
                ".." => {
                    depth -= 1;
                    if depth < 0 {
                        return true;
                    }
                }
                _ => depth += 1,
            }
        }
        false
    }
}

impl std::fmt::Display for RepoPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalizes_separators_and_dot_prefix() {
        assert_eq!(
            RepoPath::new(".\\dd-sdk-android\\apiSurface").as_str(),
            "dd-sdk-android/apiSurface"
        );
        assert_eq!(RepoPath::new("././a/b").as_str(), "a/b");
    }

    #[test]
    fn detects_absolute_paths() {
        assert!(RepoPath::new("/etc/apiSurface").is_absolute());
        assert!(RepoPath::new("C:\\sdk\\apiSurface").is_absolute());
        assert!(!RepoPath::new("dd-sdk-android/apiSurface").is_absolute());
    }

    #[test]
    fn detects_root_escape() {
        assert!(RepoPath::new("../outside").escapes_root());
        assert!(RepoPath::new("a/../../b").escapes_root());
        assert!(!RepoPath::new("a/../b").escapes_root());
        assert!(!RepoPath::new("instrumented/nightly-tests/src/androidTest/kotlin").escapes_root());
    }

    #[test]
    fn join_appends_segment() {
        let p = RepoPath::new("instrumented/nightly-tests").join("com/datadog");
        assert_eq!(p.as_str(), "instrumented/nightly-tests/com/datadog");
    }

    proptest! {
        #[test]
        fn forward_only_paths_never_escape(segs in prop::collection::vec("[a-z]{1,6}", 0..6)) {
            prop_assert!(!RepoPath::new(segs.join("/")).escapes_root());
        }

        #[test]
        fn normalized_paths_have_no_backslash(s in "[a-z\\\\/.]{0,20}") {
            prop_assert!(!RepoPath::new(&s).as_str().contains('\\'));
        }
    }
}
