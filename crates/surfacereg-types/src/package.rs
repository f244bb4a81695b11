//! Slash-delimited package identifiers (`com/datadog/android/nightly`).

use crate::type_name::is_identifier;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PackagePathError {
    #[error("package is empty")]
    Empty,
    #[error("package '{package}' has an empty segment at position {position}")]
    EmptySegment { package: String, position: usize },
    #[error("package '{package}' has an invalid segment '{segment}'")]
    InvalidSegment { package: String, segment: String },
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackagePath(String);

impl PackagePath {
    pub fn parse(input: &str) -> Result<Self, PackagePathError> {
        if input.is_empty() {
            return Err(PackagePathError::Empty);
        }
        for (position, segment) in input.split('/').enumerate() {
            if segment.is_empty() {
                return Err(PackagePathError::EmptySegment {
                    package: input.to_string(),
                    position,
                });
            }
            if !is_identifier(segment) {
                return Err(PackagePathError::InvalidSegment {
                    package: input.to_string(),
                    segment: segment.to_string(),
                });
            }
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// `com/datadog/android/nightly` -> `com.datadog.android.nightly`.
    pub fn to_dotted(&self) -> String {
        self.0.replace('/', ".")
    }
}

impl fmt::Display for PackagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NIGHTLY_TESTS_PACKAGE;

    #[test]
    fn builtin_package_parses() {
        let p = PackagePath::parse(NIGHTLY_TESTS_PACKAGE).unwrap();
        assert_eq!(p.to_dotted(), "com.datadog.android.nightly");
        assert_eq!(
            p.segments().collect::<Vec<_>>(),
            vec!["com", "datadog", "android", "nightly"]
        );
    }

    #[test]
    fn rejects_bad_packages() {
        assert_eq!(PackagePath::parse(""), Err(PackagePathError::Empty));
        assert!(matches!(
            PackagePath::parse("com//nightly"),
            Err(PackagePathError::EmptySegment { position: 1, .. })
        ));
        assert!(matches!(
            PackagePath::parse("/com"),
            Err(PackagePathError::EmptySegment { position: 0, .. })
        ));
        assert!(matches!(
            PackagePath::parse("com.datadog/nightly"),
            Err(PackagePathError::InvalidSegment { .. })
        ));
    }
}
