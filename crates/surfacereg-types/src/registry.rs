//! Built-in registry values consumed by API-surface and nightly-test tooling.
//!
//! Everything here is `'static` and never mutated, so it can be read from any thread
//! without synchronization.

/// Repo-relative path of the API surface listing.
pub const API_SURFACE_PATH: &str = "dd-sdk-android/apiSurface";

/// Repo-relative source root of the nightly instrumented tests.
pub const NIGHTLY_TESTS_DIRECTORY_PATH: &str = "instrumented/nightly-tests/src/androidTest/kotlin";

/// Slash-delimited package holding the nightly test classes.
pub const NIGHTLY_TESTS_PACKAGE: &str = "com/datadog/android/nightly";

/// Fully-qualified type names skipped when walking the API surface.
///
/// Nested types use the JVM `$` separator.
pub const IGNORED_TYPES: &[&str] = &[
    "com.datadog.android.tracing.model.SpanEvent$Span",
    "com.datadog.android.rum.model.ActionEvent$Dd",
    "com.datadog.android.rum.model.ErrorEvent$Dd",
    "com.datadog.android.rum.model.LongTaskEvent$Dd",
    "com.datadog.android.telemetry.model.TelemetryDebugEvent$Dd",
    "com.datadog.android.telemetry.model.TelemetryErrorEvent$Dd",
];

/// The four registry values grouped under one name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Registry {
    api_surface_path: &'static str,
    nightly_tests_directory_path: &'static str,
    nightly_tests_package: &'static str,
    ignored_types: &'static [&'static str],
}

pub static REGISTRY: Registry = Registry::builtin();

impl Registry {
    pub const fn builtin() -> Self {
        Self {
            api_surface_path: API_SURFACE_PATH,
            nightly_tests_directory_path: NIGHTLY_TESTS_DIRECTORY_PATH,
            nightly_tests_package: NIGHTLY_TESTS_PACKAGE,
            ignored_types: IGNORED_TYPES,
        }
    }

    pub const fn api_surface_path(&self) -> &'static str {
        self.api_surface_path
    }

    pub const fn nightly_tests_directory_path(&self) -> &'static str {
        self.nightly_tests_directory_path
    }

    pub const fn nightly_tests_package(&self) -> &'static str {
        self.nightly_tests_package
    }

    pub const fn ignored_types(&self) -> &'static [&'static str] {
        self.ignored_types
    }

    /// Exact-match membership test against the ignored types.
    pub fn is_ignored(&self, type_name: &str) -> bool {
        self.ignored_types.contains(&type_name)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

pub fn api_surface_path() -> &'static str {
    REGISTRY.api_surface_path()
}

pub fn nightly_tests_directory_path() -> &'static str {
    REGISTRY.nightly_tests_directory_path()
}

pub fn nightly_tests_package() -> &'static str {
    REGISTRY.nightly_tests_package()
}

pub fn ignored_types() -> &'static [&'static str] {
    REGISTRY.ignored_types()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeName;
    use std::collections::BTreeSet;

    #[test]
    fn path_literals_are_exact() {
        assert_eq!(api_surface_path(), "dd-sdk-android/apiSurface");
        assert_eq!(
            nightly_tests_directory_path(),
            "instrumented/nightly-tests/src/androidTest/kotlin"
        );
        assert_eq!(nightly_tests_package(), "com/datadog/android/nightly");
    }

    #[test]
    fn repeated_reads_are_identical() {
        for _ in 0..3 {
            assert_eq!(api_surface_path(), API_SURFACE_PATH);
            assert_eq!(nightly_tests_directory_path(), NIGHTLY_TESTS_DIRECTORY_PATH);
            assert_eq!(nightly_tests_package(), NIGHTLY_TESTS_PACKAGE);
            assert_eq!(ignored_types(), IGNORED_TYPES);
        }
        assert!(std::ptr::eq(ignored_types(), ignored_types()));
    }

    #[test]
    fn ignored_types_has_six_unique_nested_entries() {
        let types = ignored_types();
        assert_eq!(types.len(), 6);

        let unique: BTreeSet<&str> = types.iter().copied().collect();
        assert_eq!(unique.len(), types.len(), "duplicate ignored type");

        for t in types {
            assert!(!t.is_empty());
            assert!(t.contains('$'), "{t} should name a nested type");
            let parsed = TypeName::parse(t).expect("built-in entries parse");
            assert!(parsed.is_nested());
        }
    }

    #[test]
    fn span_entry_is_present_and_unmodified() {
        assert!(ignored_types().contains(&"com.datadog.android.tracing.model.SpanEvent$Span"));
    }

    #[test]
    fn ignored_types_keep_declaration_order() {
        assert_eq!(
            ignored_types().first(),
            Some(&"com.datadog.android.tracing.model.SpanEvent$Span")
        );
        assert_eq!(
            ignored_types().last(),
            Some(&"com.datadog.android.telemetry.model.TelemetryErrorEvent$Dd")
        );
    }

    #[test]
    fn is_ignored_is_exact_match() {
        assert!(REGISTRY.is_ignored("com.datadog.android.rum.model.ErrorEvent$Dd"));
        assert!(!REGISTRY.is_ignored("com.datadog.android.rum.model.ErrorEvent"));
        assert!(!REGISTRY.is_ignored("com.datadog.android.rum.model.ErrorEvent$Dd$Inner"));
    }

    #[test]
    fn default_matches_static() {
        assert_eq!(Registry::default(), REGISTRY);
    }

    #[test]
    fn readable_from_many_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (api_surface_path(), ignored_types().len())))
            .collect();
        for h in handles {
            let (path, len) = h.join().expect("thread should not panic");
            assert_eq!(path, API_SURFACE_PATH);
            assert_eq!(len, 6);
        }
    }
}
