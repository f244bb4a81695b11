//! Pure checks over the resolved registry values (no I/O).

use serde_json::json;
use std::collections::BTreeMap;
use surfacereg_settings::ResolvedConfig;
use surfacereg_types::{ids, Finding, PackagePath, RepoPath, Severity, TypeName};

/// Findings plus which values are sound enough to probe on disk.
#[derive(Debug, Default)]
pub(crate) struct RuleOutcome {
    pub findings: Vec<Finding>,
    pub api_surface_ok: bool,
    pub nightly_dir_ok: bool,
    pub package_ok: bool,
}

pub(crate) fn evaluate(cfg: &ResolvedConfig) -> RuleOutcome {
    let mut out = RuleOutcome::default();

    out.api_surface_ok = check_path(
        "api_surface_path",
        &cfg.api_surface_path.value,
        &mut out.findings,
    );
    out.nightly_dir_ok = check_path(
        "nightly_tests_directory_path",
        &cfg.nightly_tests_directory_path.value,
        &mut out.findings,
    );
    out.package_ok = check_package(&cfg.nightly_tests_package.value, &mut out.findings);
    check_ignored_types(&cfg.ignored_types, &mut out.findings);

    out
}

fn check_path(subject: &str, value: &str, out: &mut Vec<Finding>) -> bool {
    if value.is_empty() {
        out.push(empty_value(subject));
        return false;
    }

    let path = RepoPath::new(value);
    if path.is_absolute() {
        out.push(Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_REGISTRY_PATHS.to_string(),
            code: ids::CODE_ABSOLUTE_PATH.to_string(),
            message: format!("{subject} is absolute: {value}"),
            subject: Some(subject.to_string()),
            path: Some(path),
            help: Some("Use a path relative to the repository root.".to_string()),
            data: json!({ "value": value }),
        });
        return false;
    }
    if path.escapes_root() {
        out.push(Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_REGISTRY_PATHS.to_string(),
            code: ids::CODE_PARENT_ESCAPE.to_string(),
            message: format!("{subject} escapes the repository root: {value}"),
            subject: Some(subject.to_string()),
            path: Some(path),
            help: Some("Avoid `..` segments that climb above the repository root.".to_string()),
            data: json!({ "value": value }),
        });
        return false;
    }
    true
}

fn check_package(value: &str, out: &mut Vec<Finding>) -> bool {
    if value.is_empty() {
        out.push(empty_value("nightly_tests_package"));
        return false;
    }
    match PackagePath::parse(value) {
        Ok(_) => true,
        Err(err) => {
            out.push(Finding {
                severity: Severity::Error,
                check_id: ids::CHECK_REGISTRY_VALUES.to_string(),
                code: ids::CODE_INVALID_PACKAGE.to_string(),
                message: err.to_string(),
                subject: Some("nightly_tests_package".to_string()),
                path: None,
                help: Some(
                    "Use slash-delimited identifier segments, e.g. `com/example/nightly`."
                        .to_string(),
                ),
                data: json!({ "value": value }),
            });
            false
        }
    }
}

fn check_ignored_types(types: &[String], out: &mut Vec<Finding>) {
    // first index of each entry
    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();

    for (idx, raw) in types.iter().enumerate() {
        let subject = format!("ignored_types[{idx}]");

        if let Err(err) = TypeName::parse(raw) {
            out.push(Finding {
                severity: Severity::Error,
                check_id: ids::CHECK_REGISTRY_VALUES.to_string(),
                code: ids::CODE_INVALID_TYPE_NAME.to_string(),
                message: err.to_string(),
                subject: Some(subject.clone()),
                path: None,
                help: Some(
                    "Use a fully-qualified name such as `com.example.Outer$Nested`.".to_string(),
                ),
                data: json!({ "value": raw }),
            });
        }

        if let Some(first) = seen.get(raw.as_str()) {
            out.push(Finding {
                severity: Severity::Error,
                check_id: ids::CHECK_REGISTRY_VALUES.to_string(),
                code: ids::CODE_DUPLICATE_IGNORED_TYPE.to_string(),
                message: format!("ignored type listed more than once: {raw}"),
                subject: Some(subject),
                path: None,
                help: Some("Remove the repeated entry.".to_string()),
                data: json!({ "value": raw, "first_index": first }),
            });
        } else {
            seen.insert(raw.as_str(), idx);
        }
    }
}

fn empty_value(subject: &str) -> Finding {
    Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_REGISTRY_VALUES.to_string(),
        code: ids::CODE_EMPTY_VALUE.to_string(),
        message: format!("{subject} is empty"),
        subject: Some(subject.to_string()),
        path: None,
        help: None,
        data: serde_json::Value::Null,
    }
}
