//! Filesystem probes: do the registry paths exist under the repo root?

use crate::rules::RuleOutcome;
use camino::Utf8Path;
use serde_json::json;
use surfacereg_settings::ResolvedConfig;
use surfacereg_types::{ids, Finding, RepoPath, Severity};
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub(crate) struct LayoutReport {
    pub findings: Vec<Finding>,
    pub nightly_sources: Option<u32>,
}

pub(crate) fn probe(
    repo_root: &Utf8Path,
    cfg: &ResolvedConfig,
    rules: &RuleOutcome,
) -> LayoutReport {
    let mut out = LayoutReport::default();

    if rules.api_surface_ok {
        probe_api_surface(repo_root, &cfg.api_surface_path.value, &mut out);
    }

    if rules.nightly_dir_ok {
        let dir = RepoPath::new(&cfg.nightly_tests_directory_path.value);
        let abs = repo_root.join(dir.as_str());
        if !abs.is_dir() {
            out.findings.push(layout_finding(
                Severity::Warning,
                ids::CODE_NIGHTLY_DIR_MISSING,
                format!("nightly tests directory not found: {dir}"),
                "nightly_tests_directory_path",
                dir,
                json!({ "exists": abs.exists() }),
            ));
        } else if rules.package_ok {
            let package_dir = dir.join(&cfg.nightly_tests_package.value);
            let abs_package = repo_root.join(package_dir.as_str());
            if abs_package.is_dir() {
                let count = count_kotlin_sources(&abs_package);
                log::debug!("found {count} nightly sources under {abs_package}");
                out.nightly_sources = Some(count);
            } else {
                out.findings.push(layout_finding(
                    Severity::Warning,
                    ids::CODE_NIGHTLY_PACKAGE_MISSING,
                    format!("nightly tests package directory not found: {package_dir}"),
                    "nightly_tests_package",
                    package_dir,
                    serde_json::Value::Null,
                ));
            }
        }
    }

    out
}

fn probe_api_surface(repo_root: &Utf8Path, value: &str, out: &mut LayoutReport) {
    let path = RepoPath::new(value);
    let abs = repo_root.join(path.as_str());
    if abs.is_file() {
        return;
    }
    if abs.is_dir() {
        out.findings.push(layout_finding(
            Severity::Error,
            ids::CODE_API_SURFACE_NOT_FILE,
            format!("API surface path is a directory: {path}"),
            "api_surface_path",
            path,
            serde_json::Value::Null,
        ));
    } else {
        out.findings.push(layout_finding(
            Severity::Warning,
            ids::CODE_API_SURFACE_MISSING,
            format!("API surface file not found: {path}"),
            "api_surface_path",
            path,
            serde_json::Value::Null,
        ));
    }
}

fn count_kotlin_sources(dir: &Utf8Path) -> u32 {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                log::warn!("failed to read entry: {err}");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "kt"))
        .count() as u32
}

fn layout_finding(
    severity: Severity,
    code: &str,
    message: String,
    subject: &str,
    path: RepoPath,
    data: serde_json::Value,
) -> Finding {
    Finding {
        severity,
        check_id: ids::CHECK_REPO_LAYOUT.to_string(),
        code: code.to_string(),
        message,
        subject: Some(subject.to_string()),
        path: Some(path),
        help: None,
        data,
    }
}
