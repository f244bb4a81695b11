//! Markdown and GitHub Actions renderings of a check report.

use surfacereg_types::{Severity, SurfaceReport, Verdict};

pub fn render_markdown(report: &SurfaceReport) -> String {
    let mut out = String::new();

    out.push_str("# Surfacereg report\n\n");
    let verdict = match report.verdict {
        Verdict::Pass => "PASS",
        Verdict::Warn => "WARN",
        Verdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Findings: {} error / {} warn / {} info\n",
        verdict, report.counts.error, report.counts.warn, report.counts.info
    ));
    if let Some(n) = report.data.nightly_sources {
        out.push_str(&format!("- Nightly sources: {n}\n"));
    }
    out.push('\n');

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            Severity::Info => "INFO",
            Severity::Warning => "WARN",
            Severity::Error => "ERROR",
        };
        out.push_str(&format!(
            "- [{}] `{}` / `{}`: {}\n",
            sev, f.check_id, f.code, f.message
        ));
        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
    }

    out
}

/// Render findings as GitHub Actions workflow command annotations, at most `max`.
///
/// Format: `::{level} file={path}::{message}`
pub fn render_annotations(report: &SurfaceReport, max: usize) -> Vec<String> {
    report
        .findings
        .iter()
        .take(max)
        .map(|f| {
            let level = match f.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
                Severity::Info => "notice",
            };
            let message = format!("[{}:{}] {}", f.check_id, f.code, f.message)
                .replace('%', "%25")
                .replace('\r', "%0D")
                .replace('\n', "%0A");
            match &f.path {
                Some(path) => format!("::{} file={}::{}", level, path.as_str(), message),
                None => format!("::{}::{}", level, message),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime_error_report;
    use surfacereg_types::{Finding, RepoPath, VerdictCounts};

    fn sample_report() -> SurfaceReport {
        let mut report = runtime_error_report("bad\nthing 100%");
        report.findings.push(Finding {
            severity: Severity::Warning,
            check_id: "repo.layout".to_string(),
            code: "api_surface_missing".to_string(),
            message: "API surface file not found: dd-sdk-android/apiSurface".to_string(),
            subject: Some("api_surface_path".to_string()),
            path: Some(RepoPath::new("dd-sdk-android/apiSurface")),
            help: Some("Generate it first.".to_string()),
            data: serde_json::Value::Null,
        });
        report.counts = VerdictCounts::tally(&report.findings);
        report
    }

    #[test]
    fn annotations_escape_and_respect_max() {
        let report = sample_report();
        let all = render_annotations(&report, 10);
        assert_eq!(
            all,
            vec![
                "::error::[tool.runtime:runtime_error] bad%0Athing 100%25".to_string(),
                "::warning file=dd-sdk-android/apiSurface::[repo.layout:api_surface_missing] API surface file not found: dd-sdk-android/apiSurface".to_string(),
            ]
        );
        assert_eq!(render_annotations(&report, 1).len(), 1);
    }

    #[test]
    fn markdown_lists_findings() {
        let md = render_markdown(&sample_report());
        assert!(md.contains("- Verdict: **FAIL**"));
        assert!(md.contains("- Findings: 1 error / 1 warn / 0 info"));
        assert!(md.contains("`repo.layout` / `api_surface_missing`"));
        assert!(md.contains("  - help: Generate it first."));
    }

    #[test]
    fn markdown_for_clean_report() {
        let mut report = runtime_error_report("x");
        report.findings.clear();
        report.verdict = Verdict::Pass;
        report.counts = VerdictCounts::default();
        report.data.nightly_sources = Some(4);
        let md = render_markdown(&report);
        assert!(md.contains("**PASS**"));
        assert!(md.contains("- Nightly sources: 4\n"));
        assert!(md.ends_with("No findings.\n"));
    }
}
