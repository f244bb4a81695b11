//! The `check` use case: validate the effective registry and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use surfacereg_settings::{FailOn, Overrides, ResolvedConfig};
use surfacereg_types::{
    ids, Finding, ReportData, Severity, SurfaceReport, ToolMeta, Verdict, VerdictCounts,
    SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

use crate::{layout, rules};

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Repository root path.
    pub repo_root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Look for the registry paths on disk.
    pub probe_layout: bool,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: SurfaceReport,
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, resolve the registry, evaluate rules, probe the repo.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Empty is allowed, built-ins apply.
    let cfg = if input.config_text.trim().is_empty() {
        surfacereg_settings::SurfaceConfigV1::default()
    } else {
        surfacereg_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved =
        surfacereg_settings::resolve_config(cfg, input.overrides).context("resolve config")?;

    let outcome = rules::evaluate(&resolved);
    log::debug!("registry rules produced {} finding(s)", outcome.findings.len());

    let mut nightly_sources = None;
    let mut findings = Vec::new();
    if input.probe_layout {
        let layout = layout::probe(input.repo_root, &resolved, &outcome);
        nightly_sources = layout.nightly_sources;
        findings.extend(layout.findings);
    }
    findings.extend(outcome.findings);

    findings.sort_by(|a, b| {
        a.check_id
            .cmp(&b.check_id)
            .then_with(|| a.code.cmp(&b.code))
            .then_with(|| a.message.cmp(&b.message))
    });

    let counts = VerdictCounts::tally(&findings);
    let verdict = compute_verdict(&counts, resolved.fail_on);
    log::info!(
        "check finished: {:?} ({} error, {} warn)",
        verdict,
        counts.error,
        counts.warn
    );

    let report = SurfaceReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        counts,
        findings,
        data: ReportData {
            api_surface_path: resolved.api_surface_path.value.clone(),
            nightly_tests_directory_path: resolved.nightly_tests_directory_path.value.clone(),
            nightly_tests_package: resolved.nightly_tests_package.value.clone(),
            ignored_types: resolved.ignored_types.clone(),
            nightly_sources,
            layout_probed: input.probe_layout,
        },
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

fn compute_verdict(counts: &VerdictCounts, fail_on: FailOn) -> Verdict {
    if counts.error > 0 {
        return Verdict::Fail;
    }
    if counts.warn > 0 {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }
    Verdict::Pass
}

fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "surfacereg".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass | Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}

/// Report emitted when the tool itself fails (bad config, unreadable root, ...).
pub fn runtime_error_report(message: &str) -> SurfaceReport {
    let now = OffsetDateTime::now_utc();
    let findings = vec![Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
        code: ids::CODE_RUNTIME_ERROR.to_string(),
        message: message.to_string(),
        subject: None,
        path: None,
        help: None,
        data: serde_json::Value::Null,
    }];
    SurfaceReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        counts: VerdictCounts::tally(&findings),
        findings,
        data: ReportData::default(),
    }
}

pub fn serialize_report(report: &SurfaceReport) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(report).context("serialize report")?;
    out.push('\n');
    Ok(out)
}

pub fn parse_report_json(text: &str) -> anyhow::Result<SurfaceReport> {
    let report: SurfaceReport = serde_json::from_str(text).context("parse report json")?;
    if report.schema != SCHEMA_REPORT_V1 {
        anyhow::bail!(
            "unsupported report schema: {} (expected {SCHEMA_REPORT_V1})",
            report.schema
        );
    }
    Ok(report)
}
