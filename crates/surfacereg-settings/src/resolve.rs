use crate::model::SurfaceConfigV1;
use serde::Serialize;
use surfacereg_types::REGISTRY;

/// CLI-level overrides; these win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub api_surface_path: Option<String>,
    pub nightly_tests_directory_path: Option<String>,
    pub nightly_tests_package: Option<String>,
    pub fail_on: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Builtin,
    Config,
    Override,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedValue {
    pub value: String,
    pub source: ValueSource,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailOn {
    Error,
    Warning,
}

/// Effective registry values. Strings are kept raw; validation is the check's job.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    pub api_surface_path: ResolvedValue,
    pub nightly_tests_directory_path: ResolvedValue,
    pub nightly_tests_package: ResolvedValue,
    pub ignored_types: Vec<String>,
    pub ignored_types_source: ValueSource,
    pub fail_on: FailOn,
}

impl ResolvedConfig {
    /// The built-in registry with no config and no overrides.
    pub fn builtin() -> Self {
        ResolvedConfig {
            api_surface_path: builtin(REGISTRY.api_surface_path()),
            nightly_tests_directory_path: builtin(REGISTRY.nightly_tests_directory_path()),
            nightly_tests_package: builtin(REGISTRY.nightly_tests_package()),
            ignored_types: REGISTRY
                .ignored_types()
                .iter()
                .map(|t| t.to_string())
                .collect(),
            ignored_types_source: ValueSource::Builtin,
            fail_on: FailOn::Error,
        }
    }

    /// Exact-match membership test against the effective ignored types.
    pub fn is_ignored(&self, type_name: &str) -> bool {
        self.ignored_types.iter().any(|t| t == type_name)
    }
}

pub fn resolve_config(
    cfg: SurfaceConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut resolved = ResolvedConfig::builtin();

    pick(
        &mut resolved.api_surface_path,
        cfg.api_surface_path,
        overrides.api_surface_path,
    );
    pick(
        &mut resolved.nightly_tests_directory_path,
        cfg.nightly_tests_directory_path,
        overrides.nightly_tests_directory_path,
    );
    pick(
        &mut resolved.nightly_tests_package,
        cfg.nightly_tests_package,
        overrides.nightly_tests_package,
    );

    if cfg.replace_ignored_types {
        // Kept verbatim so the check can report duplicates the user wrote.
        resolved.ignored_types = cfg.ignored_types;
        resolved.ignored_types_source = ValueSource::Config;
    } else if !cfg.ignored_types.is_empty() {
        for extra in cfg.ignored_types {
            if resolved.ignored_types.contains(&extra) {
                log::debug!("ignored type already registered: {extra}");
                continue;
            }
            resolved.ignored_types.push(extra);
        }
        resolved.ignored_types_source = ValueSource::Config;
    }

    if let Some(fail_on_s) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        resolved.fail_on = parse_fail_on(fail_on_s)?;
    }

    Ok(resolved)
}

fn builtin(value: &str) -> ResolvedValue {
    ResolvedValue {
        value: value.to_string(),
        source: ValueSource::Builtin,
    }
}

fn pick(slot: &mut ResolvedValue, from_config: Option<String>, from_override: Option<String>) {
    if let Some(value) = from_override {
        *slot = ResolvedValue {
            value,
            source: ValueSource::Override,
        };
    } else if let Some(value) = from_config {
        *slot = ResolvedValue {
            value,
            source: ValueSource::Config,
        };
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}
