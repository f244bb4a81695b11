//! The `show` use case: print the effective registry.

use anyhow::Context;
use surfacereg_settings::{ResolvedConfig, ResolvedValue, ValueSource};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowFormat {
    Text,
    Json,
}

impl std::str::FromStr for ShowFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ShowFormat::Text),
            "json" => Ok(ShowFormat::Json),
            other => anyhow::bail!("unknown format: {other} (expected text or json)"),
        }
    }
}

pub fn run_show(cfg: &ResolvedConfig, format: ShowFormat) -> anyhow::Result<String> {
    match format {
        ShowFormat::Text => Ok(render_text(cfg)),
        ShowFormat::Json => {
            let mut out = serde_json::to_string_pretty(cfg).context("serialize registry")?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn render_text(cfg: &ResolvedConfig) -> String {
    let mut out = String::new();
    push_value(&mut out, "api_surface_path", &cfg.api_surface_path);
    push_value(
        &mut out,
        "nightly_tests_directory_path",
        &cfg.nightly_tests_directory_path,
    );
    push_value(&mut out, "nightly_tests_package", &cfg.nightly_tests_package);
    out.push_str(&format!(
        "ignored_types: ({} entries, {})\n",
        cfg.ignored_types.len(),
        source_label(cfg.ignored_types_source)
    ));
    for t in &cfg.ignored_types {
        out.push_str(&format!("  - {t}\n"));
    }
    out
}

fn push_value(out: &mut String, key: &str, v: &ResolvedValue) {
    out.push_str(&format!("{key}: {} ({})\n", v.value, source_label(v.source)));
}

fn source_label(source: ValueSource) -> &'static str {
    match source {
        ValueSource::Builtin => "builtin",
        ValueSource::Config => "config",
        ValueSource::Override => "override",
    }
}
