//! Config parsing and registry resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{SCHEMA_CONFIG_V1, SurfaceConfigV1};
pub use resolve::{FailOn, Overrides, ResolvedConfig, ResolvedValue, ValueSource};

/// Parse `surfacereg.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<SurfaceConfigV1> {
    let cfg: SurfaceConfigV1 = toml::from_str(input)?;
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }
    Ok(cfg)
}

/// Resolve the effective registry (built-ins + config file + CLI overrides).
pub fn resolve_config(
    cfg: SurfaceConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON Schema for `surfacereg.toml`.
pub fn config_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(SurfaceConfigV1);
    serde_json::to_value(&schema).unwrap_or(serde_json::Value::Null)
}
