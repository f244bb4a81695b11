use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONFIG_V1: &str = "surfacereg.config.v1";

/// `surfacereg.toml` schema v1.
///
/// Every field is optional; anything left out falls back to the built-in registry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SurfaceConfigV1 {
    /// Optional schema string for tooling (`surfacereg.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_surface_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nightly_tests_directory_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nightly_tests_package: Option<String>,

    /// Extra fully-qualified type names to ignore (appended to the built-ins).
    #[serde(default)]
    pub ignored_types: Vec<String>,

    /// Use `ignored_types` instead of the built-ins rather than in addition to them.
    #[serde(default)]
    pub replace_ignored_types: bool,

    /// When to fail the check: `error` (default) or `warning`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,
}
