//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_REGISTRY_VALUES: &str = "registry.values";
pub const CHECK_REGISTRY_PATHS: &str = "registry.paths";
pub const CHECK_REPO_LAYOUT: &str = "repo.layout";

// Codes: registry.values
pub const CODE_EMPTY_VALUE: &str = "empty_value";
pub const CODE_INVALID_TYPE_NAME: &str = "invalid_type_name";
pub const CODE_DUPLICATE_IGNORED_TYPE: &str = "duplicate_ignored_type";
pub const CODE_INVALID_PACKAGE: &str = "invalid_package";

// Codes: registry.paths
pub const CODE_ABSOLUTE_PATH: &str = "absolute_path";
pub const CODE_PARENT_ESCAPE: &str = "parent_escape";

// Codes: repo.layout
pub const CODE_API_SURFACE_MISSING: &str = "api_surface_missing";
pub const CODE_API_SURFACE_NOT_FILE: &str = "api_surface_not_file";
pub const CODE_NIGHTLY_DIR_MISSING: &str = "nightly_dir_missing";
pub const CODE_NIGHTLY_PACKAGE_MISSING: &str = "nightly_package_missing";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
