//! Static registry and stable DTOs used across the surfacereg workspace.
//!
//! This crate is intentionally boring:
//! - the built-in registry values (API surface path, nightly test layout, ignored types)
//! - typed views over those strings (`TypeName`, `PackagePath`, `RepoPath`)
//! - stable string IDs and codes
//! - the emitted report

#![forbid(unsafe_code)]

pub mod ids;
pub mod package;
pub mod path;
pub mod registry;
pub mod report;
pub mod type_name;

pub use package::{PackagePath, PackagePathError};
pub use path::RepoPath;
pub use registry::{
    API_SURFACE_PATH, IGNORED_TYPES, NIGHTLY_TESTS_DIRECTORY_PATH, NIGHTLY_TESTS_PACKAGE,
    REGISTRY, Registry, api_surface_path, ignored_types, nightly_tests_directory_path,
    nightly_tests_package,
};
pub use report::{
    Finding, ReportData, SCHEMA_REPORT_V1, Severity, SurfaceReport, ToolMeta, Verdict,
    VerdictCounts,
};
pub use type_name::{TypeName, TypeNameError};
