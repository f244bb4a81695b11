//! Use case orchestration for surfacereg.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod ignored;
mod layout;
mod render;
mod rules;
mod show;

pub use check::{
    parse_report_json, run_check, runtime_error_report, serialize_report, verdict_exit_code,
    CheckInput, CheckOutput,
};
pub use ignored::{run_ignored, IgnoredOutput};
pub use render::{render_annotations, render_markdown};
pub use show::{run_show, ShowFormat};
