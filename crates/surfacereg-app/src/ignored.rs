//! The `ignored` use case: is a type name on the ignore list?

use surfacereg_settings::ResolvedConfig;
use surfacereg_types::{TypeName, TypeNameError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IgnoredOutput {
    Ignored(TypeName),
    NotIgnored(TypeName),
    Invalid(TypeNameError),
}

impl IgnoredOutput {
    /// 0 = ignored, 3 = not ignored, 1 = not a valid type name.
    pub fn exit_code(&self) -> i32 {
        match self {
            IgnoredOutput::Ignored(_) => 0,
            IgnoredOutput::NotIgnored(_) => 3,
            IgnoredOutput::Invalid(_) => 1,
        }
    }
}

pub fn run_ignored(cfg: &ResolvedConfig, type_name: &str) -> IgnoredOutput {
    match TypeName::parse(type_name) {
        Ok(name) if cfg.is_ignored(name.as_str()) => IgnoredOutput::Ignored(name),
        Ok(name) => IgnoredOutput::NotIgnored(name),
        Err(err) => IgnoredOutput::Invalid(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_entry_is_ignored() {
        let out = run_ignored(
            &ResolvedConfig::builtin(),
            "com.datadog.android.telemetry.model.TelemetryDebugEvent$Dd",
        );
        assert!(matches!(out, IgnoredOutput::Ignored(_)));
        assert_eq!(out.exit_code(), 0);
    }

    #[test]
    fn outer_type_is_not_ignored() {
        let out = run_ignored(
            &ResolvedConfig::builtin(),
            "com.datadog.android.telemetry.model.TelemetryDebugEvent",
        );
        assert!(matches!(out, IgnoredOutput::NotIgnored(_)));
        assert_eq!(out.exit_code(), 3);
    }

    #[test]
    fn malformed_name_is_invalid() {
        let out = run_ignored(&ResolvedConfig::builtin(), "Span$");
        assert_eq!(out.exit_code(), 1);
        assert!(matches!(out, IgnoredOutput::Invalid(TypeNameError::MissingPackage { .. })));
    }
}
