//! Fully-qualified JVM type names as they appear in API surface listings.
//!
//! Shape: `pkg.seg.Outer` or `pkg.seg.Outer$Nested$Deeper`. Package segments are separated by
//! `.`, nested types by `$`. At least one package segment is required.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TypeNameError {
    #[error("type name is empty")]
    Empty,
    #[error("type name '{name}' has no package")]
    MissingPackage { name: String },
    #[error("type name '{name}' has an empty segment at position {position}")]
    EmptySegment { name: String, position: usize },
    #[error("type name '{name}' has an invalid segment '{segment}'")]
    InvalidSegment { name: String, segment: String },
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeName {
    raw: String,
    /// Byte offset of the `.` that separates the package from the outer type.
    split: usize,
}

impl TypeName {
    pub fn parse(input: &str) -> Result<Self, TypeNameError> {
        if input.is_empty() {
            return Err(TypeNameError::Empty);
        }
        let Some(split) = input.rfind('.') else {
            return Err(TypeNameError::MissingPackage {
                name: input.to_string(),
            });
        };

        let (package, types) = (&input[..split], &input[split + 1..]);
        let segments = package.split('.').chain(types.split('$'));
        for (position, segment) in segments.enumerate() {
            if segment.is_empty() {
                return Err(TypeNameError::EmptySegment {
                    name: input.to_string(),
                    position,
                });
            }
            if !is_identifier(segment) {
                return Err(TypeNameError::InvalidSegment {
                    name: input.to_string(),
                    segment: segment.to_string(),
                });
            }
        }

        Ok(Self {
            raw: input.to_string(),
            split,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Dotted package, e.g. `com.datadog.android.rum.model`.
    pub fn package(&self) -> &str {
        &self.raw[..self.split]
    }

    /// Top-level type, e.g. `ErrorEvent` for `...ErrorEvent$Dd`.
    pub fn outer(&self) -> &str {
        let types = &self.raw[self.split + 1..];
        types.split('$').next().unwrap_or(types)
    }

    /// Nested type names, outermost first.
    pub fn nested(&self) -> impl Iterator<Item = &str> {
        self.raw[self.split + 1..].split('$').skip(1)
    }

    pub fn is_nested(&self) -> bool {
        self.raw[self.split + 1..].contains('$')
    }

    /// Kotlin/Java source spelling: nested separators become `.`.
    pub fn to_source_form(&self) -> String {
        self.raw.replace('$', ".")
    }
}

/// Java identifier without `$`, which is reserved for nesting here.
pub(crate) fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

impl FromStr for TypeName {
    type Err = TypeNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeName::parse(s)
    }
}

impl TryFrom<&str> for TypeName {
    type Error = TypeNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        TypeName::parse(value)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for TypeName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_nested_type() {
        let t = TypeName::parse("com.datadog.android.tracing.model.SpanEvent$Span").unwrap();
        assert_eq!(t.package(), "com.datadog.android.tracing.model");
        assert_eq!(t.outer(), "SpanEvent");
        assert_eq!(t.nested().collect::<Vec<_>>(), vec!["Span"]);
        assert!(t.is_nested());
        assert_eq!(
            t.to_source_form(),
            "com.datadog.android.tracing.model.SpanEvent.Span"
        );
        assert_eq!(t.to_string(), "com.datadog.android.tracing.model.SpanEvent$Span");
    }

    #[test]
    fn parses_plain_and_deeply_nested_types() {
        let plain = TypeName::parse("com.example.Foo").unwrap();
        assert_eq!(plain.outer(), "Foo");
        assert!(!plain.is_nested());
        assert_eq!(plain.nested().count(), 0);

        let deep: TypeName = "a.B$C$D".parse().unwrap();
        assert_eq!(deep.package(), "a");
        assert_eq!(deep.outer(), "B");
        assert_eq!(deep.nested().collect::<Vec<_>>(), vec!["C", "D"]);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(TypeName::parse(""), Err(TypeNameError::Empty));
    }

    #[test]
    fn rejects_missing_package() {
        assert!(matches!(
            TypeName::parse("SpanEvent$Span"),
            Err(TypeNameError::MissingPackage { .. })
        ));
    }

    #[test]
    fn rejects_empty_segments() {
        for bad in ["com..Foo", ".Foo", "com.Foo$", "com.Foo$$Bar", "com."] {
            assert!(
                matches!(TypeName::parse(bad), Err(TypeNameError::EmptySegment { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn reports_empty_segment_position() {
        match TypeName::parse("com.Foo$$Bar") {
            Err(TypeNameError::EmptySegment { position, .. }) => assert_eq!(position, 2),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_segments() {
        for bad in ["com.1Foo", "com.Foo Bar", "com-x.Foo", "com.Foo$Dd!", "com$x.Foo"] {
            assert!(
                matches!(TypeName::parse(bad), Err(TypeNameError::InvalidSegment { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn serializes_as_plain_string() {
        let t = TypeName::parse("a.B$C").unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"a.B$C\"");
    }

    fn ident() -> impl Strategy<Value = String> {
        "[a-zA-Z_][a-zA-Z0-9_]{0,8}"
    }

    proptest! {
        #[test]
        fn well_formed_names_round_trip_their_parts(
            package in prop::collection::vec(ident(), 1..5),
            outer in ident(),
            nested in prop::collection::vec(ident(), 0..3),
        ) {
            let mut raw = format!("{}.{}", package.join("."), outer);
            for n in &nested {
                raw.push('$');
                raw.push_str(n);
            }
            let t = TypeName::parse(&raw).unwrap();
            prop_assert_eq!(t.as_str(), raw.as_str());
            prop_assert_eq!(t.package(), package.join("."));
            prop_assert_eq!(t.outer(), outer.as_str());
            prop_assert_eq!(t.nested().map(str::to_string).collect::<Vec<_>>(), nested.clone());
            prop_assert_eq!(t.is_nested(), !nested.is_empty());
        }

        #[test]
        fn parse_never_panics(s in "\\PC{0,40}") {
            let _ = TypeName::parse(&s);
        }
    }
}
