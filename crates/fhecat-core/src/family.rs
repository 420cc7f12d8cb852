//! Encrypted type families.

use serde::Serialize;

/// Family a base type belongs to, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeFamily {
    Bool,
    Unsigned,
    Signed,
    /// Variable-length text; the only family with `bitLength == 0`.
    Text,
}

impl TypeFamily {
    /// Infer the family from a base type name (`Bool`, `Uint8`, `Int16`, `AsciiString`).
    ///
    /// Integer names must carry a decimal width suffix: `Uint` alone is not a
    /// family member.
    pub fn from_type_name(name: &str) -> Option<Self> {
        if name == "Bool" {
            return Some(Self::Bool);
        }
        if let Some(width) = name.strip_prefix("Uint") {
            return is_width_suffix(width).then_some(Self::Unsigned);
        }
        if let Some(width) = name.strip_prefix("Int") {
            return is_width_suffix(width).then_some(Self::Signed);
        }
        if name.len() > "String".len() && name.ends_with("String") {
            return Some(Self::Text);
        }
        None
    }

    /// Signed and unsigned integers, where `(family, bitLength)` must be unique.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Unsigned | Self::Signed)
    }

    pub fn is_variable_width(self) -> bool {
        matches!(self, Self::Text)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Unsigned => "unsigned",
            Self::Signed => "signed",
            Self::Text => "text",
        }
    }
}

impl std::fmt::Display for TypeFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_width_suffix(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
