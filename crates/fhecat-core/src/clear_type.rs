//! Plaintext type a ciphertext decrypts to.

use serde::{Serialize, Serializer};

/// Clear-type mapping of a type or alias.
///
/// An empty string in the literal table becomes [`ClearType::Unmapped`], the
/// explicit marker for types with no single plaintext representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClearType {
    Unmapped,
    Named(String),
}

impl ClearType {
    pub fn parse(s: &str) -> Self {
        if s.is_empty() {
            Self::Unmapped
        } else {
            Self::Named(s.to_owned())
        }
    }

    /// Mapped name, or `""` for [`ClearType::Unmapped`].
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unmapped => "",
            Self::Named(name) => name,
        }
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    /// Mapped to a bare number such as `"24"`, which no plaintext type is named.
    pub fn is_numeric(&self) -> bool {
        match self {
            Self::Unmapped => false,
            Self::Named(name) => name.bytes().all(|b| b.is_ascii_digit()),
        }
    }
}

impl std::fmt::Display for ClearType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unmapped => f.write_str("<unmapped>"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Serialized as the name, or `null` when unmapped.
impl Serialize for ClearType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unmapped => serializer.serialize_none(),
            Self::Named(name) => serializer.serialize_str(name),
        }
    }
}
