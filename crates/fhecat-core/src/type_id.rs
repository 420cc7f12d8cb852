//! Wire-level type discriminant.

use serde::Serialize;

/// Type discriminant as stored in byte 30 of a ciphertext handle.
///
/// Assigned once per type and never reused or reordered.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize)]
#[serde(transparent)]
pub struct TypeId(u8);

impl TypeId {
    #[inline]
    pub fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// Narrow a literal-table value; `None` if it does not fit the handle byte.
    pub fn from_table_value(value: u32) -> Option<Self> {
        u8::try_from(value).ok().map(Self)
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
