//! Validated type and alias descriptors.

use fhecat_core::{ClearType, Operator, TypeFamily, TypeId};
use indexmap::IndexSet;

/// Width above which a clear value no longer fits a machine word and
/// decodes to a byte string.
pub const WIDE_BIT_LENGTH: u32 = 256;

/// One encrypted base type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub(crate) id: TypeId,
    pub(crate) name: String,
    pub(crate) family: TypeFamily,
    pub(crate) bit_length: u32,
    pub(crate) operators: IndexSet<Operator>,
    pub(crate) clear_type: ClearType,
    pub(crate) aliases: Vec<AliasDescriptor>,
}

/// An alternate named view over a base type's ciphertext.
///
/// Has no bit length of its own: it always shares its base's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasDescriptor {
    pub(crate) name: String,
    pub(crate) operators: IndexSet<Operator>,
    pub(crate) clear_type: ClearType,
}

impl TypeDescriptor {
    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn family(&self) -> TypeFamily {
        self.family
    }

    /// Logical ciphertext width; 0 for variable-length text.
    pub fn bit_length(&self) -> u32 {
        self.bit_length
    }

    /// Supported operators in declaration order.
    pub fn operators(&self) -> &IndexSet<Operator> {
        &self.operators
    }

    pub fn supports(&self, op: Operator) -> bool {
        self.operators.contains(&op)
    }

    pub fn clear_type(&self) -> &ClearType {
        &self.clear_type
    }

    pub fn aliases(&self) -> &[AliasDescriptor] {
        &self.aliases
    }

    /// Byte length of a decrypted value, `None` for variable-length types.
    pub fn clear_byte_len(&self) -> Option<u32> {
        clear_byte_len(self.bit_length)
    }
}

impl AliasDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn operators(&self) -> &IndexSet<Operator> {
        &self.operators
    }

    pub fn supports(&self, op: Operator) -> bool {
        self.operators.contains(&op)
    }

    pub fn clear_type(&self) -> &ClearType {
        &self.clear_type
    }
}

pub(crate) fn clear_byte_len(bit_length: u32) -> Option<u32> {
    (bit_length > 0).then(|| bit_length.div_ceil(8))
}
