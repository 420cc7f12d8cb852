//! Ciphertext handle layout.
//!
//! A handle is 32 bytes:
//! - `0..29`: hash data
//! - `29`: handle index within its bundle
//! - `30`: type discriminant ([`TypeId`])
//! - `31`: handle format version

use crate::TypeId;

pub const HANDLE_LEN: usize = 32;

/// Handle format version currently emitted.
pub const HANDLE_VERSION: u8 = 0;

const INDEX_BYTE: usize = 29;
const TYPE_BYTE: usize = 30;
const VERSION_BYTE: usize = 31;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandleError {
    #[error("handle too short: {len} bytes, expected 32 bytes")]
    TooShort { len: usize },
}

/// A decoded ciphertext handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    bytes: [u8; HANDLE_LEN],
}

impl Handle {
    /// Decode from raw bytes. Bytes past the first 32 are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HandleError> {
        let Some(head) = bytes.get(..HANDLE_LEN) else {
            return Err(HandleError::TooShort { len: bytes.len() });
        };
        let mut buf = [0u8; HANDLE_LEN];
        buf.copy_from_slice(head);
        Ok(Self { bytes: buf })
    }

    pub fn as_bytes(&self) -> &[u8; HANDLE_LEN] {
        &self.bytes
    }

    pub fn hash_prefix(&self) -> &[u8] {
        &self.bytes[..INDEX_BYTE]
    }

    pub fn index(&self) -> u8 {
        self.bytes[INDEX_BYTE]
    }

    pub fn type_id(&self) -> TypeId {
        TypeId::new(self.bytes[TYPE_BYTE])
    }

    pub fn version(&self) -> u8 {
        self.bytes[VERSION_BYTE]
    }
}
