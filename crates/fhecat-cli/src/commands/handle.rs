use std::path::PathBuf;

use fhecat_core::{HANDLE_VERSION, Handle, HandleError, TypeId};
use fhecat_registry::{LookupError, Registry};
use serde::Serialize;

use super::output::{fail, print_json, warn};
use super::table_loader::require_registry;

pub struct HandleArgs {
    pub handle: String,
    pub table: Option<PathBuf>,
    pub compact: bool,
    pub color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid handle hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error(transparent)]
    Handle(#[from] HandleError),
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandleInfo<'r> {
    pub type_id: TypeId,
    pub type_name: &'r str,
    pub bit_length: u32,
    pub index: u8,
    pub version: u8,
    pub hash_prefix: String,
}

/// Decode hex input, with or without a `0x` prefix.
pub fn decode_handle(input: &str) -> Result<Handle, DecodeError> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    let bytes = hex::decode(digits)?;
    Ok(Handle::from_bytes(&bytes)?)
}

pub fn describe<'r>(
    registry: &'r Registry,
    handle: &Handle,
) -> Result<HandleInfo<'r>, LookupError> {
    let descriptor = registry.type_of_handle(handle)?;
    Ok(HandleInfo {
        type_id: descriptor.id(),
        type_name: descriptor.name(),
        bit_length: descriptor.bit_length(),
        index: handle.index(),
        version: handle.version(),
        hash_prefix: hex::encode(handle.hash_prefix()),
    })
}

pub fn run(args: HandleArgs) {
    let handle = match decode_handle(args.handle.trim()) {
        Ok(handle) => handle,
        Err(e) => fail(&e.to_string(), args.color),
    };
    if handle.version() != HANDLE_VERSION {
        let version = handle.version();
        warn(
            &format!("handle version {version} (expected {HANDLE_VERSION})"),
            args.color,
        );
    }

    let registry = require_registry(args.table.as_deref(), args.color);
    match describe(&registry, &handle) {
        Ok(info) => print_json(&info, args.compact),
        Err(e) => fail(&e.to_string(), args.color),
    }
}
