use std::fmt;

use anchor_lang::prelude::*;
use crate::errors::ComposerError;
use crate::utils::format_object_id;

/// Fully qualified entry function, `0x<package>::<module>::<function>`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct MoveTarget {
    pub package: Pubkey,
    pub module: String,
    pub function: String,
}

impl MoveTarget {
    pub fn new(package: Pubkey, module: &str, function: &str) -> Self {
        Self {
            package,
            module: module.to_string(),
            function: function.to_string(),
        }
    }
}

impl fmt::Display for MoveTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", format_object_id(&self.package), self.module, self.function)
    }
}

/// Move type argument as supplied by the caller (e.g. `0x2::sui::SUI`).
/// Passed through untouched.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeTag(String);

impl TypeTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeTag {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for TypeTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Literal input; the variant fixes its wire type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PureValue {
    U64(u64),
    Bool(bool),
    Address(Pubkey),
}

impl PureValue {
    /// Wire bytes: u64 little-endian, bool as one byte, address as its 32 raw bytes
    pub fn encode(&self) -> Result<Vec<u8>> {
        let encoded = match self {
            PureValue::U64(value) => value.try_to_vec(),
            PureValue::Bool(value) => value.try_to_vec(),
            PureValue::Address(value) => value.try_to_vec(),
        };
        encoded.map_err(|_| error!(ComposerError::EncodingFailed))
    }
}

impl From<u64> for PureValue {
    fn from(value: u64) -> Self {
        PureValue::U64(value)
    }
}

impl From<bool> for PureValue {
    fn from(value: bool) -> Self {
        PureValue::Bool(value)
    }
}

/// Output of a command already appended to a block.
/// Only meaningful inside the block that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResultHandle {
    block: u64,
    command: u16,
    index: Option<u16>,
}

impl ResultHandle {
    /// Minted by block implementations when a command is appended
    pub fn new(block: u64, command: u16) -> Self {
        Self {
            block,
            command,
            index: None,
        }
    }

    /// Element `index` of a command returning a tuple
    pub fn nested(&self, index: u16) -> Self {
        Self {
            index: Some(index),
            ..*self
        }
    }

    pub fn block_id(&self) -> u64 {
        self.block
    }

    pub fn command_index(&self) -> u16 {
        self.command
    }

    /// The wire argument this handle stands for
    pub fn as_argument(&self) -> Argument {
        match self.index {
            None => Argument::Result(self.command),
            Some(index) => Argument::NestedResult(self.command, index),
        }
    }
}

/// Argument handed to a block when appending a command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxArg {
    Pure(PureValue),
    Object(Pubkey),
    Result(ResultHandle),
}

impl From<PureValue> for TxArg {
    fn from(value: PureValue) -> Self {
        TxArg::Pure(value)
    }
}

impl From<Pubkey> for TxArg {
    fn from(id: Pubkey) -> Self {
        TxArg::Object(id)
    }
}

impl From<ResultHandle> for TxArg {
    fn from(handle: ResultHandle) -> Self {
        TxArg::Result(handle)
    }
}

/// Argument as recorded in a command
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Argument {
    /// Index into the block's input pool
    Input(u16),
    /// Whole output of an earlier command
    Result(u16),
    /// One element of an earlier command's tuple output
    NestedResult(u16, u16),
}

/// Input pool entry
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub enum CallArg {
    Pure(Vec<u8>),
    Object(Pubkey),
}
