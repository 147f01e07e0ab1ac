//! Transaction block seam.
//!
//! The composer only ever appends to a block it is handed; encoding,
//! input pooling and handle bookkeeping belong to the block.

pub mod argument;
pub mod programmable;

pub use argument::*;
pub use programmable::*;

use anchor_lang::prelude::*;

pub trait TransactionBlock {
    /// Append one entry-point call and return the handle to its output
    fn move_call(
        &mut self,
        target: MoveTarget,
        arguments: Vec<TxArg>,
        type_arguments: Vec<TypeTag>,
    ) -> Result<ResultHandle>;

    /// Fail unless `commands` more calls adding at most `inputs` new pool
    /// entries still fit. Unbounded blocks keep the default.
    fn reserve(&self, _commands: usize, _inputs: usize) -> Result<()> {
        Ok(())
    }

    /// Literal input of a fixed wire type
    fn pure(&self, value: PureValue) -> TxArg {
        TxArg::Pure(value)
    }

    /// Reference to a ledger object by id
    fn object(&self, id: Pubkey) -> TxArg {
        TxArg::Object(id)
    }
}
