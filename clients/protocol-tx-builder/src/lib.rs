//! Transaction composer for the lending protocol.
//!
//! [`ProtocolTxBuilder`] turns protocol operations (risk and interest models,
//! limiters, obligations, collateral, borrowing) into entry-point calls
//! appended to a caller-owned [`TransactionBlock`]. Calls appended by one
//! operation may consume handles produced by earlier ones in the same block,
//! so the whole sequence executes as a single transaction.
//!
//! Nothing here validates business parameters or talks to the network; the
//! finished block is handed to whatever signs and submits it.

pub mod block;
pub mod composer;
pub mod constants;
pub mod entry_points;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

pub use block::{
    Argument, CallArg, MoveCall, MoveTarget, ProgrammableTransaction, ProgrammableTxBlock,
    PureValue, ResultHandle, TransactionBlock, TxArg, TypeTag,
};
pub use composer::ProtocolTxBuilder;
pub use errors::ComposerError;
pub use instructions::*;
pub use state::ProtocolIds;
