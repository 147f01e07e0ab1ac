use anchor_lang::prelude::*;
use crate::block::{ResultHandle, TransactionBlock, TxArg};
use crate::composer::ProtocolTxBuilder;
use crate::entry_points::{OPEN_OBLIGATION, RETURN_OBLIGATION};

/// Tuple positions of `open_obligation`'s output
pub const OBLIGATION_INDEX: u16 = 0;
pub const OBLIGATION_KEY_INDEX: u16 = 1;
pub const OBLIGATION_HOT_POTATO_INDEX: u16 = 2;

impl ProtocolTxBuilder {
    /// Open a new obligation.
    ///
    /// The returned handle covers the obligation, its key and the hot potato
    /// (see [`ResultHandle::nested`]). The hot potato must be handed back via
    /// [`Self::return_obligation`] in the same block or execution aborts.
    pub fn open_obligation<B: TransactionBlock + ?Sized>(
        &self,
        block: &mut B,
    ) -> Result<ResultHandle> {
        self.call(block, &OPEN_OBLIGATION, vec![], vec![])
    }

    pub fn return_obligation<B: TransactionBlock + ?Sized>(
        &self,
        block: &mut B,
        obligation: impl Into<TxArg>,
        obligation_hot_potato: impl Into<TxArg>,
    ) -> Result<()> {
        self.call(
            block,
            &RETURN_OBLIGATION,
            vec![obligation.into(), obligation_hot_potato.into()],
            vec![],
        )?;
        Ok(())
    }
}
