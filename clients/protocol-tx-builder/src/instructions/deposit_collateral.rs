use anchor_lang::prelude::*;
use crate::block::{TransactionBlock, TxArg, TypeTag};
use crate::composer::ProtocolTxBuilder;
use crate::entry_points::DEPOSIT_COLLATERAL;

impl ProtocolTxBuilder {
    /// Deposit `coin` into `obligation` as collateral
    pub fn add_collateral<B: TransactionBlock + ?Sized>(
        &self,
        block: &mut B,
        obligation: impl Into<TxArg>,
        coin: impl Into<TxArg>,
        coin_type: impl Into<TypeTag>,
    ) -> Result<()> {
        self.call(
            block,
            &DEPOSIT_COLLATERAL,
            vec![obligation.into(), coin.into()],
            vec![coin_type.into()],
        )?;
        Ok(())
    }
}
