use anchor_lang::prelude::*;
use crate::block::{TransactionBlock, TxArg, TypeTag};
use crate::composer::ProtocolTxBuilder;
use crate::entry_points::MINT_ENTRY;

impl ProtocolTxBuilder {
    /// Supply `coin` to the market; the market coin is sent to the sender
    pub fn supply_base_asset<B: TransactionBlock + ?Sized>(
        &self,
        block: &mut B,
        coin: impl Into<TxArg>,
        coin_type: impl Into<TypeTag>,
    ) -> Result<()> {
        self.call(block, &MINT_ENTRY, vec![coin.into()], vec![coin_type.into()])?;
        Ok(())
    }
}
