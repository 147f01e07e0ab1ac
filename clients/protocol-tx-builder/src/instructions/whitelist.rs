use anchor_lang::prelude::*;
use crate::block::{PureValue, ResultHandle, TransactionBlock};
use crate::composer::ProtocolTxBuilder;
use crate::entry_points::ADD_WHITELIST_ADDRESS;

impl ProtocolTxBuilder {
    pub fn add_whitelist_address<B: TransactionBlock + ?Sized>(
        &self,
        block: &mut B,
        address: Pubkey,
    ) -> Result<ResultHandle> {
        let address = block.pure(PureValue::Address(address));
        self.call(block, &ADD_WHITELIST_ADDRESS, vec![address], vec![])
    }
}
