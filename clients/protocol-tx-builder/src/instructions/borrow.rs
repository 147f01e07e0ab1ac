use anchor_lang::prelude::*;
use crate::block::{ResultHandle, TransactionBlock, TypeTag};
use crate::composer::ProtocolTxBuilder;
use crate::entry_points::BORROW;
use super::withdraw_collateral::ObligationAccess;

impl ProtocolTxBuilder {
    /// Borrow `amount` of `coin_type` against the obligation; the handle is the borrowed coin
    pub fn borrow_base_asset<B: TransactionBlock + ?Sized>(
        &self,
        block: &mut B,
        access: &ObligationAccess,
        amount: u64,
        coin_type: impl Into<TypeTag>,
    ) -> Result<ResultHandle> {
        self.call(block, &BORROW, access.values(amount), vec![coin_type.into()])
    }
}
