use anchor_lang::prelude::*;
use crate::block::{PureValue, ResultHandle, TransactionBlock, TxArg, TypeTag};
use crate::composer::ProtocolTxBuilder;
use crate::entry_points::WITHDRAW_COLLATERAL;

/// Objects an obligation owner passes to withdraw or borrow
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObligationAccess {
    pub obligation: TxArg,
    pub obligation_key: TxArg,
    pub decimals_registry: TxArg,
    pub oracle: TxArg,
}

impl ObligationAccess {
    pub fn new(
        obligation: impl Into<TxArg>,
        obligation_key: impl Into<TxArg>,
        decimals_registry: impl Into<TxArg>,
        oracle: impl Into<TxArg>,
    ) -> Self {
        Self {
            obligation: obligation.into(),
            obligation_key: obligation_key.into(),
            decimals_registry: decimals_registry.into(),
            oracle: oracle.into(),
        }
    }

    /// Caller values in slot order, around the fixed market slot
    pub(crate) fn values(&self, amount: u64) -> Vec<TxArg> {
        vec![
            self.obligation,
            self.obligation_key,
            self.decimals_registry,
            TxArg::Pure(PureValue::U64(amount)),
            self.oracle,
        ]
    }
}

impl ProtocolTxBuilder {
    /// Withdraw `amount` of collateral; the handle is the withdrawn coin
    pub fn remove_collateral<B: TransactionBlock + ?Sized>(
        &self,
        block: &mut B,
        access: &ObligationAccess,
        amount: u64,
        coin_type: impl Into<TypeTag>,
    ) -> Result<ResultHandle> {
        self.call(block, &WITHDRAW_COLLATERAL, access.values(amount), vec![coin_type.into()])
    }
}
