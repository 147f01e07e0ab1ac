use anchor_lang::prelude::*;
use crate::block::{PureValue, ResultHandle, TransactionBlock, TypeTag};
use crate::composer::ProtocolTxBuilder;
use crate::entry_points::{EntryPoint, SET_BASE_ASSET_ACTIVE_STATE, SET_COLLATERAL_ACTIVE_STATE};

impl ProtocolTxBuilder {
    /// Enable or disable supplying and borrowing `coin_type`
    pub fn set_base_asset_active_state<B: TransactionBlock + ?Sized>(
        &self,
        block: &mut B,
        is_active: bool,
        coin_type: impl Into<TypeTag>,
    ) -> Result<ResultHandle> {
        self.set_active_state(block, &SET_BASE_ASSET_ACTIVE_STATE, is_active, coin_type.into())
    }

    /// Enable or disable depositing `coin_type` as collateral
    pub fn set_collateral_active_state<B: TransactionBlock + ?Sized>(
        &self,
        block: &mut B,
        is_active: bool,
        coin_type: impl Into<TypeTag>,
    ) -> Result<ResultHandle> {
        self.set_active_state(block, &SET_COLLATERAL_ACTIVE_STATE, is_active, coin_type.into())
    }

    fn set_active_state<B: TransactionBlock + ?Sized>(
        &self,
        block: &mut B,
        entry: &EntryPoint,
        is_active: bool,
        coin_type: TypeTag,
    ) -> Result<ResultHandle> {
        let is_active = block.pure(PureValue::Bool(is_active));
        self.call(block, entry, vec![is_active], vec![coin_type])
    }
}
