use anchor_lang::prelude::*;
use crate::block::{TransactionBlock, TypeTag};
use crate::composer::{u64_args, ProtocolTxBuilder};
use crate::entry_points::{ADD_RISK_MODEL, CREATE_RISK_MODEL_CHANGE, UPDATE_RISK_MODEL};

/// Collateral risk parameters for one asset.
/// Field order is the argument order of `create_risk_model_change`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RiskModel {
    /// Share of collateral value that may be borrowed against
    pub collateral_factor: u64,

    /// Share of collateral value at which the obligation becomes liquidatable
    pub liquidation_factor: u64,

    /// Penalty charged to the liquidated obligation
    pub liquidation_penalty: u64,

    /// Discount granted to the liquidator
    pub liquidation_discount: u64,

    /// Denominator for the factors above
    pub scale: u64,

    /// Cap on total collateral of this asset
    pub max_collateral_amount: u64,
}

impl RiskModel {
    fn fields(&self) -> [u64; 6] {
        [
            self.collateral_factor,
            self.liquidation_factor,
            self.liquidation_penalty,
            self.liquidation_discount,
            self.scale,
            self.max_collateral_amount,
        ]
    }
}

impl ProtocolTxBuilder {
    /// Register a risk model for `coin_type`
    pub fn add_risk_model<B: TransactionBlock + ?Sized>(
        &self,
        block: &mut B,
        risk_model: &RiskModel,
        coin_type: impl Into<TypeTag>,
    ) -> Result<()> {
        self.create_and_apply_change(
            block,
            &CREATE_RISK_MODEL_CHANGE,
            u64_args(risk_model.fields()),
            &ADD_RISK_MODEL,
            coin_type.into(),
        )
    }

    /// Replace the risk model of `coin_type`
    pub fn update_risk_model<B: TransactionBlock + ?Sized>(
        &self,
        block: &mut B,
        risk_model: &RiskModel,
        coin_type: impl Into<TypeTag>,
    ) -> Result<()> {
        self.create_and_apply_change(
            block,
            &CREATE_RISK_MODEL_CHANGE,
            u64_args(risk_model.fields()),
            &UPDATE_RISK_MODEL,
            coin_type.into(),
        )
    }
}
