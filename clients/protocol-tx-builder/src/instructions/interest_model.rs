use anchor_lang::prelude::*;
use crate::block::{TransactionBlock, TypeTag};
use crate::composer::{u64_args, ProtocolTxBuilder};
use crate::entry_points::{ADD_INTEREST_MODEL, CREATE_INTEREST_MODEL_CHANGE, UPDATE_INTEREST_MODEL};

/// Kinked borrow-rate curve for one asset.
/// Field order is the argument order of `create_interest_model_change`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterestModel {
    pub base_borrow_rate_per_sec: u64,
    pub interest_rate_scale: u64,
    pub borrow_rate_on_mid_kink: u64,
    pub mid_kink: u64,
    pub borrow_rate_on_high_kink: u64,
    pub high_kink: u64,
    pub max_borrow_rate: u64,

    /// Share of interest kept as protocol revenue
    pub revenue_factor: u64,

    /// Weight applied to debt of this asset in health checks
    pub borrow_weight: u64,

    pub scale: u64,

    /// Smallest borrow accepted
    pub min_borrow_amount: u64,
}

impl InterestModel {
    fn fields(&self) -> [u64; 11] {
        [
            self.base_borrow_rate_per_sec,
            self.interest_rate_scale,
            self.borrow_rate_on_mid_kink,
            self.mid_kink,
            self.borrow_rate_on_high_kink,
            self.high_kink,
            self.max_borrow_rate,
            self.revenue_factor,
            self.borrow_weight,
            self.scale,
            self.min_borrow_amount,
        ]
    }
}

impl ProtocolTxBuilder {
    /// Register an interest model for `coin_type`.
    /// The add step also takes the clock so accrual starts now.
    pub fn add_interest_model<B: TransactionBlock + ?Sized>(
        &self,
        block: &mut B,
        interest_model: &InterestModel,
        coin_type: impl Into<TypeTag>,
    ) -> Result<()> {
        self.create_and_apply_change(
            block,
            &CREATE_INTEREST_MODEL_CHANGE,
            u64_args(interest_model.fields()),
            &ADD_INTEREST_MODEL,
            coin_type.into(),
        )
    }

    pub fn update_interest_model<B: TransactionBlock + ?Sized>(
        &self,
        block: &mut B,
        interest_model: &InterestModel,
        coin_type: impl Into<TypeTag>,
    ) -> Result<()> {
        self.create_and_apply_change(
            block,
            &CREATE_INTEREST_MODEL_CHANGE,
            u64_args(interest_model.fields()),
            &UPDATE_INTEREST_MODEL,
            coin_type.into(),
        )
    }
}
