use anchor_lang::prelude::*;
use crate::block::{TransactionBlock, TypeTag};
use crate::composer::{u64_args, ProtocolTxBuilder};
use crate::entry_points::SET_INCENTIVE_REWARD_FACTOR;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct IncentiveRewardFactor {
    pub reward_factor: u64,
    pub scale: u64,
}

impl ProtocolTxBuilder {
    pub fn set_incentive_reward_factor<B: TransactionBlock + ?Sized>(
        &self,
        block: &mut B,
        factor: &IncentiveRewardFactor,
        coin_type: impl Into<TypeTag>,
    ) -> Result<()> {
        self.call(
            block,
            &SET_INCENTIVE_REWARD_FACTOR,
            u64_args([factor.reward_factor, factor.scale]),
            vec![coin_type.into()],
        )?;
        Ok(())
    }
}
