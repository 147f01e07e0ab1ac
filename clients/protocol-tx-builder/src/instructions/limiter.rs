use anchor_lang::prelude::*;
use crate::block::{TransactionBlock, TypeTag};
use crate::composer::{u64_args, ProtocolTxBuilder};
use crate::entry_points::ADD_LIMITER;

/// Rolling outflow cap for one asset
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutflowLimiterModel {
    /// Maximum outflow within one cycle
    pub outflow_limit: u64,

    /// Cycle length in seconds
    pub outflow_cycle_duration: u64,

    /// Segment length in seconds; the cycle is tracked per segment
    pub outflow_segment_duration: u64,
}

impl ProtocolTxBuilder {
    pub fn add_limiter<B: TransactionBlock + ?Sized>(
        &self,
        block: &mut B,
        limiter: &OutflowLimiterModel,
        coin_type: impl Into<TypeTag>,
    ) -> Result<()> {
        self.call(
            block,
            &ADD_LIMITER,
            u64_args([
                limiter.outflow_limit,
                limiter.outflow_cycle_duration,
                limiter.outflow_segment_duration,
            ]),
            vec![coin_type.into()],
        )?;
        Ok(())
    }
}
