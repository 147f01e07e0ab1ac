use anchor_lang::prelude::*;
use crate::block::{PureValue, ResultHandle, TransactionBlock, TypeTag};
use crate::composer::{u64_args, ProtocolTxBuilder};
use crate::entry_points::{UPDATE_BORROW_FEE, UPDATE_BORROW_FEE_RECIPIENT};

/// Fee charged on each borrow, as `numerator / denominator`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorrowFee {
    pub numerator: u64,
    pub denominator: u64,
}

impl ProtocolTxBuilder {
    pub fn update_borrow_fee<B: TransactionBlock + ?Sized>(
        &self,
        block: &mut B,
        borrow_fee: &BorrowFee,
        coin_type: impl Into<TypeTag>,
    ) -> Result<ResultHandle> {
        self.call(
            block,
            &UPDATE_BORROW_FEE,
            u64_args([borrow_fee.numerator, borrow_fee.denominator]),
            vec![coin_type.into()],
        )
    }

    pub fn update_borrow_fee_recipient<B: TransactionBlock + ?Sized>(
        &self,
        block: &mut B,
        recipient: Pubkey,
    ) -> Result<ResultHandle> {
        let recipient = block.pure(PureValue::Address(recipient));
        self.call(block, &UPDATE_BORROW_FEE_RECIPIENT, vec![recipient], vec![])
    }
}
