use anchor_lang::prelude::*;
use crate::block::{ResultHandle, TransactionBlock, TypeTag};
use crate::composer::ProtocolTxBuilder;
use crate::entry_points::ADD_LOCK_KEY;

impl ProtocolTxBuilder {
    /// Allow `key_type` to lock obligations through the access store
    pub fn add_lock_key<B: TransactionBlock + ?Sized>(
        &self,
        block: &mut B,
        key_type: impl Into<TypeTag>,
    ) -> Result<ResultHandle> {
        self.call(block, &ADD_LOCK_KEY, vec![], vec![key_type.into()])
    }
}
