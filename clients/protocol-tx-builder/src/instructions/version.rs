use anchor_lang::prelude::*;
use crate::block::{ResultHandle, TransactionBlock};
use crate::composer::ProtocolTxBuilder;
use crate::entry_points::UPGRADE_VERSION;

impl ProtocolTxBuilder {
    /// Bump the shared version object after a package upgrade
    pub fn increment_version<B: TransactionBlock + ?Sized>(
        &self,
        block: &mut B,
    ) -> Result<ResultHandle> {
        self.call(block, &UPGRADE_VERSION, vec![], vec![])
    }
}
