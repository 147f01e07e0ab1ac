use anchor_lang::prelude::*;
use crate::block::{MoveTarget, ResultHandle, TransactionBlock, TxArg, TypeTag};
use crate::constants::CLOCK_OBJECT_ID;
use crate::entry_points::{EntryPoint, Slot};
use crate::errors::ComposerError;
use crate::state::ProtocolIds;

/// Composes protocol entry-point calls into a caller-owned transaction block.
///
/// Holds nothing but the fixed protocol ids; every operation appends to the
/// block it is given and never keeps it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtocolTxBuilder {
    ids: ProtocolIds,
}

impl ProtocolTxBuilder {
    pub fn new(ids: ProtocolIds) -> Self {
        Self { ids }
    }

    pub fn ids(&self) -> &ProtocolIds {
        &self.ids
    }

    pub fn target(&self, entry: &EntryPoint) -> MoveTarget {
        MoveTarget::new(self.ids.package_id, entry.module, entry.function)
    }

    /// Append one call laid out by `entry`, filling fixed slots from the
    /// protocol ids and `Value` slots from `values` in order.
    pub(crate) fn call<B: TransactionBlock + ?Sized>(
        &self,
        block: &mut B,
        entry: &EntryPoint,
        values: Vec<TxArg>,
        type_arguments: Vec<TypeTag>,
    ) -> Result<ResultHandle> {
        require!(
            values.len() == entry.value_count(),
            ComposerError::ArgumentCountMismatch
        );
        require!(
            type_arguments.len() == entry.type_arity,
            ComposerError::TypeArityMismatch
        );

        let mut values = values.into_iter();
        let mut arguments = Vec::with_capacity(entry.slots.len());
        for slot in entry.slots {
            let argument = match slot {
                Slot::AdminCap => block.object(self.ids.admin_cap_id),
                Slot::Market => block.object(self.ids.market_id),
                Slot::Version => block.object(self.ids.version_id),
                Slot::VersionCap => block.object(self.ids.version_cap_id),
                Slot::AccessStore => block.object(self.ids.obligation_access_store_id),
                Slot::Clock => block.object(CLOCK_OBJECT_ID),
                Slot::Value => values
                    .next()
                    .ok_or(error!(ComposerError::ArgumentCountMismatch))?,
            };
            arguments.push(argument);
        }

        block.move_call(self.target(entry), arguments, type_arguments)
    }

    /// Create a change object and hand it straight to `apply`.
    /// The change handle never leaves this call, and either both calls are
    /// appended or neither is.
    pub(crate) fn create_and_apply_change<B: TransactionBlock + ?Sized>(
        &self,
        block: &mut B,
        create: &EntryPoint,
        fields: Vec<TxArg>,
        apply: &EntryPoint,
        coin_type: TypeTag,
    ) -> Result<()> {
        // Every slot pools at most one new input
        block.reserve(2, create.slots.len() + apply.slots.len())?;

        let change = self.call(block, create, fields, vec![coin_type.clone()])?;
        self.call(block, apply, vec![change.into()], vec![coin_type])?;
        Ok(())
    }
}

/// Plain numeric fields go on the wire as u64 literals
pub(crate) fn u64_args<const N: usize>(fields: [u64; N]) -> Vec<TxArg> {
    fields.into_iter().map(|field| TxArg::Pure(field.into())).collect()
}
