use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use anchor_lang::prelude::*;
use log::{debug, trace};
use crate::constants::*;
use crate::errors::ComposerError;
use super::{Argument, CallArg, MoveTarget, ResultHandle, TransactionBlock, TxArg, TypeTag};

static NEXT_BLOCK_ID: AtomicU64 = AtomicU64::new(1);

/// One entry-point invocation
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct MoveCall {
    pub target: MoveTarget,
    pub type_arguments: Vec<TypeTag>,
    pub arguments: Vec<Argument>,
}

/// Finished block content, ready for signing and submission
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProgrammableTransaction {
    pub inputs: Vec<CallArg>,
    pub commands: Vec<MoveCall>,
}

/// In-memory transaction block.
///
/// Commands are kept in append order and every append is all-or-nothing:
/// a rejected call leaves both the input pool and the command list as they were.
/// Shared objects are pooled once per block; pure inputs are pooled per use.
#[derive(Debug)]
pub struct ProgrammableTxBlock {
    id: u64,
    inputs: Vec<CallArg>,
    /// Pool position of every object input
    objects: HashMap<Pubkey, u16>,
    commands: Vec<MoveCall>,
}

/// Inputs pooled by a call that has not been committed yet
#[derive(Default)]
struct Staged {
    inputs: Vec<CallArg>,
    objects: HashMap<Pubkey, u16>,
}

impl ProgrammableTxBlock {
    pub fn new() -> Self {
        Self {
            id: NEXT_BLOCK_ID.fetch_add(1, Ordering::Relaxed),
            inputs: Vec::new(),
            objects: HashMap::new(),
            commands: Vec::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn inputs(&self) -> &[CallArg] {
        &self.inputs
    }

    pub fn commands(&self) -> &[MoveCall] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Input pool entry behind an `Argument::Input`
    pub fn resolve(&self, argument: &Argument) -> Option<&CallArg> {
        match argument {
            Argument::Input(index) => self.inputs.get(*index as usize),
            _ => None,
        }
    }

    pub fn finish(self) -> ProgrammableTransaction {
        debug!(
            "Finished block {} with {} commands and {} inputs",
            self.id,
            self.commands.len(),
            self.inputs.len()
        );
        ProgrammableTransaction {
            inputs: self.inputs,
            commands: self.commands,
        }
    }

    fn check_handle(&self, handle: &ResultHandle) -> Result<Argument> {
        require!(
            handle.block_id() == self.id,
            ComposerError::ForeignResultHandle
        );
        // Only outputs of commands already appended are usable
        require!(
            (handle.command_index() as usize) < self.commands.len(),
            ComposerError::UnknownResultHandle
        );
        Ok(handle.as_argument())
    }

    fn stage_object(&self, staged: &mut Staged, id: Pubkey) -> Result<Argument> {
        if let Some(index) = self.objects.get(&id).or_else(|| staged.objects.get(&id)) {
            return Ok(Argument::Input(*index));
        }
        let argument = self.stage_input(staged, CallArg::Object(id))?;
        if let Argument::Input(index) = argument {
            staged.objects.insert(id, index);
        }
        Ok(argument)
    }

    fn stage_input(&self, staged: &mut Staged, input: CallArg) -> Result<Argument> {
        let index = self.inputs.len() + staged.inputs.len();
        require!(index < MAX_INPUTS, ComposerError::TooManyInputs);
        trace!("Pooling input {} for block {}: {:?}", index, self.id, input);
        staged.inputs.push(input);
        Ok(Argument::Input(index as u16))
    }
}

impl Default for ProgrammableTxBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionBlock for ProgrammableTxBlock {
    fn move_call(
        &mut self,
        target: MoveTarget,
        arguments: Vec<TxArg>,
        type_arguments: Vec<TypeTag>,
    ) -> Result<ResultHandle> {
        self.reserve(1, 0)?;

        // Resolve everything before touching the block
        let mut staged = Staged::default();
        let mut resolved = Vec::with_capacity(arguments.len());
        for argument in arguments {
            let wire = match argument {
                TxArg::Result(handle) => self.check_handle(&handle)?,
                TxArg::Object(id) => self.stage_object(&mut staged, id)?,
                TxArg::Pure(value) => {
                    self.stage_input(&mut staged, CallArg::Pure(value.encode()?))?
                }
            };
            resolved.push(wire);
        }

        let command = self.commands.len() as u16;
        debug!(
            "Block {} command {}: {} ({} arguments, type arguments {:?})",
            self.id,
            command,
            target,
            resolved.len(),
            type_arguments
        );

        self.inputs.extend(staged.inputs);
        self.objects.extend(staged.objects);
        self.commands.push(MoveCall {
            target,
            type_arguments,
            arguments: resolved,
        });

        Ok(ResultHandle::new(self.id, command))
    }

    fn reserve(&self, commands: usize, inputs: usize) -> Result<()> {
        require!(
            self.commands.len() + commands <= MAX_COMMANDS,
            ComposerError::TooManyCommands
        );
        require!(
            self.inputs.len() + inputs <= MAX_INPUTS,
            ComposerError::TooManyInputs
        );
        Ok(())
    }
}
