use anchor_lang::prelude::*;

#[error_code]
pub enum ComposerError {
    #[msg("Object id is not valid hex or is longer than 32 bytes")]
    InvalidObjectId,

    #[msg("Result handle belongs to a different transaction block")]
    ForeignResultHandle,

    #[msg("Result handle refers to a command not yet in this transaction block")]
    UnknownResultHandle,

    #[msg("Argument count does not match the entry point layout")]
    ArgumentCountMismatch,

    #[msg("Type argument count does not match the entry point")]
    TypeArityMismatch,

    #[msg("Transaction block command limit reached")]
    TooManyCommands,

    #[msg("Transaction block input limit reached")]
    TooManyInputs,

    #[msg("Failed to encode pure input")]
    EncodingFailed,
}
