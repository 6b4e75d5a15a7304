use solana_program::program_error::ProgramError;

// ---------------------------------------------------------------------------
// Program errors
// ---------------------------------------------------------------------------

/// Every failure the program reports. The custom error code returned to the
/// caller is the variant's position in this list, so new variants go at the
/// end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StakingError {
    #[error("Unknown instruction discriminator")]
    UnknownInstruction,
    #[error("Instruction payload has the wrong length")]
    InvalidInstructionLength,
    #[error("Account list does not match the instruction layout")]
    MalformedAccounts,
    #[error("Unauthorized signer")]
    Unauthorized,
    #[error("Account already initialized")]
    AlreadyInitialized,
    #[error("Account not initialized")]
    NotInitialized,
    #[error("Staking pool not found")]
    PoolNotFound,
    #[error("Parameter out of bounds")]
    InvalidParameter,
    #[error("Maximum number of pools reached")]
    PoolCapExceeded,
    #[error("Oracle price updated too recently")]
    TooFrequent,
    #[error("No bump seed yields an off-curve address")]
    NoValidBump,
    #[error("Invalid PDA derivation")]
    InvalidPDA,
    #[error("Invalid account owner")]
    InvalidOwner,
    #[error("Arithmetic overflow")]
    Overflow,
    #[error("Pool is emergency paused")]
    PoolFrozen,
    #[error("Pool status does not allow this transition")]
    InvalidPoolStatus,
}

impl From<StakingError> for ProgramError {
    fn from(e: StakingError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

// ---------------------------------------------------------------------------
// Codec errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("instruction data is empty")]
    Empty,
    #[error("unknown discriminator {0}")]
    UnknownDiscriminator(u8),
    #[error("payload is {actual} bytes, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl From<DecodeError> for StakingError {
    fn from(e: DecodeError) -> Self {
        match e {
            DecodeError::Empty | DecodeError::UnknownDiscriminator(_) => {
                StakingError::UnknownInstruction
            }
            DecodeError::LengthMismatch { .. } => StakingError::InvalidInstructionLength,
        }
    }
}

impl From<DecodeError> for ProgramError {
    fn from(e: DecodeError) -> Self {
        StakingError::from(e).into()
    }
}

// ---------------------------------------------------------------------------
// Address derivation errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DerivationError {
    #[error("bump search exhausted")]
    NoValidBump,
    #[error("seeds exceed runtime limits")]
    InvalidSeeds,
}

impl From<DerivationError> for StakingError {
    fn from(e: DerivationError) -> Self {
        match e {
            DerivationError::NoValidBump => StakingError::NoValidBump,
            DerivationError::InvalidSeeds => StakingError::InvalidPDA,
        }
    }
}

impl From<DerivationError> for ProgramError {
    fn from(e: DerivationError) -> Self {
        StakingError::from(e).into()
    }
}
