// Staking Platform Program
// Global protocol config, configurable staking pools, and a throttled price oracle.

pub mod error;
pub mod instruction;
pub mod pda;
pub mod processor;
pub mod state;

pub use processor::process_instruction;

// ---------------------------------------------------------------------------
// Program ID
// ---------------------------------------------------------------------------

solana_program::declare_id!("4R8RFWJTUQH2iz8habt9SCu54pzQ6xB9CCZQ4bHAPveK");

// ---------------------------------------------------------------------------
// Entrypoint
// ---------------------------------------------------------------------------

#[cfg(not(feature = "no-entrypoint"))]
solana_program::entrypoint!(process_instruction);
