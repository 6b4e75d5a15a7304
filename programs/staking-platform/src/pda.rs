//! Program-derived addresses for every account the program manages.
//!
//! Seed order and byte content are part of the client contract: off-chain
//! callers pre-compute these addresses, so any change here breaks them.

use solana_program::{
    msg,
    pubkey::{Pubkey, PubkeyError},
};

use crate::error::DerivationError;

// ---------------------------------------------------------------------------
// Seeds
// ---------------------------------------------------------------------------

pub const GLOBAL_CONFIG_SEED: &[u8] = b"global_config_account";
pub const TREASURY_SEED: &[u8] = b"treasury_account";
pub const STAKING_POOL_SEED: &[u8] = b"staking_pool";
pub const STAKE_VAULT_SEED: &[u8] = b"stake_token_vault";
pub const REWARD_VAULT_SEED: &[u8] = b"reward_token_vault";
pub const LIQUID_STAKE_MINT_SEED: &[u8] = b"liquid_stake_mint";
pub const ORACLE_CONFIG_SEED: &[u8] = b"oracle_config_account";

// ---------------------------------------------------------------------------
// Bump search
// ---------------------------------------------------------------------------

/// Find the highest bump in 255..=1 whose address is off the ed25519 curve.
///
/// Same search order as `Pubkey::find_program_address`, but exhaustion is
/// reported instead of panicking. Only an on-curve candidate moves the search
/// to the next bump; seeds the runtime refuses outright fail immediately.
pub fn derive_address(
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), DerivationError> {
    for bump in (1..=u8::MAX).rev() {
        let bump_seed = [bump];
        let mut candidate: Vec<&[u8]> = Vec::with_capacity(seeds.len() + 1);
        candidate.extend_from_slice(seeds);
        candidate.push(&bump_seed);
        match Pubkey::create_program_address(&candidate, program_id) {
            Ok(address) => return Ok((address, bump)),
            Err(PubkeyError::InvalidSeeds) => continue,
            Err(e) => {
                msg!("Address derivation rejected seeds: {}", e);
                return Err(DerivationError::InvalidSeeds);
            }
        }
    }
    msg!("Address derivation exhausted bump space ({} seeds)", seeds.len());
    Err(DerivationError::NoValidBump)
}

// ---------------------------------------------------------------------------
// Per-account helpers
// ---------------------------------------------------------------------------

pub fn find_global_config_address(
    authority: &Pubkey,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), DerivationError> {
    derive_address(&[GLOBAL_CONFIG_SEED, authority.as_ref()], program_id)
}

pub fn find_treasury_address(
    mint: &Pubkey,
    authority: &Pubkey,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), DerivationError> {
    derive_address(&[TREASURY_SEED, mint.as_ref(), authority.as_ref()], program_id)
}

/// Pools are keyed by the authority that created them, not by the global
/// config address, so they stay reachable after an authority transfer.
pub fn find_staking_pool_address(
    authority: &Pubkey,
    pool_id: u64,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), DerivationError> {
    derive_address(
        &[STAKING_POOL_SEED, authority.as_ref(), &pool_id.to_le_bytes()],
        program_id,
    )
}

pub fn find_stake_vault_address(
    stake_mint: &Pubkey,
    global_config: &Pubkey,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), DerivationError> {
    derive_address(
        &[STAKE_VAULT_SEED, stake_mint.as_ref(), global_config.as_ref()],
        program_id,
    )
}

pub fn find_reward_vault_address(
    reward_mint: &Pubkey,
    global_config: &Pubkey,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), DerivationError> {
    derive_address(
        &[REWARD_VAULT_SEED, reward_mint.as_ref(), global_config.as_ref()],
        program_id,
    )
}

pub fn find_liquid_stake_mint_address(
    authority: &Pubkey,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), DerivationError> {
    derive_address(&[LIQUID_STAKE_MINT_SEED, authority.as_ref()], program_id)
}

pub fn find_oracle_config_address(
    oracle_authority: &Pubkey,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), DerivationError> {
    derive_address(&[ORACLE_CONFIG_SEED, oracle_authority.as_ref()], program_id)
}
