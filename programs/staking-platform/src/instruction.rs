//! Instruction wire format and client-side builders.
//!
//! Layout: `[u8 discriminator][fixed-length payload]`. Payload structs are
//! borsh structs whose fields are all fixed width, so each discriminator maps
//! to exactly one payload length.
//!
//! Instructions:
//!   0 = InitConfig
//!   1 = UpdateAuthority
//!   2 = UpdateProtocolFees
//!   3 = CreateStakingPool
//!   4 = UpdatePoolConfig
//!   5 = InitOracleConfig
//!   6 = UpdateOraclePrice
//!   7 = GetOraclePrice
//!   8 = PausePool
//!   9 = ResumePool

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program,
};

use crate::{error::DecodeError, pda, state::PoolField};

// ── Discriminators ──────────────────────────────────────────────────────────

pub const IX_INIT_CONFIG: u8 = 0;
pub const IX_UPDATE_AUTHORITY: u8 = 1;
pub const IX_UPDATE_PROTOCOL_FEES: u8 = 2;
pub const IX_CREATE_STAKING_POOL: u8 = 3;
pub const IX_UPDATE_POOL_CONFIG: u8 = 4;
pub const IX_INIT_ORACLE_CONFIG: u8 = 5;
pub const IX_UPDATE_ORACLE_PRICE: u8 = 6;
pub const IX_GET_ORACLE_PRICE: u8 = 7;
pub const IX_PAUSE_POOL: u8 = 8;
pub const IX_RESUME_POOL: u8 = 9;

// ── Payloads ────────────────────────────────────────────────────────────────

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitConfigArgs {
    pub protocol_fee_rate: u16,
    pub min_stake_amount: u64,
    pub max_pools: u32,
}

impl InitConfigArgs {
    pub const LEN: usize = 14;
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateAuthorityArgs {
    pub new_authority: Pubkey,
}

impl UpdateAuthorityArgs {
    pub const LEN: usize = 32;
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProtocolFeeArgs {
    pub protocol_fee_rate: u16,
}

impl UpdateProtocolFeeArgs {
    pub const LEN: usize = 2;
}

/// Boolean fields travel as raw bytes; any nonzero value means `true`.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatePoolArgs {
    pub pool_id: u64,
    pub reward_rate_per_second: u64,
    pub lock_period_enabled: u8,
    pub lock_period_duration: i64,
    pub reward_multiplier: u16,
    pub early_withdraw_penalty: u64,
    pub slashing_enabled: u8,
    pub slashing_condition_type: u8,
    pub slash_percentage: u16,
    pub min_evidence_required: u8,
    pub cooldown_period: i64,
    pub maximum_stake_limit: u64,
    pub minimum_stake_amount: u64,
}

impl CreatePoolArgs {
    // 8 + 8 + 1 + 8 + 2 + 8 + 1 + 1 + 2 + 1 + 8 + 8 + 8 = 64
    pub const LEN: usize = 64;
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdatePoolConfigArgs {
    pub field_tag: u8,
    pub pool_id: u64,
    pub new_value: u64,
}

impl UpdatePoolConfigArgs {
    pub const LEN: usize = 17;
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitOracleArgs {
    pub update_frequency_seconds: i64,
    pub initial_price: u64,
}

impl InitOracleArgs {
    pub const LEN: usize = 16;
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdatePriceArgs {
    pub new_price: u64,
}

impl UpdatePriceArgs {
    pub const LEN: usize = 8;
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolIdArgs {
    pub pool_id: u64,
}

impl PoolIdArgs {
    pub const LEN: usize = 8;
}

// ── Instruction enum ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StakingInstruction {
    InitConfig(InitConfigArgs),
    UpdateAuthority(UpdateAuthorityArgs),
    UpdateProtocolFees(UpdateProtocolFeeArgs),
    CreateStakingPool(CreatePoolArgs),
    UpdatePoolConfig(UpdatePoolConfigArgs),
    InitOracleConfig(InitOracleArgs),
    UpdateOraclePrice(UpdatePriceArgs),
    GetOraclePrice,
    PausePool(PoolIdArgs),
    ResumePool(PoolIdArgs),
}

fn decode_payload<T: BorshDeserialize>(payload: &[u8], expected: usize) -> Result<T, DecodeError> {
    T::try_from_slice(payload).map_err(|_| DecodeError::LengthMismatch {
        expected,
        actual: payload.len(),
    })
}

impl StakingInstruction {
    /// Payload length for a discriminator, or `None` if it is not one of ours.
    pub fn payload_len(discriminator: u8) -> Option<usize> {
        let len = match discriminator {
            IX_INIT_CONFIG => InitConfigArgs::LEN,
            IX_UPDATE_AUTHORITY => UpdateAuthorityArgs::LEN,
            IX_UPDATE_PROTOCOL_FEES => UpdateProtocolFeeArgs::LEN,
            IX_CREATE_STAKING_POOL => CreatePoolArgs::LEN,
            IX_UPDATE_POOL_CONFIG => UpdatePoolConfigArgs::LEN,
            IX_INIT_ORACLE_CONFIG => InitOracleArgs::LEN,
            IX_UPDATE_ORACLE_PRICE => UpdatePriceArgs::LEN,
            IX_GET_ORACLE_PRICE => 0,
            IX_PAUSE_POOL | IX_RESUME_POOL => PoolIdArgs::LEN,
            _ => return None,
        };
        Some(len)
    }

    pub fn discriminator(&self) -> u8 {
        match self {
            Self::InitConfig(_) => IX_INIT_CONFIG,
            Self::UpdateAuthority(_) => IX_UPDATE_AUTHORITY,
            Self::UpdateProtocolFees(_) => IX_UPDATE_PROTOCOL_FEES,
            Self::CreateStakingPool(_) => IX_CREATE_STAKING_POOL,
            Self::UpdatePoolConfig(_) => IX_UPDATE_POOL_CONFIG,
            Self::InitOracleConfig(_) => IX_INIT_ORACLE_CONFIG,
            Self::UpdateOraclePrice(_) => IX_UPDATE_ORACLE_PRICE,
            Self::GetOraclePrice => IX_GET_ORACLE_PRICE,
            Self::PausePool(_) => IX_PAUSE_POOL,
            Self::ResumePool(_) => IX_RESUME_POOL,
        }
    }

    pub fn unpack(input: &[u8]) -> Result<Self, DecodeError> {
        let (&tag, payload) = input.split_first().ok_or(DecodeError::Empty)?;
        let expected = Self::payload_len(tag).ok_or(DecodeError::UnknownDiscriminator(tag))?;
        if payload.len() != expected {
            return Err(DecodeError::LengthMismatch {
                expected,
                actual: payload.len(),
            });
        }

        Ok(match tag {
            IX_INIT_CONFIG => Self::InitConfig(decode_payload(payload, expected)?),
            IX_UPDATE_AUTHORITY => Self::UpdateAuthority(decode_payload(payload, expected)?),
            IX_UPDATE_PROTOCOL_FEES => Self::UpdateProtocolFees(decode_payload(payload, expected)?),
            IX_CREATE_STAKING_POOL => Self::CreateStakingPool(decode_payload(payload, expected)?),
            IX_UPDATE_POOL_CONFIG => Self::UpdatePoolConfig(decode_payload(payload, expected)?),
            IX_INIT_ORACLE_CONFIG => Self::InitOracleConfig(decode_payload(payload, expected)?),
            IX_UPDATE_ORACLE_PRICE => Self::UpdateOraclePrice(decode_payload(payload, expected)?),
            IX_GET_ORACLE_PRICE => Self::GetOraclePrice,
            IX_PAUSE_POOL => Self::PausePool(decode_payload(payload, expected)?),
            IX_RESUME_POOL => Self::ResumePool(decode_payload(payload, expected)?),
            _ => return Err(DecodeError::UnknownDiscriminator(tag)),
        })
    }

    pub fn pack(&self) -> Result<Vec<u8>, ProgramError> {
        let mut data = vec![self.discriminator()];
        match self {
            Self::InitConfig(args) => args.serialize(&mut data)?,
            Self::UpdateAuthority(args) => args.serialize(&mut data)?,
            Self::UpdateProtocolFees(args) => args.serialize(&mut data)?,
            Self::CreateStakingPool(args) => args.serialize(&mut data)?,
            Self::UpdatePoolConfig(args) => args.serialize(&mut data)?,
            Self::InitOracleConfig(args) => args.serialize(&mut data)?,
            Self::UpdateOraclePrice(args) => args.serialize(&mut data)?,
            Self::GetOraclePrice => {}
            Self::PausePool(args) | Self::ResumePool(args) => args.serialize(&mut data)?,
        }
        Ok(data)
    }
}

// ── Instruction Builders ────────────────────────────────────────────────────

/// Create the global config and its treasury token account.
///
/// Accounts:
///   0. `[signer, writable]` authority (payer)
///   1. `[]` mint
///   2. `[writable]` global_config PDA
///   3. `[writable]` treasury PDA
///   4. `[]` system_program
///   5. `[]` token_program
pub fn create_init_config_instruction(
    program_id: &Pubkey,
    authority: &Pubkey,
    mint: &Pubkey,
    protocol_fee_rate: u16,
    min_stake_amount: u64,
    max_pools: u32,
) -> Result<Instruction, ProgramError> {
    let (global_config, _) = pda::find_global_config_address(authority, program_id)?;
    let (treasury, _) = pda::find_treasury_address(mint, authority, program_id)?;
    let data = StakingInstruction::InitConfig(InitConfigArgs {
        protocol_fee_rate,
        min_stake_amount,
        max_pools,
    })
    .pack()?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(global_config, false),
            AccountMeta::new(treasury, false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data,
    })
}

/// Hand the global config to a new authority.
///
/// `global_config` stays at the address derived from the original authority.
///
/// Accounts:
///   0. `[signer]` current authority
///   1. `[writable]` global_config PDA
pub fn create_update_authority_instruction(
    program_id: &Pubkey,
    authority: &Pubkey,
    global_config: &Pubkey,
    new_authority: &Pubkey,
) -> Result<Instruction, ProgramError> {
    let data = StakingInstruction::UpdateAuthority(UpdateAuthorityArgs {
        new_authority: *new_authority,
    })
    .pack()?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*global_config, false),
        ],
        data,
    })
}

/// Accounts:
///   0. `[signer]` authority
///   1. `[writable]` global_config PDA
pub fn create_update_protocol_fee_instruction(
    program_id: &Pubkey,
    authority: &Pubkey,
    global_config: &Pubkey,
    protocol_fee_rate: u16,
) -> Result<Instruction, ProgramError> {
    let data =
        StakingInstruction::UpdateProtocolFees(UpdateProtocolFeeArgs { protocol_fee_rate }).pack()?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*global_config, false),
        ],
        data,
    })
}

/// Create a staking pool with its vaults and liquid-stake mint.
///
/// Accounts:
///   0. `[signer]` authority (global config authority)
///   1. `[signer, writable]` creator (payer)
///   2. `[]` stake_mint
///   3. `[]` reward_mint
///   4. `[writable]` stake_vault PDA
///   5. `[writable]` reward_vault PDA
///   6. `[writable]` staking_pool PDA
///   7. `[writable]` global_config PDA
///   8. `[writable]` liquid_stake_mint PDA
///   9. `[]` price_feed
///  10. `[]` system_program
///  11. `[]` token_program
#[allow(clippy::too_many_arguments)]
pub fn create_staking_pool_instruction(
    program_id: &Pubkey,
    authority: &Pubkey,
    creator: &Pubkey,
    global_config: &Pubkey,
    stake_mint: &Pubkey,
    reward_mint: &Pubkey,
    price_feed: &Pubkey,
    args: CreatePoolArgs,
) -> Result<Instruction, ProgramError> {
    let (stake_vault, _) = pda::find_stake_vault_address(stake_mint, global_config, program_id)?;
    let (reward_vault, _) = pda::find_reward_vault_address(reward_mint, global_config, program_id)?;
    let (staking_pool, _) = pda::find_staking_pool_address(authority, args.pool_id, program_id)?;
    let (liquid_stake_mint, _) = pda::find_liquid_stake_mint_address(authority, program_id)?;
    let data = StakingInstruction::CreateStakingPool(args).pack()?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*creator, true),
            AccountMeta::new_readonly(*stake_mint, false),
            AccountMeta::new_readonly(*reward_mint, false),
            AccountMeta::new(stake_vault, false),
            AccountMeta::new(reward_vault, false),
            AccountMeta::new(staking_pool, false),
            AccountMeta::new(*global_config, false),
            AccountMeta::new(liquid_stake_mint, false),
            AccountMeta::new_readonly(*price_feed, false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data,
    })
}

/// Update one pool field. `price_feed` is only read for
/// `PoolField::PriceFeedAccount`; pass any key otherwise.
///
/// Accounts:
///   0. `[signer]` pool authority
///   1. `[writable]` staking_pool PDA
///   2. `[]` price_feed
pub fn create_update_pool_config_instruction(
    program_id: &Pubkey,
    authority: &Pubkey,
    pool_id: u64,
    field: PoolField,
    new_value: u64,
    price_feed: &Pubkey,
) -> Result<Instruction, ProgramError> {
    let (staking_pool, _) = pda::find_staking_pool_address(authority, pool_id, program_id)?;
    let data = StakingInstruction::UpdatePoolConfig(UpdatePoolConfigArgs {
        field_tag: field as u8,
        pool_id,
        new_value,
    })
    .pack()?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(staking_pool, false),
            AccountMeta::new_readonly(*price_feed, false),
        ],
        data,
    })
}

/// Accounts:
///   0. `[signer, writable]` oracle_authority (payer)
///   1. `[writable]` oracle_config PDA
///   2. `[]` price_feed
///   3. `[]` system_program
pub fn create_init_oracle_instruction(
    program_id: &Pubkey,
    oracle_authority: &Pubkey,
    price_feed: &Pubkey,
    update_frequency_seconds: i64,
    initial_price: u64,
) -> Result<Instruction, ProgramError> {
    let (oracle_config, _) = pda::find_oracle_config_address(oracle_authority, program_id)?;
    let data = StakingInstruction::InitOracleConfig(InitOracleArgs {
        update_frequency_seconds,
        initial_price,
    })
    .pack()?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*oracle_authority, true),
            AccountMeta::new(oracle_config, false),
            AccountMeta::new_readonly(*price_feed, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    })
}

/// Accounts:
///   0. `[signer]` oracle_authority
///   1. `[writable]` oracle_config PDA
pub fn create_update_oracle_price_instruction(
    program_id: &Pubkey,
    oracle_authority: &Pubkey,
    new_price: u64,
) -> Result<Instruction, ProgramError> {
    let (oracle_config, _) = pda::find_oracle_config_address(oracle_authority, program_id)?;
    let data = StakingInstruction::UpdateOraclePrice(UpdatePriceArgs { new_price }).pack()?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*oracle_authority, true),
            AccountMeta::new(oracle_config, false),
        ],
        data,
    })
}

/// Accounts:
///   0. `[]` oracle_authority
///   1. `[]` oracle_config PDA
pub fn create_get_oracle_price_instruction(
    program_id: &Pubkey,
    oracle_authority: &Pubkey,
) -> Result<Instruction, ProgramError> {
    let (oracle_config, _) = pda::find_oracle_config_address(oracle_authority, program_id)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*oracle_authority, false),
            AccountMeta::new_readonly(oracle_config, false),
        ],
        data: StakingInstruction::GetOraclePrice.pack()?,
    })
}

fn pool_status_instruction(
    program_id: &Pubkey,
    authority: &Pubkey,
    instruction: StakingInstruction,
    pool_id: u64,
) -> Result<Instruction, ProgramError> {
    let (staking_pool, _) = pda::find_staking_pool_address(authority, pool_id, program_id)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(staking_pool, false),
        ],
        data: instruction.pack()?,
    })
}

/// Accounts:
///   0. `[signer]` pool authority
///   1. `[writable]` staking_pool PDA
pub fn create_pause_pool_instruction(
    program_id: &Pubkey,
    authority: &Pubkey,
    pool_id: u64,
) -> Result<Instruction, ProgramError> {
    pool_status_instruction(
        program_id,
        authority,
        StakingInstruction::PausePool(PoolIdArgs { pool_id }),
        pool_id,
    )
}

/// Same accounts as [`create_pause_pool_instruction`].
pub fn create_resume_pool_instruction(
    program_id: &Pubkey,
    authority: &Pubkey,
    pool_id: u64,
) -> Result<Instruction, ProgramError> {
    pool_status_instruction(
        program_id,
        authority,
        StakingInstruction::ResumePool(PoolIdArgs { pool_id }),
        pool_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_pool_args() -> CreatePoolArgs {
        CreatePoolArgs {
            pool_id: 33,
            reward_rate_per_second: 100,
            lock_period_enabled: 1,
            lock_period_duration: 100_000,
            reward_multiplier: 150,
            early_withdraw_penalty: 500,
            slashing_enabled: 1,
            slashing_condition_type: 1,
            slash_percentage: 1_000,
            min_evidence_required: 5,
            cooldown_period: 100_000,
            maximum_stake_limit: 50_000,
            minimum_stake_amount: 10_000,
        }
    }

    #[test]
    fn test_payload_lengths_match_structs() {
        let cases: Vec<(StakingInstruction, usize)> = vec![
            (
                StakingInstruction::InitConfig(InitConfigArgs {
                    protocol_fee_rate: 500,
                    min_stake_amount: 1_000_000,
                    max_pools: 100,
                }),
                14,
            ),
            (
                StakingInstruction::UpdateAuthority(UpdateAuthorityArgs {
                    new_authority: Pubkey::new_unique(),
                }),
                32,
            ),
            (
                StakingInstruction::UpdateProtocolFees(UpdateProtocolFeeArgs { protocol_fee_rate: 1 }),
                2,
            ),
            (StakingInstruction::CreateStakingPool(scenario_pool_args()), 64),
            (
                StakingInstruction::UpdatePoolConfig(UpdatePoolConfigArgs {
                    field_tag: 0,
                    pool_id: 33,
                    new_value: 200,
                }),
                17,
            ),
            (
                StakingInstruction::InitOracleConfig(InitOracleArgs {
                    update_frequency_seconds: 60,
                    initial_price: 1,
                }),
                16,
            ),
            (StakingInstruction::UpdateOraclePrice(UpdatePriceArgs { new_price: 9 }), 8),
            (StakingInstruction::GetOraclePrice, 0),
            (StakingInstruction::PausePool(PoolIdArgs { pool_id: 1 }), 8),
            (StakingInstruction::ResumePool(PoolIdArgs { pool_id: 1 }), 8),
        ];

        for (ix, len) in cases {
            let data = ix.pack().unwrap();
            assert_eq!(data.len(), 1 + len, "{:?}", ix);
            assert_eq!(StakingInstruction::payload_len(data[0]), Some(len));
            assert_eq!(StakingInstruction::unpack(&data).unwrap(), ix);
        }
    }

    #[test]
    fn test_init_config_wire_layout() {
        let data = StakingInstruction::InitConfig(InitConfigArgs {
            protocol_fee_rate: 500,
            min_stake_amount: 1_000_000,
            max_pools: 100,
        })
        .pack()
        .unwrap();

        let mut expected = vec![0u8];
        expected.extend_from_slice(&500u16.to_le_bytes());
        expected.extend_from_slice(&1_000_000u64.to_le_bytes());
        expected.extend_from_slice(&100u32.to_le_bytes());
        assert_eq!(data, expected);
    }

    #[test]
    fn test_create_pool_wire_offsets() {
        let data = StakingInstruction::CreateStakingPool(scenario_pool_args()).pack().unwrap();
        let payload = &data[1..];
        assert_eq!(&payload[0..8], &33u64.to_le_bytes());
        assert_eq!(payload[16], 1);
        assert_eq!(&payload[17..25], &100_000i64.to_le_bytes());
        assert_eq!(&payload[25..27], &150u16.to_le_bytes());
        assert_eq!(payload[36], 1);
        assert_eq!(&payload[37..39], &1_000u16.to_le_bytes());
        assert_eq!(payload[39], 5);
        assert_eq!(&payload[56..64], &10_000u64.to_le_bytes());
    }

    #[test]
    fn test_nonzero_bool_bytes_decode() {
        let mut data = StakingInstruction::CreateStakingPool(scenario_pool_args()).pack().unwrap();
        data[1 + 16] = 7;
        match StakingInstruction::unpack(&data).unwrap() {
            StakingInstruction::CreateStakingPool(args) => assert_eq!(args.lock_period_enabled, 7),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_length_mismatch() {
        let mut data = vec![IX_INIT_CONFIG];
        data.extend_from_slice(&[0u8; 13]);
        assert_eq!(
            StakingInstruction::unpack(&data),
            Err(DecodeError::LengthMismatch { expected: 14, actual: 13 })
        );

        data.extend_from_slice(&[0u8; 2]);
        assert_eq!(
            StakingInstruction::unpack(&data),
            Err(DecodeError::LengthMismatch { expected: 14, actual: 15 })
        );

        assert_eq!(
            StakingInstruction::unpack(&[IX_GET_ORACLE_PRICE, 0]),
            Err(DecodeError::LengthMismatch { expected: 0, actual: 1 })
        );
    }

    #[test]
    fn test_unknown_and_empty() {
        assert_eq!(StakingInstruction::unpack(&[]), Err(DecodeError::Empty));
        assert_eq!(
            StakingInstruction::unpack(&[10]),
            Err(DecodeError::UnknownDiscriminator(10))
        );
        assert_eq!(
            StakingInstruction::unpack(&[255, 1, 2]),
            Err(DecodeError::UnknownDiscriminator(255))
        );
    }

    #[test]
    fn test_builder_account_shape() {
        let pid = crate::id();
        let authority = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let ix = create_init_config_instruction(&pid, &authority, &mint, 500, 1_000_000, 100).unwrap();

        assert_eq!(ix.accounts.len(), 6);
        assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
        assert_eq!(
            ix.accounts[2].pubkey,
            pda::find_global_config_address(&authority, &pid).unwrap().0
        );
        assert_eq!(
            ix.accounts[3].pubkey,
            pda::find_treasury_address(&mint, &authority, &pid).unwrap().0
        );
        assert_eq!(ix.accounts[5].pubkey, spl_token::id());
    }
}
