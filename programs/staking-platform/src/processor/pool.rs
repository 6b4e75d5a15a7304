use solana_program::{
    account_info::{next_account_info, AccountInfo},
    clock::Clock,
    entrypoint::ProgramResult,
    msg,
    program::invoke,
    program_error::ProgramError,
    program_pack::Pack,
    pubkey::Pubkey,
    sysvar::Sysvar,
};

use super::{assert_address, create_pda_account, load, store};
use crate::{
    error::StakingError,
    instruction::{CreatePoolArgs, PoolIdArgs, UpdatePoolConfigArgs},
    pda::{self, LIQUID_STAKE_MINT_SEED, REWARD_VAULT_SEED, STAKE_VAULT_SEED, STAKING_POOL_SEED},
    state::{
        GlobalConfig, PoolAccounts, PoolParams, PoolUpdate, SlashCondition, StakingPool,
        LIQUID_STAKE_DECIMALS,
    },
};

impl TryFrom<&CreatePoolArgs> for PoolParams {
    type Error = StakingError;

    fn try_from(args: &CreatePoolArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            reward_rate_per_second: args.reward_rate_per_second,
            lock_period_enabled: args.lock_period_enabled != 0,
            lock_period_duration: args.lock_period_duration,
            reward_multiplier: args.reward_multiplier,
            early_withdraw_penalty: args.early_withdraw_penalty,
            slashing_enabled: args.slashing_enabled != 0,
            slashing_condition_type: SlashCondition::try_from(args.slashing_condition_type)?,
            slash_percentage: args.slash_percentage,
            min_evidence_required: args.min_evidence_required,
            cooldown_period: args.cooldown_period,
            maximum_stake_limit: args.maximum_stake_limit,
            minimum_stake_amount: args.minimum_stake_amount,
        })
    }
}

/// Load the pool stored at `pool_account` and check it really is pool
/// `pool_id` at its derived address.
fn load_pool(
    program_id: &Pubkey,
    pool_account: &AccountInfo,
    pool_id: u64,
) -> Result<StakingPool, ProgramError> {
    if pool_account.data_is_empty() {
        return Err(StakingError::PoolNotFound.into());
    }
    let pool: StakingPool = load(pool_account, program_id)?;
    if pool.pool_id != pool_id {
        return Err(StakingError::PoolNotFound.into());
    }
    let (expected, _) = pda::find_staking_pool_address(&pool.authority, pool.pool_id, program_id)?;
    assert_address(pool_account, &expected)?;
    Ok(pool)
}

// ---------------------------------------------------------------------------
// Instruction: CreateStakingPool (discriminator 3)
// ---------------------------------------------------------------------------
// Accounts:
//   0.  [signer]           authority (global config authority)
//   1.  [signer, writable] creator (payer)
//   2.  []                 stake_mint
//   3.  []                 reward_mint
//   4.  [writable]         stake_vault PDA
//   5.  [writable]         reward_vault PDA
//   6.  [writable]         staking_pool PDA
//   7.  [writable]         global_config PDA
//   8.  [writable]         liquid_stake_mint PDA
//   9.  []                 price_feed
//   10. []                 system_program
//   11. []                 token_program

pub(super) fn process_create_staking_pool(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    args: CreatePoolArgs,
) -> ProgramResult {
    let account_iter = &mut accounts.iter();
    let authority = next_account_info(account_iter)?;
    let creator = next_account_info(account_iter)?;
    let stake_mint = next_account_info(account_iter)?;
    let reward_mint = next_account_info(account_iter)?;
    let stake_vault = next_account_info(account_iter)?;
    let reward_vault = next_account_info(account_iter)?;
    let pool_account = next_account_info(account_iter)?;
    let global_config_account = next_account_info(account_iter)?;
    let liquid_stake_mint = next_account_info(account_iter)?;
    let price_feed = next_account_info(account_iter)?;
    let system_program = next_account_info(account_iter)?;
    let token_program = next_account_info(account_iter)?;

    let mut config: GlobalConfig = load(global_config_account, program_id)?;
    config.ensure_authority(authority.key)?;
    config.register_pool()?;

    let (pool_pda, pool_bump) =
        pda::find_staking_pool_address(authority.key, args.pool_id, program_id)?;
    assert_address(pool_account, &pool_pda)?;
    if !pool_account.data_is_empty() {
        return Err(StakingError::AlreadyInitialized.into());
    }

    let config_key = global_config_account.key;
    let (stake_vault_pda, stake_vault_bump) =
        pda::find_stake_vault_address(stake_mint.key, config_key, program_id)?;
    assert_address(stake_vault, &stake_vault_pda)?;

    let (reward_vault_pda, reward_vault_bump) =
        pda::find_reward_vault_address(reward_mint.key, config_key, program_id)?;
    assert_address(reward_vault, &reward_vault_pda)?;

    let (lsm_pda, lsm_bump) = pda::find_liquid_stake_mint_address(authority.key, program_id)?;
    assert_address(liquid_stake_mint, &lsm_pda)?;

    let clock = Clock::get()?;
    let pool = StakingPool::new(
        args.pool_id,
        PoolAccounts {
            authority: *authority.key,
            creator: *creator.key,
            stake_mint: *stake_mint.key,
            reward_mint: *reward_mint.key,
            stake_vault: stake_vault_pda,
            reward_vault: reward_vault_pda,
            liquid_stake_mint: lsm_pda,
            price_feed_account: *price_feed.key,
        },
        PoolParams::try_from(&args)?,
        clock.unix_timestamp,
        pool_bump,
    )?;

    // Vaults and the liquid-stake mint are shared between pools with the same
    // mints / authority, so only the first pool creates them.
    if stake_vault.data_is_empty() {
        create_pda_account(
            creator,
            spl_token::state::Account::LEN,
            &spl_token::ID,
            system_program,
            stake_vault,
            &[STAKE_VAULT_SEED, stake_mint.key.as_ref(), config_key.as_ref(), &[stake_vault_bump]],
        )?;
        invoke(
            &spl_token::instruction::initialize_account3(
                &spl_token::ID,
                stake_vault.key,
                stake_mint.key,
                config_key,
            )?,
            &[stake_vault.clone(), stake_mint.clone(), token_program.clone()],
        )?;
    }

    if reward_vault.data_is_empty() {
        create_pda_account(
            creator,
            spl_token::state::Account::LEN,
            &spl_token::ID,
            system_program,
            reward_vault,
            &[REWARD_VAULT_SEED, reward_mint.key.as_ref(), config_key.as_ref(), &[reward_vault_bump]],
        )?;
        invoke(
            &spl_token::instruction::initialize_account3(
                &spl_token::ID,
                reward_vault.key,
                reward_mint.key,
                config_key,
            )?,
            &[reward_vault.clone(), reward_mint.clone(), token_program.clone()],
        )?;
    }

    if liquid_stake_mint.data_is_empty() {
        create_pda_account(
            creator,
            spl_token::state::Mint::LEN,
            &spl_token::ID,
            system_program,
            liquid_stake_mint,
            &[LIQUID_STAKE_MINT_SEED, authority.key.as_ref(), &[lsm_bump]],
        )?;
        invoke(
            &spl_token::instruction::initialize_mint2(
                &spl_token::ID,
                liquid_stake_mint.key,
                config_key,
                Some(config_key),
                LIQUID_STAKE_DECIMALS,
            )?,
            &[liquid_stake_mint.clone(), token_program.clone()],
        )?;
    }

    create_pda_account(
        creator,
        StakingPool::SIZE,
        program_id,
        system_program,
        pool_account,
        &[STAKING_POOL_SEED, authority.key.as_ref(), &args.pool_id.to_le_bytes(), &[pool_bump]],
    )?;
    store(&pool, pool_account)?;
    store(&config, global_config_account)?;

    msg!(
        "EVENT:StakingPoolCreated:{{\"pool\":\"{}\",\"pool_id\":{},\"authority\":\"{}\",\"creator\":\"{}\",\"reward_rate\":{},\"pool_count\":{}}}",
        pool_account.key,
        pool.pool_id,
        authority.key,
        creator.key,
        pool.reward_rate_per_second,
        config.pool_count,
    );

    Ok(())
}

// ---------------------------------------------------------------------------
// Instruction: UpdatePoolConfig (discriminator 4)
// ---------------------------------------------------------------------------
// Accounts:
//   0. [signer]   pool authority
//   1. [writable] staking_pool PDA
//   2. []         price_feed (only read for the price feed field)

pub(super) fn process_update_pool_config(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    args: UpdatePoolConfigArgs,
) -> ProgramResult {
    let account_iter = &mut accounts.iter();
    let authority = next_account_info(account_iter)?;
    let pool_account = next_account_info(account_iter)?;
    let price_feed = next_account_info(account_iter)?;

    let mut pool = load_pool(program_id, pool_account, args.pool_id)?;
    pool.ensure_authority(authority.key)?;

    let update = PoolUpdate::from_raw(args.field_tag, args.new_value, price_feed.key)?;
    pool.apply_update(update)?;
    store(&pool, pool_account)?;

    msg!(
        "EVENT:PoolConfigUpdated:{{\"pool_id\":{},\"field_tag\":{},\"new_value\":{}}}",
        pool.pool_id,
        args.field_tag,
        args.new_value,
    );

    Ok(())
}

// ---------------------------------------------------------------------------
// Instruction: PausePool (discriminator 8)
// ---------------------------------------------------------------------------
// Accounts:
//   0. [signer]   pool authority
//   1. [writable] staking_pool PDA

pub(super) fn process_pause_pool(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    args: PoolIdArgs,
) -> ProgramResult {
    let account_iter = &mut accounts.iter();
    let authority = next_account_info(account_iter)?;
    let pool_account = next_account_info(account_iter)?;

    let mut pool = load_pool(program_id, pool_account, args.pool_id)?;
    pool.ensure_authority(authority.key)?;

    if pool.pause()? {
        store(&pool, pool_account)?;
        msg!("EVENT:PoolPaused:{{\"pool_id\":{}}}", pool.pool_id);
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Instruction: ResumePool (discriminator 9)
// ---------------------------------------------------------------------------
// Accounts:
//   0. [signer]   pool authority
//   1. [writable] staking_pool PDA

pub(super) fn process_resume_pool(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    args: PoolIdArgs,
) -> ProgramResult {
    let account_iter = &mut accounts.iter();
    let authority = next_account_info(account_iter)?;
    let pool_account = next_account_info(account_iter)?;

    let mut pool = load_pool(program_id, pool_account, args.pool_id)?;
    pool.ensure_authority(authority.key)?;

    if pool.resume()? {
        store(&pool, pool_account)?;
        msg!("EVENT:PoolResumed:{{\"pool_id\":{}}}", pool.pool_id);
    }

    Ok(())
}
