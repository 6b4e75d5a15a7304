use solana_program::{
    account_info::{next_account_info, AccountInfo},
    clock::Clock,
    entrypoint::ProgramResult,
    msg,
    program::set_return_data,
    pubkey::Pubkey,
    sysvar::Sysvar,
};

use super::{assert_address, create_pda_account, load, store};
use crate::{
    error::StakingError,
    instruction::{InitOracleArgs, UpdatePriceArgs},
    pda::{self, ORACLE_CONFIG_SEED},
    state::OracleConfig,
};

// ---------------------------------------------------------------------------
// Instruction: InitOracleConfig (discriminator 5)
// ---------------------------------------------------------------------------
// Accounts:
//   0. [signer, writable] oracle_authority (payer)
//   1. [writable]         oracle_config PDA
//   2. []                 price_feed
//   3. []                 system_program

pub(super) fn process_init_oracle_config(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    args: InitOracleArgs,
) -> ProgramResult {
    let account_iter = &mut accounts.iter();
    let oracle_authority = next_account_info(account_iter)?;
    let oracle_account = next_account_info(account_iter)?;
    let price_feed = next_account_info(account_iter)?;
    let system_program = next_account_info(account_iter)?;

    let (oracle_pda, bump) = pda::find_oracle_config_address(oracle_authority.key, program_id)?;
    assert_address(oracle_account, &oracle_pda)?;
    if !oracle_account.data_is_empty() {
        return Err(StakingError::AlreadyInitialized.into());
    }

    let clock = Clock::get()?;
    let oracle = OracleConfig::new(
        *oracle_authority.key,
        *price_feed.key,
        args.update_frequency_seconds,
        args.initial_price,
        clock.unix_timestamp,
        bump,
    )?;

    create_pda_account(
        oracle_authority,
        OracleConfig::SIZE,
        program_id,
        system_program,
        oracle_account,
        &[ORACLE_CONFIG_SEED, oracle_authority.key.as_ref(), &[bump]],
    )?;
    store(&oracle, oracle_account)?;

    msg!(
        "EVENT:OracleInitialized:{{\"oracle_authority\":\"{}\",\"price_feed\":\"{}\",\"update_frequency_seconds\":{},\"price\":{}}}",
        oracle_authority.key,
        price_feed.key,
        oracle.update_frequency_seconds,
        oracle.current_price,
    );

    Ok(())
}

// ---------------------------------------------------------------------------
// Instruction: UpdateOraclePrice (discriminator 6)
// ---------------------------------------------------------------------------
// Accounts:
//   0. [signer]   oracle_authority
//   1. [writable] oracle_config PDA

pub(super) fn process_update_oracle_price(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    args: UpdatePriceArgs,
) -> ProgramResult {
    let account_iter = &mut accounts.iter();
    let oracle_authority = next_account_info(account_iter)?;
    let oracle_account = next_account_info(account_iter)?;

    let mut oracle: OracleConfig = load(oracle_account, program_id)?;
    let (expected, _) = pda::find_oracle_config_address(&oracle.oracle_authority, program_id)?;
    assert_address(oracle_account, &expected)?;

    let clock = Clock::get()?;
    if let Err(e) = oracle.update_price(oracle_authority.key, args.new_price, clock.unix_timestamp) {
        if e == StakingError::TooFrequent {
            msg!(
                "Price update rejected: last update at {}, frequency {}s, now {}",
                oracle.last_update_ts,
                oracle.update_frequency_seconds,
                clock.unix_timestamp,
            );
        }
        return Err(e.into());
    }
    store(&oracle, oracle_account)?;

    msg!(
        "EVENT:OraclePriceUpdated:{{\"oracle_authority\":\"{}\",\"price\":{},\"timestamp\":{}}}",
        oracle_authority.key,
        oracle.current_price,
        oracle.last_update_ts,
    );

    Ok(())
}

// ---------------------------------------------------------------------------
// Instruction: GetOraclePrice (discriminator 7)
// ---------------------------------------------------------------------------
// Accounts:
//   0. [] oracle_authority
//   1. [] oracle_config PDA
//
// Publishes the current price as 8 little-endian bytes of return data.

pub(super) fn process_get_oracle_price(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_iter = &mut accounts.iter();
    let oracle_authority = next_account_info(account_iter)?;
    let oracle_account = next_account_info(account_iter)?;

    let (oracle_pda, _) = pda::find_oracle_config_address(oracle_authority.key, program_id)?;
    assert_address(oracle_account, &oracle_pda)?;
    let oracle: OracleConfig = load(oracle_account, program_id)?;

    msg!("Current price: {} (updated at {})", oracle.current_price, oracle.last_update_ts);
    set_return_data(&oracle.current_price.to_le_bytes());

    Ok(())
}
