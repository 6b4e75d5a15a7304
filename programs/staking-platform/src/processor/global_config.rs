use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::invoke,
    program_pack::Pack,
    pubkey::Pubkey,
};

use super::{assert_address, create_pda_account, load, store};
use crate::{
    error::StakingError,
    instruction::{InitConfigArgs, UpdateAuthorityArgs, UpdateProtocolFeeArgs},
    pda::{self, GLOBAL_CONFIG_SEED, TREASURY_SEED},
    state::GlobalConfig,
};

// ---------------------------------------------------------------------------
// Instruction: InitConfig (discriminator 0)
// ---------------------------------------------------------------------------
// Accounts:
//   0. [signer, writable] authority (payer)
//   1. []                 mint
//   2. [writable]         global_config PDA
//   3. [writable]         treasury PDA
//   4. []                 system_program
//   5. []                 token_program

pub(super) fn process_init_config(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    args: InitConfigArgs,
) -> ProgramResult {
    let account_iter = &mut accounts.iter();
    let authority = next_account_info(account_iter)?;
    let mint = next_account_info(account_iter)?;
    let global_config_account = next_account_info(account_iter)?;
    let treasury_account = next_account_info(account_iter)?;
    let system_program = next_account_info(account_iter)?;
    let token_program = next_account_info(account_iter)?;

    let (config_pda, config_bump) = pda::find_global_config_address(authority.key, program_id)?;
    assert_address(global_config_account, &config_pda)?;

    let (treasury_pda, treasury_bump) =
        pda::find_treasury_address(mint.key, authority.key, program_id)?;
    assert_address(treasury_account, &treasury_pda)?;

    if !global_config_account.data_is_empty() || !treasury_account.data_is_empty() {
        return Err(StakingError::AlreadyInitialized.into());
    }

    let config = GlobalConfig::new(
        *authority.key,
        *mint.key,
        treasury_pda,
        args.protocol_fee_rate,
        args.min_stake_amount,
        args.max_pools,
        config_bump,
        treasury_bump,
    )?;

    // Treasury: SPL token account for `mint`, controlled by the config PDA.
    create_pda_account(
        authority,
        spl_token::state::Account::LEN,
        &spl_token::ID,
        system_program,
        treasury_account,
        &[TREASURY_SEED, mint.key.as_ref(), authority.key.as_ref(), &[treasury_bump]],
    )?;
    invoke(
        &spl_token::instruction::initialize_account3(
            &spl_token::ID,
            treasury_account.key,
            mint.key,
            &config_pda,
        )?,
        &[treasury_account.clone(), mint.clone(), token_program.clone()],
    )?;

    create_pda_account(
        authority,
        GlobalConfig::SIZE,
        program_id,
        system_program,
        global_config_account,
        &[GLOBAL_CONFIG_SEED, authority.key.as_ref(), &[config_bump]],
    )?;
    store(&config, global_config_account)?;

    msg!(
        "EVENT:ConfigInitialized:{{\"authority\":\"{}\",\"mint\":\"{}\",\"protocol_fee_rate\":{},\"min_stake_amount\":{},\"max_pools\":{}}}",
        authority.key,
        mint.key,
        config.protocol_fee_rate,
        config.min_stake_amount,
        config.max_pools,
    );

    Ok(())
}

// ---------------------------------------------------------------------------
// Instruction: UpdateAuthority (discriminator 1)
// ---------------------------------------------------------------------------
// Accounts:
//   0. [signer]   authority
//   1. [writable] global_config PDA

pub(super) fn process_update_authority(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    args: UpdateAuthorityArgs,
) -> ProgramResult {
    let account_iter = &mut accounts.iter();
    let authority = next_account_info(account_iter)?;
    let global_config_account = next_account_info(account_iter)?;

    let mut config: GlobalConfig = load(global_config_account, program_id)?;
    config.set_authority(authority.key, args.new_authority)?;
    store(&config, global_config_account)?;

    msg!(
        "EVENT:AuthorityUpdated:{{\"old_authority\":\"{}\",\"new_authority\":\"{}\"}}",
        authority.key,
        args.new_authority,
    );

    Ok(())
}

// ---------------------------------------------------------------------------
// Instruction: UpdateProtocolFees (discriminator 2)
// ---------------------------------------------------------------------------
// Accounts:
//   0. [signer]   authority
//   1. [writable] global_config PDA

pub(super) fn process_update_protocol_fee(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    args: UpdateProtocolFeeArgs,
) -> ProgramResult {
    let account_iter = &mut accounts.iter();
    let authority = next_account_info(account_iter)?;
    let global_config_account = next_account_info(account_iter)?;

    let mut config: GlobalConfig = load(global_config_account, program_id)?;
    let old_rate = config.protocol_fee_rate;
    config.set_protocol_fee(authority.key, args.protocol_fee_rate)?;
    store(&config, global_config_account)?;

    msg!(
        "EVENT:ProtocolFeeUpdated:{{\"authority\":\"{}\",\"old_rate\":{},\"new_rate\":{}}}",
        authority.key,
        old_rate,
        config.protocol_fee_rate,
    );

    Ok(())
}
