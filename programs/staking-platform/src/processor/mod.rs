//! Instruction dispatch and the helpers every handler shares.

mod global_config;
mod oracle;
mod pool;

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    program::invoke_signed,
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    system_instruction, system_program,
    sysvar::Sysvar,
};

use crate::{error::StakingError, instruction::StakingInstruction};

// ---------------------------------------------------------------------------
// Entrypoint
// ---------------------------------------------------------------------------

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = StakingInstruction::unpack(instruction_data)?;
    check_accounts(accounts, account_layout(&instruction))?;

    match instruction {
        StakingInstruction::InitConfig(args) => {
            global_config::process_init_config(program_id, accounts, args)
        }
        StakingInstruction::UpdateAuthority(args) => {
            global_config::process_update_authority(program_id, accounts, args)
        }
        StakingInstruction::UpdateProtocolFees(args) => {
            global_config::process_update_protocol_fee(program_id, accounts, args)
        }
        StakingInstruction::CreateStakingPool(args) => {
            pool::process_create_staking_pool(program_id, accounts, args)
        }
        StakingInstruction::UpdatePoolConfig(args) => {
            pool::process_update_pool_config(program_id, accounts, args)
        }
        StakingInstruction::PausePool(args) => pool::process_pause_pool(program_id, accounts, args),
        StakingInstruction::ResumePool(args) => pool::process_resume_pool(program_id, accounts, args),
        StakingInstruction::InitOracleConfig(args) => {
            oracle::process_init_oracle_config(program_id, accounts, args)
        }
        StakingInstruction::UpdateOraclePrice(args) => {
            oracle::process_update_oracle_price(program_id, accounts, args)
        }
        StakingInstruction::GetOraclePrice => oracle::process_get_oracle_price(program_id, accounts),
    }
}

// ---------------------------------------------------------------------------
// Account layouts
// ---------------------------------------------------------------------------

/// Minimum privileges for one position in an instruction's account list.
#[derive(Debug, Clone, Copy)]
struct AccountRule {
    signer: bool,
    writable: bool,
    program: Option<Pubkey>,
}

const READONLY: AccountRule = AccountRule { signer: false, writable: false, program: None };
const WRITABLE: AccountRule = AccountRule { signer: false, writable: true, program: None };
const SIGNER: AccountRule = AccountRule { signer: true, writable: false, program: None };
const PAYER: AccountRule = AccountRule { signer: true, writable: true, program: None };
const SYSTEM_PROGRAM: AccountRule = AccountRule {
    signer: false,
    writable: false,
    program: Some(system_program::ID),
};
const TOKEN_PROGRAM: AccountRule = AccountRule {
    signer: false,
    writable: false,
    program: Some(spl_token::ID),
};

const INIT_CONFIG_ACCOUNTS: &[AccountRule] =
    &[PAYER, READONLY, WRITABLE, WRITABLE, SYSTEM_PROGRAM, TOKEN_PROGRAM];
const CONFIG_UPDATE_ACCOUNTS: &[AccountRule] = &[SIGNER, WRITABLE];
const CREATE_POOL_ACCOUNTS: &[AccountRule] = &[
    SIGNER,         // authority
    PAYER,          // creator
    READONLY,       // stake_mint
    READONLY,       // reward_mint
    WRITABLE,       // stake_vault
    WRITABLE,       // reward_vault
    WRITABLE,       // staking_pool
    WRITABLE,       // global_config
    WRITABLE,       // liquid_stake_mint
    READONLY,       // price_feed
    SYSTEM_PROGRAM,
    TOKEN_PROGRAM,
];
const UPDATE_POOL_ACCOUNTS: &[AccountRule] = &[SIGNER, WRITABLE, READONLY];
const POOL_STATUS_ACCOUNTS: &[AccountRule] = &[SIGNER, WRITABLE];
const INIT_ORACLE_ACCOUNTS: &[AccountRule] = &[PAYER, WRITABLE, READONLY, SYSTEM_PROGRAM];
const UPDATE_ORACLE_ACCOUNTS: &[AccountRule] = &[SIGNER, WRITABLE];
const GET_ORACLE_ACCOUNTS: &[AccountRule] = &[READONLY, READONLY];

fn account_layout(instruction: &StakingInstruction) -> &'static [AccountRule] {
    match instruction {
        StakingInstruction::InitConfig(_) => INIT_CONFIG_ACCOUNTS,
        StakingInstruction::UpdateAuthority(_) | StakingInstruction::UpdateProtocolFees(_) => {
            CONFIG_UPDATE_ACCOUNTS
        }
        StakingInstruction::CreateStakingPool(_) => CREATE_POOL_ACCOUNTS,
        StakingInstruction::UpdatePoolConfig(_) => UPDATE_POOL_ACCOUNTS,
        StakingInstruction::PausePool(_) | StakingInstruction::ResumePool(_) => POOL_STATUS_ACCOUNTS,
        StakingInstruction::InitOracleConfig(_) => INIT_ORACLE_ACCOUNTS,
        StakingInstruction::UpdateOraclePrice(_) => UPDATE_ORACLE_ACCOUNTS,
        StakingInstruction::GetOraclePrice => GET_ORACLE_ACCOUNTS,
    }
}

/// Extra privileges are fine: a key listed twice in one transaction carries
/// the union of its flags.
fn check_accounts(accounts: &[AccountInfo], layout: &[AccountRule]) -> ProgramResult {
    if accounts.len() != layout.len() {
        return Err(StakingError::MalformedAccounts.into());
    }
    for (account, rule) in accounts.iter().zip(layout) {
        if rule.signer && !account.is_signer {
            return Err(StakingError::MalformedAccounts.into());
        }
        if rule.writable && !account.is_writable {
            return Err(StakingError::MalformedAccounts.into());
        }
        if let Some(program) = rule.program {
            if *account.key != program {
                return Err(StakingError::MalformedAccounts.into());
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn assert_address(account: &AccountInfo, expected: &Pubkey) -> ProgramResult {
    if account.key != expected {
        return Err(StakingError::InvalidPDA.into());
    }
    Ok(())
}

/// Read a program-owned record. The data must decode to exactly one record
/// of type `T`, which also keeps record kinds from being confused.
fn load<T: BorshDeserialize>(account: &AccountInfo, program_id: &Pubkey) -> Result<T, ProgramError> {
    if account.data_is_empty() {
        return Err(StakingError::NotInitialized.into());
    }
    if account.owner != program_id {
        return Err(StakingError::InvalidOwner.into());
    }
    T::try_from_slice(&account.data.borrow()).map_err(|_| ProgramError::InvalidAccountData)
}

fn store<T: BorshSerialize>(record: &T, account: &AccountInfo) -> ProgramResult {
    record.serialize(&mut &mut account.data.borrow_mut()[..])?;
    Ok(())
}

fn create_pda_account<'a>(
    payer: &AccountInfo<'a>,
    space: usize,
    owner: &Pubkey,
    system_program: &AccountInfo<'a>,
    new_account: &AccountInfo<'a>,
    seeds: &[&[u8]],
) -> ProgramResult {
    let rent = Rent::get()?;
    let lamports = rent.minimum_balance(space);

    invoke_signed(
        &system_instruction::create_account(payer.key, new_account.key, lamports, space as u64, owner),
        &[payer.clone(), new_account.clone(), system_program.clone()],
        &[seeds],
    )
}
