//! Persisted account records and the domain rules that govern them.
//!
//! Records are plain borsh structs with fixed-width fields, so every record
//! kind has a constant serialized `SIZE`. Transitions here operate on
//! in-memory copies; the processor writes a record back only after its
//! transition returned `Ok`.

use borsh::{BorshDeserialize, BorshSerialize};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use solana_program::pubkey::Pubkey;

use crate::error::StakingError;

/// 100% in basis points.
pub const BPS_DENOMINATOR: u16 = 10_000;

/// Decimals of every pool's liquid-stake mint.
pub const LIQUID_STAKE_DECIMALS: u8 = 9;

fn ensure_bps(value: u16) -> Result<(), StakingError> {
    if value > BPS_DENOMINATOR {
        return Err(StakingError::InvalidParameter);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GlobalConfig
// ---------------------------------------------------------------------------

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct GlobalConfig {
    pub authority: Pubkey,
    pub protocol_fee_rate: u16,
    pub min_stake_amount: u64,
    pub max_pools: u32,
    pub pool_count: u32,
    pub mint: Pubkey,
    pub treasury: Pubkey,
    pub bump: u8,
    pub treasury_bump: u8,
}

impl GlobalConfig {
    // 32 + 2 + 8 + 4 + 4 + 32 + 32 + 1 + 1 = 116
    pub const SIZE: usize = 116;

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        authority: Pubkey,
        mint: Pubkey,
        treasury: Pubkey,
        protocol_fee_rate: u16,
        min_stake_amount: u64,
        max_pools: u32,
        bump: u8,
        treasury_bump: u8,
    ) -> Result<Self, StakingError> {
        ensure_bps(protocol_fee_rate)?;
        if min_stake_amount == 0 || max_pools == 0 {
            return Err(StakingError::InvalidParameter);
        }
        Ok(Self {
            authority,
            protocol_fee_rate,
            min_stake_amount,
            max_pools,
            pool_count: 0,
            mint,
            treasury,
            bump,
            treasury_bump,
        })
    }

    pub fn ensure_authority(&self, caller: &Pubkey) -> Result<(), StakingError> {
        if self.authority != *caller {
            return Err(StakingError::Unauthorized);
        }
        Ok(())
    }

    pub fn set_authority(&mut self, caller: &Pubkey, new_authority: Pubkey) -> Result<(), StakingError> {
        self.ensure_authority(caller)?;
        self.authority = new_authority;
        Ok(())
    }

    pub fn set_protocol_fee(&mut self, caller: &Pubkey, new_rate: u16) -> Result<(), StakingError> {
        self.ensure_authority(caller)?;
        ensure_bps(new_rate)?;
        self.protocol_fee_rate = new_rate;
        Ok(())
    }

    /// Reserve a slot for a new pool under this config.
    pub fn register_pool(&mut self) -> Result<(), StakingError> {
        if self.pool_count >= self.max_pools {
            return Err(StakingError::PoolCapExceeded);
        }
        self.pool_count = self.pool_count.checked_add(1).ok_or(StakingError::Overflow)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Pool enums
// ---------------------------------------------------------------------------

#[derive(BorshSerialize, BorshDeserialize, FromPrimitive, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCondition {
    DownTime,
    DoubleSign,
    InvalidAttestation,
    Censorship,
    Custom,
}

impl TryFrom<u8> for SlashCondition {
    type Error = StakingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(StakingError::InvalidParameter)
    }
}

#[derive(BorshSerialize, BorshDeserialize, FromPrimitive, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolStatus {
    Active,
    Paused,
    Deprecated,
    Emergency,
}

impl TryFrom<u8> for PoolStatus {
    type Error = StakingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(StakingError::InvalidParameter)
    }
}

// ---------------------------------------------------------------------------
// Pool parameters
// ---------------------------------------------------------------------------

/// Economic configuration supplied when a pool is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolParams {
    pub reward_rate_per_second: u64,
    pub lock_period_enabled: bool,
    pub lock_period_duration: i64,
    pub reward_multiplier: u16,
    pub early_withdraw_penalty: u64,
    pub slashing_enabled: bool,
    pub slashing_condition_type: SlashCondition,
    pub slash_percentage: u16,
    pub min_evidence_required: u8,
    pub cooldown_period: i64,
    pub maximum_stake_limit: u64,
    pub minimum_stake_amount: u64,
}

/// Accounts a new pool is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolAccounts {
    pub authority: Pubkey,
    pub creator: Pubkey,
    pub stake_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub stake_vault: Pubkey,
    pub reward_vault: Pubkey,
    pub liquid_stake_mint: Pubkey,
    pub price_feed_account: Pubkey,
}

// ---------------------------------------------------------------------------
// StakingPool
// ---------------------------------------------------------------------------

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct StakingPool {
    pub pool_id: u64,
    pub authority: Pubkey,
    pub creator: Pubkey,
    pub stake_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub stake_vault: Pubkey,
    pub reward_vault: Pubkey,
    pub liquid_stake_mint: Pubkey,
    pub reward_rate_per_second: u64,
    pub lock_period_enabled: bool,
    pub lock_period_duration: i64,
    pub reward_multiplier: u16,
    pub early_withdraw_penalty: u64,
    pub slashing_enabled: bool,
    pub slashing_condition_type: SlashCondition,
    pub slash_percentage: u16,
    pub min_evidence_required: u8,
    pub cooldown_period: i64,
    pub maximum_stake_limit: u64,
    pub minimum_stake_amount: u64,
    pub price_feed_account: Pubkey,
    pub total_staked: u64,
    /// Accumulated reward per staked token, scaled by 1e18.
    pub reward_index: u128,
    pub last_update_ts: i64,
    pub created_at: i64,
    pub status: PoolStatus,
    pub emergency_paused: bool,
    pub liquid_stake_supply: u64,
    pub total_reward_distributed: u64,
    pub bump: u8,
}

impl StakingPool {
    // 8 + 32*7 + 8 + 1 + 8 + 2 + 8 + 1 + 1 + 2 + 1 + 8 + 8 + 8 + 32
    //   + 8 + 16 + 8 + 8 + 1 + 1 + 8 + 8 + 1 = 379
    pub const SIZE: usize = 379;

    pub fn new(
        pool_id: u64,
        accounts: PoolAccounts,
        params: PoolParams,
        now: i64,
        bump: u8,
    ) -> Result<Self, StakingError> {
        let pool = Self {
            pool_id,
            authority: accounts.authority,
            creator: accounts.creator,
            stake_mint: accounts.stake_mint,
            reward_mint: accounts.reward_mint,
            stake_vault: accounts.stake_vault,
            reward_vault: accounts.reward_vault,
            liquid_stake_mint: accounts.liquid_stake_mint,
            reward_rate_per_second: params.reward_rate_per_second,
            lock_period_enabled: params.lock_period_enabled,
            lock_period_duration: params.lock_period_duration,
            reward_multiplier: params.reward_multiplier,
            early_withdraw_penalty: params.early_withdraw_penalty,
            slashing_enabled: params.slashing_enabled,
            slashing_condition_type: params.slashing_condition_type,
            slash_percentage: params.slash_percentage,
            min_evidence_required: params.min_evidence_required,
            cooldown_period: params.cooldown_period,
            maximum_stake_limit: params.maximum_stake_limit,
            minimum_stake_amount: params.minimum_stake_amount,
            price_feed_account: accounts.price_feed_account,
            total_staked: 0,
            reward_index: 0,
            last_update_ts: now,
            created_at: now,
            status: PoolStatus::Active,
            emergency_paused: false,
            liquid_stake_supply: 0,
            total_reward_distributed: 0,
            bump,
        };
        pool.validate()?;
        Ok(pool)
    }

    /// Invariants every committed pool satisfies.
    pub fn validate(&self) -> Result<(), StakingError> {
        if self.reward_multiplier == 0 {
            return Err(StakingError::InvalidParameter);
        }
        ensure_bps(self.slash_percentage)?;
        if self.minimum_stake_amount == 0 || self.minimum_stake_amount > self.maximum_stake_limit {
            return Err(StakingError::InvalidParameter);
        }
        if self.lock_period_enabled && self.lock_period_duration < 0 {
            return Err(StakingError::InvalidParameter);
        }
        if self.cooldown_period < 0 {
            return Err(StakingError::InvalidParameter);
        }
        Ok(())
    }

    pub fn ensure_authority(&self, caller: &Pubkey) -> Result<(), StakingError> {
        if self.authority != *caller {
            return Err(StakingError::Unauthorized);
        }
        Ok(())
    }

    /// Apply a single-field update. On error `self` is left untouched.
    pub fn apply_update(&mut self, update: PoolUpdate) -> Result<(), StakingError> {
        if self.emergency_paused
            && !matches!(update, PoolUpdate::Status(_) | PoolUpdate::EmergencyPause(_))
        {
            return Err(StakingError::PoolFrozen);
        }

        let mut next = self.clone();
        match update {
            PoolUpdate::RewardRatePerSecond(v) => next.reward_rate_per_second = v,
            PoolUpdate::LockPeriodDuration(v) => next.lock_period_duration = v,
            PoolUpdate::RewardMultiplier(v) => next.reward_multiplier = v,
            PoolUpdate::EarlyWithdrawPenalty(v) => next.early_withdraw_penalty = v,
            PoolUpdate::SlashPercentage(v) => next.slash_percentage = v,
            PoolUpdate::MinEvidenceRequired(v) => next.min_evidence_required = v,
            PoolUpdate::CooldownPeriod(v) => next.cooldown_period = v,
            PoolUpdate::MaximumStakeLimit(v) => {
                if v < next.total_staked {
                    return Err(StakingError::InvalidParameter);
                }
                next.maximum_stake_limit = v;
            }
            PoolUpdate::MinimumStakeAmount(v) => next.minimum_stake_amount = v,
            PoolUpdate::LockPeriodEnabled(v) => next.lock_period_enabled = v,
            PoolUpdate::SlashingEnabled(v) => next.slashing_enabled = v,
            PoolUpdate::SlashingConditionType(v) => next.slashing_condition_type = v,
            PoolUpdate::PriceFeedAccount(v) => next.price_feed_account = v,
            PoolUpdate::Status(v) => next.status = v,
            PoolUpdate::EmergencyPause(v) => {
                next.emergency_paused = v;
                if v {
                    next.status = PoolStatus::Emergency;
                }
            }
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    /// Returns `true` if the status changed.
    pub fn pause(&mut self) -> Result<bool, StakingError> {
        match self.status {
            PoolStatus::Active => {
                self.status = PoolStatus::Paused;
                Ok(true)
            }
            PoolStatus::Paused => Ok(false),
            _ => Err(StakingError::InvalidPoolStatus),
        }
    }

    /// Returns `true` if the status changed.
    pub fn resume(&mut self) -> Result<bool, StakingError> {
        match self.status {
            PoolStatus::Paused => {
                self.status = PoolStatus::Active;
                Ok(true)
            }
            PoolStatus::Active => Ok(false),
            _ => Err(StakingError::InvalidPoolStatus),
        }
    }
}

// ---------------------------------------------------------------------------
// Pool field updates
// ---------------------------------------------------------------------------

/// Wire tag of each updatable pool field.
#[derive(FromPrimitive, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolField {
    RewardRatePerSecond = 0,
    LockPeriodDuration = 1,
    RewardMultiplier = 2,
    EarlyWithdrawPenalty = 3,
    SlashPercentage = 4,
    MinEvidenceRequired = 5,
    CooldownPeriod = 6,
    MaximumStakeLimit = 7,
    MinimumStakeAmount = 8,
    LockPeriodEnabled = 9,
    SlashingEnabled = 10,
    SlashingConditionType = 11,
    PriceFeedAccount = 12,
    Status = 13,
    EmergencyPause = 14,
}

/// A decoded, bounds-checked single-field update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolUpdate {
    RewardRatePerSecond(u64),
    LockPeriodDuration(i64),
    RewardMultiplier(u16),
    EarlyWithdrawPenalty(u64),
    SlashPercentage(u16),
    MinEvidenceRequired(u8),
    CooldownPeriod(i64),
    MaximumStakeLimit(u64),
    MinimumStakeAmount(u64),
    LockPeriodEnabled(bool),
    SlashingEnabled(bool),
    SlashingConditionType(SlashCondition),
    PriceFeedAccount(Pubkey),
    Status(PoolStatus),
    EmergencyPause(bool),
}

fn flag(value: u64) -> Result<bool, StakingError> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(StakingError::InvalidParameter),
    }
}

fn positive_duration(value: u64) -> Result<i64, StakingError> {
    let duration = value as i64;
    if duration <= 0 {
        return Err(StakingError::InvalidParameter);
    }
    Ok(duration)
}

fn narrow<T: TryFrom<u64>>(value: u64) -> Result<T, StakingError> {
    T::try_from(value).map_err(|_| StakingError::InvalidParameter)
}

impl PoolUpdate {
    /// Decode a `(field_tag, value)` pair. `price_feed` is only read for
    /// `PoolField::PriceFeedAccount`, whose value travels as an account.
    pub fn from_raw(field_tag: u8, value: u64, price_feed: &Pubkey) -> Result<Self, StakingError> {
        let field = PoolField::from_u8(field_tag).ok_or(StakingError::InvalidParameter)?;
        let update = match field {
            PoolField::RewardRatePerSecond => {
                if value == 0 {
                    return Err(StakingError::InvalidParameter);
                }
                PoolUpdate::RewardRatePerSecond(value)
            }
            PoolField::LockPeriodDuration => PoolUpdate::LockPeriodDuration(positive_duration(value)?),
            PoolField::RewardMultiplier => {
                let v: u16 = narrow(value)?;
                if v == 0 {
                    return Err(StakingError::InvalidParameter);
                }
                PoolUpdate::RewardMultiplier(v)
            }
            PoolField::EarlyWithdrawPenalty => PoolUpdate::EarlyWithdrawPenalty(value),
            PoolField::SlashPercentage => PoolUpdate::SlashPercentage(narrow(value)?),
            PoolField::MinEvidenceRequired => {
                let v: u8 = narrow(value)?;
                if v == 0 {
                    return Err(StakingError::InvalidParameter);
                }
                PoolUpdate::MinEvidenceRequired(v)
            }
            PoolField::CooldownPeriod => PoolUpdate::CooldownPeriod(positive_duration(value)?),
            PoolField::MaximumStakeLimit => PoolUpdate::MaximumStakeLimit(value),
            PoolField::MinimumStakeAmount => {
                if value == 0 {
                    return Err(StakingError::InvalidParameter);
                }
                PoolUpdate::MinimumStakeAmount(value)
            }
            PoolField::LockPeriodEnabled => PoolUpdate::LockPeriodEnabled(flag(value)?),
            PoolField::SlashingEnabled => PoolUpdate::SlashingEnabled(flag(value)?),
            PoolField::SlashingConditionType => {
                PoolUpdate::SlashingConditionType(SlashCondition::try_from(narrow::<u8>(value)?)?)
            }
            PoolField::PriceFeedAccount => PoolUpdate::PriceFeedAccount(*price_feed),
            PoolField::Status => PoolUpdate::Status(PoolStatus::try_from(narrow::<u8>(value)?)?),
            PoolField::EmergencyPause => PoolUpdate::EmergencyPause(flag(value)?),
        };
        Ok(update)
    }
}

// ---------------------------------------------------------------------------
// OracleConfig
// ---------------------------------------------------------------------------

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct OracleConfig {
    pub oracle_authority: Pubkey,
    pub update_frequency_seconds: i64,
    pub current_price: u64,
    pub last_update_ts: i64,
    pub price_feed_account: Pubkey,
    pub bump: u8,
}

impl OracleConfig {
    // 32 + 8 + 8 + 8 + 32 + 1 = 89
    pub const SIZE: usize = 89;

    pub fn new(
        oracle_authority: Pubkey,
        price_feed_account: Pubkey,
        update_frequency_seconds: i64,
        initial_price: u64,
        now: i64,
        bump: u8,
    ) -> Result<Self, StakingError> {
        if update_frequency_seconds <= 0 {
            return Err(StakingError::InvalidParameter);
        }
        Ok(Self {
            oracle_authority,
            update_frequency_seconds,
            current_price: initial_price,
            last_update_ts: now,
            price_feed_account,
            bump,
        })
    }

    pub fn update_price(&mut self, caller: &Pubkey, new_price: u64, now: i64) -> Result<(), StakingError> {
        if self.oracle_authority != *caller {
            return Err(StakingError::Unauthorized);
        }
        let elapsed = now.saturating_sub(self.last_update_ts);
        if elapsed < self.update_frequency_seconds {
            return Err(StakingError::TooFrequent);
        }
        self.current_price = new_price;
        self.last_update_ts = now;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_params() -> PoolParams {
        PoolParams {
            reward_rate_per_second: 100,
            lock_period_enabled: true,
            lock_period_duration: 100_000,
            reward_multiplier: 150,
            early_withdraw_penalty: 500,
            slashing_enabled: true,
            slashing_condition_type: SlashCondition::DoubleSign,
            slash_percentage: 1_000,
            min_evidence_required: 5,
            cooldown_period: 100_000,
            maximum_stake_limit: 50_000,
            minimum_stake_amount: 10_000,
        }
    }

    fn sample_accounts(authority: Pubkey) -> PoolAccounts {
        PoolAccounts {
            authority,
            creator: authority,
            stake_mint: Pubkey::new_unique(),
            reward_mint: Pubkey::new_unique(),
            stake_vault: Pubkey::new_unique(),
            reward_vault: Pubkey::new_unique(),
            liquid_stake_mint: Pubkey::new_unique(),
            price_feed_account: Pubkey::new_unique(),
        }
    }

    fn sample_pool() -> StakingPool {
        StakingPool::new(33, sample_accounts(Pubkey::new_unique()), sample_params(), 1_700_000_000, 254)
            .unwrap()
    }

    fn sample_config(max_pools: u32) -> GlobalConfig {
        GlobalConfig::new(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            500,
            1_000_000,
            max_pools,
            255,
            254,
        )
        .unwrap()
    }

    #[test]
    fn test_record_sizes() {
        assert_eq!(borsh::to_vec(&sample_config(1)).unwrap().len(), GlobalConfig::SIZE);
        assert_eq!(borsh::to_vec(&sample_pool()).unwrap().len(), StakingPool::SIZE);
        let oracle = OracleConfig::new(Pubkey::new_unique(), Pubkey::new_unique(), 60, 1, 0, 255).unwrap();
        assert_eq!(borsh::to_vec(&oracle).unwrap().len(), OracleConfig::SIZE);
    }

    #[test]
    fn test_record_kinds_do_not_cross_decode() {
        let config_bytes = borsh::to_vec(&sample_config(1)).unwrap();
        assert!(StakingPool::try_from_slice(&config_bytes).is_err());
        assert!(OracleConfig::try_from_slice(&config_bytes).is_err());
    }

    #[test]
    fn test_global_config_rejects_bad_fee() {
        let result = GlobalConfig::new(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            10_001,
            1,
            1,
            255,
            255,
        );
        assert_eq!(result, Err(StakingError::InvalidParameter));
    }

    #[test]
    fn test_fee_update_bounds_and_authority() {
        let mut config = sample_config(10);
        let authority = config.authority;

        assert_eq!(config.set_protocol_fee(&authority, 10_001), Err(StakingError::InvalidParameter));
        assert_eq!(config.protocol_fee_rate, 500);
        assert_eq!(
            config.set_protocol_fee(&Pubkey::new_unique(), 100),
            Err(StakingError::Unauthorized)
        );
        config.set_protocol_fee(&authority, 10_000).unwrap();
        assert_eq!(config.protocol_fee_rate, 10_000);
    }

    #[test]
    fn test_authority_transfer() {
        let mut config = sample_config(10);
        let old = config.authority;
        let new = Pubkey::new_unique();
        config.set_authority(&old, new).unwrap();
        assert_eq!(config.authority, new);
        assert_eq!(config.set_authority(&old, old), Err(StakingError::Unauthorized));
    }

    #[test]
    fn test_pool_cap() {
        let mut config = sample_config(2);
        config.register_pool().unwrap();
        config.register_pool().unwrap();
        assert_eq!(config.register_pool(), Err(StakingError::PoolCapExceeded));
        assert_eq!(config.pool_count, 2);
    }

    #[test]
    fn test_pool_creation_validation() {
        let accounts = sample_accounts(Pubkey::new_unique());

        let mut params = sample_params();
        params.reward_multiplier = 0;
        assert_eq!(
            StakingPool::new(1, accounts, params, 0, 255),
            Err(StakingError::InvalidParameter)
        );

        let mut params = sample_params();
        params.slash_percentage = 10_001;
        assert_eq!(
            StakingPool::new(1, accounts, params, 0, 255),
            Err(StakingError::InvalidParameter)
        );

        let mut params = sample_params();
        params.minimum_stake_amount = 0;
        assert_eq!(
            StakingPool::new(1, accounts, params, 0, 255),
            Err(StakingError::InvalidParameter)
        );

        let mut params = sample_params();
        params.minimum_stake_amount = params.maximum_stake_limit + 1;
        assert_eq!(
            StakingPool::new(1, accounts, params, 0, 255),
            Err(StakingError::InvalidParameter)
        );

        let mut params = sample_params();
        params.lock_period_duration = -1;
        assert_eq!(
            StakingPool::new(1, accounts, params, 0, 255),
            Err(StakingError::InvalidParameter)
        );
        params.lock_period_enabled = false;
        assert!(StakingPool::new(1, accounts, params, 0, 255).is_ok());
    }

    #[test]
    fn test_new_pool_runtime_state() {
        let pool = sample_pool();
        assert_eq!(pool.total_staked, 0);
        assert_eq!(pool.reward_index, 0);
        assert_eq!(pool.last_update_ts, 1_700_000_000);
        assert_eq!(pool.status, PoolStatus::Active);
    }

    #[test]
    fn test_reward_rate_update_touches_one_field() {
        let mut pool = sample_pool();
        let before = pool.clone();
        let update = PoolUpdate::from_raw(0, 200, &Pubkey::new_unique()).unwrap();
        pool.apply_update(update).unwrap();

        assert_eq!(pool.reward_rate_per_second, 200);
        let mut expected = before;
        expected.reward_rate_per_second = 200;
        assert_eq!(pool, expected);
    }

    #[test]
    fn test_update_bounds() {
        let feed = Pubkey::new_unique();
        assert_eq!(PoolUpdate::from_raw(0, 0, &feed), Err(StakingError::InvalidParameter));
        assert_eq!(PoolUpdate::from_raw(2, 0, &feed), Err(StakingError::InvalidParameter));
        assert_eq!(PoolUpdate::from_raw(2, 70_000, &feed), Err(StakingError::InvalidParameter));
        assert_eq!(PoolUpdate::from_raw(1, (-5i64) as u64, &feed), Err(StakingError::InvalidParameter));
        assert_eq!(PoolUpdate::from_raw(9, 2, &feed), Err(StakingError::InvalidParameter));
        assert_eq!(PoolUpdate::from_raw(11, 5, &feed), Err(StakingError::InvalidParameter));
        assert_eq!(PoolUpdate::from_raw(15, 0, &feed), Err(StakingError::InvalidParameter));
        assert_eq!(PoolUpdate::from_raw(12, 0, &feed), Ok(PoolUpdate::PriceFeedAccount(feed)));

        let mut pool = sample_pool();
        let update = PoolUpdate::from_raw(4, 10_001, &feed).unwrap();
        assert_eq!(pool.apply_update(update), Err(StakingError::InvalidParameter));
        assert_eq!(pool.slash_percentage, 1_000);

        let update = PoolUpdate::from_raw(8, 60_000, &feed).unwrap();
        assert_eq!(pool.apply_update(update), Err(StakingError::InvalidParameter));
        let update = PoolUpdate::from_raw(7, 9_999, &feed).unwrap();
        assert_eq!(pool.apply_update(update), Err(StakingError::InvalidParameter));
        assert_eq!(pool.maximum_stake_limit, 50_000);
    }

    #[test]
    fn test_emergency_pause_freezes_config() {
        let mut pool = sample_pool();
        pool.apply_update(PoolUpdate::EmergencyPause(true)).unwrap();
        assert_eq!(pool.status, PoolStatus::Emergency);
        assert_eq!(
            pool.apply_update(PoolUpdate::RewardRatePerSecond(5)),
            Err(StakingError::PoolFrozen)
        );

        pool.apply_update(PoolUpdate::EmergencyPause(false)).unwrap();
        pool.apply_update(PoolUpdate::Status(PoolStatus::Active)).unwrap();
        pool.apply_update(PoolUpdate::RewardRatePerSecond(5)).unwrap();
        assert_eq!(pool.reward_rate_per_second, 5);
    }

    #[test]
    fn test_pause_resume_transitions() {
        let mut pool = sample_pool();
        assert_eq!(pool.resume(), Ok(false));
        assert_eq!(pool.pause(), Ok(true));
        assert_eq!(pool.pause(), Ok(false));
        assert_eq!(pool.status, PoolStatus::Paused);
        assert_eq!(pool.resume(), Ok(true));
        assert_eq!(pool.status, PoolStatus::Active);

        pool.status = PoolStatus::Deprecated;
        assert_eq!(pool.pause(), Err(StakingError::InvalidPoolStatus));
        assert_eq!(pool.resume(), Err(StakingError::InvalidPoolStatus));
    }

    #[test]
    fn test_oracle_throttle() {
        let authority = Pubkey::new_unique();
        let mut oracle = OracleConfig::new(authority, Pubkey::new_unique(), 60, 1_000, 100, 255).unwrap();

        assert_eq!(oracle.update_price(&authority, 2_000, 159), Err(StakingError::TooFrequent));
        assert_eq!(oracle.current_price, 1_000);
        assert_eq!(oracle.last_update_ts, 100);

        oracle.update_price(&authority, 2_000, 160).unwrap();
        assert_eq!(oracle.current_price, 2_000);
        assert_eq!(oracle.last_update_ts, 160);

        assert_eq!(
            oracle.update_price(&Pubkey::new_unique(), 3_000, 1_000),
            Err(StakingError::Unauthorized)
        );
    }

    #[test]
    fn test_oracle_rejects_non_positive_frequency() {
        let result = OracleConfig::new(Pubkey::new_unique(), Pubkey::new_unique(), 0, 1, 0, 255);
        assert_eq!(result, Err(StakingError::InvalidParameter));
    }
}
