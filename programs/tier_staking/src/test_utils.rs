//! Shared fixtures for the in-crate unit tests.

use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::state::{AccountState, StakingConfig, Tier};

/// A plausible cluster timestamp, well past the default cooldown.
pub const T0: i64 = 1_700_000_000;

pub fn new_config(authority: Pubkey) -> StakingConfig {
    let mut config = StakingConfig {
        authority,
        staking_mint: Pubkey::new_unique(),
        staking_vault: Pubkey::new_unique(),
        deposit_cooldown: DEFAULT_DEPOSIT_COOLDOWN,
        tiers: [Tier::default(); MAX_TIERS],
        total_deposited: 0,
        total_reward_owed: 0,
        total_paid_out: 0,
        last_updated: 0,
        created_at: 0,
        vault_bump: 255,
        bump: 255,
    };
    config.seed_default_tiers().unwrap();
    config
}

pub fn allowed_state() -> AccountState {
    AccountState {
        owner: Pubkey::new_unique(),
        config: Pubkey::new_unique(),
        allowed: true,
        ..Default::default()
    }
}

#[track_caller]
pub fn assert_staking_err<T: std::fmt::Debug>(result: Result<T>, expected: StakingError) {
    match result {
        Err(Error::AnchorError(err)) => {
            assert_eq!(err.error_code_number, u32::from(expected), "{}", err.error_msg)
        }
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
