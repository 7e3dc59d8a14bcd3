//! Events emitted by the Tier Staking program.

use anchor_lang::prelude::*;

#[event]
pub struct StakingInitialized {
    pub authority: Pubkey,
    pub staking_mint: Pubkey,
    pub deposit_cooldown: i64,
}

#[event]
pub struct TierUpdated {
    pub tier_id: u8,
    pub reward_rate: u16,
    pub lock_time: i64,
}

#[event]
pub struct AllowlistChanged {
    pub account: Pubkey,
    pub status: bool,
}

#[event]
pub struct CooldownUpdated {
    pub old_cooldown: i64,
    pub new_cooldown: i64,
}

/// `reward` is the reward of this deposit alone; `unlock_time` is the
/// record's unlock time after the deposit.
#[event]
pub struct Deposited {
    pub account: Pubkey,
    pub amount: u64,
    pub tier_id: u8,
    pub reward: u64,
    pub unlock_time: i64,
}

#[event]
pub struct Claimed {
    pub account: Pubkey,
    pub total: u64,
}

#[event]
pub struct VaultFunded {
    pub funder: Pubkey,
    pub amount: u64,
}
