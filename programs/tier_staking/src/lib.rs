//! # Tier Staking Program
//!
//! A tiered, time-locked staking program for a single SPL token.
//! Allow-listed accounts deposit into one of several reward tiers and,
//! once the tier's lock has passed, claim principal plus a fixed reward.
//!
//! Default tiers:
//! - **Tier 1**: 7-day lock, 5% reward
//! - **Tier 2**: 14-day lock, 10% reward
//! - **Tier 3**: 30-day lock, 15% reward
//!
//! ## Rules
//! - Reward is fixed at deposit time: `amount * reward_rate / 10000`, floored
//! - One deposit per account per cooldown window (1 day by default), across all tiers
//! - Every deposit into a tier adds `now + lock_time` to that tier's unlock time
//! - An account claims at most once, ever, across all tiers
//! - Ledger writes land before any token transfer is issued

use anchor_lang::prelude::*;

declare_id!("6gTnaZpcYLaMzqq9JRrY55iWsfd81QmJn5bEU2v4K4iJ");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

#[cfg(test)]
mod test_utils;

use instructions::*;
use state::{DepositView, Tier};

#[program]
pub mod tier_staking {
    use super::*;

    /// Creates the staking config and vault for a mint, seeded with the
    /// default tiers and cooldown. The signer becomes the owner.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Owner-only: replaces one tier's reward rate and lock time.
    ///
    /// # Errors
    /// - `Unauthorized` if the caller is not the owner
    /// - `InvalidTier` if `tier_id` is 0 or has no slot
    pub fn set_tier(
        ctx: Context<AdminControl>,
        tier_id: u8,
        reward_rate: u16,
        lock_time: i64,
    ) -> Result<()> {
        instructions::admin::set_tier_handler(ctx, tier_id, reward_rate, lock_time)
    }

    /// Owner-only: adds or removes `account` from the allow-list.
    ///
    /// # Errors
    /// - `Unauthorized` if the caller is not the owner
    pub fn set_allowed(ctx: Context<SetAllowed>, account: Pubkey, status: bool) -> Result<()> {
        instructions::admin::set_allowed_handler(ctx, account, status)
    }

    /// Owner-only: changes the per-account deposit cooldown (seconds).
    ///
    /// # Errors
    /// - `Unauthorized` if the caller is not the owner
    /// - `InvalidCooldown` if `cooldown` is negative
    pub fn set_deposit_cooldown(ctx: Context<AdminControl>, cooldown: i64) -> Result<()> {
        instructions::admin::set_deposit_cooldown_handler(ctx, cooldown)
    }

    /// Deposits `amount` tokens into `tier_id`.
    ///
    /// # Errors
    /// Checked in this order:
    /// - `NotAllowed` if the caller is not allow-listed
    /// - `CooldownActive` if the caller deposited less than one cooldown ago
    /// - `ZeroAmount` if amount is zero
    /// - `InvalidTier` if the tier has no lock time
    pub fn deposit(ctx: Context<Deposit>, tier_id: u8, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, tier_id, amount)
    }

    /// Claims principal plus reward of `tier_id`.
    ///
    /// # Errors
    /// Checked in this order:
    /// - `NotAllowed` if the caller is not allow-listed
    /// - `InvalidTier` if the tier has no lock time
    /// - `NoActiveDeposit` if nothing is deposited in the tier
    /// - `AlreadyClaimed` if the caller has claimed before, in any tier
    /// - `DepositLocked` if the unlock time has not passed
    /// - `InsufficientVaultFunds` if the vault cannot cover the payout
    pub fn claim(ctx: Context<Claim>, tier_id: u8) -> Result<()> {
        instructions::claim::handler(ctx, tier_id)
    }

    /// Funds the vault that pays out rewards. Permissionless.
    pub fn fund_vault(ctx: Context<FundVault>, amount: u64) -> Result<()> {
        instructions::fund_vault::handler(ctx, amount)
    }

    /// Returns the tier stored under `tier_id` (zero if unset).
    pub fn get_tier(ctx: Context<GetTier>, tier_id: u8) -> Result<Tier> {
        instructions::views::get_tier_handler(ctx, tier_id)
    }

    /// Returns `(amount, reward, unlock_time, claimed)` for an account and tier.
    pub fn get_deposit(
        ctx: Context<GetDeposit>,
        account: Pubkey,
        tier_id: u8,
    ) -> Result<DepositView> {
        instructions::views::get_deposit_handler(ctx, account, tier_id)
    }
}
