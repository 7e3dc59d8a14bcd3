//! Deposit instruction handler.
//!
//! Handles depositing tokens into a reward tier.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::Deposited;
use crate::state::{AccountState, DepositRecord, StakingConfig};

/// Accounts required for depositing.
#[derive(Accounts)]
#[instruction(tier_id: u8)]
pub struct Deposit<'info> {
    /// The account holder depositing tokens.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The staking config.
    #[account(
        mut,
        seeds = [STAKING_CONFIG_SEED, staking_config.staking_mint.as_ref()],
        bump = staking_config.bump,
        has_one = staking_vault @ StakingError::VaultMismatch,
        has_one = staking_mint @ StakingError::MintMismatch
    )]
    pub staking_config: Account<'info, StakingConfig>,

    /// User's gate and cooldown state. Only the owner's allow-list call makes it usable.
    #[account(
        init_if_needed,
        payer = user,
        space = AccountState::LEN,
        seeds = [ACCOUNT_STATE_SEED, staking_config.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub account_state: Account<'info, AccountState>,

    /// User's record for this tier (created on first deposit into the tier).
    #[account(
        init_if_needed,
        payer = user,
        space = DepositRecord::LEN,
        seeds = [
            DEPOSIT_RECORD_SEED,
            staking_config.key().as_ref(),
            user.key().as_ref(),
            tier_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub deposit_record: Account<'info, DepositRecord>,

    /// The staking token mint.
    pub staking_mint: Account<'info, Mint>,

    /// User's token account the deposit is drawn from.
    #[account(
        mut,
        constraint = user_token_account.mint == staking_mint.key() @ StakingError::MintMismatch,
        constraint = user_token_account.owner == user.key()
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// The config's vault.
    #[account(
        mut,
        constraint = staking_vault.key() == staking_config.staking_vault @ StakingError::VaultMismatch
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar.
    pub rent: Sysvar<'info, Rent>,
}

/// Outcome of an applied deposit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepositReceipt {
    /// Reward earned by this deposit alone.
    pub reward: u64,
    /// Unlock time of the record after this deposit.
    pub unlock_time: i64,
}

/// Reward for a deposit: `floor(amount * reward_rate / 10000)`.
///
/// Fractions below one base unit are dropped and never paid.
pub fn calculate_reward(amount: u64, reward_rate: u16) -> Result<u64> {
    let reward = (amount as u128)
        .checked_mul(reward_rate as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_div(BASIS_POINTS_DENOMINATOR as u128)
        .ok_or(StakingError::MathOverflow)?;

    let reward_u64 = u64::try_from(reward).map_err(|_| StakingError::MathOverflow)?;

    Ok(reward_u64)
}

/// Validate and apply a deposit to the ledger.
///
/// Checks run in a fixed order and every check precedes every write, so a
/// failure leaves all three accounts untouched.
pub fn apply_deposit(
    config: &mut StakingConfig,
    state: &mut AccountState,
    record: &mut DepositRecord,
    tier_id: u8,
    amount: u64,
    now: i64,
) -> Result<DepositReceipt> {
    state.ensure_allowed()?;
    state.ensure_cooldown_elapsed(now, config.deposit_cooldown)?;
    require!(amount > 0, StakingError::ZeroAmount);
    let tier = config.valid_tier(tier_id)?;

    let reward = calculate_reward(amount, tier.reward_rate)?;

    let total_deposited = config
        .total_deposited
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;
    let total_reward_owed = config
        .total_reward_owed
        .checked_add(reward)
        .ok_or(StakingError::MathOverflow)?;

    let unlock_time = record.accrue(amount, reward, now, tier.lock_time)?;
    state.last_deposit_time = now;
    config.total_deposited = total_deposited;
    config.total_reward_owed = total_reward_owed;
    config.last_updated = now;

    Ok(DepositReceipt {
        reward,
        unlock_time,
    })
}

/// Deposit tokens into a tier.
///
/// The ledger is updated before the token transfer is issued. A failed
/// transfer fails the instruction, which discards those writes.
pub fn handler(ctx: Context<Deposit>, tier_id: u8, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let user = ctx.accounts.user.key();
    let config_key = ctx.accounts.staking_config.key();

    ctx.accounts
        .account_state
        .bind(user, config_key, ctx.bumps.account_state)?;
    ctx.accounts
        .deposit_record
        .bind(user, config_key, tier_id, ctx.bumps.deposit_record)?;

    let receipt = apply_deposit(
        &mut ctx.accounts.staking_config,
        &mut ctx.accounts.account_state,
        &mut ctx.accounts.deposit_record,
        tier_id,
        amount,
        clock.unix_timestamp,
    )?;

    // Transfer tokens from user to vault
    let cpi_accounts = Transfer {
        from: ctx.accounts.user_token_account.to_account_info(),
        to: ctx.accounts.staking_vault.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    msg!("Deposited {} tokens in tier {}", amount, tier_id);
    msg!("Reward: {}, unlock time: {}", receipt.reward, receipt.unlock_time);
    msg!(
        "Tier balance: {} (+{} reward)",
        ctx.accounts.deposit_record.amount,
        ctx.accounts.deposit_record.reward
    );

    emit!(Deposited {
        account: user,
        amount,
        tier_id,
        reward: receipt.reward,
        unlock_time: receipt.unlock_time,
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{allowed_state, assert_staking_err, new_config, T0};

    #[test]
    fn reward_is_floored() {
        assert_eq!(calculate_reward(1_000, 500).unwrap(), 50);
        assert_eq!(calculate_reward(199, 500).unwrap(), 9);
        assert_eq!(calculate_reward(19, 500).unwrap(), 0);
        assert_eq!(calculate_reward(1, 9_999).unwrap(), 0);
        assert_eq!(calculate_reward(u64::MAX, 10_000).unwrap(), u64::MAX);
    }

    #[test]
    fn reward_above_u64_overflows() {
        assert_staking_err(calculate_reward(u64::MAX, 10_001), StakingError::MathOverflow);
    }

    #[test]
    fn first_deposit_sets_reward_and_unlock_time() {
        let mut config = new_config(Pubkey::new_unique());
        let mut state = allowed_state();
        let mut record = DepositRecord::default();

        let receipt = apply_deposit(&mut config, &mut state, &mut record, 1, 1_000, T0).unwrap();

        assert_eq!(
            receipt,
            DepositReceipt { reward: 50, unlock_time: T0 + 7 * SECONDS_PER_DAY }
        );
        assert_eq!(record.amount, 1_000);
        assert_eq!(record.reward, 50);
        assert_eq!(state.last_deposit_time, T0);
        assert_eq!(config.total_deposited, 1_000);
        assert_eq!(config.total_reward_owed, 50);
    }

    #[test]
    fn repeated_deposits_accumulate_and_compound_unlock() {
        let mut config = new_config(Pubkey::new_unique());
        let mut state = allowed_state();
        let mut record = DepositRecord::default();
        let lock = 14 * SECONDS_PER_DAY;

        let amounts = [1_999u64, 10_001, 7];
        let mut now = T0;
        let mut expected_unlock = 0i64;
        let mut expected_reward = 0u64;
        for amount in amounts {
            let receipt = apply_deposit(&mut config, &mut state, &mut record, 2, amount, now).unwrap();
            expected_unlock += now + lock;
            expected_reward += amount * 1_000 / 10_000;
            assert_eq!(receipt.unlock_time, expected_unlock);
            now += SECONDS_PER_DAY;
        }

        assert_eq!(record.amount, amounts.iter().sum::<u64>());
        assert_eq!(record.reward, expected_reward);
        assert_eq!(record.reward, 199 + 1_000);
        assert_eq!(record.unlock_time, expected_unlock);
    }

    #[test]
    fn not_allowed_is_checked_first() {
        let mut config = new_config(Pubkey::new_unique());
        let mut state = AccountState::default();
        let mut record = DepositRecord::default();

        assert_staking_err(
            apply_deposit(&mut config, &mut state, &mut record, 0, 0, T0),
            StakingError::NotAllowed,
        );
    }

    #[test]
    fn cooldown_spans_all_tiers() {
        let mut config = new_config(Pubkey::new_unique());
        let mut state = allowed_state();
        let mut tier_1 = DepositRecord::default();
        let mut tier_3 = DepositRecord::default();

        apply_deposit(&mut config, &mut state, &mut tier_1, 1, 100, T0).unwrap();

        assert_staking_err(
            apply_deposit(&mut config, &mut state, &mut tier_3, 3, 100, T0 + SECONDS_PER_DAY - 1),
            StakingError::CooldownActive,
        );
        assert_eq!(tier_3, DepositRecord::default());

        apply_deposit(&mut config, &mut state, &mut tier_3, 3, 100, T0 + SECONDS_PER_DAY).unwrap();
        assert_eq!(state.last_deposit_time, T0 + SECONDS_PER_DAY);
    }

    #[test]
    fn cooldown_is_checked_before_amount_and_tier() {
        let mut config = new_config(Pubkey::new_unique());
        let mut state = allowed_state();
        state.last_deposit_time = T0;
        let mut record = DepositRecord::default();

        assert_staking_err(
            apply_deposit(&mut config, &mut state, &mut record, 0, 0, T0 + 1),
            StakingError::CooldownActive,
        );
    }

    #[test]
    fn zero_amount_is_checked_before_tier() {
        let mut config = new_config(Pubkey::new_unique());
        let mut state = allowed_state();
        let mut record = DepositRecord::default();

        assert_staking_err(
            apply_deposit(&mut config, &mut state, &mut record, 9, 0, T0),
            StakingError::ZeroAmount,
        );
    }

    #[test]
    fn tiers_without_lock_time_are_rejected() {
        let owner = Pubkey::new_unique();
        let mut config = new_config(owner);
        config.set_tier(2, 1_000, 0).unwrap();
        let mut state = allowed_state();
        let mut record = DepositRecord::default();

        for tier_id in [0u8, 2, 4, MAX_TIERS as u8, u8::MAX] {
            assert_staking_err(
                apply_deposit(&mut config, &mut state, &mut record, tier_id, 100, T0),
                StakingError::InvalidTier,
            );
        }
        assert_eq!(state.last_deposit_time, 0);
        assert_eq!(config.total_deposited, 0);
    }

    #[test]
    fn overflow_leaves_state_untouched() {
        let mut config = new_config(Pubkey::new_unique());
        let mut state = allowed_state();
        let mut record = DepositRecord {
            amount: u64::MAX - 10,
            ..Default::default()
        };

        assert_staking_err(
            apply_deposit(&mut config, &mut state, &mut record, 1, 100, T0),
            StakingError::MathOverflow,
        );
        assert_eq!(record.amount, u64::MAX - 10);
        assert_eq!(state.last_deposit_time, 0);
        assert_eq!(config.total_deposited, 0);
    }

    #[test]
    fn deposit_onto_claimed_record_accumulates_from_zero() {
        let mut config = new_config(Pubkey::new_unique());
        let mut state = allowed_state();
        let mut record = DepositRecord {
            claimed: true,
            ..Default::default()
        };

        apply_deposit(&mut config, &mut state, &mut record, 1, 400, T0).unwrap();

        assert_eq!(record.amount, 400);
        assert_eq!(record.reward, 20);
        assert!(record.claimed);
    }
}
