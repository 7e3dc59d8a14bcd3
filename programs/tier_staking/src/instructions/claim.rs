//! Claim instruction handler.
//!
//! Pays out principal plus reward of one tier, once per account.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::Claimed;
use crate::state::{AccountState, DepositRecord, StakingConfig};

/// Accounts required for claiming.
#[derive(Accounts)]
#[instruction(tier_id: u8)]
pub struct Claim<'info> {
    /// The account holder claiming.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The staking config. Signs the vault transfer.
    #[account(
        mut,
        seeds = [STAKING_CONFIG_SEED, staking_config.staking_mint.as_ref()],
        bump = staking_config.bump,
        has_one = staking_vault @ StakingError::VaultMismatch,
        has_one = staking_mint @ StakingError::MintMismatch
    )]
    pub staking_config: Account<'info, StakingConfig>,

    /// User's gate state.
    #[account(
        init_if_needed,
        payer = user,
        space = AccountState::LEN,
        seeds = [ACCOUNT_STATE_SEED, staking_config.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub account_state: Account<'info, AccountState>,

    /// User's record for the claimed tier.
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

    /// User's token account receiving the payout.
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
}

/// Validate and apply a claim to the ledger. Returns the amount to pay out.
///
/// The account-wide claimed flag is set here, so one successful claim on any
/// tier blocks every later claim of the account, on any tier.
pub fn apply_claim(
    config: &mut StakingConfig,
    state: &mut AccountState,
    record: &mut DepositRecord,
    tier_id: u8,
    vault_balance: u64,
    now: i64,
) -> Result<u64> {
    state.ensure_allowed()?;
    config.valid_tier(tier_id)?;
    require!(record.is_active(), StakingError::NoActiveDeposit);
    state.ensure_not_claimed()?;
    record.ensure_unlocked(now)?;

    let total = record.payout()?;
    require!(vault_balance >= total, StakingError::InsufficientVaultFunds);

    let total_paid_out = config
        .total_paid_out
        .checked_add(total)
        .ok_or(StakingError::MathOverflow)?;
    let total_deposited = config
        .total_deposited
        .checked_sub(record.amount)
        .ok_or(StakingError::MathOverflow)?;
    let total_reward_owed = config
        .total_reward_owed
        .checked_sub(record.reward)
        .ok_or(StakingError::MathOverflow)?;

    state.has_claimed = true;
    record.settle();
    config.total_paid_out = total_paid_out;
    config.total_deposited = total_deposited;
    config.total_reward_owed = total_reward_owed;
    config.last_updated = now;

    Ok(total)
}

/// Claim principal plus reward of one tier.
pub fn handler(ctx: Context<Claim>, tier_id: u8) -> Result<()> {
    let clock = Clock::get()?;
    let user = ctx.accounts.user.key();
    let config_key = ctx.accounts.staking_config.key();
    let vault_balance = ctx.accounts.staking_vault.amount;

    ctx.accounts
        .account_state
        .bind(user, config_key, ctx.bumps.account_state)?;
    ctx.accounts
        .deposit_record
        .bind(user, config_key, tier_id, ctx.bumps.deposit_record)?;

    let total = apply_claim(
        &mut ctx.accounts.staking_config,
        &mut ctx.accounts.account_state,
        &mut ctx.accounts.deposit_record,
        tier_id,
        vault_balance,
        clock.unix_timestamp,
    )?;

    // Transfer principal plus reward from vault to user using PDA signer
    let staking_mint_key = ctx.accounts.staking_config.staking_mint;
    let seeds = &[
        STAKING_CONFIG_SEED,
        staking_mint_key.as_ref(),
        &[ctx.accounts.staking_config.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.staking_vault.to_account_info(),
        to: ctx.accounts.user_token_account.to_account_info(),
        authority: ctx.accounts.staking_config.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, total)?;

    msg!("Claimed {} tokens from tier {}", total, tier_id);
    msg!("Total paid out: {}", ctx.accounts.staking_config.total_paid_out);

    emit!(Claimed {
        account: user,
        total,
    });

    Ok(())
}
