/// Initialize instruction handler.
///
/// Creates the staking config and its vault for one staking mint.
///
/// ## Security Guarantees
/// - Vault is a PDA token account whose authority is the config PDA
/// - Mint address is locked to config state permanently
/// - Owner is the initializing signer and cannot be changed

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::StakingInitialized;
use crate::state::{StakingConfig, Tier};

/// Accounts required for config initialization.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The owner that will control tiers, cooldown and the allow-list.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The staking config to be created.
    /// SECURITY: PDA derived from STAKING_CONFIG_SEED + mint ensures one config per token.
    #[account(
        init,
        payer = authority,
        space = StakingConfig::LEN,
        seeds = [STAKING_CONFIG_SEED, staking_mint.key().as_ref()],
        bump
    )]
    pub staking_config: Account<'info, StakingConfig>,

    /// The mint of the staked token.
    pub staking_mint: Account<'info, Mint>,

    /// The vault that holds deposits and reward funding.
    #[account(
        init,
        payer = authority,
        seeds = [STAKING_VAULT_SEED, staking_config.key().as_ref()],
        bump,
        token::mint = staking_mint,
        token::authority = staking_config
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,

    /// Token program for token account operations.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar for rent-exempt calculations.
    pub rent: Sysvar<'info, Rent>,
}

/// Initialize a new staking config with the default tiers and cooldown.
pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    require!(
        ctx.accounts.staking_vault.owner == ctx.accounts.staking_config.key(),
        StakingError::VaultMismatch
    );
    require!(
        ctx.accounts.staking_vault.mint == ctx.accounts.staking_mint.key(),
        StakingError::MintMismatch
    );

    let config = &mut ctx.accounts.staking_config;
    let clock = Clock::get()?;

    config.authority = ctx.accounts.authority.key();
    config.staking_mint = ctx.accounts.staking_mint.key();
    config.staking_vault = ctx.accounts.staking_vault.key();
    config.deposit_cooldown = DEFAULT_DEPOSIT_COOLDOWN;
    config.tiers = [Tier::default(); MAX_TIERS];
    config.seed_default_tiers()?;
    config.total_deposited = 0;
    config.total_reward_owed = 0;
    config.total_paid_out = 0;
    config.created_at = clock.unix_timestamp;
    config.last_updated = clock.unix_timestamp;

    config.bump = ctx.bumps.staking_config;
    config.vault_bump = ctx.bumps.staking_vault;

    msg!("Tier staking config initialized");
    msg!("Owner: {}", config.authority);
    msg!("Mint: {}", config.staking_mint);
    msg!("Deposit cooldown: {}s", config.deposit_cooldown);
    for (id, reward_rate, lock_time) in default_tiers::ALL {
        msg!("Tier {}: {}bp, lock {}s", id, reward_rate, lock_time);
    }

    emit!(StakingInitialized {
        authority: config.authority,
        staking_mint: config.staking_mint,
        deposit_cooldown: config.deposit_cooldown,
    });

    Ok(())
}
