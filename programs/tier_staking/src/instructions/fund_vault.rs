/// Fund vault instruction handler.
///
/// Handles depositing reward tokens into the staking vault. Claims pay
/// principal plus reward out of the same vault, so rewards must be funded
/// ahead of the first claim.
///
/// ## Security Guarantees
/// - Vault validation ensures the config's PDA
/// - Mint validation prevents wrong token deposits
/// - Anyone can fund (no owner restriction)

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::VaultFunded;
use crate::state::StakingConfig;

/// Accounts required for funding the vault.
#[derive(Accounts)]
pub struct FundVault<'info> {
    /// The funder (anyone can fund).
    #[account(mut)]
    pub funder: Signer<'info>,

    /// The staking config.
    #[account(
        seeds = [STAKING_CONFIG_SEED, staking_config.staking_mint.as_ref()],
        bump = staking_config.bump,
        has_one = staking_vault @ StakingError::VaultMismatch,
        has_one = staking_mint @ StakingError::MintMismatch
    )]
    pub staking_config: Account<'info, StakingConfig>,

    /// The staking token mint.
    pub staking_mint: Account<'info, Mint>,

    /// Funder's token account.
    #[account(
        mut,
        constraint = funder_token_account.mint == staking_mint.key() @ StakingError::MintMismatch,
        constraint = funder_token_account.owner == funder.key()
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    /// The config's vault.
    #[account(
        mut,
        constraint = staking_vault.owner == staking_config.key() @ StakingError::VaultMismatch,
        constraint = staking_vault.mint == staking_mint.key() @ StakingError::MintMismatch
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Fund the vault with reward tokens.
pub fn handler(ctx: Context<FundVault>, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::ZeroAmount);

    let cpi_accounts = Transfer {
        from: ctx.accounts.funder_token_account.to_account_info(),
        to: ctx.accounts.staking_vault.to_account_info(),
        authority: ctx.accounts.funder.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    // Reload vault to get updated balance
    ctx.accounts.staking_vault.reload()?;
    let vault_balance = ctx.accounts.staking_vault.amount;
    let config = &ctx.accounts.staking_config;
    let owed = config
        .total_deposited
        .checked_add(config.total_reward_owed)
        .ok_or(StakingError::MathOverflow)?;

    msg!("Vault funded with {} tokens", amount);
    msg!("Vault balance: {}, owed to depositors: {}", vault_balance, owed);
    msg!("Funder: {}", ctx.accounts.funder.key());

    emit!(VaultFunded {
        funder: ctx.accounts.funder.key(),
        amount,
    });

    Ok(())
}
