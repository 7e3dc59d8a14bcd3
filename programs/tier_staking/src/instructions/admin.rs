/// Owner instruction handlers.
///
/// Handles tier updates, allow-list membership and the deposit cooldown.
///
/// ## Security Guarantees
/// - Every handler fails with `Unauthorized` unless signer == config.authority
/// - PDA validation ensures the correct config
/// - Tiers are replaced wholesale, never merged

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::events::{AllowlistChanged, CooldownUpdated, TierUpdated};
use crate::state::{AccountState, StakingConfig};

/// Accounts required for owner operations on the config itself.
#[derive(Accounts)]
pub struct AdminControl<'info> {
    /// The caller. Checked against config.authority by the handler.
    pub authority: Signer<'info>,

    /// The staking config to modify.
    #[account(
        mut,
        seeds = [STAKING_CONFIG_SEED, staking_config.staking_mint.as_ref()],
        bump = staking_config.bump
    )]
    pub staking_config: Account<'info, StakingConfig>,
}

/// Accounts required to change allow-list membership.
#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct SetAllowed<'info> {
    /// The caller. Pays rent when the account state is created.
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [STAKING_CONFIG_SEED, staking_config.staking_mint.as_ref()],
        bump = staking_config.bump
    )]
    pub staking_config: Account<'info, StakingConfig>,

    /// State of the account whose membership changes (created on first use).
    #[account(
        init_if_needed,
        payer = authority,
        space = AccountState::LEN,
        seeds = [ACCOUNT_STATE_SEED, staking_config.key().as_ref(), account.as_ref()],
        bump
    )]
    pub account_state: Account<'info, AccountState>,

    pub system_program: Program<'info, System>,
}

pub fn require_owner(config: &StakingConfig, caller: &Pubkey) -> Result<()> {
    require!(config.is_owner(caller), StakingError::Unauthorized);
    Ok(())
}

/// Owner-gated tier overwrite.
pub fn apply_set_tier(
    config: &mut StakingConfig,
    caller: &Pubkey,
    tier_id: u8,
    reward_rate: u16,
    lock_time: i64,
    now: i64,
) -> Result<()> {
    require_owner(config, caller)?;
    config.set_tier(tier_id, reward_rate, lock_time)?;
    config.last_updated = now;
    Ok(())
}

/// Owner-gated allow-list membership change.
pub fn apply_set_allowed(
    config: &StakingConfig,
    state: &mut AccountState,
    caller: &Pubkey,
    status: bool,
) -> Result<()> {
    require_owner(config, caller)?;
    state.allowed = status;
    Ok(())
}

/// Owner-gated cooldown change. Returns the previous cooldown.
pub fn apply_set_deposit_cooldown(
    config: &mut StakingConfig,
    caller: &Pubkey,
    cooldown: i64,
    now: i64,
) -> Result<i64> {
    require_owner(config, caller)?;
    require!(cooldown >= 0, StakingError::InvalidCooldown);
    let old = config.deposit_cooldown;
    config.deposit_cooldown = cooldown;
    config.last_updated = now;
    Ok(old)
}

/// Replace the reward rate and lock time of one tier.
///
/// Setting `lock_time` to zero disables the tier for new deposits and claims.
pub fn set_tier_handler(
    ctx: Context<AdminControl>,
    tier_id: u8,
    reward_rate: u16,
    lock_time: i64,
) -> Result<()> {
    let clock = Clock::get()?;
    let caller = ctx.accounts.authority.key();
    let config = &mut ctx.accounts.staking_config;

    let previous = config.get_tier(tier_id);
    apply_set_tier(config, &caller, tier_id, reward_rate, lock_time, clock.unix_timestamp)?;

    msg!(
        "Tier {} updated: {}bp/{}s -> {}bp/{}s",
        tier_id,
        previous.reward_rate,
        previous.lock_time,
        reward_rate,
        lock_time
    );

    emit!(TierUpdated {
        tier_id,
        reward_rate,
        lock_time,
    });

    Ok(())
}

/// Add or remove an account from the allow-list.
pub fn set_allowed_handler(ctx: Context<SetAllowed>, account: Pubkey, status: bool) -> Result<()> {
    let caller = ctx.accounts.authority.key();
    let config_key = ctx.accounts.staking_config.key();
    let state = &mut ctx.accounts.account_state;

    state.bind(account, config_key, ctx.bumps.account_state)?;
    apply_set_allowed(&ctx.accounts.staking_config, state, &caller, status)?;

    msg!("Allow-list: {} -> {}", account, status);

    emit!(AllowlistChanged { account, status });

    Ok(())
}

/// Change the minimum spacing between two deposits of one account.
pub fn set_deposit_cooldown_handler(ctx: Context<AdminControl>, cooldown: i64) -> Result<()> {
    let clock = Clock::get()?;
    let caller = ctx.accounts.authority.key();
    let config = &mut ctx.accounts.staking_config;

    let old_cooldown =
        apply_set_deposit_cooldown(config, &caller, cooldown, clock.unix_timestamp)?;

    msg!("Deposit cooldown updated: {}s -> {}s", old_cooldown, cooldown);

    emit!(CooldownUpdated {
        old_cooldown,
        new_cooldown: cooldown,
    });

    Ok(())
}
