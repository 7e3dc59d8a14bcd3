//! Read-only views returned to the caller as instruction return data.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::state::{DepositRecord, DepositView, StakingConfig, Tier};

#[derive(Accounts)]
pub struct GetTier<'info> {
    #[account(
        seeds = [STAKING_CONFIG_SEED, staking_config.staking_mint.as_ref()],
        bump = staking_config.bump
    )]
    pub staking_config: Account<'info, StakingConfig>,
}

#[derive(Accounts)]
pub struct GetDeposit<'info> {
    #[account(
        seeds = [STAKING_CONFIG_SEED, staking_config.staking_mint.as_ref()],
        bump = staking_config.bump
    )]
    pub staking_config: Account<'info, StakingConfig>,

    /// Absent when the account never deposited into the tier.
    pub deposit_record: Option<Account<'info, DepositRecord>>,
}

pub fn get_tier_handler(ctx: Context<GetTier>, tier_id: u8) -> Result<Tier> {
    Ok(ctx.accounts.staking_config.get_tier(tier_id))
}

/// Deposit state of `account` in `tier_id`; the zero view if none exists.
pub fn get_deposit_handler(ctx: Context<GetDeposit>, account: Pubkey, tier_id: u8) -> Result<DepositView> {
    let config_key = ctx.accounts.staking_config.key();
    view_deposit(
        ctx.accounts.deposit_record.as_deref(),
        &config_key,
        &account,
        tier_id,
    )
}

pub fn view_deposit(
    record: Option<&DepositRecord>,
    config: &Pubkey,
    account: &Pubkey,
    tier_id: u8,
) -> Result<DepositView> {
    let Some(record) = record else {
        return Ok(DepositView::default());
    };
    require_keys_eq!(record.config, *config, StakingError::ConfigMismatch);
    require!(
        record.owner == *account && record.tier_id == tier_id,
        StakingError::InvalidRecordOwner
    );
    Ok(record.view())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_staking_err;

    #[test]
    fn missing_record_reads_as_zero() {
        let view = view_deposit(None, &Pubkey::new_unique(), &Pubkey::new_unique(), 1).unwrap();
        assert_eq!(view, DepositView::default());
    }

    #[test]
    fn record_must_match_account_and_tier() {
        let config = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let record = DepositRecord {
            owner,
            config,
            amount: 10,
            reward: 1,
            unlock_time: 99,
            tier_id: 2,
            ..Default::default()
        };

        assert_eq!(
            view_deposit(Some(&record), &config, &owner, 2).unwrap(),
            DepositView { amount: 10, reward: 1, unlock_time: 99, claimed: false }
        );
        assert_staking_err(
            view_deposit(Some(&record), &config, &owner, 1),
            StakingError::InvalidRecordOwner,
        );
        assert_staking_err(
            view_deposit(Some(&record), &config, &Pubkey::new_unique(), 2),
            StakingError::InvalidRecordOwner,
        );
        assert_staking_err(
            view_deposit(Some(&record), &Pubkey::new_unique(), &owner, 2),
            StakingError::ConfigMismatch,
        );
    }
}
