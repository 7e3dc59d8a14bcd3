use anchor_lang::prelude::*;

use crate::error::StakingError;

/// Per-account gate and cooldown state, shared across all tiers.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct AccountState {
    pub owner: Pubkey,
    pub config: Pubkey,

    /// Start of the cooldown window, set by every successful deposit.
    pub last_deposit_time: i64,

    /// Set by the first successful claim; blocks every later claim on any tier.
    pub has_claimed: bool,
    pub allowed: bool,
    pub bump: u8,
}

impl AccountState {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 1 + 1 + 1;

    /// Binds a freshly created account to its owner. No-op once bound.
    pub fn bind(&mut self, owner: Pubkey, config: Pubkey, bump: u8) -> Result<()> {
        if self.owner == Pubkey::default() {
            self.owner = owner;
            self.config = config;
            self.bump = bump;
        }
        require_keys_eq!(self.config, config, StakingError::ConfigMismatch);
        Ok(())
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    pub fn ensure_allowed(&self) -> Result<()> {
        require!(self.allowed, StakingError::NotAllowed);
        Ok(())
    }

    /// Fails while `now` is still inside the window opened by the last deposit.
    pub fn ensure_cooldown_elapsed(&self, now: i64, cooldown: i64) -> Result<()> {
        let ready_at = self
            .last_deposit_time
            .checked_add(cooldown)
            .ok_or(StakingError::MathOverflow)?;
        require!(now >= ready_at, StakingError::CooldownActive);
        Ok(())
    }

    pub fn ensure_not_claimed(&self) -> Result<()> {
        require!(!self.has_claimed, StakingError::AlreadyClaimed);
        Ok(())
    }
}
