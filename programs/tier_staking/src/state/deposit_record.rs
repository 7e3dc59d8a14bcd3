use anchor_lang::prelude::*;

use crate::error::StakingError;

/// Principal, reward and unlock time accumulated by one account in one tier.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct DepositRecord {
    pub owner: Pubkey,
    pub config: Pubkey,

    pub amount: u64,
    pub reward: u64,
    pub unlock_time: i64,

    pub tier_id: u8,
    pub claimed: bool,
    pub bump: u8,
}

/// Read-only projection returned by the `get_deposit` view.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DepositView {
    pub amount: u64,
    pub reward: u64,
    pub unlock_time: i64,
    pub claimed: bool,
}

impl DepositRecord {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 8 + 1 + 1 + 1;

    /// Binds a freshly created record to its (owner, tier). No-op once bound.
    pub fn bind(&mut self, owner: Pubkey, config: Pubkey, tier_id: u8, bump: u8) -> Result<()> {
        if self.owner == Pubkey::default() {
            self.owner = owner;
            self.config = config;
            self.tier_id = tier_id;
            self.bump = bump;
        }
        require_keys_eq!(self.config, config, StakingError::ConfigMismatch);
        require!(
            self.owner == owner && self.tier_id == tier_id,
            StakingError::InvalidRecordOwner
        );
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.amount > 0
    }

    /// Adds a deposit onto the record and returns the new unlock time.
    ///
    /// The unlock time compounds: every deposit adds `now + lock_time` on top
    /// of the previous unlock time rather than resetting it.
    pub fn accrue(&mut self, amount: u64, reward: u64, now: i64, lock_time: i64) -> Result<i64> {
        let new_amount = self
            .amount
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        let new_reward = self
            .reward
            .checked_add(reward)
            .ok_or(StakingError::MathOverflow)?;
        let new_unlock_time = self
            .unlock_time
            .checked_add(now)
            .and_then(|t| t.checked_add(lock_time))
            .ok_or(StakingError::MathOverflow)?;

        self.amount = new_amount;
        self.reward = new_reward;
        self.unlock_time = new_unlock_time;
        Ok(new_unlock_time)
    }

    pub fn ensure_unlocked(&self, now: i64) -> Result<()> {
        require!(now > self.unlock_time, StakingError::DepositLocked);
        Ok(())
    }

    /// Principal plus reward owed on claim.
    pub fn payout(&self) -> Result<u64> {
        self.amount
            .checked_add(self.reward)
            .ok_or_else(|| StakingError::MathOverflow.into())
    }

    /// Zeroes the record and marks it claimed.
    pub fn settle(&mut self) {
        self.amount = 0;
        self.reward = 0;
        self.unlock_time = 0;
        self.claimed = true;
    }

    pub fn view(&self) -> DepositView {
        DepositView {
            amount: self.amount,
            reward: self.reward,
            unlock_time: self.unlock_time,
            claimed: self.claimed,
        }
    }
}
