use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;

/// Reward configuration selectable by id.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tier {
    /// Reward in basis points of the deposited amount.
    pub reward_rate: u16,
    /// Seconds after a deposit before it may be claimed. Zero marks an unset tier.
    pub lock_time: i64,
}

impl Tier {
    pub const SIZE: usize = 2 + 8;

    pub fn is_valid(&self) -> bool {
        self.lock_time != 0
    }
}

#[account]
pub struct StakingConfig {
    pub authority: Pubkey,
    pub staking_mint: Pubkey,
    pub staking_vault: Pubkey,

    pub deposit_cooldown: i64,
    pub tiers: [Tier; MAX_TIERS],

    pub total_deposited: u64,
    pub total_reward_owed: u64,
    pub total_paid_out: u64,

    pub last_updated: i64,
    pub created_at: i64,

    pub vault_bump: u8,
    pub bump: u8,
}

impl StakingConfig {
    pub const LEN: usize = 8
        + (32 * 3)
        + 8
        + (Tier::SIZE * MAX_TIERS)
        + (8 * 3)
        + (8 * 2)
        + 2;

    pub fn is_owner(&self, caller: &Pubkey) -> bool {
        self.authority == *caller
    }

    /// Returns the tier stored under `id`, or the zero tier when the id has
    /// no slot or was never set.
    pub fn get_tier(&self, id: u8) -> Tier {
        Self::slot(id)
            .map(|index| self.tiers[index])
            .unwrap_or_default()
    }

    /// Returns the tier under `id` if it is usable for deposits and claims.
    pub fn valid_tier(&self, id: u8) -> Result<Tier> {
        let tier = self.get_tier(id);
        require!(tier.is_valid(), StakingError::InvalidTier);
        Ok(tier)
    }

    /// Overwrites the tier under `id` wholesale.
    pub fn set_tier(&mut self, id: u8, reward_rate: u16, lock_time: i64) -> Result<()> {
        let index = Self::slot(id).ok_or(StakingError::InvalidTier)?;
        self.tiers[index] = Tier {
            reward_rate,
            lock_time,
        };
        Ok(())
    }

    pub fn seed_default_tiers(&mut self) -> Result<()> {
        for (id, reward_rate, lock_time) in default_tiers::ALL {
            self.set_tier(id, reward_rate, lock_time)?;
        }
        Ok(())
    }

    fn slot(id: u8) -> Option<usize> {
        if id == RESERVED_TIER_ID || id as usize > MAX_TIERS {
            return None;
        }
        Some(id as usize - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_staking_err, new_config};

    #[test]
    fn default_tiers_are_seeded() {
        let config = new_config(Pubkey::new_unique());

        assert_eq!(
            config.get_tier(1),
            Tier { reward_rate: 500, lock_time: 7 * SECONDS_PER_DAY }
        );
        assert_eq!(
            config.get_tier(2),
            Tier { reward_rate: 1000, lock_time: 14 * SECONDS_PER_DAY }
        );
        assert_eq!(
            config.get_tier(3),
            Tier { reward_rate: 1500, lock_time: 30 * SECONDS_PER_DAY }
        );
        assert_eq!(config.deposit_cooldown, SECONDS_PER_DAY);
    }

    #[test]
    fn unset_and_out_of_range_tiers_read_as_zero() {
        let config = new_config(Pubkey::new_unique());

        assert_eq!(config.get_tier(0), Tier::default());
        assert_eq!(config.get_tier(4), Tier::default());
        assert_eq!(config.get_tier(u8::MAX), Tier::default());
        assert_staking_err(config.valid_tier(4), StakingError::InvalidTier);
        assert_staking_err(config.valid_tier(0), StakingError::InvalidTier);
    }

    #[test]
    fn set_tier_overwrites_without_merging() {
        let mut config = new_config(Pubkey::new_unique());

        config.set_tier(2, 0, 3 * SECONDS_PER_DAY).unwrap();
        assert_eq!(
            config.get_tier(2),
            Tier { reward_rate: 0, lock_time: 3 * SECONDS_PER_DAY }
        );

        config.set_tier(2, 750, 0).unwrap();
        assert_eq!(config.get_tier(2), Tier { reward_rate: 750, lock_time: 0 });
        assert_staking_err(config.valid_tier(2), StakingError::InvalidTier);
    }

    #[test]
    fn set_tier_rejects_ids_without_a_slot() {
        let mut config = new_config(Pubkey::new_unique());

        assert_staking_err(config.set_tier(0, 100, 60), StakingError::InvalidTier);
        assert_staking_err(
            config.set_tier(MAX_TIERS as u8 + 1, 100, 60),
            StakingError::InvalidTier,
        );

        config.set_tier(MAX_TIERS as u8, 100, 60).unwrap();
        assert!(config.valid_tier(MAX_TIERS as u8).is_ok());
    }

    #[test]
    fn owner_check_compares_authority() {
        let owner = Pubkey::new_unique();
        let config = new_config(owner);

        assert!(config.is_owner(&owner));
        assert!(!config.is_owner(&Pubkey::new_unique()));
    }
}
