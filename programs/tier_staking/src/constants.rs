//! Program constants for the Tier Staking program.
//!
//! This module defines all constant values used throughout the staking program,
//! including PDA seeds, default tiers and the deposit cooldown.

/// Seed for deriving the staking config PDA
pub const STAKING_CONFIG_SEED: &[u8] = b"staking_config";

/// Seed for deriving the staking vault PDA
pub const STAKING_VAULT_SEED: &[u8] = b"staking_vault";

/// Seed for deriving per-account state PDAs
pub const ACCOUNT_STATE_SEED: &[u8] = b"account";

/// Seed for deriving per-account, per-tier deposit record PDAs
pub const DEPOSIT_RECORD_SEED: &[u8] = b"deposit";

/// Number of seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Default minimum spacing between two deposits of the same account (1 day)
pub const DEFAULT_DEPOSIT_COOLDOWN: i64 = SECONDS_PER_DAY;

/// Basis points denominator (100% = 10000 basis points)
pub const BASIS_POINTS_DENOMINATOR: u64 = 10_000;

/// Number of tier slots held by the registry. Valid ids are 1..=MAX_TIERS.
pub const MAX_TIERS: usize = 16;

/// Tier id 0 never names a tier.
pub const RESERVED_TIER_ID: u8 = 0;

/// Default tiers seeded at initialization: (id, reward rate in bps, lock time)
pub mod default_tiers {
    use super::SECONDS_PER_DAY;

    /// Tier 1 - 5% reward, 7 day lock
    pub const TIER_1: (u8, u16, i64) = (1, 500, 7 * SECONDS_PER_DAY);
    /// Tier 2 - 10% reward, 14 day lock
    pub const TIER_2: (u8, u16, i64) = (2, 1000, 14 * SECONDS_PER_DAY);
    /// Tier 3 - 15% reward, 30 day lock
    pub const TIER_3: (u8, u16, i64) = (3, 1500, 30 * SECONDS_PER_DAY);

    pub const ALL: [(u8, u16, i64); 3] = [TIER_1, TIER_2, TIER_3];
}
