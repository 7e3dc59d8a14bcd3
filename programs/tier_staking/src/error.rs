//! Error types for the Tier Staking program.
//!
//! Every failure aborts the whole instruction; the runtime discards any
//! account writes made before the error was returned.
//!
//! ## Error Code Ranges
//! - 6000-6002: Input validation errors
//! - 6003-6005: Deposit/claim state errors
//! - 6006-6007: Time/lock errors
//! - 6008: Math/overflow errors
//! - 6009-6010: Authorization errors
//! - 6011-6014: Account validation errors

use anchor_lang::prelude::*;

/// Custom error codes for the Tier Staking program.
///
/// Error codes start at 6000 (Anchor's custom error offset).
#[error_code]
pub enum StakingError {
    // ========== Input Validation Errors (6000-6002) ==========

    /// [6000] The tier id is reserved, out of range, or has no lock time.
    #[msg("Invalid tier: id 0 is reserved and a tier must have a non-zero lock time")]
    InvalidTier,

    /// [6001] Cannot deposit or fund with zero amount.
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    /// [6002] Deposit cooldown must not be negative.
    #[msg("Deposit cooldown must not be negative")]
    InvalidCooldown,

    // ========== Deposit/Claim State Errors (6003-6005) ==========

    /// [6003] No principal is recorded for this account and tier.
    #[msg("No active deposit for this account and tier")]
    NoActiveDeposit,

    /// [6004] The account has already claimed once and can never claim again.
    #[msg("Account has already claimed")]
    AlreadyClaimed,

    /// [6005] The vault cannot cover principal plus reward.
    #[msg("Insufficient vault funds for payout")]
    InsufficientVaultFunds,

    // ========== Time/Lock Errors (6006-6007) ==========

    /// [6006] A previous deposit by this account is still inside the cooldown window.
    #[msg("Deposit cooldown is still active")]
    CooldownActive,

    /// [6007] The deposit has not passed its unlock time.
    #[msg("Deposit is still locked")]
    DepositLocked,

    // ========== Math/Overflow Errors (6008) ==========

    /// [6008] Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    // ========== Authorization Errors (6009-6010) ==========

    /// [6009] Unauthorized - caller is not the owner.
    #[msg("Unauthorized: caller is not the staking owner")]
    Unauthorized,

    /// [6010] Caller is not on the allow-list.
    #[msg("Account is not allow-listed")]
    NotAllowed,

    // ========== Account Validation Errors (6011-6014) ==========

    /// [6011] The provided mint does not match the config's staking token.
    #[msg("Token mint mismatch - wrong token for this staking config")]
    MintMismatch,

    /// [6012] The provided vault does not match the config's staking vault.
    #[msg("Staking vault address mismatch")]
    VaultMismatch,

    /// [6013] A per-account PDA was derived for a different staking config.
    #[msg("Account does not belong to this staking config")]
    ConfigMismatch,

    /// [6014] A deposit record belongs to a different account or tier.
    #[msg("Deposit record does not match the requested account and tier")]
    InvalidRecordOwner,
}
