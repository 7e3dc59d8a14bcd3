//! Instruction handlers for the Tier Staking program.
//!
//! This module contains all instruction implementations.

pub mod admin;
pub mod claim;
pub mod deposit;
pub mod fund_vault;
pub mod initialize;
pub mod views;

pub use admin::*;
pub use claim::*;
pub use deposit::*;
pub use fund_vault::*;
pub use initialize::*;
pub use views::*;
