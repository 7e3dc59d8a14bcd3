//! State structures for the Tier Staking program.
//!
//! This module defines all account structures used to store program state.

pub mod account_state;
pub mod deposit_record;
pub mod staking_config;

pub use account_state::*;
pub use deposit_record::*;
pub use staking_config::*;
