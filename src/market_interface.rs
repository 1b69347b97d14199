//! Lending market interface for yield generation
//!
//! The pool supplies its entire token balance to an external lending market
//! and reads back a single number: the redeemable balance (principal plus
//! accrued interest) owed to the pool. Everything above the staked principal
//! is the prize of the current round.
//!
//! `supply` and `withdraw` return a success flag rather than reverting, so
//! the pool can surface a non-success return as its own error. The market
//! pulls supplied funds via `transfer_from`, which requires an approval from
//! the pool first.

use odra::casper_types::U256;
use odra::prelude::*;

/// External contract interface for the lending market
#[odra::external_contract]
pub trait LendingMarket {
    /// Supply `amount` of `asset`, credited to `on_behalf_of`
    ///
    /// Returns `false` when the market rejects the supply.
    fn supply(&mut self, asset: Address, amount: U256, on_behalf_of: Address, referral_code: u32)
        -> bool;

    /// Withdraw `amount` of `asset` from the caller's position, paid to `to`
    ///
    /// Returns `false` when the market rejects the withdrawal.
    fn withdraw(&mut self, asset: Address, amount: U256, to: Address) -> bool;

    /// Current redeemable balance (principal + accrued interest) of `account`
    fn supplied_balance(&self, asset: Address, account: Address) -> U256;
}
