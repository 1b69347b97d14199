//! CEP-18 token interface consumed by the prize pool
//!
//! The pool never issues a token of its own; the staked asset is an external
//! CEP-18 contract whose address is fixed at initialization. Only the entry
//! points the pool actually calls are declared here.

use odra::casper_types::U256;
use odra::prelude::*;

/// External contract interface for the staked CEP-18 asset
#[odra::external_contract]
pub trait FungibleToken {
    /// Transfer tokens from the caller to `recipient`
    fn transfer(&mut self, recipient: Address, amount: U256);

    /// Transfer tokens from `owner` to `recipient` using the caller's allowance
    fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256);

    /// Approve `spender` to move up to `amount` of the caller's tokens
    fn approve(&mut self, spender: Address, amount: U256);

    /// Token balance of `address`
    fn balance_of(&self, address: Address) -> U256;
}
