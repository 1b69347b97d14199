//! Mock CEP-18 token for testing
//!
//! Wraps the odra-modules CEP-18 implementation with a permissionless mint
//! so tests can hand out balances freely.

use odra::casper_types::U256;
use odra::prelude::*;
use odra_modules::cep18_token::Cep18;

/// Mock staked asset token
#[odra::module]
pub struct MockToken {
    cep18: SubModule<Cep18>,
}

#[odra::module]
impl MockToken {
    pub fn init(&mut self) {
        self.cep18.init(
            "Mock Pool Dollar".to_string(),
            "mUSD".to_string(),
            9,
            U256::zero(),
        );
    }

    /// Test-only: mint without any authority check
    pub fn mint(&mut self, to: Address, amount: U256) {
        self.cep18.raw_mint(&to, &amount);
    }

    pub fn transfer(&mut self, recipient: Address, amount: U256) {
        self.cep18.transfer(&recipient, &amount);
    }

    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) {
        self.cep18.transfer_from(&owner, &recipient, &amount);
    }

    pub fn approve(&mut self, spender: Address, amount: U256) {
        self.cep18.approve(&spender, &amount);
    }

    pub fn balance_of(&self, address: Address) -> U256 {
        self.cep18.balance_of(&address)
    }

    pub fn total_supply(&self) -> U256 {
        self.cep18.total_supply()
    }
}
