//! Mock lending market for testing
//!
//! Tracks one supplied balance per account. Interest is injected with
//! `credit_interest`; failure paths are exercised by flipping the success
//! knobs.

use odra::casper_types::U256;
use odra::prelude::*;
use odra::ContractRef;

use windfall::token_interface::FungibleTokenContractRef;

/// Mock lending market contract for testing
#[odra::module]
pub struct MockLendingMarket {
    balances: Mapping<Address, U256>,
    supply_ok: Var<bool>,
    withdraw_ok: Var<bool>,
}

#[odra::module]
impl MockLendingMarket {
    pub fn init(&mut self) {
        self.supply_ok.set(true);
        self.withdraw_ok.set(true);
    }

    /// Pull `amount` of `asset` from the caller and credit `on_behalf_of`
    #[allow(unused_variables)]
    pub fn supply(
        &mut self,
        asset: Address,
        amount: U256,
        on_behalf_of: Address,
        referral_code: u32,
    ) -> bool {
        if !self.supply_ok.get_or_default() {
            return false;
        }
        FungibleTokenContractRef::new(self.env(), asset).transfer_from(
            self.env().caller(),
            self.env().self_address(),
            amount,
        );
        let current = self.balances.get(&on_behalf_of).unwrap_or_default();
        self.balances.set(&on_behalf_of, current + amount);
        true
    }

    /// Debit the caller's position and pay `to` directly
    pub fn withdraw(&mut self, asset: Address, amount: U256, to: Address) -> bool {
        if !self.withdraw_ok.get_or_default() {
            return false;
        }
        let caller = self.env().caller();
        let balance = self.balances.get(&caller).unwrap_or_default();
        if balance < amount {
            return false;
        }
        self.balances.set(&caller, balance - amount);
        FungibleTokenContractRef::new(self.env(), asset).transfer(to, amount);
        true
    }

    #[allow(unused_variables)]
    pub fn supplied_balance(&self, asset: Address, account: Address) -> U256 {
        self.balances.get(&account).unwrap_or_default()
    }

    // Test helper to simulate accrued interest (token backing is minted
    // separately to this contract)
    pub fn credit_interest(&mut self, account: Address, amount: U256) {
        let current = self.balances.get(&account).unwrap_or_default();
        self.balances.set(&account, current + amount);
    }

    // Test helpers to force external-call failures
    pub fn set_supply_ok(&mut self, ok: bool) {
        self.supply_ok.set(ok);
    }

    pub fn set_withdraw_ok(&mut self, ok: bool) {
        self.withdraw_ok.set(ok);
    }
}
