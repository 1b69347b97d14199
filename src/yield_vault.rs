//! Yield vault - adapter around the external lending market
//!
//! Wraps the supply/withdraw calls and derives the accrued yield. The vault
//! holds no balances of its own: principal and interest both live in the
//! market, credited to the pool contract.

use odra::casper_types::U256;
use odra::prelude::*;
use odra::ContractRef;

use crate::errors::Error;
use crate::market_interface::LendingMarketContractRef;
use crate::token_interface::FungibleTokenContractRef;

#[odra::module]
pub struct YieldVault {
    market: Var<Address>,
    asset: Var<Address>,
}

#[odra::module]
impl YieldVault {
    pub fn configure(&mut self, market: Address, asset: Address) {
        self.market.set(market);
        self.asset.set(asset);
    }

    /// Push `amount` of the asset (already held by the pool) into the market.
    pub fn deposit(&mut self, amount: U256) {
        let market = self.market_address();
        let asset = self.asset_address();
        let pool = self.env().self_address();

        // The market pulls supplied funds via transfer_from.
        FungibleTokenContractRef::new(self.env(), asset).approve(market, amount);

        let ok = LendingMarketContractRef::new(self.env(), market).supply(asset, amount, pool, 0);
        if !ok {
            self.env().revert(Error::YieldDepositFailed);
        }
    }

    /// Ask the market to pay `amount` of the asset directly to `recipient`.
    pub fn withdraw(&mut self, amount: U256, recipient: Address) {
        let market = self.market_address();
        let asset = self.asset_address();

        let ok = LendingMarketContractRef::new(self.env(), market).withdraw(asset, amount, recipient);
        if !ok {
            self.env().revert(Error::YieldWithdrawFailed);
        }
    }

    /// Principal plus accrued interest currently owed to the pool.
    pub fn redeemable_balance(&self) -> U256 {
        let market = self.market_address();
        let asset = self.asset_address();
        let pool = self.env().self_address();
        LendingMarketContractRef::new(self.env(), market).supplied_balance(asset, pool)
    }

    /// Redeemable balance in excess of `total_staked`.
    ///
    /// A result of zero (or a market balance below principal) is reported as
    /// `NoInterestAccrued`; the yield is never computed as negative.
    pub fn accrued_yield(&self, total_staked: U256) -> U256 {
        let redeemable = self.redeemable_balance();
        if redeemable <= total_staked {
            self.env().revert(Error::NoInterestAccrued);
        }
        redeemable - total_staked
    }

    pub fn market(&self) -> Option<Address> {
        self.market.get()
    }

    pub fn asset(&self) -> Option<Address> {
        self.asset.get()
    }

    fn market_address(&self) -> Address {
        self.market
            .get()
            .unwrap_or_revert_with(&self.env(), Error::MarketNotSet)
    }

    fn asset_address(&self) -> Address {
        self.asset
            .get()
            .unwrap_or_revert_with(&self.env(), Error::AssetNotSet)
    }
}
