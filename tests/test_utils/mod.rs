//! Test utilities and helpers for Windfall prize pool tests

pub mod mock_coordinator;
pub mod mock_market;
pub mod mock_token;

pub use mock_coordinator::{MockCoordinator, MockCoordinatorHostRef};
pub use mock_market::{MockLendingMarket, MockLendingMarketHostRef};
pub use mock_token::{MockToken, MockTokenHostRef};

use odra::casper_types::U256;
use odra::host::{Deployer, HostEnv, HostRef, NoArgs};
use odra::prelude::*;

use windfall::prize_pool::{PrizePool, PrizePoolHostRef, PrizePoolInitArgs};

/// Constants for testing
pub const TOKEN: u64 = 1_000_000_000; // 1 token in raw units (9 decimals)
pub const MIN_TICKET: u64 = 10 * TOKEN; // minimum stake per ticket
pub const ROUND_INTERVAL_MS: u64 = 24 * 60 * 60 * 1000; // 24 hours
pub const ENTRY_CUTOFF_MS: u64 = 60 * 60 * 1000; // last hour rolls forward
pub const DEFAULT_FEE_BPS: u64 = 100; // 1%
pub const BPS_DENOMINATOR: u64 = 10_000;
pub const KEY_HASH: [u8; 32] = [7u8; 32];
pub const SUBSCRIPTION_ID: u64 = 42;

pub fn deploy_mock_token(env: &HostEnv) -> MockTokenHostRef {
    MockToken::deploy(env, NoArgs)
}

pub fn deploy_mock_market(env: &HostEnv) -> MockLendingMarketHostRef {
    MockLendingMarket::deploy(env, NoArgs)
}

pub fn deploy_mock_coordinator(env: &HostEnv) -> MockCoordinatorHostRef {
    MockCoordinator::deploy(env, NoArgs)
}

/// Deploy a pool wired to the given mocks, with account 0 as admin and
/// account 1 as treasury.
pub fn deploy_pool(
    env: &HostEnv,
    token: &MockTokenHostRef,
    market: &MockLendingMarketHostRef,
    coordinator: &MockCoordinatorHostRef,
) -> PrizePoolHostRef {
    PrizePool::deploy(
        env,
        PrizePoolInitArgs {
            asset: token.address(),
            lending_market: market.address(),
            coordinator: coordinator.address(),
            key_hash: KEY_HASH,
            subscription_id: SUBSCRIPTION_ID,
            request_confirmations: 3,
            callback_gas_limit: 250_000,
            treasury: env.get_account(1),
            admin: env.get_account(0),
            round_interval: ROUND_INTERVAL_MS,
            entry_cutoff: ENTRY_CUTOFF_MS,
            min_ticket_cost: U256::from(MIN_TICKET),
        },
    )
}

/// Mint tokens to `user` and approve the pool to pull them.
pub fn fund_user(
    env: &HostEnv,
    token: &mut MockTokenHostRef,
    pool: &PrizePoolHostRef,
    user: Address,
    amount: U256,
) {
    env.set_caller(env.get_account(0));
    token.mint(user, amount);
    env.set_caller(user);
    token.approve(pool.address(), amount);
}

/// Simulate interest accrual: tokens appear at the market, credited to the
/// pool's supplied position.
pub fn accrue_yield(
    env: &HostEnv,
    token: &mut MockTokenHostRef,
    market: &mut MockLendingMarketHostRef,
    pool: &PrizePoolHostRef,
    amount: U256,
) {
    env.set_caller(env.get_account(0));
    token.mint(market.address(), amount);
    market.credit_interest(pool.address(), amount);
}
