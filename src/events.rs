//! Events for the Windfall prize pool (CEP-88 compliant)

use odra::prelude::*;
use odra::casper_types::U256;

/// Emitted when a user stakes into the pool
#[odra::event]
pub struct Staked {
    pub user: Address,
    pub amount: U256,
    pub eligible_from_round: u64,
    pub total_staked: U256,
}

/// Emitted when a user withdraws their full principal
#[odra::event]
pub struct Withdrawn {
    pub user: Address,
    pub amount: U256,
    pub total_staked: U256,
}

/// Emitted when a user withdraws principal while the pool is paused
#[odra::event]
pub struct EmergencyWithdrawn {
    pub user: Address,
    pub amount: U256,
}

/// Emitted when a round enters the calculating state
#[odra::event]
pub struct RandomnessRequested {
    pub round: u64,
    pub request_id: u64,
}

/// Emitted when a round resolves to a winner
#[odra::event]
pub struct WinnerSelected {
    pub round: u64,
    pub winner: Address,
    pub prize: U256,
    pub fee: U256,
    pub total_yield_generated: U256,
}

/// Emitted when the admin sweeps accrued interest outside a round
#[odra::event]
pub struct YieldWithdrawn {
    pub to: Address,
    pub amount: U256,
}

/// Emitted when the pool is paused
#[odra::event]
pub struct Paused {
    pub by: Address,
}

/// Emitted when the pool is unpaused
#[odra::event]
pub struct Unpaused {
    pub by: Address,
}

/// Emitted when the platform fee is updated
#[odra::event]
pub struct FeeUpdated {
    pub old_fee_bps: u64,
    pub new_fee_bps: u64,
}

/// Emitted when the treasury address is updated
#[odra::event]
pub struct TreasuryUpdated {
    pub old_treasury: Address,
    pub new_treasury: Address,
}

/// Emitted when the minimum ticket cost is updated
#[odra::event]
pub struct MinTicketCostUpdated {
    pub old_cost: U256,
    pub new_cost: U256,
}

/// Emitted when admin is transferred
#[odra::event]
pub struct AdminTransferred {
    pub old_admin: Address,
    pub new_admin: Address,
}
