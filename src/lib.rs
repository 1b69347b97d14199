//! Windfall - No-loss prize savings pool for Casper Network
//!
//! This crate provides a prize savings pool where users can:
//! - Stake a CEP-18 token and receive lottery tickets, principal intact
//! - Earn a chance at the pool's accrued lending yield each round
//! - Withdraw their full principal at any time
//! - Rely on verifiable randomness for winner selection

#![no_std]

extern crate alloc;

pub mod errors;
pub mod events;
pub mod market_interface;
pub mod prize_pool;
pub mod randomness_gateway;
pub mod ticket_ledger;
pub mod token_interface;
pub mod vrf_interface;
pub mod yield_vault;

// Re-export main types for external use
pub use errors::*;
pub use events::*;
pub use prize_pool::{PrizePool, RoundState};
pub use randomness_gateway::RandomRequest;
pub use ticket_ledger::Ticket;

// Re-export generated types only when not building for wasm32 target
#[cfg(not(target_arch = "wasm32"))]
pub use prize_pool::{PrizePoolHostRef, PrizePoolInitArgs};
