//! Error definitions for the Windfall prize pool

use odra::prelude::*;

/// Prize pool errors
#[odra::odra_error]
pub enum Error {
    /// Deposit amount is zero
    ZeroDeposit = 1,
    /// Deposit amount is below the minimum ticket cost
    BelowMinimumTicket = 2,
    /// Contract is currently paused
    ContractPaused = 3,
    /// Operation requires the contract to be paused
    ContractNotPaused = 4,
    /// Caller owns no tickets
    NoTicketsToWithdraw = 5,
    /// No tickets are eligible for the round being drawn
    NoEligibleTickets = 6,
    /// Round interval has not elapsed yet
    IntervalNotPassed = 7,
    /// Upkeep preconditions are not met
    UpkeepNotNeeded = 8,
    /// Round is not awaiting a randomness callback
    RoundNotCalculating = 9,
    /// Randomness request id is unknown
    RequestNotFound = 10,
    /// Randomness request was already fulfilled
    RequestAlreadyFulfilled = 11,
    /// A randomness request is already outstanding
    RequestAlreadyPending = 12,
    /// Randomness delivery carried no words
    EmptyRandomWords = 13,
    /// Redeemable balance does not exceed the staked principal
    NoInterestAccrued = 14,
    /// Lending market rejected the supply call
    YieldDepositFailed = 15,
    /// Lending market rejected the withdraw call
    YieldWithdrawFailed = 16,
    /// Caller is not admin
    NotAdmin = 17,
    /// Caller is not the randomness coordinator
    CallerNotCoordinator = 18,
    /// Platform fee exceeds the maximum allowed
    FeeTooHigh = 19,
    /// Entry cutoff is longer than the round interval
    InvalidEntryCutoff = 20,
    /// Re-entrant call detected
    ReentrantCall = 21,
    /// Admin address not set
    AdminNotSet = 22,
    /// Treasury address not set
    TreasuryNotSet = 23,
    /// Asset token address not set
    AssetNotSet = 24,
    /// Lending market address not set
    MarketNotSet = 25,
    /// Randomness coordinator address not set
    CoordinatorNotSet = 26,
    /// Ticket slot is out of range
    TicketNotFound = 27,
}
