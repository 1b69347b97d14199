//! PrizePool - no-loss prize savings pool
//!
//! Users stake a CEP-18 token; the pool supplies the full balance to an
//! external lending market. Once per round the accrued interest (never
//! principal) is paid to one randomly selected ticket holder, minus a
//! platform fee. Principal stays withdrawable at all times.
//!
//! Round lifecycle: `Open(r)` → `Calculating(r)` (upkeep due, randomness
//! requested) → `Open(r + 1)` (randomness delivered, winner paid). `Closed`
//! marks a paused pool with no draw in flight.

use alloc::vec::Vec;
use odra::casper_types::U256;
use odra::prelude::*;
use odra::ContractRef;

use crate::errors::Error;
use crate::events::{
    AdminTransferred, EmergencyWithdrawn, FeeUpdated, MinTicketCostUpdated, Paused,
    RandomnessRequested, Staked, TreasuryUpdated, Unpaused, Withdrawn, WinnerSelected,
    YieldWithdrawn,
};
use crate::randomness_gateway::{RandomRequest, RandomnessGateway};
use crate::ticket_ledger::{Ticket, TicketLedger};
use crate::token_interface::FungibleTokenContractRef;
use crate::yield_vault::YieldVault;

/// Lifecycle state of the current round.
#[odra::odra_type]
pub enum RoundState {
    Open,
    Calculating,
    Closed,
}

// Constants
const BPS_DENOMINATOR: u64 = 10_000;
const DEFAULT_PLATFORM_FEE_BPS: u64 = 100; // 1%
const MAX_PLATFORM_FEE_BPS: u64 = 3000; // 30%
const FIRST_ROUND: u64 = 1;

#[odra::module]
pub struct PrizePool {
    // Components
    ledger: SubModule<TicketLedger>,
    vault: SubModule<YieldVault>,
    randomness: SubModule<RandomnessGateway>,

    // Round state machine
    current_round: Var<u64>,
    round_state: Var<RoundState>,
    round_opened_at: Var<u64>,
    round_interval: Var<u64>,
    entry_cutoff: Var<u64>,

    // Prize accounting
    platform_fee_bps: Var<u64>,
    min_ticket_cost: Var<U256>,
    total_yield_generated: Var<U256>,
    treasury: Var<Address>,

    // Admin
    admin: Var<Address>,
    is_paused: Var<bool>,
    lock: Var<bool>,
}

#[odra::module]
impl PrizePool {
    /// Initialize the pool
    ///
    /// # Arguments
    /// * `asset` - CEP-18 token users stake
    /// * `lending_market` - market the principal is supplied to
    /// * `coordinator` - randomness coordinator contract
    /// * `key_hash`, `subscription_id`, `request_confirmations`,
    ///   `callback_gas_limit` - fixed randomness request configuration
    /// * `treasury` - recipient of the platform fee
    /// * `admin` - admin address for pool management
    /// * `round_interval` - round length in milliseconds
    /// * `entry_cutoff` - window at the end of a round (ms) during which new
    ///   stakes roll forward to the next round
    /// * `min_ticket_cost` - minimum stake per ticket
    pub fn init(
        &mut self,
        asset: Address,
        lending_market: Address,
        coordinator: Address,
        key_hash: [u8; 32],
        subscription_id: u64,
        request_confirmations: u32,
        callback_gas_limit: u64,
        treasury: Address,
        admin: Address,
        round_interval: u64,
        entry_cutoff: u64,
        min_ticket_cost: U256,
    ) {
        if entry_cutoff > round_interval {
            self.env().revert(Error::InvalidEntryCutoff);
        }

        self.vault.configure(lending_market, asset);
        self.randomness.configure(
            coordinator,
            key_hash,
            subscription_id,
            request_confirmations,
            callback_gas_limit,
        );

        self.treasury.set(treasury);
        self.admin.set(admin);
        self.platform_fee_bps.set(DEFAULT_PLATFORM_FEE_BPS);
        self.min_ticket_cost.set(min_ticket_cost);
        self.total_yield_generated.set(U256::zero());

        self.current_round.set(FIRST_ROUND);
        self.round_state.set(RoundState::Open);
        self.round_opened_at.set(self.env().get_block_time());
        self.round_interval.set(round_interval);
        self.entry_cutoff.set(entry_cutoff);

        self.is_paused.set(false);
        self.lock.set(false);
    }

    // ============ CORE FUNCTIONS ============

    /// Stake `amount` of the asset and receive a ticket.
    ///
    /// Eligibility: inside the purchase window the ticket joins the current
    /// round; after the cutoff, or while a draw is in flight, it joins the
    /// next round.
    pub fn stake(&mut self, amount: U256) {
        self.acquire_lock();
        self.require_not_paused();

        if amount.is_zero() {
            self.env().revert(Error::ZeroDeposit);
        }
        if amount < self.min_ticket_cost.get_or_default() {
            self.env().revert(Error::BelowMinimumTicket);
        }

        let caller = self.env().caller();

        // A round over an empty pool never ran; restart its clock so the
        // first ticket is not deferred past a round that cannot resolve.
        if matches!(self.state(), RoundState::Open) && self.ledger.ticket_count() == 0 {
            self.round_opened_at.set(self.env().get_block_time());
        }

        let eligible_from_round = self.entry_round();

        // Update state BEFORE external calls (CEI pattern)
        self.ledger.append(caller, amount, eligible_from_round);

        let asset = self.asset_address();
        let pool = self.env().self_address();
        FungibleTokenContractRef::new(self.env(), asset).transfer_from(caller, pool, amount);
        self.vault.deposit(amount);

        self.env().emit_event(Staked {
            user: caller,
            amount,
            eligible_from_round,
            total_staked: self.ledger.total_staked(),
        });

        self.release_lock();
    }

    /// Withdraw the caller's full principal, removing all their tickets.
    pub fn withdraw_all(&mut self) {
        self.acquire_lock();
        self.require_not_paused();

        let caller = self.env().caller();
        let amount = self.ledger.remove_all(caller);
        self.vault.withdraw(amount, caller);

        self.env().emit_event(Withdrawn {
            user: caller,
            amount,
            total_staked: self.ledger.total_staked(),
        });

        self.release_lock();
    }

    /// Withdraw the caller's full principal while the pool is paused.
    ///
    /// The escape hatch for a stuck round lifecycle: it ignores round state
    /// entirely and is only available under pause.
    pub fn emergency_withdraw(&mut self) {
        self.acquire_lock();
        if !self.is_paused.get_or_default() {
            self.env().revert(Error::ContractNotPaused);
        }

        let caller = self.env().caller();
        let amount = self.ledger.remove_all(caller);
        self.vault.withdraw(amount, caller);

        self.env().emit_event(EmergencyWithdrawn {
            user: caller,
            amount,
        });

        self.release_lock();
    }

    // ============ UPKEEP ============

    /// Whether `perform_upkeep` would currently succeed.
    pub fn upkeep_needed(&self) -> bool {
        if self.is_paused.get_or_default() {
            return false;
        }
        if !matches!(self.state(), RoundState::Open) {
            return false;
        }
        if !self.interval_elapsed() {
            return false;
        }
        self.ledger.eligible_count(self.current_round.get_or_default()) > 0
    }

    /// Start the draw for the current round: move to `Calculating` and
    /// request randomness. Called by the external time-based trigger.
    pub fn perform_upkeep(&mut self) {
        self.acquire_lock();

        if self.is_paused.get_or_default() || !matches!(self.state(), RoundState::Open) {
            self.env().revert(Error::UpkeepNotNeeded);
        }
        if !self.interval_elapsed() {
            self.env().revert(Error::IntervalNotPassed);
        }
        let round = self.current_round.get_or_default();
        if self.ledger.eligible_count(round) == 0 {
            self.env().revert(Error::UpkeepNotNeeded);
        }

        self.round_state.set(RoundState::Calculating);
        let request_id = self.randomness.request();

        self.env().emit_event(RandomnessRequested { round, request_id });

        self.release_lock();
    }

    // ============ RANDOMNESS CALLBACK ============

    /// Inbound delivery from the randomness coordinator.
    ///
    /// Validates the caller identity, consumes the request exactly once, and
    /// resolves the round. Deliberately not gated on pause: an outstanding
    /// request is always honored, otherwise a pause during `Calculating`
    /// would strand the round.
    pub fn fulfill_random_words(&mut self, request_id: u64, random_words: Vec<U256>) {
        self.acquire_lock();

        self.randomness.require_coordinator();
        let random_value = self.randomness.consume(request_id, &random_words);

        if !matches!(self.state(), RoundState::Calculating) {
            self.env().revert(Error::RoundNotCalculating);
        }

        self.resolve_round(random_value);

        self.release_lock();
    }

    // ============ VIEW FUNCTIONS ============

    pub fn current_round(&self) -> u64 {
        self.current_round.get_or_default()
    }

    pub fn round_state(&self) -> RoundState {
        self.state()
    }

    pub fn round_opened_at(&self) -> u64 {
        self.round_opened_at.get_or_default()
    }

    pub fn round_interval(&self) -> u64 {
        self.round_interval.get_or_default()
    }

    pub fn entry_cutoff(&self) -> u64 {
        self.entry_cutoff.get_or_default()
    }

    pub fn total_staked(&self) -> U256 {
        self.ledger.total_staked()
    }

    pub fn stake_of(&self, user: Address) -> U256 {
        self.ledger.stake_of(user)
    }

    pub fn tickets_of(&self, user: Address) -> Vec<Ticket> {
        self.ledger.tickets_of(user)
    }

    pub fn ticket_count(&self) -> u32 {
        self.ledger.ticket_count()
    }

    pub fn eligible_ticket_count(&self, round: u64) -> u32 {
        self.ledger.eligible_count(round)
    }

    pub fn total_yield_generated(&self) -> U256 {
        self.total_yield_generated.get_or_default()
    }

    /// Current redeemable balance at the lending market.
    pub fn redeemable_balance(&self) -> U256 {
        self.vault.redeemable_balance()
    }

    /// Accrued yield; reverts with `NoInterestAccrued` when there is none.
    pub fn accrued_yield(&self) -> U256 {
        self.vault.accrued_yield(self.ledger.total_staked())
    }

    pub fn platform_fee_bps(&self) -> u64 {
        self.platform_fee_bps.get_or_default()
    }

    pub fn min_ticket_cost(&self) -> U256 {
        self.min_ticket_cost.get_or_default()
    }

    pub fn get_random_request(&self, request_id: u64) -> Option<RandomRequest> {
        self.randomness.request_by_id(request_id)
    }

    pub fn pending_request(&self) -> Option<u64> {
        self.randomness.pending_request()
    }

    pub fn get_asset(&self) -> Option<Address> {
        self.vault.asset()
    }

    pub fn get_lending_market(&self) -> Option<Address> {
        self.vault.market()
    }

    pub fn get_coordinator(&self) -> Option<Address> {
        self.randomness.coordinator()
    }

    pub fn get_treasury(&self) -> Option<Address> {
        self.treasury.get()
    }

    pub fn get_admin(&self) -> Option<Address> {
        self.admin.get()
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused.get_or_default()
    }

    // ============ INTERNAL FUNCTIONS ============

    /// Pay out the current round from a single yield snapshot and open the
    /// next one. All-or-nothing: any failure reverts the whole delivery.
    fn resolve_round(&mut self, random_value: U256) {
        let round = self.current_round.get_or_default();

        let eligible = self.ledger.eligible_count(round);
        if eligible == 0 {
            self.env().revert(Error::NoEligibleTickets);
        }

        // One snapshot; fee and prize must not drift apart.
        let total_staked = self.ledger.total_staked();
        let round_yield = self.vault.accrued_yield(total_staked);

        let index = (random_value % U256::from(eligible)).as_u32();
        let winner = self.ledger.eligible_at(round, index).owner;

        // Integer bps math truncates toward zero, in the winner's favor.
        let fee = round_yield * U256::from(self.platform_fee_bps.get_or_default())
            / U256::from(BPS_DENOMINATOR);
        let prize = round_yield - fee;

        self.total_yield_generated
            .set(self.total_yield_generated.get_or_default() + round_yield);

        if !fee.is_zero() {
            let treasury = self
                .treasury
                .get()
                .unwrap_or_revert_with(&self.env(), Error::TreasuryNotSet);
            self.vault.withdraw(fee, treasury);
        }
        self.vault.withdraw(prize, winner);

        self.current_round.set(round + 1);
        self.round_opened_at.set(self.env().get_block_time());
        if self.is_paused.get_or_default() {
            self.round_state.set(RoundState::Closed);
        } else {
            self.round_state.set(RoundState::Open);
        }

        self.env().emit_event(WinnerSelected {
            round,
            winner,
            prize,
            fee,
            total_yield_generated: self.total_yield_generated.get_or_default(),
        });
    }

    /// Round a stake made right now becomes eligible from.
    fn entry_round(&self) -> u64 {
        let round = self.current_round.get_or_default();
        if matches!(self.state(), RoundState::Calculating) {
            // Winner selection for this round has already begun.
            return round + 1;
        }
        let window_closes_at = self.round_opened_at.get_or_default()
            + self.round_interval.get_or_default()
            - self.entry_cutoff.get_or_default();
        if self.env().get_block_time() < window_closes_at {
            round
        } else {
            round + 1
        }
    }

    fn interval_elapsed(&self) -> bool {
        let now = self.env().get_block_time();
        let opened = self.round_opened_at.get_or_default();
        now - opened >= self.round_interval.get_or_default()
    }

    fn state(&self) -> RoundState {
        self.round_state.get().unwrap_or(RoundState::Open)
    }

    fn asset_address(&self) -> Address {
        self.vault
            .asset()
            .unwrap_or_revert_with(&self.env(), Error::AssetNotSet)
    }

    fn require_not_paused(&self) {
        if self.is_paused.get_or_default() {
            self.env().revert(Error::ContractPaused);
        }
    }

    fn require_admin(&self) {
        let admin = self
            .admin
            .get()
            .unwrap_or_revert_with(&self.env(), Error::AdminNotSet);
        if self.env().caller() != admin {
            self.env().revert(Error::NotAdmin);
        }
    }

    /// Mutual exclusion around every entry point that mutates stake or round
    /// state and makes an outbound call.
    fn acquire_lock(&mut self) {
        if self.lock.get_or_default() {
            self.env().revert(Error::ReentrantCall);
        }
        self.lock.set(true);
    }

    fn release_lock(&mut self) {
        self.lock.set(false);
    }

    // ============ ADMIN FUNCTIONS ============

    pub fn pause(&mut self) {
        self.require_admin();
        self.is_paused.set(true);
        // A draw in flight stays Calculating so the outstanding randomness
        // request remains resolvable.
        if matches!(self.state(), RoundState::Open) {
            self.round_state.set(RoundState::Closed);
        }
        self.env().emit_event(Paused {
            by: self.env().caller(),
        });
    }

    pub fn unpause(&mut self) {
        self.require_admin();
        self.is_paused.set(false);
        if matches!(self.state(), RoundState::Closed) {
            self.round_state.set(RoundState::Open);
        }
        self.env().emit_event(Unpaused {
            by: self.env().caller(),
        });
    }

    /// Failsafe: sweep accrued interest to `to` without running a round.
    /// Available in any state, including paused, for when automation or the
    /// randomness provider is down.
    pub fn withdraw_yield(&mut self, to: Address) {
        self.acquire_lock();
        self.require_admin();

        let amount = self.vault.accrued_yield(self.ledger.total_staked());
        self.vault.withdraw(amount, to);

        self.env().emit_event(YieldWithdrawn { to, amount });

        self.release_lock();
    }

    pub fn set_platform_fee(&mut self, fee_bps: u64) {
        self.require_admin();
        if fee_bps > MAX_PLATFORM_FEE_BPS {
            self.env().revert(Error::FeeTooHigh);
        }
        let old_fee = self.platform_fee_bps.get_or_default();
        self.platform_fee_bps.set(fee_bps);
        self.env().emit_event(FeeUpdated {
            old_fee_bps: old_fee,
            new_fee_bps: fee_bps,
        });
    }

    pub fn set_min_ticket_cost(&mut self, min_ticket_cost: U256) {
        self.require_admin();
        let old_cost = self.min_ticket_cost.get_or_default();
        self.min_ticket_cost.set(min_ticket_cost);
        self.env().emit_event(MinTicketCostUpdated {
            old_cost,
            new_cost: min_ticket_cost,
        });
    }

    pub fn set_treasury(&mut self, treasury: Address) {
        self.require_admin();
        let old_treasury = self
            .treasury
            .get()
            .unwrap_or_revert_with(&self.env(), Error::TreasuryNotSet);
        self.treasury.set(treasury);
        self.env().emit_event(TreasuryUpdated {
            old_treasury,
            new_treasury: treasury,
        });
    }

    pub fn transfer_admin(&mut self, new_admin: Address) {
        self.require_admin();
        let old_admin = self
            .admin
            .get()
            .unwrap_or_revert_with(&self.env(), Error::AdminNotSet);
        self.admin.set(new_admin);
        self.env().emit_event(AdminTransferred {
            old_admin,
            new_admin,
        });
    }
}
