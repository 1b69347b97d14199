//! Ticket ledger - per-user stakes and round eligibility
//!
//! Pure bookkeeping, no external calls. Tickets live in an arena indexed by
//! slot; removal is swap-and-pop, so slots stay densely packed and a full
//! withdrawal is O(tickets owned). An owner → slots index map keeps removal
//! from scanning the arena.

use alloc::vec::Vec;
use odra::casper_types::U256;
use odra::prelude::*;

use crate::errors::Error;

/// One stake deposit. Immutable once created, removed as a whole on
/// withdrawal.
#[odra::odra_type]
pub struct Ticket {
    pub owner: Address,
    pub amount: U256,
    pub eligible_from_round: u64,
}

/// Arena of active tickets plus per-user and aggregate totals.
///
/// Invariant: `total_staked` equals the sum of all ticket amounts, which
/// equals the sum of all per-user totals.
#[odra::module]
pub struct TicketLedger {
    tickets: Mapping<u32, Ticket>,
    ticket_count: Var<u32>,
    owner_slots: Mapping<Address, Vec<u32>>,
    stake_totals: Mapping<Address, U256>,
    total_staked: Var<U256>,
}

#[odra::module]
impl TicketLedger {
    /// Append a ticket and update the totals. Returns the slot it landed in.
    pub fn append(&mut self, owner: Address, amount: U256, eligible_from_round: u64) -> u32 {
        let slot = self.ticket_count.get_or_default();
        self.tickets.set(
            &slot,
            Ticket {
                owner,
                amount,
                eligible_from_round,
            },
        );
        self.ticket_count.set(slot + 1);

        let mut slots = self.owner_slots.get(&owner).unwrap_or_default();
        slots.push(slot);
        self.owner_slots.set(&owner, slots);

        let user_total = self.stake_totals.get(&owner).unwrap_or_default();
        self.stake_totals.set(&owner, user_total + amount);
        self.total_staked
            .set(self.total_staked.get_or_default() + amount);

        slot
    }

    /// Remove every ticket owned by `owner` and return the freed principal.
    ///
    /// Slots are released highest-first so a swap never moves a ticket into
    /// a slot that is still queued for removal.
    pub fn remove_all(&mut self, owner: Address) -> U256 {
        let mut slots = self.owner_slots.get(&owner).unwrap_or_default();
        if slots.is_empty() {
            self.env().revert(Error::NoTicketsToWithdraw);
        }
        slots.sort_unstable();

        let mut freed = U256::zero();
        for slot in slots.into_iter().rev() {
            let ticket = self
                .tickets
                .get(&slot)
                .unwrap_or_revert_with(&self.env(), Error::TicketNotFound);
            freed += ticket.amount;
            self.swap_remove(slot);
        }

        self.owner_slots.set(&owner, Vec::new());
        self.stake_totals.set(&owner, U256::zero());
        self.total_staked
            .set(self.total_staked.get_or_default() - freed);

        freed
    }

    /// Number of tickets eligible for `round`.
    pub fn eligible_count(&self, round: u64) -> u32 {
        let len = self.ticket_count.get_or_default();
        let mut count = 0;
        for slot in 0..len {
            if let Some(ticket) = self.tickets.get(&slot) {
                if ticket.eligible_from_round <= round {
                    count += 1;
                }
            }
        }
        count
    }

    /// The `index`-th ticket eligible for `round`, in arena order.
    ///
    /// Arena order is deterministic at any point in time, which is all
    /// winner selection requires.
    pub fn eligible_at(&self, round: u64, index: u32) -> Ticket {
        let len = self.ticket_count.get_or_default();
        let mut found: Option<Ticket> = None;
        let mut seen = 0;
        for slot in 0..len {
            if let Some(ticket) = self.tickets.get(&slot) {
                if ticket.eligible_from_round <= round {
                    if seen == index {
                        found = Some(ticket);
                        break;
                    }
                    seen += 1;
                }
            }
        }
        found.unwrap_or_revert_with(&self.env(), Error::NoEligibleTickets)
    }

    pub fn total_staked(&self) -> U256 {
        self.total_staked.get_or_default()
    }

    pub fn stake_of(&self, owner: Address) -> U256 {
        self.stake_totals.get(&owner).unwrap_or_default()
    }

    pub fn ticket_count(&self) -> u32 {
        self.ticket_count.get_or_default()
    }

    pub fn ticket(&self, slot: u32) -> Option<Ticket> {
        self.tickets.get(&slot)
    }

    pub fn tickets_of(&self, owner: Address) -> Vec<Ticket> {
        let slots = self.owner_slots.get(&owner).unwrap_or_default();
        slots
            .iter()
            .filter_map(|slot| self.tickets.get(slot))
            .collect()
    }

    /// Release `slot` by moving the last ticket into it.
    fn swap_remove(&mut self, slot: u32) {
        let last = self.ticket_count.get_or_default() - 1;
        if slot != last {
            let moved = self
                .tickets
                .get(&last)
                .unwrap_or_revert_with(&self.env(), Error::TicketNotFound);
            let mut moved_slots = self.owner_slots.get(&moved.owner).unwrap_or_default();
            if let Some(entry) = moved_slots.iter_mut().find(|s| **s == last) {
                *entry = slot;
            }
            self.owner_slots.set(&moved.owner, moved_slots);
            self.tickets.set(&slot, moved);
        }
        self.ticket_count.set(last);
    }
}
