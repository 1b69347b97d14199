//! Randomness coordinator interface
//!
//! Winner selection consumes verifiable randomness delivered asynchronously
//! by an external coordinator contract. The pool issues a request with a
//! fixed configuration (key hash, subscription, confirmation count, callback
//! gas budget, word count = 1) and receives the random words later through
//! its own `fulfill_random_words` entry point, called by the coordinator.
//!
//! Only the coordinator address recorded at initialization may deliver a
//! callback; the pool checks the caller identity before touching any state.

use alloc::vec::Vec;
use odra::casper_types::U256;
use odra::prelude::*;

/// Number of random words requested per round. The winner index needs one.
pub const NUM_WORDS: u32 = 1;

/// External contract interface for the randomness coordinator
#[odra::external_contract]
pub trait RandomnessCoordinator {
    /// Request `num_words` random words; returns the request id
    ///
    /// The coordinator later calls `fulfill_random_words(request_id, words)`
    /// on the requesting contract.
    fn request_random_words(
        &mut self,
        key_hash: [u8; 32],
        subscription_id: u64,
        request_confirmations: u32,
        callback_gas_limit: u64,
        num_words: u32,
    ) -> u64;
}

/// Inbound callback surface the pool exposes to the coordinator. Declared as
/// an external contract so the coordinator side (and test mocks) can call it
/// without depending on the full pool module.
#[odra::external_contract]
pub trait RandomnessConsumer {
    /// Deliver the random words for `request_id`
    fn fulfill_random_words(&mut self, request_id: u64, random_words: Vec<U256>);
}
