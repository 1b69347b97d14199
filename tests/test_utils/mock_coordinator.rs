//! Mock randomness coordinator for testing
//!
//! Hands out sequential request ids and lets tests deliver arbitrary words
//! back to a consumer from the coordinator's own contract identity, the way
//! the real provider would.

use odra::casper_types::U256;
use odra::prelude::*;
use odra::ContractRef;

use windfall::vrf_interface::RandomnessConsumerContractRef;

/// Mock randomness coordinator contract for testing
#[odra::module]
pub struct MockCoordinator {
    next_request_id: Var<u64>,
    last_request_id: Var<Option<u64>>,
}

#[odra::module]
impl MockCoordinator {
    pub fn init(&mut self) {
        self.next_request_id.set(1);
        self.last_request_id.set(None);
    }

    /// Mock request - records nothing but the id sequence
    #[allow(unused_variables)]
    pub fn request_random_words(
        &mut self,
        key_hash: [u8; 32],
        subscription_id: u64,
        request_confirmations: u32,
        callback_gas_limit: u64,
        num_words: u32,
    ) -> u64 {
        let id = self.next_request_id.get_or_default();
        self.next_request_id.set(id + 1);
        self.last_request_id.set(Some(id));
        id
    }

    /// Deliver `words` for `request_id` to `consumer`
    pub fn deliver(&mut self, consumer: Address, request_id: u64, words: Vec<U256>) {
        RandomnessConsumerContractRef::new(self.env(), consumer)
            .fulfill_random_words(request_id, words);
    }

    pub fn last_request_id(&self) -> Option<u64> {
        self.last_request_id.get_or_default()
    }
}
