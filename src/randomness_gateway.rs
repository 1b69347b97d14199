//! Randomness gateway - request issuance and exactly-once fulfillment
//!
//! Issues requests to the external coordinator with the fixed configuration
//! recorded at initialization and tracks every request by id. A request is
//! consumed at most once; requests are never deleted, so the full history
//! stays queryable.

use alloc::vec::Vec;
use odra::casper_types::U256;
use odra::prelude::*;
use odra::ContractRef;

use crate::errors::Error;
use crate::vrf_interface::{RandomnessCoordinatorContractRef, NUM_WORDS};

/// One randomness request. Presence in the request map is existence;
/// `fulfilled` flips exactly once.
#[odra::odra_type]
pub struct RandomRequest {
    pub id: u64,
    pub fulfilled: bool,
    pub random_value: Option<U256>,
}

#[odra::module]
pub struct RandomnessGateway {
    coordinator: Var<Address>,
    key_hash: Var<[u8; 32]>,
    subscription_id: Var<u64>,
    request_confirmations: Var<u32>,
    callback_gas_limit: Var<u64>,
    requests: Mapping<u64, RandomRequest>,
    pending: Var<Option<u64>>,
}

#[odra::module]
impl RandomnessGateway {
    pub fn configure(
        &mut self,
        coordinator: Address,
        key_hash: [u8; 32],
        subscription_id: u64,
        request_confirmations: u32,
        callback_gas_limit: u64,
    ) {
        self.coordinator.set(coordinator);
        self.key_hash.set(key_hash);
        self.subscription_id.set(subscription_id);
        self.request_confirmations.set(request_confirmations);
        self.callback_gas_limit.set(callback_gas_limit);
        self.pending.set(None);
    }

    /// Issue a request to the coordinator and record it. At most one request
    /// may be outstanding at a time.
    pub fn request(&mut self) -> u64 {
        if self.pending.get_or_default().is_some() {
            self.env().revert(Error::RequestAlreadyPending);
        }

        let coordinator = self.coordinator_address();
        let request_id = RandomnessCoordinatorContractRef::new(self.env(), coordinator)
            .request_random_words(
                self.key_hash.get_or_default(),
                self.subscription_id.get_or_default(),
                self.request_confirmations.get_or_default(),
                self.callback_gas_limit.get_or_default(),
                NUM_WORDS,
            );

        self.requests.set(
            &request_id,
            RandomRequest {
                id: request_id,
                fulfilled: false,
                random_value: None,
            },
        );
        self.pending.set(Some(request_id));

        request_id
    }

    /// Validate and consume a delivery for `request_id`, returning the first
    /// random word. Rejects unknown ids and repeated deliveries.
    pub fn consume(&mut self, request_id: u64, random_words: &Vec<U256>) -> U256 {
        let mut request = self
            .requests
            .get(&request_id)
            .unwrap_or_revert_with(&self.env(), Error::RequestNotFound);
        if request.fulfilled {
            self.env().revert(Error::RequestAlreadyFulfilled);
        }
        if random_words.is_empty() {
            self.env().revert(Error::EmptyRandomWords);
        }

        // Word count is fixed to 1; only the first word is meaningful.
        let value = random_words[0];
        request.fulfilled = true;
        request.random_value = Some(value);
        self.requests.set(&request_id, request);

        if self.pending.get_or_default() == Some(request_id) {
            self.pending.set(None);
        }

        value
    }

    /// Capability check: only the coordinator may deliver randomness.
    pub fn require_coordinator(&self) {
        let coordinator = self.coordinator_address();
        if self.env().caller() != coordinator {
            self.env().revert(Error::CallerNotCoordinator);
        }
    }

    pub fn request_by_id(&self, request_id: u64) -> Option<RandomRequest> {
        self.requests.get(&request_id)
    }

    pub fn pending_request(&self) -> Option<u64> {
        self.pending.get_or_default()
    }

    pub fn coordinator(&self) -> Option<Address> {
        self.coordinator.get()
    }

    fn coordinator_address(&self) -> Address {
        self.coordinator
            .get()
            .unwrap_or_revert_with(&self.env(), Error::CoordinatorNotSet)
    }
}
