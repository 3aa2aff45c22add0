multiversx_sc::imports!();

use crate::errors::{ERR_POLL_NAME_REQUIRED, ERR_POLL_NOT_FOUND};
use crate::types::{Poll, Vote};

#[multiversx_sc::module]
pub trait PollsModule:
    crate::membership::MembershipModule
    + crate::project::ProjectModule
    + crate::voting_token::VotingTokenModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: createPoll
    // Any member can open a poll. Ids are dense, starting at 0.
    // ========================================================

    #[endpoint(createPoll)]
    fn create_poll(
        &self,
        name: ManagedBuffer,
        description: ManagedBuffer,
        metadata_hash: ManagedBuffer,
    ) -> u64 {
        self.require_project_open();

        let caller = self.blockchain().get_caller();
        self.require_member(&caller);
        require!(!name.is_empty(), ERR_POLL_NAME_REQUIRED);

        let poll_id = self.poll_count().get();
        let poll = Poll {
            id: poll_id,
            name,
            description,
            metadata_hash,
            creator: caller.clone(),
            is_active: true,
            total_voting_power: 0,
            total_participants: 0,
            created_at: self.blockchain().get_block_timestamp(),
        };

        self.polls(poll_id).set(&poll);
        self.poll_count().set(poll_id + 1);

        self.poll_created_event(poll_id, &caller, &poll.name);

        poll_id
    }

    // ========================================================
    // ENDPOINT: togglePollStatus
    // Admin only. Gates future votes; cast votes are untouched.
    // ========================================================

    #[endpoint(togglePollStatus)]
    fn toggle_poll_status(&self, poll_id: u64) -> bool {
        self.require_admin();
        let mut poll = self.require_poll(poll_id);

        poll.is_active = !poll.is_active;
        self.polls(poll_id).set(&poll);

        self.poll_status_changed_event(poll_id, poll.is_active);
        poll.is_active
    }

    fn require_poll(&self, poll_id: u64) -> Poll<Self::Api> {
        let mapper = self.polls(poll_id);
        require!(!mapper.is_empty(), ERR_POLL_NOT_FOUND);
        mapper.get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getPoll)]
    fn get_poll(&self, poll_id: u64) -> Poll<Self::Api> {
        self.require_poll(poll_id)
    }

    #[view(getPolls)]
    fn get_polls(&self, from: u64, count: u64) -> MultiValueEncoded<Poll<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.poll_count().get();
        let end = core::cmp::min(from.saturating_add(count), total);

        for poll_id in from..end {
            result.push(self.polls(poll_id).get());
        }
        result
    }

    #[view(getPollCount)]
    fn get_poll_count(&self) -> u64 {
        self.poll_count().get()
    }

    /// A missing vote reads as the zero record (`has_voted == false`).
    #[view(getVote)]
    fn get_vote(&self, poll_id: u64, user: ManagedAddress) -> Vote<Self::Api> {
        self.require_poll(poll_id);
        let mapper = self.votes(poll_id, &user);
        if mapper.is_empty() {
            return Vote::empty();
        }
        mapper.get()
    }

    #[view(getPollVoters)]
    fn get_poll_voters(&self, poll_id: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for voter in self.poll_voters(poll_id).iter() {
            result.push(voter);
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("pollCount")]
    fn poll_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("polls")]
    fn polls(&self, poll_id: u64) -> SingleValueMapper<Poll<Self::Api>>;

    #[storage_mapper("votes")]
    fn votes(&self, poll_id: u64, voter: &ManagedAddress) -> SingleValueMapper<Vote<Self::Api>>;

    #[storage_mapper("pollVoters")]
    fn poll_voters(&self, poll_id: u64) -> UnorderedSetMapper<ManagedAddress>;
}
