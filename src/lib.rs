#![no_std]

multiversx_sc::imports!();

pub mod attestation_proxy;
pub mod errors;
pub mod events;
pub mod membership;
pub mod polls;
pub mod pricing;
pub mod project;
pub mod quadratic_voting_proxy;
pub mod score_oracle_proxy;
pub mod types;
pub mod voting_token;

use errors::{
    ERR_INSUFFICIENT_TOKENS, ERR_INVALID_VOTE_COUNT, ERR_NO_VOTE, ERR_PARTICIPANT_UNDERFLOW,
    ERR_POLL_INACTIVE, ERR_SELF_VOTE, ERR_TOO_MANY_VOTES,
};
use pricing::{vote_price, MAX_VOTING_POWER};
use types::{Membership, Poll, ProjectConfig, ProjectPolicy, Vote};

// ============================================================
// Constants
// ============================================================

/// Bound on the number of polls a single member can hold votes on
pub const MAX_VOTED_POLLS: usize = 50;

// ============================================================
// Contract
// ============================================================

/// One quadratic voting project. Deployed per project by the factory;
/// all membership, poll and token state is local to this instance.
#[multiversx_sc::contract]
pub trait QuadraticVoting:
    project::ProjectModule
    + membership::MembershipModule
    + polls::PollsModule
    + voting_token::VotingTokenModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, config: ProjectConfig<Self::Api>) {
        let now = self.blockchain().get_block_timestamp();
        if let Err(reason) = config.validate(now) {
            sc_panic!(reason);
        }

        self.config().set(&config);
        self.project_active().set(true);
        self.created_at().set(now);
        self.poll_count().set(0u64);
        self.participant_count().set(0u64);
    }

    /// Configuration is immutable; upgrades never touch it.
    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: castVote
    // Casts, replaces or (with zero votes) withdraws a vote.
    // A replaced vote is fully refunded before the new one is charged.
    // ========================================================

    #[endpoint(castVote)]
    fn cast_vote(&self, poll_id: u64, requested_votes: u64) {
        self.require_project_open();

        let mut poll = self.require_poll(poll_id);
        require!(poll.is_active, ERR_POLL_INACTIVE);

        let caller = self.blockchain().get_caller();
        let mut membership = self.require_member(&caller);

        let config = self.config().get();
        if !config.policy.allow_self_vote {
            require!(poll.creator != caller, ERR_SELF_VOTE);
        }
        require!(requested_votes <= MAX_VOTING_POWER, ERR_INVALID_VOTE_COUNT);

        self.refresh_verification(&caller, &mut membership, &config);

        if requested_votes == 0 {
            self.withdraw_vote(&caller, &mut poll, &mut membership, &config.policy);
            self.polls(poll_id).set(&poll);
            self.memberships(&caller).set(&membership);
            return;
        }

        let previous = self.votes(poll_id, &caller);
        let is_first_vote = previous.is_empty();
        if !is_first_vote {
            let prior = previous.get();
            membership.tokens_left += &prior.tokens_cost;
            poll.total_voting_power -= prior.voting_power;
            self.mint_voting_tokens(&caller, &prior.tokens_cost);
        }

        let cost = match vote_price(membership.is_verified, requested_votes) {
            Some(cost) => BigUint::from(cost),
            None => sc_panic!(ERR_INVALID_VOTE_COUNT),
        };
        require!(cost <= membership.tokens_left, ERR_INSUFFICIENT_TOKENS);

        if is_first_vote {
            let mut voted_polls = self.voted_polls(&caller);
            require!(voted_polls.len() < MAX_VOTED_POLLS, ERR_TOO_MANY_VOTES);
            voted_polls.insert(poll_id);
            self.poll_voters(poll_id).insert(caller.clone());
            poll.total_participants += 1;
        }

        let vote = Vote {
            voting_power: requested_votes,
            tokens_cost: cost.clone(),
            is_verified: membership.is_verified,
            has_voted: true,
            timestamp: self.blockchain().get_block_timestamp(),
        };
        membership.tokens_left -= &cost;
        poll.total_voting_power += requested_votes;

        self.votes(poll_id, &caller).set(&vote);
        self.polls(poll_id).set(&poll);
        self.memberships(&caller).set(&membership);
        self.burn_voting_tokens(&caller, &cost);

        self.vote_cast_event(
            &caller,
            poll_id,
            requested_votes,
            membership.is_verified,
            &cost,
        );
    }

    // ========================================================
    // ENDPOINT: removeVote
    // Refunds the full cost of the caller's vote. Allowed on
    // deactivated polls while the project is still open.
    // ========================================================

    #[endpoint(removeVote)]
    fn remove_vote(&self, poll_id: u64) -> BigUint {
        self.require_project_open();

        let mut poll = self.require_poll(poll_id);
        let caller = self.blockchain().get_caller();
        let mut membership = self.require_member(&caller);
        let config = self.config().get();

        let refund = self.withdraw_vote(&caller, &mut poll, &mut membership, &config.policy);
        self.polls(poll_id).set(&poll);
        self.memberships(&caller).set(&membership);
        refund
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Deletes `voter`'s vote on `poll`, rolling back its aggregates and
    /// refunding its cost. Callers persist `poll` and `membership`.
    fn withdraw_vote(
        &self,
        voter: &ManagedAddress,
        poll: &mut Poll<Self::Api>,
        membership: &mut Membership<Self::Api>,
        policy: &ProjectPolicy,
    ) -> BigUint {
        let vote_mapper = self.votes(poll.id, voter);
        require!(!vote_mapper.is_empty(), ERR_NO_VOTE);
        let prior = vote_mapper.get();
        vote_mapper.clear();

        poll.total_voting_power -= prior.voting_power;
        poll.total_participants = if policy.strict_participant_accounting {
            require!(poll.total_participants > 0, ERR_PARTICIPANT_UNDERFLOW);
            poll.total_participants - 1
        } else {
            poll.total_participants.saturating_sub(1)
        };
        self.voted_polls(voter).swap_remove(&poll.id);
        self.poll_voters(poll.id).swap_remove(voter);

        membership.tokens_left += &prior.tokens_cost;
        self.mint_voting_tokens(voter, &prior.tokens_cost);

        self.vote_removed_event(voter, poll.id, &prior.tokens_cost);
        prior.tokens_cost
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// (participants, polls, token supply, active, end time)
    #[view(getProjectStats)]
    fn get_project_stats(&self) -> MultiValue5<u64, u64, BigUint, bool, u64> {
        let participants = self.participant_count().get();
        let polls = self.poll_count().get();
        let supply = self.token_supply().get();
        let is_active = self.project_active().get();
        let end_time = self.config().get().end_time;
        (participants, polls, supply, is_active, end_time).into()
    }

    #[view(getCreatedAt)]
    fn get_created_at(&self) -> u64 {
        self.created_at().get()
    }
}
