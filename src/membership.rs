multiversx_sc::imports!();

use crate::attestation_proxy;
use crate::errors::{ERR_ALREADY_JOINED, ERR_NOT_MEMBER, ERR_SCORE_TOO_LOW};
use crate::score_oracle_proxy;
use crate::types::{Membership, ProjectConfig};

/// Minimum delay between two identity score lookups for an unverified member.
pub const REVERIFICATION_COOLDOWN: u64 = 3_600;

#[multiversx_sc::module]
pub trait MembershipModule:
    crate::project::ProjectModule
    + crate::voting_token::VotingTokenModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: joinProject
    // Identity-gated entry. Tier and allotment follow the score.
    // ========================================================

    #[endpoint(joinProject)]
    fn join_project(&self) {
        self.require_project_open();

        let caller = self.blockchain().get_caller();
        require!(self.memberships(&caller).is_empty(), ERR_ALREADY_JOINED);

        let config = self.config().get();
        let score = self.fetch_identity_score(&config.score_oracle, &caller);
        require!(score >= config.min_score_to_join, ERR_SCORE_TOO_LOW);

        let is_verified = score >= config.min_score_to_verify;
        let allotment = config.allotment(is_verified);
        let now = self.blockchain().get_block_timestamp();

        // Stored before any outgoing call.
        self.memberships(&caller).set(&Membership {
            is_registered: true,
            is_verified,
            tokens_left: allotment.clone(),
            last_score_check: now,
            joined_at: now,
            attestation_id: 0,
        });
        self.member_list().insert(caller.clone());
        self.participant_count().update(|count| *count += 1);
        self.mint_voting_tokens(&caller, &allotment);

        if let Some(issuer) = &config.attestation_issuer {
            let attestation_id = self.issue_attestation(issuer, &caller, &config, is_verified);
            self.memberships(&caller)
                .update(|membership| membership.attestation_id = attestation_id);
            self.attestation_issued_event(&caller, attestation_id);
        }

        self.user_joined_event(&caller, is_verified, &allotment);
    }

    // ========================================================
    // ENDPOINT: refreshVerification
    // Explicit trigger for the lazy tier upgrade also run on vote.
    // ========================================================

    #[endpoint(refreshVerification)]
    fn refresh_verification_endpoint(&self) -> bool {
        self.require_project_open();

        let caller = self.blockchain().get_caller();
        let mut membership = self.require_member(&caller);
        let config = self.config().get();

        let upgraded = self.refresh_verification(&caller, &mut membership, &config);
        self.memberships(&caller).set(&membership);
        upgraded
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_member(&self, user: &ManagedAddress) -> Membership<Self::Api> {
        let mapper = self.memberships(user);
        require!(!mapper.is_empty(), ERR_NOT_MEMBER);
        mapper.get()
    }

    /// Promotes an unverified member whose score now reaches the
    /// verification threshold, minting the allotment difference.
    /// Lookups are rate limited by `REVERIFICATION_COOLDOWN`.
    /// The caller is responsible for persisting `membership`.
    fn refresh_verification(
        &self,
        user: &ManagedAddress,
        membership: &mut Membership<Self::Api>,
        config: &ProjectConfig<Self::Api>,
    ) -> bool {
        if membership.is_verified {
            return false;
        }
        let now = self.blockchain().get_block_timestamp();
        if now < membership.last_score_check + REVERIFICATION_COOLDOWN {
            return false;
        }

        membership.last_score_check = now;
        let score = self.fetch_identity_score(&config.score_oracle, user);
        if score < config.min_score_to_verify {
            return false;
        }

        let bonus = config.verification_bonus();
        membership.is_verified = true;
        membership.tokens_left += &bonus;
        self.mint_voting_tokens(user, &bonus);
        self.user_verification_updated_event(user, true, &bonus);
        true
    }

    /// An oracle address that is not a contract yields a zero score.
    /// A reverting oracle aborts the caller's transaction.
    fn fetch_identity_score(&self, oracle: &ManagedAddress, user: &ManagedAddress) -> u64 {
        if !self.blockchain().is_smart_contract(oracle) {
            return 0;
        }
        self.tx()
            .to(oracle)
            .typed(score_oracle_proxy::ScoreOracleProxy)
            .get_score(user.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    fn issue_attestation(
        &self,
        issuer: &ManagedAddress,
        recipient: &ManagedAddress,
        config: &ProjectConfig<Self::Api>,
        is_verified: bool,
    ) -> u64 {
        self.tx()
            .to(issuer)
            .typed(attestation_proxy::AttestationIssuerProxy)
            .attest(
                recipient.clone(),
                config.name.clone(),
                config.metadata_hash.clone(),
                is_verified,
            )
            .returns(ReturnsResult)
            .sync_call()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Returns the zero record for non-members.
    #[view(getMembership)]
    fn get_membership(&self, user: ManagedAddress) -> Membership<Self::Api> {
        let mapper = self.memberships(&user);
        if mapper.is_empty() {
            return Membership::empty();
        }
        mapper.get()
    }

    #[view(isMember)]
    fn is_member(&self, user: ManagedAddress) -> bool {
        !self.memberships(&user).is_empty()
    }

    #[view(getTokensLeft)]
    fn get_tokens_left(&self, user: ManagedAddress) -> BigUint {
        self.get_membership(user).tokens_left
    }

    #[view(getParticipantCount)]
    fn get_participant_count(&self) -> u64 {
        self.participant_count().get()
    }

    #[view(getUserVotedPolls)]
    fn get_user_voted_polls(&self, user: ManagedAddress) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for poll_id in self.voted_polls(&user).iter() {
            result.push(poll_id);
        }
        result
    }

    #[view(getMembers)]
    fn get_members(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.member_list().len() as u64;
        let end = core::cmp::min(from.saturating_add(count), total);

        // UnorderedSetMapper is 1-indexed
        for index in from..end {
            result.push(self.member_list().get_by_index(index as usize + 1));
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("memberships")]
    fn memberships(&self, user: &ManagedAddress) -> SingleValueMapper<Membership<Self::Api>>;

    #[storage_mapper("memberList")]
    fn member_list(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("participantCount")]
    fn participant_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("votedPolls")]
    fn voted_polls(&self, user: &ManagedAddress) -> UnorderedSetMapper<u64>;
}
