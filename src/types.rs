multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::errors::{
    ERR_ALLOTMENT_NOT_POSITIVE, ERR_END_TIME_NOT_FUTURE, ERR_NAME_REQUIRED,
    ERR_SCORE_THRESHOLDS_INVERTED, ERR_TOKEN_TIERS_INVERTED,
};

// ============================================================
// Project Policy: variant-specific voting rules
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub struct ProjectPolicy {
    /// When false, a poll's creator cannot vote on it.
    pub allow_self_vote: bool,
    /// When true, decrementing a zero participant counter aborts the
    /// transaction instead of saturating at zero. A poll's participant
    /// counter is never zero while one of its votes exists, so the two
    /// settings only diverge if stored state is already inconsistent.
    pub strict_participant_accounting: bool,
}

impl Default for ProjectPolicy {
    fn default() -> Self {
        ProjectPolicy {
            allow_self_vote: false,
            strict_participant_accounting: true,
        }
    }
}

// ============================================================
// Project Config: immutable after init
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ProjectConfig<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    /// IPFS (or similar) hash of the off-chain project metadata
    pub metadata_hash: ManagedBuffer<M>,
    pub tokens_per_user: BigUint<M>,
    pub tokens_per_verified_user: BigUint<M>,
    pub min_score_to_join: u64,
    pub min_score_to_verify: u64,
    /// Block timestamp after which no join, poll or vote is accepted
    pub end_time: u64,
    pub admin: ManagedAddress<M>,
    pub score_oracle: ManagedAddress<M>,
    /// Joins are attested through this issuer when set
    pub attestation_issuer: Option<ManagedAddress<M>>,
    pub policy: ProjectPolicy,
}

impl<M: ManagedTypeApi> ProjectConfig<M> {
    /// Checks creation-time invariants. Returns the reason string of the
    /// first violated rule.
    pub fn validate(&self, now: u64) -> Result<(), &'static str> {
        if self.name.is_empty() {
            return Err(ERR_NAME_REQUIRED);
        }
        if self.tokens_per_user == 0u64 {
            return Err(ERR_ALLOTMENT_NOT_POSITIVE);
        }
        if self.tokens_per_verified_user <= self.tokens_per_user {
            return Err(ERR_TOKEN_TIERS_INVERTED);
        }
        if self.min_score_to_verify <= self.min_score_to_join {
            return Err(ERR_SCORE_THRESHOLDS_INVERTED);
        }
        if self.end_time <= now {
            return Err(ERR_END_TIME_NOT_FUTURE);
        }
        Ok(())
    }

    pub fn allotment(&self, is_verified: bool) -> BigUint<M> {
        if is_verified {
            self.tokens_per_verified_user.clone()
        } else {
            self.tokens_per_user.clone()
        }
    }

    /// Tokens granted when a regular member is promoted to verified.
    pub fn verification_bonus(&self) -> BigUint<M> {
        &self.tokens_per_verified_user - &self.tokens_per_user
    }
}

// ============================================================
// Membership: one record per joined user, never deleted
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Membership<M: ManagedTypeApi> {
    pub is_registered: bool,
    pub is_verified: bool,
    pub tokens_left: BigUint<M>,
    /// Timestamp of the last identity score lookup (join or re-verification)
    pub last_score_check: u64,
    pub joined_at: u64,
    /// 0 when the project is not attestation-gated
    pub attestation_id: u64,
}

impl<M: ManagedTypeApi> Membership<M> {
    pub fn empty() -> Self {
        Membership {
            is_registered: false,
            is_verified: false,
            tokens_left: BigUint::zero(),
            last_score_check: 0,
            joined_at: 0,
            attestation_id: 0,
        }
    }
}

// ============================================================
// Poll: a single question members vote on
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Poll<M: ManagedTypeApi> {
    pub id: u64,
    pub name: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub metadata_hash: ManagedBuffer<M>,
    pub creator: ManagedAddress<M>,
    pub is_active: bool,
    pub total_voting_power: u64,
    pub total_participants: u64,
    pub created_at: u64,
}

// ============================================================
// Vote: one per user per poll
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Vote<M: ManagedTypeApi> {
    pub voting_power: u64,
    pub tokens_cost: BigUint<M>,
    /// Tier of the voter when the vote was cast
    pub is_verified: bool,
    pub has_voted: bool,
    pub timestamp: u64,
}

impl<M: ManagedTypeApi> Vote<M> {
    pub fn empty() -> Self {
        Vote {
            voting_power: 0,
            tokens_cost: BigUint::zero(),
            is_verified: false,
            has_voted: false,
            timestamp: 0,
        }
    }
}
