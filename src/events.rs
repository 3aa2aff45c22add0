multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("userJoined")]
    fn user_joined_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] is_verified: bool,
        tokens_granted: &BigUint,
    );

    #[event("userVerificationUpdated")]
    fn user_verification_updated_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] is_verified: bool,
        additional_tokens: &BigUint,
    );

    #[event("attestationIssued")]
    fn attestation_issued_event(
        &self,
        #[indexed] user: &ManagedAddress,
        attestation_id: u64,
    );

    #[event("pollCreated")]
    fn poll_created_event(
        &self,
        #[indexed] poll_id: u64,
        #[indexed] creator: &ManagedAddress,
        name: &ManagedBuffer,
    );

    #[event("pollStatusChanged")]
    fn poll_status_changed_event(&self, #[indexed] poll_id: u64, is_active: bool);

    #[event("projectStatusChanged")]
    fn project_status_changed_event(&self, #[indexed] admin: &ManagedAddress, is_active: bool);

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] poll_id: u64,
        #[indexed] voting_power: u64,
        #[indexed] is_verified: bool,
        tokens_cost: &BigUint,
    );

    #[event("voteRemoved")]
    fn vote_removed_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] poll_id: u64,
        tokens_returned: &BigUint,
    );

    #[event("tokensMinted")]
    fn tokens_minted_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);

    #[event("tokensBurned")]
    fn tokens_burned_event(&self, #[indexed] from: &ManagedAddress, amount: &BigUint);
}
