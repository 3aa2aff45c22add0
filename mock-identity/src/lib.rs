#![no_std]

multiversx_sc::imports!();

pub mod mock_identity_proxy;

/// Stand-in for the external identity services a project depends on:
/// a score oracle with owner-assigned scores, and an attestation issuer
/// both of which can be paused to simulate an unavailable service.
#[multiversx_sc::contract]
pub trait MockIdentity {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // ── Score oracle ──

    #[only_owner]
    #[endpoint(setScore)]
    fn set_score(&self, user: ManagedAddress, score: u64) {
        self.scores(&user).set(score);
    }

    #[only_owner]
    #[endpoint(setScorePaused)]
    fn set_score_paused(&self, paused: bool) {
        self.score_paused().set(paused);
    }

    /// Unknown users score 0. Reverts while paused.
    #[view(getScore)]
    fn get_score(&self, user: ManagedAddress) -> u64 {
        require!(!self.score_paused().get(), "Score service unavailable");
        self.scores(&user).get()
    }

    // ── Attestation issuer ──

    #[only_owner]
    #[endpoint(setAttestationPaused)]
    fn set_attestation_paused(&self, paused: bool) {
        self.attestation_paused().set(paused);
    }

    #[endpoint(attest)]
    fn attest(
        &self,
        recipient: ManagedAddress,
        project_name: ManagedBuffer,
        metadata_hash: ManagedBuffer,
        is_verified: bool,
    ) -> u64 {
        require!(
            !self.attestation_paused().get(),
            "Attestation service unavailable"
        );

        let attestation_id = self.attestation_count().get() + 1;
        self.attestation_count().set(attestation_id);
        self.attestation_recipient(attestation_id).set(&recipient);

        self.attested_event(&recipient, attestation_id, is_verified, &project_name, &metadata_hash);
        attestation_id
    }

    #[view(getAttestationCount)]
    fn get_attestation_count(&self) -> u64 {
        self.attestation_count().get()
    }

    #[view(getAttestationRecipient)]
    fn get_attestation_recipient(&self, attestation_id: u64) -> ManagedAddress {
        self.attestation_recipient(attestation_id).get()
    }

    #[event("attested")]
    fn attested_event(
        &self,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] attestation_id: u64,
        #[indexed] is_verified: bool,
        #[indexed] project_name: &ManagedBuffer,
        metadata_hash: &ManagedBuffer,
    );

    #[storage_mapper("scores")]
    fn scores(&self, user: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("scorePaused")]
    fn score_paused(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("attestationPaused")]
    fn attestation_paused(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("attestationCount")]
    fn attestation_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("attestationRecipient")]
    fn attestation_recipient(&self, attestation_id: u64) -> SingleValueMapper<ManagedAddress>;
}
