#![no_std]

multiversx_sc::imports!();

pub mod project_factory_proxy;

use quadratic_voting::quadratic_voting_proxy::QuadraticVotingProxy;
use quadratic_voting::types::{ProjectConfig, ProjectPolicy};

pub const ERR_CREATION_RESTRICTED: &str = "Project creation restricted";

// ============================================================
// Contract
// ============================================================

/// Deploys isolated voting engines, one per project, by cloning a template
/// engine's code. Keeps an append-only registry of deployed projects.
#[multiversx_sc::contract]
pub trait ProjectFactory {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// `open_creation == false` restricts `createProject` to the factory owner.
    #[init]
    fn init(
        &self,
        engine_template: ManagedAddress,
        score_oracle: ManagedAddress,
        open_creation: bool,
        attestation_issuer: OptionalValue<ManagedAddress>,
    ) {
        self.engine_template().set(&engine_template);
        self.score_oracle().set(&score_oracle);
        self.open_creation().set(open_creation);
        if let OptionalValue::Some(issuer) = attestation_issuer {
            self.attestation_issuer().set(&issuer);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createProject
    // Validates the parameters, deploys a fresh engine and
    // records its address. Admin defaults to the caller.
    // ========================================================

    #[endpoint(createProject)]
    fn create_project(
        &self,
        name: ManagedBuffer,
        description: ManagedBuffer,
        metadata_hash: ManagedBuffer,
        tokens_per_user: BigUint,
        tokens_per_verified_user: BigUint,
        min_score_to_join: u64,
        min_score_to_verify: u64,
        end_time: u64,
        policy: ProjectPolicy,
        admin: OptionalValue<ManagedAddress>,
    ) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        if !self.open_creation().get() {
            require!(
                caller == self.blockchain().get_owner_address(),
                ERR_CREATION_RESTRICTED
            );
        }

        let admin = match admin {
            OptionalValue::Some(admin) => admin,
            OptionalValue::None => caller,
        };
        let attestation_issuer = if self.attestation_issuer().is_empty() {
            None
        } else {
            Some(self.attestation_issuer().get())
        };

        let config = ProjectConfig {
            name,
            description,
            metadata_hash,
            tokens_per_user,
            tokens_per_verified_user,
            min_score_to_join,
            min_score_to_verify,
            end_time,
            admin: admin.clone(),
            score_oracle: self.score_oracle().get(),
            attestation_issuer,
            policy,
        };

        let now = self.blockchain().get_block_timestamp();
        if let Err(reason) = config.validate(now) {
            sc_panic!(reason);
        }

        let project_address = self
            .tx()
            .typed(QuadraticVotingProxy)
            .init(config.clone())
            .from_source(self.engine_template().get())
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .returns(ReturnsNewManagedAddress)
            .sync_call();

        self.projects().push(&project_address);
        self.projects_by_admin(&admin).insert(project_address.clone());

        self.project_created_event(&project_address, &admin, &config.name);

        project_address
    }

    // ========================================================
    // OWNER: factory settings
    // ========================================================

    /// Only affects projects created afterwards.
    #[only_owner]
    #[endpoint(setEngineTemplate)]
    fn set_engine_template(&self, engine_template: ManagedAddress) {
        self.engine_template().set(&engine_template);
    }

    #[only_owner]
    #[endpoint(setOpenCreation)]
    fn set_open_creation(&self, open_creation: bool) {
        self.open_creation().set(open_creation);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProjects)]
    fn get_projects(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.projects().len() as u64;
        let end = core::cmp::min(from.saturating_add(count), total);

        // VecMapper is 1-indexed
        for index in from..end {
            result.push(self.projects().get(index as usize + 1));
        }
        result
    }

    #[view(getProjectCount)]
    fn get_project_count(&self) -> u64 {
        self.projects().len() as u64
    }

    #[view(getProjectsByAdmin)]
    fn get_projects_by_admin(&self, admin: ManagedAddress) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for project in self.projects_by_admin(&admin).iter() {
            result.push(project);
        }
        result
    }

    #[view(getEngineTemplate)]
    fn get_engine_template(&self) -> ManagedAddress {
        self.engine_template().get()
    }

    #[view(isOpenCreation)]
    fn is_open_creation(&self) -> bool {
        self.open_creation().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("projectCreated")]
    fn project_created_event(
        &self,
        #[indexed] project: &ManagedAddress,
        #[indexed] admin: &ManagedAddress,
        name: &ManagedBuffer,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("engineTemplate")]
    fn engine_template(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("scoreOracle")]
    fn score_oracle(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("attestationIssuer")]
    fn attestation_issuer(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("openCreation")]
    fn open_creation(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("projects")]
    fn projects(&self) -> VecMapper<ManagedAddress>;

    #[storage_mapper("projectsByAdmin")]
    fn projects_by_admin(&self, admin: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;
}
