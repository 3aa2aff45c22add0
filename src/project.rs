multiversx_sc::imports!();

use crate::errors::{ERR_PROJECT_ENDED, ERR_PROJECT_INACTIVE, ERR_UNAUTHORIZED};
use crate::types::ProjectConfig;

/// Project-wide configuration, lifecycle guards and admin capability checks.
#[multiversx_sc::module]
pub trait ProjectModule: crate::events::EventsModule {
    fn require_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.config().get().admin, ERR_UNAUTHORIZED);
    }

    /// Project must be active and its end time not yet passed.
    fn require_project_open(&self) {
        require!(self.project_active().get(), ERR_PROJECT_INACTIVE);
        let now = self.blockchain().get_block_timestamp();
        require!(now <= self.config().get().end_time, ERR_PROJECT_ENDED);
    }

    #[endpoint(setProjectActive)]
    fn set_project_active(&self, is_active: bool) {
        self.require_admin();
        self.project_active().set(is_active);

        let admin = self.blockchain().get_caller();
        self.project_status_changed_event(&admin, is_active);
    }

    #[view(getProjectConfig)]
    fn get_project_config(&self) -> ProjectConfig<Self::Api> {
        self.config().get()
    }

    #[view(isProjectOpen)]
    fn is_project_open(&self) -> bool {
        let now = self.blockchain().get_block_timestamp();
        self.project_active().get() && now <= self.config().get().end_time
    }

    #[storage_mapper("config")]
    fn config(&self) -> SingleValueMapper<ProjectConfig<Self::Api>>;

    #[storage_mapper("projectActive")]
    fn project_active(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("createdAt")]
    fn created_at(&self) -> SingleValueMapper<u64>;
}
