multiversx_sc::imports!();

use crate::errors::ERR_INSUFFICIENT_BALANCE;

/// Per-project voting token ledger.
///
/// Minting and burning are plain module functions, not endpoints: only the
/// engine that owns this storage can move balances. Tokens cannot be
/// transferred between members.
#[multiversx_sc::module]
pub trait VotingTokenModule: crate::events::EventsModule {
    fn mint_voting_tokens(&self, to: &ManagedAddress, amount: &BigUint) {
        if *amount == 0u64 {
            return;
        }
        self.token_balance(to).update(|balance| *balance += amount);
        self.token_supply().update(|supply| *supply += amount);
        self.tokens_minted_event(to, amount);
    }

    fn burn_voting_tokens(&self, from: &ManagedAddress, amount: &BigUint) {
        if *amount == 0u64 {
            return;
        }
        let balance = self.token_balance(from).get();
        require!(balance >= *amount, ERR_INSUFFICIENT_BALANCE);

        self.token_balance(from).set(&(balance - amount));
        self.token_supply().update(|supply| *supply -= amount);
        self.tokens_burned_event(from, amount);
    }

    #[view(balanceOf)]
    fn balance_of(&self, holder: ManagedAddress) -> BigUint {
        self.token_balance(&holder).get()
    }

    #[view(totalSupply)]
    fn total_supply(&self) -> BigUint {
        self.token_supply().get()
    }

    #[storage_mapper("tokenBalance")]
    fn token_balance(&self, holder: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("tokenSupply")]
    fn token_supply(&self) -> SingleValueMapper<BigUint>;
}
