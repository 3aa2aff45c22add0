/// Upper bound on the voting power a single vote may carry.
pub const MAX_VOTING_POWER: u64 = 1_000;

/// Token cost of casting `requested_votes` on one poll.
///
/// Verified members pay the square of the requested voting power.
/// Regular members can only cast a single vote, at a cost of one token.
/// Returns `None` for any request the tier does not allow, including zero
/// (withdrawals never go through pricing).
pub fn vote_price(is_verified: bool, requested_votes: u64) -> Option<u64> {
    if requested_votes == 0 || requested_votes > MAX_VOTING_POWER {
        return None;
    }
    if !is_verified {
        return if requested_votes == 1 { Some(1) } else { None };
    }
    Some(requested_votes * requested_votes)
}
