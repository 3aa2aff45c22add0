// Revert reasons. Clients match on these strings, keep them stable.

// ── Configuration ──
pub const ERR_NAME_REQUIRED: &str = "Project name required";
pub const ERR_ALLOTMENT_NOT_POSITIVE: &str = "Token allotment must be positive";
pub const ERR_TOKEN_TIERS_INVERTED: &str = "Verified allotment must exceed regular allotment";
pub const ERR_SCORE_THRESHOLDS_INVERTED: &str = "Verification score must exceed join score";
pub const ERR_END_TIME_NOT_FUTURE: &str = "End time must be in the future";

// ── Project lifecycle ──
pub const ERR_PROJECT_ENDED: &str = "Project has ended";
pub const ERR_PROJECT_INACTIVE: &str = "Project is not active";
pub const ERR_UNAUTHORIZED: &str = "Unauthorized";

// ── Membership ──
pub const ERR_ALREADY_JOINED: &str = "Already joined";
pub const ERR_SCORE_TOO_LOW: &str = "Score too low";
pub const ERR_NOT_MEMBER: &str = "Must join first";

// ── Polls ──
pub const ERR_POLL_NOT_FOUND: &str = "Poll not found";
pub const ERR_POLL_INACTIVE: &str = "Poll is not active";
pub const ERR_POLL_NAME_REQUIRED: &str = "Poll name required";

// ── Voting ──
pub const ERR_INVALID_VOTE_COUNT: &str = "Invalid vote count";
pub const ERR_INSUFFICIENT_TOKENS: &str = "Insufficient tokens";
pub const ERR_NO_VOTE: &str = "No vote to remove";
pub const ERR_TOO_MANY_VOTES: &str = "Too many votes";
pub const ERR_SELF_VOTE: &str = "Cannot vote on own poll";
pub const ERR_PARTICIPANT_UNDERFLOW: &str = "Participant count underflow";

// ── Voting token ──
pub const ERR_INSUFFICIENT_BALANCE: &str = "Insufficient token balance";
