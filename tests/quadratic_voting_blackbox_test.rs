// Blackbox tests for the quadratic voting engine.
//
// The engine reads identity scores (and, when configured, issues
// attestations) through sync calls, so every test deploys the mock-identity
// contract next to the engine and drives scores through it.

use multiversx_sc_scenario::api::DebugApi;
use multiversx_sc_scenario::imports::*;

use mock_identity::mock_identity_proxy::MockIdentityProxy;
use quadratic_voting::quadratic_voting_proxy::QuadraticVotingProxy;
use quadratic_voting::types::{ProjectConfig, ProjectPolicy};

const ADMIN: TestAddress = TestAddress::new("admin");
const ALICE: TestAddress = TestAddress::new("alice");
const BOB: TestAddress = TestAddress::new("bob");
const CAROL: TestAddress = TestAddress::new("carol");
const DAVE: TestAddress = TestAddress::new("dave");
const OUTSIDER: TestAddress = TestAddress::new("outsider");

const ENGINE: TestSCAddress = TestSCAddress::new("qv-engine");
const IDENTITY: TestSCAddress = TestSCAddress::new("identity");

const ENGINE_CODE: MxscPath = MxscPath::new("output/quadratic-voting.mxsc.json");
const IDENTITY_CODE: MxscPath = MxscPath::new("mock-identity/output/mock-identity.mxsc.json");

const START: u64 = 1_700_000_000;
const DURATION: u64 = 7 * 86_400;
const END: u64 = START + DURATION;

// Scores
const REGULAR_SCORE: u64 = 8_000;
const VERIFIED_SCORE: u64 = 20_000;
const LOW_SCORE: u64 = 4_000;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(ENGINE_CODE, quadratic_voting::ContractBuilder);
    blockchain.register_contract(IDENTITY_CODE, mock_identity::ContractBuilder);
    blockchain
}

fn managed(address: TestAddress) -> ManagedAddress<StaticApi> {
    ManagedAddress::from_address(&address.to_address())
}

fn project_config(policy: ProjectPolicy) -> ProjectConfig<StaticApi> {
    ProjectConfig {
        name: ManagedBuffer::from("Community Grants"),
        description: ManagedBuffer::from("Quarterly funding round"),
        metadata_hash: ManagedBuffer::from("bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi"),
        tokens_per_user: BigUint::from(100u64),
        tokens_per_verified_user: BigUint::from(1_000u64),
        min_score_to_join: 5_000,
        min_score_to_verify: 15_000,
        end_time: END,
        admin: managed(ADMIN),
        score_oracle: ManagedAddress::from_address(&IDENTITY.to_address()),
        attestation_issuer: None,
        policy,
    }
}

struct VotingSetup {
    world: ScenarioWorld,
}

impl VotingSetup {
    fn new() -> Self {
        Self::with_config(project_config(ProjectPolicy::default()))
    }

    fn with_config(config: ProjectConfig<StaticApi>) -> Self {
        let mut world = world();

        world.account(ADMIN).nonce(1);
        for user in [ALICE, BOB, CAROL, DAVE, OUTSIDER] {
            world.account(user).nonce(1);
        }
        world.current_block().block_timestamp(START);

        world
            .tx()
            .from(ADMIN)
            .typed(MockIdentityProxy)
            .init()
            .code(IDENTITY_CODE)
            .new_address(IDENTITY)
            .run();

        world
            .tx()
            .from(ADMIN)
            .typed(QuadraticVotingProxy)
            .init(config)
            .code(ENGINE_CODE)
            .new_address(ENGINE)
            .run();

        let mut setup = VotingSetup { world };
        setup.set_score(ALICE, REGULAR_SCORE);
        setup.set_score(BOB, VERIFIED_SCORE);
        setup.set_score(CAROL, VERIFIED_SCORE);
        setup.set_score(DAVE, LOW_SCORE);
        setup
    }

    fn set_time(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    fn set_score(&mut self, user: TestAddress, score: u64) {
        self.world
            .tx()
            .from(ADMIN)
            .to(IDENTITY)
            .typed(MockIdentityProxy)
            .set_score(user, score)
            .run();
    }

    fn join(&mut self, user: TestAddress) {
        self.world
            .tx()
            .from(user)
            .to(ENGINE)
            .typed(QuadraticVotingProxy)
            .join_project()
            .run();
    }

    fn join_expect_err(&mut self, user: TestAddress, message: &str) {
        self.world
            .tx()
            .from(user)
            .to(ENGINE)
            .typed(QuadraticVotingProxy)
            .join_project()
            .returns(ExpectError(4, message))
            .run();
    }

    fn create_poll(&mut self, creator: TestAddress, name: &str) -> u64 {
        self.world
            .tx()
            .from(creator)
            .to(ENGINE)
            .typed(QuadraticVotingProxy)
            .create_poll(
                ManagedBuffer::<StaticApi>::from(name),
                ManagedBuffer::<StaticApi>::from("Should we fund this?"),
                ManagedBuffer::<StaticApi>::from("bafkpoll"),
            )
            .returns(ReturnsResult)
            .run()
    }

    fn create_poll_expect_err(&mut self, creator: TestAddress, message: &str) {
        self.world
            .tx()
            .from(creator)
            .to(ENGINE)
            .typed(QuadraticVotingProxy)
            .create_poll(
                ManagedBuffer::<StaticApi>::from("Late poll"),
                ManagedBuffer::<StaticApi>::from(""),
                ManagedBuffer::<StaticApi>::from(""),
            )
            .returns(ExpectError(4, message))
            .run();
    }

    fn cast_vote(&mut self, user: TestAddress, poll_id: u64, votes: u64) {
        self.world
            .tx()
            .from(user)
            .to(ENGINE)
            .typed(QuadraticVotingProxy)
            .cast_vote(poll_id, votes)
            .run();
    }

    fn cast_vote_expect_err(&mut self, user: TestAddress, poll_id: u64, votes: u64, message: &str) {
        self.world
            .tx()
            .from(user)
            .to(ENGINE)
            .typed(QuadraticVotingProxy)
            .cast_vote(poll_id, votes)
            .returns(ExpectError(4, message))
            .run();
    }

    fn remove_vote(&mut self, user: TestAddress, poll_id: u64) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(user)
            .to(ENGINE)
            .typed(QuadraticVotingProxy)
            .remove_vote(poll_id)
            .returns(ReturnsResult)
            .run()
    }

    fn remove_vote_expect_err(&mut self, user: TestAddress, poll_id: u64, message: &str) {
        self.world
            .tx()
            .from(user)
            .to(ENGINE)
            .typed(QuadraticVotingProxy)
            .remove_vote(poll_id)
            .returns(ExpectError(4, message))
            .run();
    }

    fn toggle_poll(&mut self, caller: TestAddress, poll_id: u64) -> bool {
        self.world
            .tx()
            .from(caller)
            .to(ENGINE)
            .typed(QuadraticVotingProxy)
            .toggle_poll_status(poll_id)
            .returns(ReturnsResult)
            .run()
    }

    fn membership(&mut self, user: TestAddress) -> quadratic_voting::types::Membership<StaticApi> {
        self.world
            .query()
            .to(ENGINE)
            .typed(QuadraticVotingProxy)
            .membership(user)
            .returns(ReturnsResult)
            .run()
    }

    fn tokens_left(&mut self, user: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(ENGINE)
            .typed(QuadraticVotingProxy)
            .tokens_left(user)
            .returns(ReturnsResult)
            .run()
    }

    fn balance_of(&mut self, user: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(ENGINE)
            .typed(QuadraticVotingProxy)
            .balance_of(user)
            .returns(ReturnsResult)
            .run()
    }

    fn total_supply(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(ENGINE)
            .typed(QuadraticVotingProxy)
            .total_supply()
            .returns(ReturnsResult)
            .run()
    }

    fn poll(&mut self, poll_id: u64) -> quadratic_voting::types::Poll<StaticApi> {
        self.world
            .query()
            .to(ENGINE)
            .typed(QuadraticVotingProxy)
            .poll(poll_id)
            .returns(ReturnsResult)
            .run()
    }

    fn vote(&mut self, poll_id: u64, user: TestAddress) -> quadratic_voting::types::Vote<StaticApi> {
        self.world
            .query()
            .to(ENGINE)
            .typed(QuadraticVotingProxy)
            .vote(poll_id, user)
            .returns(ReturnsResult)
            .run()
    }

    fn voted_polls(&mut self, user: TestAddress) -> ManagedVec<StaticApi, u64> {
        self.world
            .query()
            .to(ENGINE)
            .typed(QuadraticVotingProxy)
            .user_voted_polls(user)
            .returns(ReturnsResult)
            .run()
            .to_vec()
    }
}

#[test]
fn test_contract_builds() {
    let _: fn() -> quadratic_voting::ContractObj<DebugApi> = quadratic_voting::contract_obj;
}

// ============================================================
// Join gating
// ============================================================

#[test]
fn regular_score_joins_unverified_with_base_allotment() {
    let mut setup = VotingSetup::new();
    setup.join(ALICE);

    let membership = setup.membership(ALICE);
    assert!(membership.is_registered);
    assert!(!membership.is_verified);
    assert_eq!(membership.tokens_left, 100u64);
    assert_eq!(membership.joined_at, START);
    assert_eq!(membership.last_score_check, START);
    assert_eq!(setup.balance_of(ALICE), 100u64);
}

#[test]
fn verified_score_joins_with_verified_allotment() {
    let mut setup = VotingSetup::new();
    setup.join(BOB);

    let membership = setup.membership(BOB);
    assert!(membership.is_verified);
    assert_eq!(membership.tokens_left, 1_000u64);
    assert_eq!(setup.balance_of(BOB), 1_000u64);
    assert_eq!(setup.total_supply(), 1_000u64);
}

#[test]
fn join_thresholds_are_inclusive() {
    let mut setup = VotingSetup::new();
    setup.set_score(ALICE, 5_000);
    setup.set_score(BOB, 15_000);
    setup.set_score(CAROL, 14_999);

    setup.join(ALICE);
    setup.join(BOB);
    setup.join(CAROL);

    assert!(!setup.membership(ALICE).is_verified);
    assert!(setup.membership(BOB).is_verified);
    assert!(!setup.membership(CAROL).is_verified);
}

#[test]
fn low_score_cannot_join() {
    let mut setup = VotingSetup::new();
    setup.join_expect_err(DAVE, "Score too low");

    setup.set_score(DAVE, 4_999);
    setup.join_expect_err(DAVE, "Score too low");

    // Never scored by the oracle
    setup.join_expect_err(OUTSIDER, "Score too low");

    let membership = setup.membership(DAVE);
    assert!(!membership.is_registered);
    assert_eq!(membership.tokens_left, 0u64);
}

#[test]
fn second_join_fails_even_after_state_changes() {
    let mut setup = VotingSetup::new();
    setup.join(ALICE);
    setup.join(BOB);
    setup.join_expect_err(ALICE, "Already joined");

    let poll_id = setup.create_poll(BOB, "Park benches");
    setup.cast_vote(ALICE, poll_id, 1);
    setup.set_score(ALICE, VERIFIED_SCORE);
    setup.set_time(START + 10_000);
    setup.join_expect_err(ALICE, "Already joined");

    let participants: u64 = setup
        .world
        .query()
        .to(ENGINE)
        .typed(QuadraticVotingProxy)
        .participant_count()
        .returns(ReturnsResult)
        .run();
    assert_eq!(participants, 2);
}

#[test]
fn oracle_that_is_not_a_contract_counts_as_low_score() {
    let mut config = project_config(ProjectPolicy::default());
    config.score_oracle = managed(OUTSIDER);
    let mut setup = VotingSetup::with_config(config);

    setup.join_expect_err(BOB, "Score too low");
}

// ============================================================
// Pricing and vote lifecycle
// ============================================================

#[test]
fn regular_member_casts_single_vote_only() {
    let mut setup = VotingSetup::new();
    setup.join(ALICE);
    setup.join(BOB);
    let poll_id = setup.create_poll(BOB, "Bike lanes");
    assert_eq!(poll_id, 0);

    setup.cast_vote(ALICE, poll_id, 1);
    assert_eq!(setup.tokens_left(ALICE), 99u64);
    assert_eq!(setup.balance_of(ALICE), 99u64);

    setup.cast_vote_expect_err(ALICE, poll_id, 2, "Invalid vote count");
    assert_eq!(setup.tokens_left(ALICE), 99u64);

    let vote = setup.vote(poll_id, ALICE);
    assert!(vote.has_voted);
    assert!(!vote.is_verified);
    assert_eq!(vote.voting_power, 1);
    assert_eq!(vote.tokens_cost, 1u64);
}

#[test]
fn verified_member_pays_quadratic_cost_and_recast_refunds() {
    let mut setup = VotingSetup::new();
    setup.join(ALICE);
    setup.join(BOB);
    let poll_id = setup.create_poll(ALICE, "Library hours");

    setup.cast_vote(BOB, poll_id, 4);
    assert_eq!(setup.tokens_left(BOB), 984u64);
    let vote = setup.vote(poll_id, BOB);
    assert_eq!(vote.voting_power, 4);
    assert_eq!(vote.tokens_cost, 16u64);
    assert!(vote.is_verified);

    setup.cast_vote(BOB, poll_id, 2);
    assert_eq!(setup.tokens_left(BOB), 996u64);
    assert_eq!(setup.balance_of(BOB), 996u64);

    let poll = setup.poll(poll_id);
    assert_eq!(poll.total_voting_power, 2);
    assert_eq!(poll.total_participants, 1);

    let refund = setup.remove_vote(BOB, poll_id);
    assert_eq!(refund, 4u64);
    assert_eq!(setup.tokens_left(BOB), 1_000u64);
    assert_eq!(setup.balance_of(BOB), 1_000u64);

    let poll = setup.poll(poll_id);
    assert_eq!(poll.total_voting_power, 0);
    assert_eq!(poll.total_participants, 0);
    assert!(!setup.vote(poll_id, BOB).has_voted);
    assert_eq!(setup.voted_polls(BOB).len(), 0);
}

#[test]
fn recast_matches_direct_cast() {
    let mut setup = VotingSetup::new();
    setup.join(ALICE);
    setup.join(BOB);
    setup.join(CAROL);
    let poll_id = setup.create_poll(ALICE, "Community garden");

    setup.cast_vote(BOB, poll_id, 7);
    setup.cast_vote(BOB, poll_id, 3);
    setup.cast_vote(CAROL, poll_id, 3);

    assert_eq!(setup.tokens_left(BOB), setup.tokens_left(CAROL));
    assert_eq!(setup.tokens_left(BOB), 991u64);
}

#[test]
fn vote_bounds_are_enforced() {
    let mut setup = VotingSetup::new();
    setup.join(ALICE);
    setup.join(BOB);
    let poll_id = setup.create_poll(ALICE, "Stadium");

    setup.cast_vote_expect_err(BOB, poll_id, 1_001, "Invalid vote count");
    // 32 votes would cost 1024 tokens
    setup.cast_vote_expect_err(BOB, poll_id, 32, "Insufficient tokens");

    setup.cast_vote(BOB, poll_id, 31);
    assert_eq!(setup.tokens_left(BOB), 39u64);
}

#[test]
fn recast_can_spend_refunded_tokens() {
    let mut setup = VotingSetup::new();
    setup.join(ALICE);
    setup.join(BOB);
    let poll_id = setup.create_poll(ALICE, "Harbour");

    setup.cast_vote(BOB, poll_id, 30);
    assert_eq!(setup.tokens_left(BOB), 100u64);

    // Only affordable once the 900 tokens of the current vote are refunded
    setup.cast_vote(BOB, poll_id, 31);
    assert_eq!(setup.tokens_left(BOB), 39u64);
}

#[test]
fn zero_votes_withdraws_existing_vote() {
    let mut setup = VotingSetup::new();
    setup.join(ALICE);
    setup.join(BOB);
    let poll_id = setup.create_poll(ALICE, "Night market");

    setup.cast_vote_expect_err(BOB, poll_id, 0, "No vote to remove");

    setup.cast_vote(BOB, poll_id, 3);
    assert_eq!(setup.tokens_left(BOB), 991u64);

    setup.cast_vote(BOB, poll_id, 0);
    assert_eq!(setup.tokens_left(BOB), 1_000u64);
    assert!(!setup.vote(poll_id, BOB).has_voted);

    let poll = setup.poll(poll_id);
    assert_eq!(poll.total_voting_power, 0);
    assert_eq!(poll.total_participants, 0);
}

#[test]
fn remove_without_vote_fails() {
    let mut setup = VotingSetup::new();
    setup.join(ALICE);
    setup.join(BOB);
    let poll_id = setup.create_poll(ALICE, "Ferry");

    setup.remove_vote_expect_err(BOB, poll_id, "No vote to remove");
    setup.remove_vote_expect_err(OUTSIDER, poll_id, "Must join first");
    setup.remove_vote_expect_err(BOB, 9, "Poll not found");
}

#[test]
fn aggregates_track_all_voters() {
    let mut setup = VotingSetup::new();
    setup.join(ALICE);
    setup.join(BOB);
    setup.join(CAROL);
    let poll_id = setup.create_poll(CAROL, "Solar roofs");

    setup.cast_vote(ALICE, poll_id, 1);
    setup.cast_vote(BOB, poll_id, 5);

    let poll = setup.poll(poll_id);
    assert_eq!(poll.total_voting_power, 6);
    assert_eq!(poll.total_participants, 2);

    let voters = setup
        .world
        .query()
        .to(ENGINE)
        .typed(QuadraticVotingProxy)
        .poll_voters(poll_id)
        .returns(ReturnsResult)
        .run()
        .to_vec();
    assert_eq!(voters.len(), 2);

    setup.remove_vote(ALICE, poll_id);
    let poll = setup.poll(poll_id);
    assert_eq!(poll.total_voting_power, 5);
    assert_eq!(poll.total_participants, 1);

    // 100 + 1000 + 1000 minted, 25 held by Bob's vote
    assert_eq!(setup.total_supply(), 2_075u64);
}

#[test]
fn voted_poll_set_is_bounded() {
    let mut setup = VotingSetup::new();
    setup.join(ALICE);
    setup.join(BOB);

    let max = quadratic_voting::MAX_VOTED_POLLS as u64;
    for i in 0..=max {
        let poll_id = setup.create_poll(ALICE, "Budget line");
        assert_eq!(poll_id, i);
    }
    for poll_id in 0..max {
        setup.cast_vote(BOB, poll_id, 1);
    }
    setup.cast_vote_expect_err(BOB, max, 1, "Too many votes");

    // Re-casting on a poll already voted on does not grow the set
    setup.cast_vote(BOB, 0, 2);

    setup.remove_vote(BOB, 1);
    setup.cast_vote(BOB, max, 1);
    assert_eq!(setup.voted_polls(BOB).len(), max as usize);
}

// ============================================================
// Lazy re-verification
// ============================================================

#[test]
fn vote_upgrades_member_after_cooldown() {
    let mut setup = VotingSetup::new();
    setup.join(ALICE);
    setup.join(BOB);
    let first_poll = setup.create_poll(BOB, "Playground");
    let second_poll = setup.create_poll(BOB, "Skate park");

    setup.set_score(ALICE, VERIFIED_SCORE);

    // Still inside the cooldown: no lookup, still regular
    setup.set_time(START + 100);
    setup.cast_vote(ALICE, first_poll, 1);
    assert!(!setup.membership(ALICE).is_verified);
    assert_eq!(setup.tokens_left(ALICE), 99u64);

    setup.set_time(START + 3_600);
    setup.cast_vote(ALICE, second_poll, 4);

    let membership = setup.membership(ALICE);
    assert!(membership.is_verified);
    assert_eq!(membership.last_score_check, START + 3_600);
    // 100 - 1 + 900 bonus - 16
    assert_eq!(membership.tokens_left, 983u64);
    assert_eq!(setup.balance_of(ALICE), 983u64);

    // Earlier vote keeps the tier it was cast with
    let first_vote = setup.vote(first_poll, ALICE);
    assert!(!first_vote.is_verified);
    assert_eq!(first_vote.tokens_cost, 1u64);

    // Conservation: tokens left plus active vote costs equal total grants
    assert_eq!(setup.total_supply(), 983u64 + 1_000u64);
}

#[test]
fn explicit_refresh_respects_cooldown_and_threshold() {
    let mut setup = VotingSetup::new();
    setup.join(ALICE);

    let upgraded: bool = setup
        .world
        .tx()
        .from(ALICE)
        .to(ENGINE)
        .typed(QuadraticVotingProxy)
        .refresh_verification()
        .returns(ReturnsResult)
        .run();
    assert!(!upgraded);
    assert_eq!(setup.membership(ALICE).last_score_check, START);

    // Cooldown elapsed but score still regular: lookup recorded, no upgrade
    setup.set_time(START + 4_000);
    let upgraded: bool = setup
        .world
        .tx()
        .from(ALICE)
        .to(ENGINE)
        .typed(QuadraticVotingProxy)
        .refresh_verification()
        .returns(ReturnsResult)
        .run();
    assert!(!upgraded);
    assert_eq!(setup.membership(ALICE).last_score_check, START + 4_000);

    setup.set_score(ALICE, VERIFIED_SCORE);
    setup.set_time(START + 5_000);
    let upgraded: bool = setup
        .world
        .tx()
        .from(ALICE)
        .to(ENGINE)
        .typed(QuadraticVotingProxy)
        .refresh_verification()
        .returns(ReturnsResult)
        .run();
    assert!(!upgraded);

    setup.set_time(START + 7_600);
    let upgraded: bool = setup
        .world
        .tx()
        .from(ALICE)
        .to(ENGINE)
        .typed(QuadraticVotingProxy)
        .refresh_verification()
        .returns(ReturnsResult)
        .run();
    assert!(upgraded);
    assert_eq!(setup.tokens_left(ALICE), 1_000u64);

    setup
        .world
        .tx()
        .from(OUTSIDER)
        .to(ENGINE)
        .typed(QuadraticVotingProxy)
        .refresh_verification()
        .returns(ExpectError(4, "Must join first"))
        .run();
}

// ============================================================
// Membership, admin and lifecycle guards
// ============================================================

#[test]
fn non_members_cannot_create_polls_or_vote() {
    let mut setup = VotingSetup::new();
    setup.join(ALICE);
    let poll_id = setup.create_poll(ALICE, "Transit");

    setup.create_poll_expect_err(OUTSIDER, "Must join first");
    setup.cast_vote_expect_err(OUTSIDER, poll_id, 1, "Must join first");
    setup.cast_vote_expect_err(ALICE, 3, 1, "Poll not found");
}

#[test]
fn creator_cannot_vote_on_own_poll_by_default() {
    let mut setup = VotingSetup::new();
    setup.join(BOB);
    let poll_id = setup.create_poll(BOB, "Own poll");

    setup.cast_vote_expect_err(BOB, poll_id, 1, "Cannot vote on own poll");
}

#[test]
fn self_vote_allowed_when_policy_permits() {
    let policy = ProjectPolicy {
        allow_self_vote: true,
        strict_participant_accounting: true,
    };
    let mut setup = VotingSetup::with_config(project_config(policy));
    setup.join(BOB);
    let poll_id = setup.create_poll(BOB, "Own poll");

    setup.cast_vote(BOB, poll_id, 3);
    assert_eq!(setup.tokens_left(BOB), 991u64);
}

#[test]
fn lenient_participant_accounting_removes_votes() {
    let policy = ProjectPolicy {
        allow_self_vote: false,
        strict_participant_accounting: false,
    };
    let mut setup = VotingSetup::with_config(project_config(policy));
    setup.join(ALICE);
    setup.join(BOB);
    let poll_id = setup.create_poll(ALICE, "Lenient");

    setup.cast_vote(BOB, poll_id, 2);
    setup.remove_vote(BOB, poll_id);
    setup.cast_vote(BOB, poll_id, 2);
    setup.cast_vote(BOB, poll_id, 0);

    let poll = setup.poll(poll_id);
    assert_eq!(poll.total_participants, 0);
    assert_eq!(poll.total_voting_power, 0);
    assert_eq!(setup.tokens_left(BOB), 1_000u64);
}

#[test]
fn strict_and_lenient_accounting_agree_on_consistent_state() {
    let mut totals = Vec::new();
    for strict in [true, false] {
        let policy = ProjectPolicy {
            allow_self_vote: false,
            strict_participant_accounting: strict,
        };
        let mut setup = VotingSetup::with_config(project_config(policy));
        setup.join(ALICE);
        setup.join(BOB);
        setup.join(CAROL);
        let poll_id = setup.create_poll(ALICE, "Accounting");

        setup.cast_vote(BOB, poll_id, 3);
        setup.cast_vote(CAROL, poll_id, 2);
        setup.remove_vote(BOB, poll_id);
        setup.cast_vote(CAROL, poll_id, 0);
        setup.remove_vote_expect_err(CAROL, poll_id, "No vote to remove");

        let poll = setup.poll(poll_id);
        totals.push((poll.total_participants, poll.total_voting_power));
    }
    assert_eq!(totals, vec![(0, 0), (0, 0)]);
}

#[test]
fn only_admin_toggles_polls_and_inactive_polls_reject_votes() {
    let mut setup = VotingSetup::new();
    setup.join(ALICE);
    setup.join(BOB);
    let poll_id = setup.create_poll(ALICE, "Toggle me");
    setup.cast_vote(BOB, poll_id, 2);

    setup
        .world
        .tx()
        .from(ALICE)
        .to(ENGINE)
        .typed(QuadraticVotingProxy)
        .toggle_poll_status(poll_id)
        .returns(ExpectError(4, "Unauthorized"))
        .run();

    assert!(!setup.toggle_poll(ADMIN, poll_id));
    assert!(!setup.poll(poll_id).is_active);

    setup.cast_vote_expect_err(BOB, poll_id, 3, "Poll is not active");

    // Existing votes stay in place and can still be withdrawn
    assert_eq!(setup.poll(poll_id).total_voting_power, 2);
    setup.remove_vote(BOB, poll_id);

    assert!(setup.toggle_poll(ADMIN, poll_id));
    setup.cast_vote(BOB, poll_id, 3);
}

#[test]
fn deactivated_project_rejects_state_changes() {
    let mut setup = VotingSetup::new();
    setup.join(ALICE);
    let poll_id = setup.create_poll(ALICE, "Paused");

    setup
        .world
        .tx()
        .from(ALICE)
        .to(ENGINE)
        .typed(QuadraticVotingProxy)
        .set_project_active(false)
        .returns(ExpectError(4, "Unauthorized"))
        .run();

    setup
        .world
        .tx()
        .from(ADMIN)
        .to(ENGINE)
        .typed(QuadraticVotingProxy)
        .set_project_active(false)
        .run();

    setup.join_expect_err(BOB, "Project is not active");
    setup.create_poll_expect_err(ALICE, "Project is not active");
    setup.cast_vote_expect_err(ALICE, poll_id, 1, "Project is not active");

    setup
        .world
        .tx()
        .from(ADMIN)
        .to(ENGINE)
        .typed(QuadraticVotingProxy)
        .set_project_active(true)
        .run();
    setup.join(BOB);
}

#[test]
fn nothing_succeeds_after_end_time() {
    let mut setup = VotingSetup::new();
    setup.join(ALICE);
    setup.join(BOB);
    let poll_id = setup.create_poll(ALICE, "Deadline");
    setup.cast_vote(BOB, poll_id, 2);

    // The end time itself is still open
    setup.set_time(END);
    setup.join(CAROL);

    setup.set_time(END + 1);
    setup.set_score(DAVE, VERIFIED_SCORE);
    setup.join_expect_err(DAVE, "Project has ended");
    setup.create_poll_expect_err(ALICE, "Project has ended");
    setup.cast_vote_expect_err(CAROL, poll_id, 1, "Project has ended");
    setup.remove_vote_expect_err(BOB, poll_id, "Project has ended");

    let open: bool = setup
        .world
        .query()
        .to(ENGINE)
        .typed(QuadraticVotingProxy)
        .is_project_open()
        .returns(ReturnsResult)
        .run();
    assert!(!open);
}

// ============================================================
// Attestation-gated join
// ============================================================

#[test]
fn attested_join_records_attestation_id() {
    let mut config = project_config(ProjectPolicy::default());
    config.attestation_issuer = Some(ManagedAddress::from_address(&IDENTITY.to_address()));
    let mut setup = VotingSetup::with_config(config);

    setup.join(ALICE);
    setup.join(BOB);
    assert_eq!(setup.membership(ALICE).attestation_id, 1);
    assert_eq!(setup.membership(BOB).attestation_id, 2);

    let recipient: ManagedAddress<StaticApi> = setup
        .world
        .query()
        .to(IDENTITY)
        .typed(MockIdentityProxy)
        .attestation_recipient(2u64)
        .returns(ReturnsResult)
        .run();
    assert_eq!(recipient, managed(BOB));
}

#[test]
fn failed_attestation_aborts_join() {
    let mut config = project_config(ProjectPolicy::default());
    config.attestation_issuer = Some(ManagedAddress::from_address(&IDENTITY.to_address()));
    let mut setup = VotingSetup::with_config(config);

    setup
        .world
        .tx()
        .from(ADMIN)
        .to(IDENTITY)
        .typed(MockIdentityProxy)
        .set_attestation_paused(true)
        .run();

    setup.join_expect_err(BOB, "Attestation service unavailable");

    assert!(!setup.membership(BOB).is_registered);
    assert_eq!(setup.balance_of(BOB), 0u64);
    assert_eq!(setup.total_supply(), 0u64);
}

#[test]
fn reverting_oracle_aborts_the_vote_that_triggers_a_lookup() {
    let mut setup = VotingSetup::new();
    setup.join(ALICE);
    setup.join(BOB);
    let first_poll = setup.create_poll(BOB, "Library");
    let second_poll = setup.create_poll(BOB, "Bike lanes");

    setup
        .world
        .tx()
        .from(ADMIN)
        .to(IDENTITY)
        .typed(MockIdentityProxy)
        .set_score_paused(true)
        .run();

    // Inside the cooldown no lookup happens, so the vote goes through
    setup.set_time(START + 100);
    setup.cast_vote(ALICE, first_poll, 1);

    // Past the cooldown the lookup reverts and takes the vote with it
    setup.set_time(START + 3_600);
    setup.cast_vote_expect_err(ALICE, second_poll, 1, "Score service unavailable");

    let membership = setup.membership(ALICE);
    assert!(!membership.is_verified);
    assert_eq!(membership.last_score_check, START);
    assert_eq!(membership.tokens_left, 99u64);
    assert_eq!(setup.poll(second_poll).total_participants, 0);
}

// ============================================================
// Deployment validation
// ============================================================

#[test]
fn init_rejects_invalid_config() {
    let mut world = world();
    world.account(ADMIN).nonce(1);
    world.current_block().block_timestamp(START);

    let mut config = project_config(ProjectPolicy::default());
    config.end_time = START;

    world
        .tx()
        .from(ADMIN)
        .typed(QuadraticVotingProxy)
        .init(config)
        .code(ENGINE_CODE)
        .new_address(ENGINE)
        .returns(ExpectError(4, "End time must be in the future"))
        .run();
}

#[test]
fn project_stats_reflect_activity() {
    let mut setup = VotingSetup::new();
    setup.join(ALICE);
    setup.join(BOB);
    setup.create_poll(ALICE, "One");
    setup.create_poll(BOB, "Two");

    let (participants, polls, supply, is_active, end_time) = setup
        .world
        .query()
        .to(ENGINE)
        .typed(QuadraticVotingProxy)
        .project_stats()
        .returns(ReturnsResult)
        .run()
        .into_tuple();
    assert_eq!(participants, 2);
    assert_eq!(polls, 2);
    assert_eq!(supply, 1_100u64);
    assert!(is_active);
    assert_eq!(end_time, END);

    let members = setup
        .world
        .query()
        .to(ENGINE)
        .typed(QuadraticVotingProxy)
        .members(0u64, 10u64)
        .returns(ReturnsResult)
        .run()
        .to_vec();
    assert_eq!(members.len(), 2);

    let tail = setup
        .world
        .query()
        .to(ENGINE)
        .typed(QuadraticVotingProxy)
        .members(1u64, u64::MAX)
        .returns(ReturnsResult)
        .run()
        .to_vec();
    assert_eq!(tail.len(), 1);
    assert_eq!(*tail.get(0), *members.get(1));

    let past_end = setup
        .world
        .query()
        .to(ENGINE)
        .typed(QuadraticVotingProxy)
        .members(u64::MAX, 10u64)
        .returns(ReturnsResult)
        .run()
        .to_vec();
    assert!(past_end.is_empty());

    let config = setup
        .world
        .query()
        .to(ENGINE)
        .typed(QuadraticVotingProxy)
        .project_config()
        .returns(ReturnsResult)
        .run();
    assert_eq!(config.admin, managed(ADMIN));
    assert_eq!(config.tokens_per_verified_user, 1_000u64);
}
