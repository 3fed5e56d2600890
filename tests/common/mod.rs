#![allow(dead_code)]

use multiversx_sc_scenario::imports::*;

use milestone_escrow::milestone_escrow_proxy::MilestoneEscrowProxy;
use milestone_escrow::types::{Milestone, Proposal, ProposalResult, Vote};

pub const OWNER: TestAddress = TestAddress::new("owner");
pub const REVIEWER: TestAddress = TestAddress::new("reviewer");
pub const PROPOSER: TestAddress = TestAddress::new("proposer");
pub const ALICE: TestAddress = TestAddress::new("alice");
pub const BOB: TestAddress = TestAddress::new("bob");
pub const CAROL: TestAddress = TestAddress::new("carol");
pub const SPONSOR: TestAddress = TestAddress::new("sponsor");

pub const ESCROW_ADDRESS: TestSCAddress = TestSCAddress::new("milestone-escrow");
pub const CODE_PATH: MxscPath = MxscPath::new("output/milestone-escrow.mxsc.json");

pub const STARTING_BALANCE: u64 = 1_000_000;

pub const TITLE: &str = "Community bridge";
pub const DESCRIPTION: &str = "Build and document the community bridge";

pub struct EscrowSetup {
    pub world: ScenarioWorld,
}

impl EscrowSetup {
    pub fn new() -> Self {
        Self::with_enforcement(false)
    }

    pub fn with_enforcement(enforce_vote_outcome: bool) -> Self {
        let mut world = ScenarioWorld::new();
        world.register_contract(CODE_PATH, milestone_escrow::ContractBuilder);

        world.account(OWNER).nonce(1);
        world.account(REVIEWER).nonce(1);
        world.account(PROPOSER).nonce(1);
        world.account(ALICE).nonce(1).balance(STARTING_BALANCE);
        world.account(BOB).nonce(1).balance(STARTING_BALANCE);
        world.account(CAROL).nonce(1).balance(STARTING_BALANCE);
        world.account(SPONSOR).nonce(1).balance(STARTING_BALANCE);

        world
            .tx()
            .from(OWNER)
            .typed(MilestoneEscrowProxy)
            .init(REVIEWER.to_address(), enforce_vote_outcome)
            .code(CODE_PATH)
            .new_address(ESCROW_ADDRESS)
            .run();

        Self { world }
    }

    pub fn set_block(&mut self, nonce: u64) {
        self.world.current_block().block_nonce(nonce);
    }

    // ── Registry ──

    pub fn submit_proposal(&mut self, amount: u64, milestone_count: u32) -> u64 {
        self.world
            .tx()
            .from(PROPOSER)
            .to(ESCROW_ADDRESS)
            .typed(MilestoneEscrowProxy)
            .submit_proposal(TITLE, DESCRIPTION, amount, milestone_count)
            .returns(ReturnsResult)
            .run()
    }

    pub fn submit_proposal_expect_err(
        &mut self,
        title: &str,
        description: &str,
        amount: u64,
        milestone_count: u32,
        err: &str,
    ) {
        self.world
            .tx()
            .from(PROPOSER)
            .to(ESCROW_ADDRESS)
            .typed(MilestoneEscrowProxy)
            .submit_proposal(title, description, amount, milestone_count)
            .returns(ExpectError(4, err))
            .run();
    }

    pub fn proposal(&mut self, proposal_id: u64) -> Option<Proposal<StaticApi>> {
        self.world
            .query()
            .to(ESCROW_ADDRESS)
            .typed(MilestoneEscrowProxy)
            .get_proposal(proposal_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn deposit_escrow(&mut self, amount: u64) {
        self.world
            .tx()
            .from(SPONSOR)
            .to(ESCROW_ADDRESS)
            .typed(MilestoneEscrowProxy)
            .deposit_escrow()
            .egld(amount)
            .run();
    }

    // ── Voting ──

    pub fn vote(&mut self, voter: TestAddress, proposal_id: u64, vote_for: bool, stake: u64) {
        self.world
            .tx()
            .from(voter)
            .to(ESCROW_ADDRESS)
            .typed(MilestoneEscrowProxy)
            .vote(proposal_id, vote_for)
            .egld(stake)
            .run();
    }

    pub fn vote_expect_err(
        &mut self,
        voter: TestAddress,
        proposal_id: u64,
        vote_for: bool,
        stake: u64,
        err: &str,
    ) {
        self.world
            .tx()
            .from(voter)
            .to(ESCROW_ADDRESS)
            .typed(MilestoneEscrowProxy)
            .vote(proposal_id, vote_for)
            .egld(stake)
            .returns(ExpectError(4, err))
            .run();
    }

    pub fn vote_of(&mut self, proposal_id: u64, voter: TestAddress) -> Option<Vote<StaticApi>> {
        self.world
            .query()
            .to(ESCROW_ADDRESS)
            .typed(MilestoneEscrowProxy)
            .get_vote(proposal_id, voter.to_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn result(&mut self, proposal_id: u64) -> Option<ProposalResult> {
        self.world
            .query()
            .to(ESCROW_ADDRESS)
            .typed(MilestoneEscrowProxy)
            .get_proposal_result(proposal_id)
            .returns(ReturnsResult)
            .run()
    }

    // ── Milestones ──

    pub fn add_milestone(&mut self, proposal_id: u64, milestone_id: u32, amount: u64) {
        self.world
            .tx()
            .from(PROPOSER)
            .to(ESCROW_ADDRESS)
            .typed(MilestoneEscrowProxy)
            .add_milestone(proposal_id, milestone_id, amount, DESCRIPTION)
            .run();
    }

    pub fn add_milestone_expect_err(
        &mut self,
        from: TestAddress,
        proposal_id: u64,
        milestone_id: u32,
        amount: u64,
        description: &str,
        err: &str,
    ) {
        self.world
            .tx()
            .from(from)
            .to(ESCROW_ADDRESS)
            .typed(MilestoneEscrowProxy)
            .add_milestone(proposal_id, milestone_id, amount, description)
            .returns(ExpectError(4, err))
            .run();
    }

    pub fn submit_proof(&mut self, proposal_id: u64, milestone_id: u32, proof: &str) {
        self.world
            .tx()
            .from(PROPOSER)
            .to(ESCROW_ADDRESS)
            .typed(MilestoneEscrowProxy)
            .submit_milestone_proof(proposal_id, milestone_id, proof)
            .run();
    }

    pub fn submit_proof_expect_err(
        &mut self,
        from: TestAddress,
        proposal_id: u64,
        milestone_id: u32,
        proof: &str,
        err: &str,
    ) {
        self.world
            .tx()
            .from(from)
            .to(ESCROW_ADDRESS)
            .typed(MilestoneEscrowProxy)
            .submit_milestone_proof(proposal_id, milestone_id, proof)
            .returns(ExpectError(4, err))
            .run();
    }

    pub fn approve(&mut self, reviewer: TestAddress, proposal_id: u64, milestone_id: u32) {
        self.world
            .tx()
            .from(reviewer)
            .to(ESCROW_ADDRESS)
            .typed(MilestoneEscrowProxy)
            .approve_milestone(proposal_id, milestone_id)
            .run();
    }

    pub fn approve_expect_err(
        &mut self,
        reviewer: TestAddress,
        proposal_id: u64,
        milestone_id: u32,
        err: &str,
    ) {
        self.world
            .tx()
            .from(reviewer)
            .to(ESCROW_ADDRESS)
            .typed(MilestoneEscrowProxy)
            .approve_milestone(proposal_id, milestone_id)
            .returns(ExpectError(4, err))
            .run();
    }

    pub fn milestone(&mut self, proposal_id: u64, milestone_id: u32) -> Option<Milestone<StaticApi>> {
        self.world
            .query()
            .to(ESCROW_ADDRESS)
            .typed(MilestoneEscrowProxy)
            .get_milestone(proposal_id, milestone_id)
            .returns(ReturnsResult)
            .run()
    }

    // ── Balances ──

    pub fn check_balance(&mut self, account: TestAddress, expected: &str) {
        self.world.check_account(account).balance(BigUint::<StaticApi>::from(expected.parse::<u128>().unwrap()));
    }

    pub fn check_escrow_balance(&mut self, expected: &str) {
        self.world.check_account(ESCROW_ADDRESS).balance(BigUint::<StaticApi>::from(expected.parse::<u128>().unwrap()));
    }
}
