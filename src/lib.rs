#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod events;
pub mod milestone_escrow_proxy;
pub mod milestones;
pub mod resolver;
pub mod review;
pub mod storage;
pub mod types;
pub mod validation;
pub mod voting;
pub mod voting_power;

use errors::ERR_INVALID_AMOUNT;
use types::{ContractConfig, Proposal, ProposalStatus};

// ============================================================
// Constants
// ============================================================

pub const MIN_TITLE_LENGTH: u64 = 4;
pub const MAX_TITLE_LENGTH: u64 = 256;
pub const MIN_DESCRIPTION_LENGTH: u64 = 10;
pub const MAX_DESCRIPTION_LENGTH: u64 = 1_024;
pub const MAX_PROOF_LENGTH: u64 = 1_024;

/// Upper bound for a proposal's requested funding and for any single milestone
pub const MAX_AMOUNT: u64 = 1_000_000_000;

pub const MAX_MILESTONE_COUNT: u32 = 10;

pub const MINIMUM_STAKE_AMOUNT: u64 = 100;

/// Voting window in blocks, counted from the submission block
pub const VOTING_PERIOD: u64 = 1_344;

/// For-share needed to pass, in parts of `MAJORITY_SCALE` (500 / 1000 = 50%)
pub const REQUIRED_MAJORITY: u64 = 500;
pub const MAJORITY_SCALE: u64 = 1_000;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait MilestoneEscrow:
    storage::StorageModule
    + events::EventsModule
    + validation::ValidationModule
    + review::ReviewModule
    + voting::VotingModule
    + resolver::ResolverModule
    + milestones::MilestonesModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, reviewer: ManagedAddress, enforce_vote_outcome: bool) {
        self.reviewers().insert(reviewer);
        self.enforce_vote_outcome().set(enforce_vote_outcome);
        self.proposal_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: submitProposal
    // Anyone can propose. No funds move until votes arrive.
    // ========================================================

    #[endpoint(submitProposal)]
    fn submit_proposal(
        &self,
        title: ManagedBuffer,
        description: ManagedBuffer,
        total_amount: BigUint,
        milestone_count: u32,
    ) -> u64 {
        let caller = self.blockchain().get_caller();

        self.require_valid_title(&title);
        self.require_valid_description(&description);
        self.require_valid_amount(&total_amount);
        self.require_valid_milestone_count(milestone_count);

        let proposal_id = self.proposal_count().get() + 1u64;
        let now = self.blockchain().get_block_nonce();

        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            title,
            description,
            total_amount,
            milestone_count,
            current_milestone: 0,
            start_height: now,
            end_height: now + VOTING_PERIOD,
            status: ProposalStatus::Active,
            total_votes_for: BigUint::zero(),
            total_votes_against: BigUint::zero(),
            total_voting_power: BigUint::zero(),
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);

        self.proposal_submitted_event(
            proposal_id,
            &caller,
            &proposal.total_amount,
            milestone_count,
            proposal.end_height,
        );

        proposal_id
    }

    // ========================================================
    // ENDPOINT: depositEscrow
    // Sponsors top up the pool milestone payouts are drawn from.
    // ========================================================

    #[endpoint(depositEscrow)]
    #[payable("EGLD")]
    fn deposit_escrow(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        self.escrow_deposited_event(&caller, &amount);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Option<Proposal<Self::Api>> {
        let mapper = self.proposals(proposal_id);
        if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        }
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_count().get()
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.proposal_count().get();
        if total == 0 {
            return result;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for i in start..=end {
            if !self.proposals(i).is_empty() {
                result.push(self.proposals(i).get());
            }
        }
        result
    }

    #[view(getEscrowBalance)]
    fn get_escrow_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> ContractConfig {
        ContractConfig {
            min_title_length: MIN_TITLE_LENGTH,
            max_title_length: MAX_TITLE_LENGTH,
            min_description_length: MIN_DESCRIPTION_LENGTH,
            max_description_length: MAX_DESCRIPTION_LENGTH,
            max_proof_length: MAX_PROOF_LENGTH,
            max_amount: MAX_AMOUNT,
            max_milestone_count: MAX_MILESTONE_COUNT,
            minimum_stake_amount: MINIMUM_STAKE_AMOUNT,
            voting_period: VOTING_PERIOD,
            required_majority: REQUIRED_MAJORITY,
            majority_scale: MAJORITY_SCALE,
            enforce_vote_outcome: self.enforce_vote_outcome().get(),
        }
    }
}
