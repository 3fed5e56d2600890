multiversx_sc::imports!();

use crate::errors::{
    ERR_INVALID_PROPOSAL, ERR_MILESTONE_INVALID, ERR_PROPOSAL_NOT_APPROVED, ERR_TRANSFER_FAILED,
    ERR_UNAUTHORIZED,
};
use crate::types::{Milestone, MilestoneStatus, ProposalResult, ProposalStatus};

#[multiversx_sc::module]
pub trait MilestonesModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::validation::ValidationModule
    + crate::review::ReviewModule
    + crate::resolver::ResolverModule
{
    // ========================================================
    // ENDPOINT: addMilestone
    // Proposer defines (or redefines) a milestone. Re-adding an
    // id overwrites it and resets it to Pending.
    // ========================================================

    #[endpoint(addMilestone)]
    fn add_milestone(
        &self,
        proposal_id: u64,
        milestone_id: u32,
        amount: BigUint,
        description: ManagedBuffer,
    ) {
        let caller = self.blockchain().get_caller();
        require!(
            proposal_id <= self.proposal_count().get() && !self.proposals(proposal_id).is_empty(),
            ERR_INVALID_PROPOSAL
        );
        let proposal = self.proposals(proposal_id).get();

        self.require_valid_amount(&amount);
        self.require_valid_description(&description);
        require!(
            milestone_id < proposal.milestone_count,
            ERR_MILESTONE_INVALID
        );
        require!(caller == proposal.proposer, ERR_UNAUTHORIZED);

        let milestone = Milestone {
            proposal_id,
            milestone_id,
            amount,
            description,
            status: MilestoneStatus::Pending,
            completion_proof: None,
        };
        self.milestones(proposal_id, milestone_id).set(&milestone);

        self.milestone_added_event(proposal_id, milestone_id, &milestone.amount);
    }

    // ========================================================
    // ENDPOINT: submitMilestoneProof
    // Only the current milestone may enter review.
    // ========================================================

    #[endpoint(submitMilestoneProof)]
    fn submit_milestone_proof(&self, proposal_id: u64, milestone_id: u32, proof: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_INVALID_PROPOSAL
        );
        require!(
            !self.milestones(proposal_id, milestone_id).is_empty(),
            ERR_MILESTONE_INVALID
        );

        let proposal = self.proposals(proposal_id).get();
        require!(
            milestone_id == proposal.current_milestone,
            ERR_MILESTONE_INVALID
        );
        require!(caller == proposal.proposer, ERR_UNAUTHORIZED);
        self.require_valid_proof(&proof);

        self.milestones(proposal_id, milestone_id).update(|milestone| {
            milestone.status = MilestoneStatus::PendingReview;
            milestone.completion_proof = Some(proof.clone());
        });

        self.milestone_proof_submitted_event(proposal_id, milestone_id, &proof);
    }

    // ========================================================
    // ENDPOINT: approveMilestone
    // Reviewer releases the milestone amount from escrow to the
    // proposer and advances the milestone pointer.
    // ========================================================

    #[endpoint(approveMilestone)]
    fn approve_milestone(&self, proposal_id: u64, milestone_id: u32) {
        let caller = self.blockchain().get_caller();
        self.require_reviewer(&caller);

        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_INVALID_PROPOSAL
        );
        let mut proposal = self.proposals(proposal_id).get();

        require!(
            milestone_id < proposal.milestone_count,
            ERR_MILESTONE_INVALID
        );
        require!(
            !self.milestones(proposal_id, milestone_id).is_empty(),
            ERR_MILESTONE_INVALID
        );
        let mut milestone = self.milestones(proposal_id, milestone_id).get();

        require!(
            milestone_id == proposal.current_milestone,
            ERR_MILESTONE_INVALID
        );
        require!(
            milestone.status == MilestoneStatus::PendingReview,
            ERR_MILESTONE_INVALID
        );

        if self.enforce_vote_outcome().get() {
            require!(
                self.proposal_result(proposal_id) == ProposalResult::Approved,
                ERR_PROPOSAL_NOT_APPROVED
            );
        }

        let escrow_balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        require!(escrow_balance >= milestone.amount, ERR_TRANSFER_FAILED);

        milestone.status = MilestoneStatus::Completed;
        self.milestones(proposal_id, milestone_id).set(&milestone);

        proposal.current_milestone = milestone_id + 1;
        let completed = proposal.current_milestone >= proposal.milestone_count;
        if completed {
            proposal.status = ProposalStatus::Completed;
        }
        self.proposals(proposal_id).set(&proposal);

        self.send().direct_egld(&proposal.proposer, &milestone.amount);

        self.milestone_approved_event(
            proposal_id,
            milestone_id,
            &caller,
            &proposal.proposer,
            &milestone.amount,
        );
        if completed {
            self.proposal_completed_event(proposal_id);
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getMilestone)]
    fn get_milestone(&self, proposal_id: u64, milestone_id: u32) -> Option<Milestone<Self::Api>> {
        let mapper = self.milestones(proposal_id, milestone_id);
        if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        }
    }

    #[view(getMilestones)]
    fn get_milestones(&self, proposal_id: u64) -> MultiValueEncoded<Milestone<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let proposal_mapper = self.proposals(proposal_id);
        if proposal_mapper.is_empty() {
            return result;
        }
        let milestone_count = proposal_mapper.get().milestone_count;
        for milestone_id in 0..milestone_count {
            let milestone_mapper = self.milestones(proposal_id, milestone_id);
            if !milestone_mapper.is_empty() {
                result.push(milestone_mapper.get());
            }
        }
        result
    }
}
