multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Proposal registry ──

    #[event("proposalSubmitted")]
    fn proposal_submitted_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] total_amount: &BigUint,
        #[indexed] milestone_count: u32,
        end_height: u64,
    );

    #[event("proposalCompleted")]
    fn proposal_completed_event(&self, #[indexed] proposal_id: u64);

    // ── Milestones ──

    #[event("milestoneAdded")]
    fn milestone_added_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] milestone_id: u32,
        amount: &BigUint,
    );

    #[event("milestoneProofSubmitted")]
    fn milestone_proof_submitted_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] milestone_id: u32,
        proof: &ManagedBuffer,
    );

    #[event("milestoneApproved")]
    fn milestone_approved_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] milestone_id: u32,
        #[indexed] reviewer: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );

    // ── Voting ──

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] vote_for: bool,
        #[indexed] stake: &BigUint,
        voting_power: &BigUint,
    );

    // ── Escrow ──

    #[event("escrowDeposited")]
    fn escrow_deposited_event(&self, #[indexed] sponsor: &ManagedAddress, amount: &BigUint);

    // ── Administration ──

    #[event("reviewerAdded")]
    fn reviewer_added_event(&self, #[indexed] reviewer: &ManagedAddress);

    #[event("reviewerRemoved")]
    fn reviewer_removed_event(&self, #[indexed] reviewer: &ManagedAddress);

    #[event("enforceVoteOutcomeSet")]
    fn enforce_vote_outcome_set_event(&self, #[indexed] enabled: bool);
}
