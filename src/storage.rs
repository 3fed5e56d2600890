multiversx_sc::imports!();

use crate::types::{Milestone, Proposal, Vote};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Configuration ──

    #[storage_mapper("reviewers")]
    fn reviewers(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("enforceVoteOutcome")]
    fn enforce_vote_outcome(&self) -> SingleValueMapper<bool>;

    // ── Proposals ──

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    // ── Milestones ──

    #[storage_mapper("milestones")]
    fn milestones(
        &self,
        proposal_id: u64,
        milestone_id: u32,
    ) -> SingleValueMapper<Milestone<Self::Api>>;

    // ── Votes ──

    #[storage_mapper("votes")]
    fn votes(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<Vote<Self::Api>>;

    /// Voters per proposal, in the order their votes were recorded
    #[storage_mapper("voters")]
    fn voters(&self, proposal_id: u64) -> VecMapper<ManagedAddress>;
}
