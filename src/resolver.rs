multiversx_sc::imports!();

use crate::types::ProposalResult;
use crate::{MAJORITY_SCALE, REQUIRED_MAJORITY};

/// Outcome of a proposal vote at height `now`.
///
/// No votes at all is a rejection. Otherwise the for-share must reach
/// `REQUIRED_MAJORITY / MAJORITY_SCALE` (50.0%, inclusive), compared in
/// scaled integers.
pub fn resolve_outcome<M: ManagedTypeApi>(
    now: u64,
    end_height: u64,
    votes_for: &BigUint<M>,
    total_voting_power: &BigUint<M>,
) -> ProposalResult {
    if now < end_height {
        return ProposalResult::VotingActive;
    }
    if *total_voting_power == 0u64 {
        return ProposalResult::Rejected;
    }

    if votes_for * MAJORITY_SCALE >= total_voting_power * REQUIRED_MAJORITY {
        ProposalResult::Approved
    } else {
        ProposalResult::Rejected
    }
}

#[multiversx_sc::module]
pub trait ResolverModule: crate::storage::StorageModule {
    /// Advisory result, computed on every call and never persisted.
    #[view(getProposalResult)]
    fn get_proposal_result(&self, proposal_id: u64) -> Option<ProposalResult> {
        if self.proposals(proposal_id).is_empty() {
            return None;
        }
        Some(self.proposal_result(proposal_id))
    }

    fn proposal_result(&self, proposal_id: u64) -> ProposalResult {
        let proposal = self.proposals(proposal_id).get();
        let now = self.blockchain().get_block_nonce();
        resolve_outcome(
            now,
            proposal.end_height,
            &proposal.total_votes_for,
            &proposal.total_voting_power,
        )
    }
}
