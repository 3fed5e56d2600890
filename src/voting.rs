multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_VOTED, ERR_INSUFFICIENT_STAKE, ERR_INVALID_PROPOSAL, ERR_VOTING_CLOSED,
};
use crate::types::Vote;
use crate::voting_power::voting_power;
use crate::MINIMUM_STAKE_AMOUNT;

#[multiversx_sc::module]
pub trait VotingModule: crate::storage::StorageModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: vote
    // The attached EGLD is the stake. It lands in escrow as part
    // of the same transaction, so any failure below refunds it.
    // ========================================================

    #[endpoint(vote)]
    #[payable("EGLD")]
    fn vote(&self, proposal_id: u64, vote_for: bool) {
        let caller = self.blockchain().get_caller();
        let stake = self.call_value().egld_value().clone_value();

        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_INVALID_PROPOSAL
        );
        require!(stake >= MINIMUM_STAKE_AMOUNT, ERR_INSUFFICIENT_STAKE);

        let mut proposal = self.proposals(proposal_id).get();

        // Inclusive: a vote at exactly end_height is accepted
        let now = self.blockchain().get_block_nonce();
        require!(now <= proposal.end_height, ERR_VOTING_CLOSED);

        require!(
            self.votes(proposal_id, &caller).is_empty(),
            ERR_ALREADY_VOTED
        );

        let power = voting_power(&stake);
        if vote_for {
            proposal.total_votes_for += &power;
        } else {
            proposal.total_votes_against += &power;
        }
        proposal.total_voting_power += &power;

        let vote = Vote {
            voter: caller.clone(),
            vote_for,
            staked_amount: stake.clone(),
            voting_power: power.clone(),
            voted_at: now,
        };
        self.votes(proposal_id, &caller).set(&vote);
        self.voters(proposal_id).push(&caller);
        self.proposals(proposal_id).set(&proposal);

        self.vote_cast_event(proposal_id, &caller, vote_for, &stake, &power);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getVote)]
    fn get_vote(&self, proposal_id: u64, voter: ManagedAddress) -> Option<Vote<Self::Api>> {
        let mapper = self.votes(proposal_id, &voter);
        if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        }
    }

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: u64, voter: ManagedAddress) -> bool {
        !self.votes(proposal_id, &voter).is_empty()
    }

    #[view(getVoters)]
    fn get_voters(&self, proposal_id: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let count = self.voters(proposal_id).len();
        for i in 1..=count {
            result.push(self.voters(proposal_id).get(i));
        }
        result
    }
}
