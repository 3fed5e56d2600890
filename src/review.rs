multiversx_sc::imports!();

use crate::errors::{ERR_NOT_A_REVIEWER, ERR_UNAUTHORIZED};

/// Who may approve milestones. The rest of the contract only goes through
/// `require_reviewer`, so the policy can change without touching the
/// milestone tracker.
#[multiversx_sc::module]
pub trait ReviewModule: crate::storage::StorageModule + crate::events::EventsModule {
    #[only_owner]
    #[endpoint(addReviewer)]
    fn add_reviewer(&self, reviewer: ManagedAddress) {
        if self.reviewers().insert(reviewer.clone()) {
            self.reviewer_added_event(&reviewer);
        }
    }

    #[only_owner]
    #[endpoint(removeReviewer)]
    fn remove_reviewer(&self, reviewer: ManagedAddress) {
        require!(self.reviewers().swap_remove(&reviewer), ERR_NOT_A_REVIEWER);
        self.reviewer_removed_event(&reviewer);
    }

    /// Switches the milestone approval gate on the vote outcome.
    #[only_owner]
    #[endpoint(setEnforceVoteOutcome)]
    fn set_enforce_vote_outcome(&self, enabled: bool) {
        self.enforce_vote_outcome().set(enabled);
        self.enforce_vote_outcome_set_event(enabled);
    }

    fn is_authorized_reviewer(&self, account: &ManagedAddress) -> bool {
        self.reviewers().contains(account)
    }

    fn require_reviewer(&self, account: &ManagedAddress) {
        require!(self.is_authorized_reviewer(account), ERR_UNAUTHORIZED);
    }

    #[view(getReviewers)]
    fn get_reviewers(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for reviewer in self.reviewers().iter() {
            result.push(reviewer);
        }
        result
    }

    #[view(isReviewer)]
    fn is_reviewer(&self, account: ManagedAddress) -> bool {
        self.is_authorized_reviewer(&account)
    }

    #[view(isVoteOutcomeEnforced)]
    fn is_vote_outcome_enforced(&self) -> bool {
        self.enforce_vote_outcome().get()
    }
}
