multiversx_sc::imports!();

use crate::errors::{
    ERR_INVALID_AMOUNT, ERR_INVALID_DESCRIPTION, ERR_INVALID_MILESTONE_COUNT, ERR_INVALID_TITLE,
    ERR_MILESTONE_INVALID,
};
use crate::{
    MAX_AMOUNT, MAX_DESCRIPTION_LENGTH, MAX_MILESTONE_COUNT, MAX_PROOF_LENGTH, MAX_TITLE_LENGTH,
    MIN_DESCRIPTION_LENGTH, MIN_TITLE_LENGTH,
};

/// Input checks shared by the registry and the milestone tracker.
#[multiversx_sc::module]
pub trait ValidationModule {
    fn require_valid_title(&self, title: &ManagedBuffer) {
        let len = title.len() as u64;
        require!(
            len >= MIN_TITLE_LENGTH && len <= MAX_TITLE_LENGTH,
            ERR_INVALID_TITLE
        );
    }

    fn require_valid_description(&self, description: &ManagedBuffer) {
        let len = description.len() as u64;
        require!(
            len >= MIN_DESCRIPTION_LENGTH && len <= MAX_DESCRIPTION_LENGTH,
            ERR_INVALID_DESCRIPTION
        );
    }

    /// `0 < amount <= MAX_AMOUNT`
    fn require_valid_amount(&self, amount: &BigUint) {
        require!(
            *amount > 0u64 && *amount <= MAX_AMOUNT,
            ERR_INVALID_AMOUNT
        );
    }

    fn require_valid_milestone_count(&self, milestone_count: u32) {
        require!(
            milestone_count > 0 && milestone_count <= MAX_MILESTONE_COUNT,
            ERR_INVALID_MILESTONE_COUNT
        );
    }

    fn require_valid_proof(&self, proof: &ManagedBuffer) {
        let len = proof.len() as u64;
        require!(
            len > 0 && len <= MAX_PROOF_LENGTH,
            ERR_MILESTONE_INVALID
        );
    }
}
