multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status — persisted lifecycle states
// ============================================================

/// Only these two states are ever written. Approval or rejection by vote
/// is derived on demand, see [`ProposalResult`].
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Accepting votes and milestone work.
    Active,
    /// Every milestone approved and paid out. Terminal state.
    Completed,
}

// ============================================================
// Proposal Result — derived, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalResult {
    /// Current height is still below `end_height`.
    VotingActive,
    Approved,
    Rejected,
}

// ============================================================
// Proposal — the funded work item
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub title: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub total_amount: BigUint<M>,
    pub milestone_count: u32,
    /// Next milestone allowed into review. Never decreases.
    pub current_milestone: u32,
    pub start_height: u64,
    pub end_height: u64,
    pub status: ProposalStatus,
    pub total_votes_for: BigUint<M>,
    pub total_votes_against: BigUint<M>,
    /// Always `total_votes_for + total_votes_against`.
    pub total_voting_power: BigUint<M>,
}

// ============================================================
// Milestone — a unit of escrow release
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum MilestoneStatus {
    Pending,
    /// Proof submitted, waiting for a reviewer.
    PendingReview,
    /// Approved and paid. Irreversible.
    Completed,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Milestone<M: ManagedTypeApi> {
    pub proposal_id: u64,
    pub milestone_id: u32,
    pub amount: BigUint<M>,
    pub description: ManagedBuffer<M>,
    pub status: MilestoneStatus,
    pub completion_proof: Option<ManagedBuffer<M>>,
}

// ============================================================
// Vote — one per (proposal, voter), never mutated
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Vote<M: ManagedTypeApi> {
    pub voter: ManagedAddress<M>,
    pub vote_for: bool,
    /// Value held in escrow for this vote.
    pub staked_amount: BigUint<M>,
    /// Weight added to the proposal tally.
    pub voting_power: BigUint<M>,
    pub voted_at: u64,
}

// ============================================================
// Contract Config — constants exposed for clients
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ContractConfig {
    pub min_title_length: u64,
    pub max_title_length: u64,
    pub min_description_length: u64,
    pub max_description_length: u64,
    pub max_proof_length: u64,
    pub max_amount: u64,
    pub max_milestone_count: u32,
    pub minimum_stake_amount: u64,
    pub voting_period: u64,
    pub required_majority: u64,
    pub majority_scale: u64,
    pub enforce_vote_outcome: bool,
}
