// Error messages signalled through `require!`. The VM returns them to the
// caller as user errors and reverts every write of the failing call.

pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_INVALID_PROPOSAL: &str = "InvalidProposal";
pub const ERR_ALREADY_VOTED: &str = "AlreadyVoted";
pub const ERR_INSUFFICIENT_STAKE: &str = "InsufficientStake";
pub const ERR_VOTING_CLOSED: &str = "VotingClosed";
pub const ERR_MILESTONE_INVALID: &str = "MilestoneInvalid";
pub const ERR_INVALID_AMOUNT: &str = "InvalidAmount";
pub const ERR_INVALID_MILESTONE_COUNT: &str = "InvalidMilestoneCount";
pub const ERR_INVALID_TITLE: &str = "InvalidTitle";
pub const ERR_INVALID_DESCRIPTION: &str = "InvalidDescription";
pub const ERR_TRANSFER_FAILED: &str = "TransferFailed";

/// Only raised while the vote-outcome gate is switched on.
pub const ERR_PROPOSAL_NOT_APPROVED: &str = "ProposalNotApproved";

pub const ERR_NOT_A_REVIEWER: &str = "Address is not a reviewer";
